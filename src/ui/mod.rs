// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for the part list editor.
//!
//! Provides a ratatui-based interface over the part list model: a
//! cursor-driven list with multi-selection, inline rename, voice
//! toggles, and an explicit apply-or-cancel exit. All model mutations
//! happen on this thread, synchronously, in response to key events.

mod parts;

pub use parts::{PartDetailWidget, PartsWidget};

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

use crate::config::UiOptions;
use crate::parts::{PartListModel, PartRow};
use crate::score::ScoreContext;

/// How the editing session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiOutcome {
    /// Changes were committed to the host context
    Applied,
    /// Structural changes were discarded
    Cancelled,
}

/// Action mapped from a key press in browse mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Discard structural changes and quit
    Cancel,
    /// Commit changes and quit
    Apply,
    /// Move the cursor up
    CursorUp,
    /// Move the cursor down
    CursorDown,
    /// Toggle selection of the cursor row
    ToggleSelect,
    /// Create a new part
    NewPart,
    /// Duplicate the cursor row
    CopyPart,
    /// Remove all selected parts
    RemoveSelected,
    /// Open selected parts, activating the bottom-most selected row
    OpenBottomRow,
    /// Open selected parts, activating the most recently selected row
    OpenMostRecent,
    /// Start renaming the cursor row
    Rename,
    /// Toggle one voice of the cursor row
    ToggleVoice(usize),
    /// Toggle the help overlay
    ToggleHelp,
}

/// Map a browse-mode key press to an action
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
    match (code, modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Cancel,

        (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::Apply,

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::CursorUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::CursorDown,

        (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::ToggleSelect,
        (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::NewPart,
        (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::CopyPart,
        (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::RemoveSelected,
        (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Rename,

        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::OpenBottomRow,
        (KeyCode::Char('O'), _) => KeyAction::OpenMostRecent,

        // Voice toggles (1-4)
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            let voice = (c as usize) - ('1' as usize);
            KeyAction::ToggleVoice(voice)
        }

        (KeyCode::Char('?'), _) | (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::ToggleHelp,

        _ => KeyAction::None,
    }
}

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Mode {
    /// Normal navigation
    #[default]
    Browse,
    /// Inline rename of one row
    Rename { row: usize, buffer: String },
}

/// Transient view state for one editing session
#[derive(Debug, Default)]
struct ViewState {
    cursor: usize,
    mode: Mode,
    status: Option<(String, Instant)>,
    show_help: bool,
    confirm_armed: bool,
    outcome: Option<UiOutcome>,
}

impl ViewState {
    /// Keep the cursor inside the list after removals
    fn clamp_cursor(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= row_count {
            self.cursor = row_count - 1;
        }
    }

    /// Set a status message that will be displayed temporarily
    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Clear expired status message
    fn clear_expired_status(&mut self) {
        if let Some((_, time)) = &self.status {
            if time.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }
}

/// Terminal UI application
pub struct App {
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Target frame rate
    frame_rate: u32,
    /// Require a second keypress before removing parts
    confirm_remove: bool,
}

impl App {
    /// Create a new app, taking over the terminal
    pub fn new(options: &UiOptions) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            frame_rate: options.frame_rate.clamp(1, 120),
            confirm_remove: options.confirm_remove,
        })
    }

    /// Run one editing session over the model.
    ///
    /// Returns when the user applies (changes committed to the
    /// context) or cancels (staged structural changes discarded;
    /// renames and voice toggles have already hit the shared handles).
    pub fn run(
        &mut self,
        model: &mut PartListModel,
        ctx: &mut ScoreContext,
    ) -> io::Result<UiOutcome> {
        let mut view = ViewState::default();

        loop {
            view.clamp_cursor(model.row_count());

            let rows: Vec<PartRow> = (0..model.row_count())
                .filter_map(|row| model.row(row))
                .collect();
            self.draw(&rows, &view)?;

            if let Some(Event::Key(key)) = self.poll_event()? {
                match view.mode.clone() {
                    Mode::Browse => self.handle_browse_key(model, ctx, &mut view, key.code, key.modifiers),
                    Mode::Rename { row, buffer } => {
                        handle_rename_key(model, &mut view, row, buffer, key.code)
                    }
                }
            }

            view.clear_expired_status();

            if let Some(outcome) = view.outcome.take() {
                if outcome == UiOutcome::Applied {
                    model.apply(ctx);
                }
                debug!(?outcome, "editing session finished");
                return Ok(outcome);
            }
        }
    }

    fn handle_browse_key(
        &self,
        model: &mut PartListModel,
        ctx: &ScoreContext,
        view: &mut ViewState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) {
        let action = map_key(code, modifiers);

        // Any key other than a repeated remove disarms the confirmation
        if action != KeyAction::RemoveSelected {
            view.confirm_armed = false;
        }

        match action {
            KeyAction::None => {}
            KeyAction::Cancel => view.outcome = Some(UiOutcome::Cancelled),
            KeyAction::Apply => view.outcome = Some(UiOutcome::Applied),
            KeyAction::CursorUp => {
                view.cursor = view.cursor.saturating_sub(1);
            }
            KeyAction::CursorDown => {
                if view.cursor + 1 < model.row_count() {
                    view.cursor += 1;
                }
            }
            KeyAction::ToggleSelect => model.select_part(view.cursor),
            KeyAction::NewPart => {
                model.create_part(ctx);
                view.cursor = model.row_count().saturating_sub(1);
                view.set_status("Created new part");
            }
            KeyAction::CopyPart => {
                model.copy_part(view.cursor);
                view.set_status("Copied part");
            }
            KeyAction::RemoveSelected => {
                if !model.has_selection() {
                    view.set_status("Nothing selected");
                } else if self.confirm_remove && !view.confirm_armed {
                    view.confirm_armed = true;
                } else {
                    let count = model.selected_rows().len();
                    model.remove_selected_parts();
                    view.confirm_armed = false;
                    view.set_status(format!("Removed {} part(s)", count));
                }
            }
            KeyAction::OpenBottomRow => {
                if model.has_selection() {
                    model.open_selected_bottom_row();
                    view.set_status("Opened selected parts");
                } else {
                    view.set_status("Nothing selected");
                }
            }
            KeyAction::OpenMostRecent => {
                if model.has_selection() {
                    model.open_selected_most_recent();
                    view.set_status("Opened selected parts");
                } else {
                    view.set_status("Nothing selected");
                }
            }
            KeyAction::Rename => {
                if let Some(row) = model.row(view.cursor) {
                    view.mode = Mode::Rename {
                        row: view.cursor,
                        buffer: row.title,
                    };
                }
            }
            KeyAction::ToggleVoice(voice) => {
                if let Some(row) = model.row(view.cursor) {
                    let visible = row.voices[voice];
                    model.set_voice_visible(view.cursor, voice, !visible);
                }
            }
            KeyAction::ToggleHelp => view.show_help = !view.show_help,
        }
    }

    /// Poll for events with timeout
    fn poll_event(&self) -> io::Result<Option<Event>> {
        let timeout = Duration::from_millis(1000 / self.frame_rate as u64);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Draw the UI
    fn draw(&mut self, rows: &[PartRow], view: &ViewState) -> io::Result<()> {
        let confirm_remove = self.confirm_remove;
        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title bar
                    Constraint::Min(5),    // Part list
                    Constraint::Length(4), // Detail
                    Constraint::Length(1), // Status bar
                ])
                .split(area);

            render_title_bar(frame, chunks[0], rows);
            render_part_list(frame, chunks[1], rows, view);
            render_detail(frame, chunks[2], rows, view);
            render_status_bar(frame, chunks[3], view, confirm_remove);

            if view.show_help {
                render_help_overlay(frame, area);
            }
        })?;

        Ok(())
    }

    /// Cleanup terminal on drop
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Handle a key press in rename mode
fn handle_rename_key(
    model: &mut PartListModel,
    view: &mut ViewState,
    row: usize,
    mut buffer: String,
    code: KeyCode,
) {
    match code {
        KeyCode::Enter => {
            model.set_part_title(row, buffer.trim());
            view.mode = Mode::Browse;
            view.set_status("Renamed part");
        }
        KeyCode::Esc => {
            view.mode = Mode::Browse;
        }
        KeyCode::Backspace => {
            buffer.pop();
            view.mode = Mode::Rename { row, buffer };
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            view.mode = Mode::Rename { row, buffer };
        }
        _ => {
            view.mode = Mode::Rename { row, buffer };
        }
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, area: Rect, rows: &[PartRow]) {
    let part_count = rows.iter().filter(|r| !r.is_master).count();
    let line = Line::from(vec![
        Span::styled(
            " PARTBOOK ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} part(s)", part_count),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the part list section
fn render_part_list(frame: &mut Frame, area: Rect, rows: &[PartRow], view: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title(" Parts ");
    let widget = PartsWidget::new(rows)
        .cursor(Some(view.cursor))
        .block(block);
    frame.render_widget(widget, area);
}

/// Render the detail section for the cursor row
fn render_detail(frame: &mut Frame, area: Rect, rows: &[PartRow], view: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title(" Detail ");

    if let Some(row) = rows.get(view.cursor) {
        frame.render_widget(PartDetailWidget::new(row).block(block), area);
    } else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new("No part under cursor")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, view: &ViewState, confirm_remove: bool) {
    let line = match &view.mode {
        Mode::Rename { buffer, .. } => Line::from(vec![
            Span::styled("Rename: ", Style::default().fg(Color::Yellow)),
            Span::raw(buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
            Span::styled(
                "  (Enter confirm, Esc cancel)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Mode::Browse if view.confirm_armed && confirm_remove => Line::from(Span::styled(
            "Press d again to remove the selected parts",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Mode::Browse => match &view.status {
            Some((message, _)) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(
                "space select · n new · c copy · d remove · r rename · 1-4 voices · o/O open · a apply · q quit · ? help",
                Style::default().fg(Color::DarkGray),
            )),
        },
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_area = centered_rect(52, 16, area);
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from("  ↑/k, ↓/j    move cursor"),
        Line::from("  space       toggle selection"),
        Line::from("  n           create new part"),
        Line::from("  c           copy part under cursor"),
        Line::from("  d           remove selected parts"),
        Line::from("  r           rename part under cursor"),
        Line::from("  1-4         toggle voice visibility"),
        Line::from("  o           open selected (bottom row active)"),
        Line::from("  O           open selected (last selected active)"),
        Line::from("  a           apply changes and quit"),
        Line::from("  q / Esc     discard changes and quit"),
        Line::from("  ? / h       toggle this help"),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), help_area);
}

/// Compute a centered rectangle of the given size
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_basics() {
        assert_eq!(
            map_key(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Cancel
        );
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Cancel
        );
        assert_eq!(
            map_key(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::Apply
        );
        assert_eq!(
            map_key(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleSelect
        );
    }

    #[test]
    fn test_map_key_open_variants() {
        assert_eq!(
            map_key(KeyCode::Char('o'), KeyModifiers::NONE),
            KeyAction::OpenBottomRow
        );
        assert_eq!(
            map_key(KeyCode::Char('O'), KeyModifiers::SHIFT),
            KeyAction::OpenMostRecent
        );
    }

    #[test]
    fn test_map_key_voice_toggles() {
        assert_eq!(
            map_key(KeyCode::Char('1'), KeyModifiers::NONE),
            KeyAction::ToggleVoice(0)
        );
        assert_eq!(
            map_key(KeyCode::Char('4'), KeyModifiers::NONE),
            KeyAction::ToggleVoice(3)
        );
        assert_eq!(
            map_key(KeyCode::Char('5'), KeyModifiers::NONE),
            KeyAction::None
        );
    }

    #[test]
    fn test_cursor_clamping() {
        let mut view = ViewState {
            cursor: 5,
            ..Default::default()
        };

        view.clamp_cursor(3);
        assert_eq!(view.cursor, 2);

        view.clamp_cursor(0);
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(52, 16, area);
        assert_eq!(rect.width, 52);
        assert_eq!(rect.height, 16);
        assert_eq!(rect.x, 14);
        assert_eq!(rect.y, 4);

        // Larger than the area: clipped
        let rect = centered_rect(100, 100, area);
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 24);
    }
}
