// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Part list display widgets.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::parts::PartRow;
use crate::score::VOICES;

/// Widget for displaying the part list
pub struct PartsWidget<'a> {
    rows: &'a [PartRow],
    cursor: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a> PartsWidget<'a> {
    /// Create a new parts widget
    pub fn new(rows: &'a [PartRow]) -> Self {
        Self {
            rows,
            cursor: None,
            block: None,
        }
    }

    /// Set the cursor row
    pub fn cursor(mut self, row: Option<usize>) -> Self {
        self.cursor = row;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for PartsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if self.rows.is_empty() {
            Paragraph::new("No parts loaded")
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let header_height = 1;
        let row_height = 1;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                std::iter::once(Constraint::Length(header_height))
                    .chain(self.rows.iter().map(|_| Constraint::Length(row_height)))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        render_part_header(chunks[0], buf);

        for (i, row) in self.rows.iter().enumerate() {
            if i + 1 >= chunks.len() {
                break;
            }
            let under_cursor = self.cursor == Some(i);
            render_part_row(chunks[i + 1], buf, i, row, under_cursor);
        }
    }
}

/// Render the part list header row
fn render_part_header(area: Rect, buf: &mut Buffer) {
    let style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let chunks = part_row_layout(area);

    Paragraph::new("#").style(style).render(chunks[0], buf);
    Paragraph::new("Sel").style(style).render(chunks[1], buf);
    Paragraph::new("Part").style(style).render(chunks[2], buf);
    Paragraph::new("Voices").style(style).render(chunks[3], buf);
}

/// Render a single part row
fn render_part_row(area: Rect, buf: &mut Buffer, index: usize, row: &PartRow, under_cursor: bool) {
    let chunks = part_row_layout(area);

    // Cursor indicator / index
    let idx_style = if under_cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let idx_text = if under_cursor {
        format!(">{}", index + 1)
    } else {
        format!(" {}", index + 1)
    };
    Paragraph::new(idx_text).style(idx_style).render(chunks[0], buf);

    // Selection marker
    let sel_style = if row.is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let sel_text = if row.is_selected { "✔" } else { "·" };
    Paragraph::new(sel_text).style(sel_style).render(chunks[1], buf);

    // Title, with a marker for the master score
    let title_line = if row.is_master {
        Line::from(vec![
            Span::styled(
                row.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" (score)", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            row.title.clone(),
            Style::default().fg(Color::White),
        ))
    };
    Paragraph::new(title_line).render(chunks[2], buf);

    // Voices summary
    Paragraph::new(row.voices_label.clone())
        .style(Style::default().fg(Color::Magenta))
        .render(chunks[3], buf);
}

fn part_row_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),  // Cursor + index
            Constraint::Length(4),  // Selection
            Constraint::Min(16),    // Title
            Constraint::Length(12), // Voices
        ])
        .split(area)
}

/// Widget for displaying the row under the cursor in detail
pub struct PartDetailWidget<'a> {
    row: &'a PartRow,
    block: Option<Block<'a>>,
}

impl<'a> PartDetailWidget<'a> {
    /// Create a new part detail widget
    pub fn new(row: &'a PartRow) -> Self {
        Self { row, block: None }
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for PartDetailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title + kind
                Constraint::Length(1), // Per-voice toggles
                Constraint::Min(0),    // Remaining
            ])
            .split(area);

        let kind_indicator = if self.row.is_master {
            Span::styled(" [master score]", Style::default().fg(Color::Cyan))
        } else {
            Span::styled(" [part]", Style::default().fg(Color::Green))
        };
        let title_line = Line::from(vec![
            Span::styled(
                self.row.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            kind_indicator,
        ]);
        Paragraph::new(title_line).render(chunks[0], buf);

        let mut spans = vec![Span::styled(
            "Voices: ",
            Style::default().fg(Color::DarkGray),
        )];
        for voice in 0..VOICES {
            let visible = self.row.voices[voice];
            let style = if visible {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let marker = if visible { "●" } else { "○" };
            spans.push(Span::styled(format!("{}{} ", marker, voice + 1), style));
        }
        spans.push(Span::styled(
            format!("({})", self.row.voices_label),
            Style::default().fg(Color::Magenta),
        ));
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
