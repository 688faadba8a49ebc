// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The part list model.
//!
//! Holds the ordered part list for one editing session: the master at
//! row 0 plus every excerpt in display order. Structural changes
//! (create, copy, remove, reorder-by-removal) are staged in the model
//! until `apply` commits them to the host context. Title and voice
//! visibility edits go straight to the shared notation handles and are
//! immediately visible to every other holder.
//!
//! Every operation taking a row or voice index treats an out-of-range
//! index as a silent no-op. The display surface drives this model from
//! user input and may hold stale indices for a frame; a stale index
//! must never fault.

use tracing::{debug, info};

use crate::config::Strings;
use crate::score::{NotationHandle, ScoreContext, VOICES};

use super::events::{ListChange, Listeners};
use super::selection::SelectionTracker;

/// Snapshot of one row for display
#[derive(Debug, Clone, PartialEq)]
pub struct PartRow {
    /// Display title
    pub title: String,
    /// Whether the row is in the current selection
    pub is_selected: bool,
    /// Whether the row is the master score
    pub is_master: bool,
    /// Per-voice visibility
    pub voices: [bool; VOICES],
    /// Human-readable summary of visible voices
    pub voices_label: String,
}

/// Format the visible-voices summary for a row.
///
/// "None" when no voice is visible, "All" when every voice is, else
/// the ascending comma-joined 1-based voice numbers ("2, 4").
pub fn format_voices_label(voices: &[bool], strings: &Strings) -> String {
    let visible: Vec<String> = voices
        .iter()
        .enumerate()
        .filter(|(_, visible)| **visible)
        .map(|(voice, _)| (voice + 1).to_string())
        .collect();

    if visible.is_empty() {
        strings.voices_none.clone()
    } else if visible.len() == voices.len() {
        strings.voices_all.clone()
    } else {
        visible.join(", ")
    }
}

/// Ordered part list with selection and staged structural edits
pub struct PartListModel {
    /// Master at row 0 (after load) plus excerpts in display order
    rows: Vec<NotationHandle>,
    /// Current row selection
    selection: SelectionTracker,
    /// Notation to activate in the host when changes are applied
    pending_current: Option<NotationHandle>,
    /// Change listeners, invoked synchronously
    listeners: Listeners,
    /// Display strings for generated titles and voice labels
    strings: Strings,
}

impl PartListModel {
    /// Create an empty model with default display strings
    pub fn new() -> Self {
        Self::with_strings(Strings::default())
    }

    /// Create an empty model with the given display strings
    pub fn with_strings(strings: Strings) -> Self {
        Self {
            rows: Vec::new(),
            selection: SelectionTracker::new(),
            pending_current: None,
            listeners: Listeners::new(),
            strings,
        }
    }

    /// Register a change listener
    pub fn on_change(&mut self, listener: impl FnMut(ListChange) + 'static) {
        self.listeners.subscribe(listener);
    }

    /// Populate the model from the host context.
    ///
    /// Replaces any previous contents with the master followed by the
    /// stored excerpts, drops the selection and the pending-current
    /// pointer, and emits a full reset.
    pub fn load(&mut self, ctx: &ScoreContext) {
        self.rows.clear();
        self.rows.push(ctx.master().clone());
        for excerpt in ctx.excerpts() {
            self.rows.push(excerpt.clone());
        }

        self.selection.clear();
        self.pending_current = None;

        debug!(rows = self.rows.len(), "loaded part list");
        self.listeners.notify(ListChange::Reset);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Snapshot of a row's display fields. None for an invalid row.
    pub fn row(&self, row: usize) -> Option<PartRow> {
        let notation = self.rows.get(row)?;
        let voices = notation.voices_visibility();

        Some(PartRow {
            title: notation.title(),
            is_selected: self.selection.is_selected(row),
            is_master: !notation.is_excerpt(),
            voices,
            voices_label: format_voices_label(&voices, &self.strings),
        })
    }

    /// The handle backing a row. None for an invalid row.
    pub fn handle(&self, row: usize) -> Option<&NotationHandle> {
        self.rows.get(row)
    }

    /// Whether any row is selected
    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    /// Selected rows in ascending index order
    pub fn selected_rows(&self) -> Vec<usize> {
        self.selection.rows()
    }

    /// The notation that will become active on apply, if any
    pub fn pending_current(&self) -> Option<&NotationHandle> {
        self.pending_current.as_ref()
    }

    /// Create a fresh part, append it, and make it pending-current.
    ///
    /// The new part gets the default part title, is marked opened, and
    /// always lands at the end of the list.
    pub fn create_part(&mut self, ctx: &ScoreContext) {
        let notation = ctx.new_excerpt_notation();
        let mut meta = notation.meta();
        meta.title = self.strings.default_part_title.clone();
        notation.set_meta(meta);
        notation.set_opened(true);

        let row = self.rows.len();
        self.insert_row(row, notation.clone());
        self.pending_current = Some(notation);
        debug!(row, "created new part");
    }

    /// Toggle a row's selection membership
    pub fn select_part(&mut self, row: usize) {
        if !self.is_row_valid(row) {
            return;
        }

        self.selection.toggle(row);
        self.listeners.notify(ListChange::RowChanged(row));
    }

    /// Remove one row.
    ///
    /// The master row cannot be removed. The notation is marked closed
    /// before it leaves the list, so the host drops it even though the
    /// structural change is only committed on apply.
    pub fn remove_part(&mut self, row: usize) {
        if !self.is_row_valid(row) || !self.rows[row].is_excerpt() {
            return;
        }

        self.rows[row].set_opened(false);
        self.rows.remove(row);
        self.selection.remove_row(row);
        debug!(row, "removed part");
        self.listeners.notify(ListChange::removed(row));
    }

    /// Remove every selected row and clear the selection.
    ///
    /// Removal shifts the indices of every later row, so the selected
    /// handles are snapshotted first and each one is re-resolved to its
    /// current row right before removal.
    pub fn remove_selected_parts(&mut self) {
        let rows = self.selection.rows();
        if rows.is_empty() {
            return;
        }

        let doomed: Vec<NotationHandle> = rows.iter().map(|&row| self.rows[row].clone()).collect();

        for notation in doomed {
            if let Some(row) = self.rows.iter().position(|n| *n == notation) {
                self.remove_part(row);
            }
        }

        self.selection.clear();
    }

    /// Rename a row's notation. No-op if the title is unchanged.
    pub fn set_part_title(&mut self, row: usize, title: &str) {
        if !self.is_row_valid(row) {
            return;
        }

        let notation = &self.rows[row];
        let mut meta = notation.meta();
        if meta.title == title {
            return;
        }

        meta.title = title.to_string();
        notation.set_meta(meta);
        self.listeners.notify(ListChange::RowChanged(row));
    }

    /// Show or hide one voice of a row's notation. No-op if the value
    /// is unchanged.
    pub fn set_voice_visible(&mut self, row: usize, voice: usize, visible: bool) {
        if !self.is_row_valid(row) || voice >= VOICES {
            return;
        }

        let notation = &self.rows[row];
        if notation.voice_visible(voice) == visible {
            return;
        }

        notation.set_voice_visible(voice, visible);
        self.listeners.notify(ListChange::RowChanged(row));
    }

    /// Duplicate a row, inserting the copy right below the source.
    ///
    /// The copy's title carries the copy suffix. Copying the master
    /// yields an ordinary removable part.
    pub fn copy_part(&mut self, row: usize) {
        if !self.is_row_valid(row) {
            return;
        }

        let copy = self.rows[row].deep_clone();
        let mut meta = copy.meta();
        meta.title.push_str(&self.strings.copy_suffix);
        copy.set_meta(meta);

        self.insert_row(row + 1, copy);
    }

    /// Open every selected part; the bottom-most selected row becomes
    /// pending-current.
    pub fn open_selected_bottom_row(&mut self) {
        let target = self.selection.bottom_row();
        self.open_selected(target);
    }

    /// Open every selected part; the most recently selected row becomes
    /// pending-current.
    pub fn open_selected_most_recent(&mut self) {
        let target = self.selection.most_recent();
        self.open_selected(target);
    }

    fn open_selected(&mut self, target: Option<usize>) {
        if !self.selection.has_selection() {
            return;
        }

        for row in self.selection.rows() {
            self.rows[row].set_opened(true);
        }

        if let Some(row) = target {
            self.pending_current = Some(self.rows[row].clone());
        }
    }

    /// Commit the staged part list to the host context.
    ///
    /// The master is filtered out (it is implicit on the host side);
    /// the excerpts keep their on-screen order. The pending-current
    /// pointer is pushed as-is, clearing the host's active notation if
    /// nothing was created or opened this session.
    pub fn apply(&self, ctx: &mut ScoreContext) {
        let excerpts: Vec<NotationHandle> = self
            .rows
            .iter()
            .filter(|n| n.is_excerpt())
            .cloned()
            .collect();

        info!(excerpts = excerpts.len(), "applying part list");
        ctx.set_excerpts(excerpts);
        ctx.set_current(self.pending_current.clone());
    }

    fn insert_row(&mut self, row: usize, notation: NotationHandle) {
        self.rows.insert(row, notation);
        self.selection.insert_row(row);
        self.listeners.notify(ListChange::inserted(row));
    }

    fn is_row_valid(&self, row: usize) -> bool {
        row < self.rows.len()
    }
}

impl Default for PartListModel {
    fn default() -> Self {
        Self::new()
    }
}
