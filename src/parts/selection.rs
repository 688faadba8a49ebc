// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Row selection tracking.
//!
//! Selected row indices are kept in toggle order so the model can
//! answer both "bottom-most selected row" and "most recently selected
//! row" queries. Indices are remapped when rows are removed or
//! inserted, so the selection never points at a stale row.

/// Toggle-ordered set of selected row indices
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    /// Selected rows in the order they were toggled on
    order: Vec<usize>,
}

impl SelectionTracker {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything is selected
    pub fn has_selection(&self) -> bool {
        !self.order.is_empty()
    }

    /// Number of selected rows
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a row is selected
    pub fn is_selected(&self, row: usize) -> bool {
        self.order.contains(&row)
    }

    /// Toggle a row's membership. Returns true if the row is selected
    /// after the call.
    pub fn toggle(&mut self, row: usize) -> bool {
        if let Some(pos) = self.order.iter().position(|&r| r == row) {
            self.order.remove(pos);
            false
        } else {
            self.order.push(row);
            true
        }
    }

    /// Selected rows in ascending index order
    pub fn rows(&self) -> Vec<usize> {
        let mut rows = self.order.clone();
        rows.sort_unstable();
        rows
    }

    /// Selected rows in the order they were toggled on
    pub fn toggle_order(&self) -> &[usize] {
        &self.order
    }

    /// The highest selected row index
    pub fn bottom_row(&self) -> Option<usize> {
        self.order.iter().copied().max()
    }

    /// The most recently toggled-on row still in the selection
    pub fn most_recent(&self) -> Option<usize> {
        self.order.last().copied()
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Account for a row removal: drop the removed row from the
    /// selection and shift higher indices down by one.
    pub fn remove_row(&mut self, row: usize) {
        self.order.retain(|&r| r != row);
        for r in &mut self.order {
            if *r > row {
                *r -= 1;
            }
        }
    }

    /// Account for a row insertion: shift indices at or above the
    /// insertion point up by one.
    pub fn insert_row(&mut self, row: usize) {
        for r in &mut self.order {
            if *r >= row {
                *r += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_off() {
        let mut selection = SelectionTracker::new();

        assert!(selection.toggle(2));
        assert!(selection.is_selected(2));
        assert!(selection.has_selection());

        assert!(!selection.toggle(2));
        assert!(!selection.is_selected(2));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_rows_ascending_vs_toggle_order() {
        let mut selection = SelectionTracker::new();
        selection.toggle(3);
        selection.toggle(0);
        selection.toggle(2);

        assert_eq!(selection.rows(), [0, 2, 3]);
        assert_eq!(selection.toggle_order(), [3, 0, 2]);
        assert_eq!(selection.bottom_row(), Some(3));
        assert_eq!(selection.most_recent(), Some(2));
    }

    #[test]
    fn test_retoggle_updates_recency() {
        let mut selection = SelectionTracker::new();
        selection.toggle(1);
        selection.toggle(4);

        // Toggle 1 off and on again: it becomes the most recent
        selection.toggle(1);
        selection.toggle(1);

        assert_eq!(selection.most_recent(), Some(1));
        assert_eq!(selection.bottom_row(), Some(4));
    }

    #[test]
    fn test_remove_row_shifts_indices() {
        let mut selection = SelectionTracker::new();
        selection.toggle(1);
        selection.toggle(3);
        selection.toggle(5);

        selection.remove_row(3);
        assert_eq!(selection.rows(), [1, 4]);

        // Removing an unselected row still shifts the ones above it
        selection.remove_row(0);
        assert_eq!(selection.rows(), [0, 3]);
    }

    #[test]
    fn test_insert_row_shifts_indices() {
        let mut selection = SelectionTracker::new();
        selection.toggle(1);
        selection.toggle(3);

        selection.insert_row(2);
        assert_eq!(selection.rows(), [1, 4]);

        selection.insert_row(0);
        assert_eq!(selection.rows(), [2, 5]);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionTracker::new();
        selection.toggle(0);
        selection.toggle(7);

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.most_recent(), None);
    }
}
