// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Part collection adapter.
//!
//! This module provides:
//! - `PartListModel`: the ordered part list with selection, staged
//!   structural edits and an explicit commit back to the host
//! - `SelectionTracker`: toggle-ordered row selection
//! - `ListChange`: change notifications for incremental display update

pub mod events;
pub mod model;
pub mod selection;

pub use events::ListChange;
pub use model::{format_voices_label, PartListModel, PartRow};
pub use selection::SelectionTracker;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{NotationHandle, ScoreContext};

    #[test]
    fn test_model_load_from_context() {
        let mut ctx = ScoreContext::new(NotationHandle::master("Symphony"));
        ctx.add_excerpt(NotationHandle::excerpt("Flute"));

        let mut model = PartListModel::new();
        model.load(&ctx);

        assert_eq!(model.row_count(), 2);
    }

    #[test]
    fn test_selection_tracker_toggle() {
        let mut selection = SelectionTracker::new();
        selection.toggle(3);
        assert!(selection.is_selected(3));
    }
}
