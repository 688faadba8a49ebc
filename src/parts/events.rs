// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Change notifications for the part list.
//!
//! Listeners are plain closures registered with the model and invoked
//! synchronously after each mutation, in registration order. The four
//! notification shapes are enough for a display surface to patch
//! incrementally instead of redrawing everything.

/// A change to the row list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// The entire list was rebuilt; discard any cached display state
    Reset,
    /// A single row's fields changed
    RowChanged(usize),
    /// A contiguous range of rows was inserted (inclusive bounds)
    RowsInserted { first: usize, last: usize },
    /// A contiguous range of rows was removed (inclusive bounds)
    RowsRemoved { first: usize, last: usize },
}

impl ListChange {
    /// Insertion of a single row
    pub fn inserted(row: usize) -> Self {
        ListChange::RowsInserted { first: row, last: row }
    }

    /// Removal of a single row
    pub fn removed(row: usize) -> Self {
        ListChange::RowsRemoved { first: row, last: row }
    }
}

/// Registered change listeners, invoked synchronously
#[derive(Default)]
pub(crate) struct Listeners {
    inner: Vec<Box<dyn FnMut(ListChange)>>,
}

impl Listeners {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: impl FnMut(ListChange) + 'static) {
        self.inner.push(Box::new(listener));
    }

    /// Deliver a change to every listener in registration order
    pub fn notify(&mut self, change: ListChange) {
        for listener in &mut self.inner {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_single_row_helpers() {
        assert_eq!(
            ListChange::inserted(4),
            ListChange::RowsInserted { first: 4, last: 4 }
        );
        assert_eq!(
            ListChange::removed(0),
            ListChange::RowsRemoved { first: 0, last: 0 }
        );
    }

    #[test]
    fn test_notify_reaches_all_listeners() {
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let mut listeners = Listeners::new();
        let sink = Rc::clone(&seen_a);
        listeners.subscribe(move |change| sink.borrow_mut().push(change));
        let sink = Rc::clone(&seen_b);
        listeners.subscribe(move |change| sink.borrow_mut().push(change));

        listeners.notify(ListChange::Reset);
        listeners.notify(ListChange::RowChanged(1));

        let expected = vec![ListChange::Reset, ListChange::RowChanged(1)];
        assert_eq!(*seen_a.borrow(), expected);
        assert_eq!(*seen_b.borrow(), expected);
    }
}
