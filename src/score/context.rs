// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The host document context.
//!
//! Owns the master notation, the committed excerpt list and the
//! currently active notation. The part editor reads the master and
//! excerpts at load time and commits a new excerpt list back on apply;
//! nothing here changes until that commit.

use super::notation::{Notation, NotationHandle, NotationKind};

/// Host document context for one open score
#[derive(Debug)]
pub struct ScoreContext {
    /// The master notation, fixed for the lifetime of the context
    master: NotationHandle,
    /// Committed excerpts, in display order
    excerpts: Vec<NotationHandle>,
    /// The notation currently active in the host
    current: Option<NotationHandle>,
}

impl ScoreContext {
    /// Create a context around a master notation
    pub fn new(master: NotationHandle) -> Self {
        debug_assert_eq!(master.kind(), NotationKind::Master);
        Self {
            master,
            excerpts: Vec::new(),
            current: None,
        }
    }

    /// The master notation
    pub fn master(&self) -> &NotationHandle {
        &self.master
    }

    /// Committed excerpts in display order
    pub fn excerpts(&self) -> &[NotationHandle] {
        &self.excerpts
    }

    /// Register an excerpt at the end of the committed list
    pub fn add_excerpt(&mut self, excerpt: NotationHandle) {
        self.excerpts.push(excerpt);
    }

    /// Replace the committed excerpt list
    pub fn set_excerpts(&mut self, excerpts: Vec<NotationHandle>) {
        self.excerpts = excerpts;
    }

    /// The currently active notation, if any
    pub fn current(&self) -> Option<&NotationHandle> {
        self.current.as_ref()
    }

    /// Set or clear the currently active notation
    pub fn set_current(&mut self, current: Option<NotationHandle>) {
        self.current = current;
    }

    /// Create a fresh, untitled excerpt notation.
    ///
    /// The excerpt is not registered with the context; it only enters
    /// the committed list through `set_excerpts`.
    pub fn new_excerpt_notation(&self) -> NotationHandle {
        NotationHandle::new(Notation::new(NotationKind::Excerpt, ""))
    }
}
