// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notation handles shared between the part editor and the host document.
//!
//! A notation is either the master score or a derived excerpt. Handles
//! use shared ownership with interior mutability: a rename or a voice
//! visibility change made through one handle is immediately visible to
//! every other holder. Edits through handles are never transactional.

use std::cell::RefCell;
use std::rc::Rc;

/// Number of voices a part can show or hide
pub const VOICES: usize = 4;

/// Score metadata consumed by the part editor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta {
    /// Display title
    pub title: String,
    /// Composer credit (carried along, not edited here)
    pub composer: String,
}

impl Meta {
    /// Create metadata with a title only
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            composer: String::new(),
        }
    }
}

/// Whether a notation is the master score or a derived excerpt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationKind {
    /// The full score; exactly one per document, never removable
    Master,
    /// A derived part extracted from the master
    Excerpt,
}

/// A score or a derived excerpt of one
#[derive(Debug, Clone)]
pub struct Notation {
    meta: Meta,
    kind: NotationKind,
    voices: [bool; VOICES],
    opened: bool,
}

impl Notation {
    /// Create a notation with the given kind and title
    pub fn new(kind: NotationKind, title: impl Into<String>) -> Self {
        Self {
            meta: Meta::with_title(title),
            kind,
            voices: [true; VOICES],
            opened: false,
        }
    }

    /// Get metadata
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Replace metadata
    pub fn set_meta(&mut self, meta: Meta) {
        self.meta = meta;
    }

    /// Get the notation kind
    pub fn kind(&self) -> NotationKind {
        self.kind
    }

    /// Whether a voice is visible. Out-of-range voices read as hidden.
    pub fn voice_visible(&self, voice: usize) -> bool {
        self.voices.get(voice).copied().unwrap_or(false)
    }

    /// Set a voice's visibility. Out-of-range voices are ignored.
    pub fn set_voice_visible(&mut self, voice: usize, visible: bool) {
        if let Some(slot) = self.voices.get_mut(voice) {
            *slot = visible;
        }
    }

    /// Per-voice visibility snapshot
    pub fn voices_visibility(&self) -> [bool; VOICES] {
        self.voices
    }

    /// Whether the host should keep this notation loaded
    pub fn opened(&self) -> bool {
        self.opened
    }

    /// Mark the notation opened or closed
    pub fn set_opened(&mut self, opened: bool) {
        self.opened = opened;
    }
}

/// Shared-ownership handle to a notation.
///
/// Equality is pointer identity: two handles compare equal when they
/// refer to the same underlying notation, matching how the host
/// document tracks notations.
#[derive(Debug, Clone)]
pub struct NotationHandle(Rc<RefCell<Notation>>);

impl NotationHandle {
    /// Wrap a notation in a shared handle
    pub fn new(notation: Notation) -> Self {
        Self(Rc::new(RefCell::new(notation)))
    }

    /// Create a master notation handle
    pub fn master(title: impl Into<String>) -> Self {
        Self::new(Notation::new(NotationKind::Master, title))
    }

    /// Create an excerpt notation handle
    pub fn excerpt(title: impl Into<String>) -> Self {
        Self::new(Notation::new(NotationKind::Excerpt, title))
    }

    /// Get a metadata snapshot
    pub fn meta(&self) -> Meta {
        self.0.borrow().meta().clone()
    }

    /// Replace metadata
    pub fn set_meta(&self, meta: Meta) {
        self.0.borrow_mut().set_meta(meta);
    }

    /// Get the display title
    pub fn title(&self) -> String {
        self.0.borrow().meta().title.clone()
    }

    /// Get the notation kind
    pub fn kind(&self) -> NotationKind {
        self.0.borrow().kind()
    }

    /// Whether this handle refers to an excerpt
    pub fn is_excerpt(&self) -> bool {
        self.kind() == NotationKind::Excerpt
    }

    /// Whether a voice is visible
    pub fn voice_visible(&self, voice: usize) -> bool {
        self.0.borrow().voice_visible(voice)
    }

    /// Set a voice's visibility
    pub fn set_voice_visible(&self, voice: usize, visible: bool) {
        self.0.borrow_mut().set_voice_visible(voice, visible);
    }

    /// Per-voice visibility snapshot
    pub fn voices_visibility(&self) -> [bool; VOICES] {
        self.0.borrow().voices_visibility()
    }

    /// Whether the host should keep this notation loaded
    pub fn opened(&self) -> bool {
        self.0.borrow().opened()
    }

    /// Mark the notation opened or closed
    pub fn set_opened(&self, opened: bool) {
        self.0.borrow_mut().set_opened(opened);
    }

    /// Produce an independent copy.
    ///
    /// The copy is always excerpt-kinded: duplicating the master row
    /// yields a removable part covering the whole score, not a second
    /// master.
    pub fn deep_clone(&self) -> NotationHandle {
        let mut copy = self.0.borrow().clone();
        copy.kind = NotationKind::Excerpt;
        Self::new(copy)
    }

    /// Whether two handles refer to the same notation
    pub fn ptr_eq(&self, other: &NotationHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for NotationHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for NotationHandle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notation_defaults() {
        let notation = Notation::new(NotationKind::Excerpt, "Flute");
        assert_eq!(notation.meta().title, "Flute");
        assert_eq!(notation.kind(), NotationKind::Excerpt);
        assert_eq!(notation.voices_visibility(), [true; VOICES]);
        assert!(!notation.opened());
    }

    #[test]
    fn test_voice_visibility_bounds() {
        let mut notation = Notation::new(NotationKind::Excerpt, "Oboe");

        notation.set_voice_visible(1, false);
        assert!(!notation.voice_visible(1));
        assert!(notation.voice_visible(0));

        // Out-of-range voice: write ignored, read is false
        notation.set_voice_visible(VOICES, true);
        assert!(!notation.voice_visible(VOICES));
    }

    #[test]
    fn test_handle_identity() {
        let a = NotationHandle::excerpt("Viola");
        let b = a.clone();
        let c = NotationHandle::excerpt("Viola");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shared_mutation_visible_through_all_handles() {
        let a = NotationHandle::excerpt("Cello");
        let b = a.clone();

        a.set_meta(Meta::with_title("Violoncello"));
        assert_eq!(b.title(), "Violoncello");

        b.set_voice_visible(2, false);
        assert!(!a.voice_visible(2));
    }

    #[test]
    fn test_deep_clone_is_independent_excerpt() {
        let master = NotationHandle::master("Symphony");
        master.set_voice_visible(0, false);

        let copy = master.deep_clone();
        assert!(copy.is_excerpt());
        assert!(!copy.voice_visible(0));
        assert_ne!(copy, master);

        copy.set_meta(Meta::with_title("Symphony (copy)"));
        assert_eq!(master.title(), "Symphony");
    }
}
