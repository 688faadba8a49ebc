// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Score domain model.
//!
//! This module provides:
//! - Notation handles: shared references to the master score or a
//!   derived excerpt, mutable through any holder
//! - The score context: the host document that owns the master, the
//!   committed excerpt list and the currently active notation

pub mod context;
pub mod notation;

pub use context::ScoreContext;
pub use notation::{Meta, Notation, NotationHandle, NotationKind, VOICES};
