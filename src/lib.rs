// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! PARTBOOK - Part list editing for musical scores.
//!
//! A score carries one master notation plus any number of derived
//! excerpts ("parts"). This crate provides:
//! - A shared-handle domain model for notations and the host document
//! - A part collection adapter with selection, ordering and commit
//! - A ratatui-based terminal front-end for interactive editing

pub mod config;
pub mod parts;
pub mod score;
pub mod ui;

pub use config::{AppConfig, Strings, UiOptions};
pub use parts::{format_voices_label, ListChange, PartListModel, PartRow, SelectionTracker};
pub use score::{Meta, Notation, NotationHandle, NotationKind, ScoreContext, VOICES};
