//! Chapter registry for the Plotline data layer.
//!
//! Chapters group events under a shared display color. This crate owns the
//! chapters themselves; the event board in `plotline-events` borrows the
//! registry to validate references and to maintain each chapter's `events`
//! collection.
//!
//! # Modules
//!
//! - [`registry`] -- The [`ChapterRegistry`] and its error type

pub mod registry;

pub use registry::{ChapterError, ChapterRegistry};
