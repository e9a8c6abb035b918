//! Shared type definitions for the Plotline data layer.
//!
//! This crate is the single source of truth for the types shared between
//! the event board and the chapter registry. Everything here is plain
//! data; behavior lives in the crates that own the collections.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UID wrappers for event and chapter identifiers
//! - [`structs`] -- Core entity structs (events, chapters, export rows)

pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{ChapterId, EventId};
pub use structs::{Chapter, Event, EventRecord};
