//! Event storage, ordering, and lifecycle for the Plotline data layer.
//!
//! This crate owns the event side of a story project: a UID allocator that
//! never reuses identifiers, the event table, any number of parallel order
//! lists over the same events, and the dirty flag the save path consults.
//! Chapters live in `plotline_chapters`; the cross-reference adapter here
//! keeps the two sides consistent.
//!
//! # Modules
//!
//! - [`allocator`] -- Monotonic UID issuance with reserve and release,
//!   so deleted identifiers are never handed out again.
//! - [`board`] -- [`EventBoard`], the single mutation surface: lifecycle,
//!   order-list operations, snapshot export, and the dirty flag.
//! - [`crossref`] -- Attach/detach of event UIDs in chapter collections.
//! - [`error`] -- Error types for board operations.
//! - [`order`] -- [`EventOrder`], one ordering of the board's events with
//!   swap and positional-move semantics.
//!
//! [`EventBoard`]: board::EventBoard
//! [`EventOrder`]: order::EventOrder

pub mod allocator;
pub mod board;
pub mod crossref;
pub mod error;
pub mod order;

// Re-export primary types at crate root.
pub use allocator::UidAllocator;
pub use board::EventBoard;
pub use error::BoardError;
pub use order::EventOrder;
