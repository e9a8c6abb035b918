//! Error types for the `plotline-events` crate.
//!
//! All fallible operations in this crate return [`BoardError`] through the
//! standard [`Result`] type alias.

use plotline_types::{ChapterId, EventId};

/// Errors that can occur during event board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// An event was not found in the event table.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// A chapter was not found in the chapter registry.
    #[error("chapter not found: {0}")]
    ChapterNotFound(ChapterId),

    /// An order list index is out of bounds.
    #[error("order list {index} does not exist ({count} lists)")]
    OrderNotFound {
        /// The requested list index.
        index: usize,
        /// Number of lists the board holds.
        count: usize,
    },

    /// A position within an order list is out of bounds.
    #[error("position {position} is out of range for a list of length {len}")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
        /// Length of the addressed list.
        len: usize,
    },

    /// An event was inserted under a UID that is already in the table.
    #[error("duplicate event uid: {0}")]
    DuplicateEvent(EventId),

    /// A restored order list contains the same UID more than once.
    #[error("uid {0} appears more than once in the order list")]
    DuplicateInOrder(EventId),
}
