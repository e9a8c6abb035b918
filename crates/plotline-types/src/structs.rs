//! Core entity structs for the Plotline data layer.
//!
//! Covers the canonical `Event` and `Chapter` entities plus the
//! `EventRecord` row handed out by snapshot exports.

use serde::{Deserialize, Serialize};

use crate::ids::{ChapterId, EventId};

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A story event held by the event board.
///
/// Events are the atoms of a narrative timeline. The board owns the
/// canonical copy; callers receive references or [`EventRecord`]
/// projections, never the stored value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier issued by the UID allocator.
    pub id: EventId,
    /// Display name shown on the timeline.
    pub name: String,
    /// Free-form description of what happens.
    pub description: String,
    /// Display color, inherited from the parent chapter.
    ///
    /// Empty when the event has no chapter.
    pub color: String,
    /// The chapter this event belongs to, if any.
    pub chapter: Option<ChapterId>,
}

// ---------------------------------------------------------------------------
// Chapter
// ---------------------------------------------------------------------------

/// A chapter grouping events, owned by the chapter registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique chapter identifier.
    pub id: ChapterId,
    /// Display name.
    pub name: String,
    /// Display color shared with the chapter's events.
    pub color: String,
    /// Events cross-referenced to this chapter, in attach order.
    pub events: Vec<EventId>,
}

impl Chapter {
    /// Create a chapter with no attached events.
    pub const fn new(id: ChapterId, name: String, color: String) -> Self {
        Self {
            id,
            name,
            color,
            events: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventRecord
// ---------------------------------------------------------------------------

/// One exported event row.
///
/// Snapshot exports hand rows like this to persistence and table views
/// instead of positional value arrays, so every column keeps its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event's UID.
    pub uid: EventId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Parent chapter, if the event has one.
    pub chapter: Option<ChapterId>,
    /// Display color.
    pub color: String,
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        Self {
            uid: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            chapter: event.chapter,
            color: event.color.clone(),
        }
    }
}
