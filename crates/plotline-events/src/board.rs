//! The event board: event table, order lists, allocator, and dirty flag.
//!
//! The [`EventBoard`] is the single mutation surface of the data layer.
//! Every lifecycle operation (create, edit, remove, restore) and every
//! reordering operation goes through it, so the structural invariants hold
//! at all times: each stored event appears exactly once in every order
//! list, and no list references a UID missing from the table.
//!
//! Chapters are not owned here. Each call that touches a chapter reference
//! borrows the [`ChapterRegistry`] and maintains the reverse index through
//! the [`crate::crossref`] adapter.

use std::collections::{BTreeMap, BTreeSet};

use plotline_chapters::ChapterRegistry;
use plotline_types::{ChapterId, Event, EventId, EventRecord};

use crate::allocator::UidAllocator;
use crate::crossref;
use crate::error::BoardError;
use crate::order::EventOrder;

/// The event board holding all events and their orderings.
///
/// A fresh board has one empty order list at index 0 (the default
/// timeline), no events, and a clean dirty flag. All mutation paths except
/// the restore operations set the dirty flag; [`EventBoard::reset_changes`]
/// clears it after a save.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EventBoard {
    /// All events indexed by their UID.
    events: BTreeMap<EventId, Event>,
    /// All order lists; index 0 is the default timeline.
    orders: Vec<EventOrder>,
    /// UID issuance for this board.
    allocator: UidAllocator,
    /// Whether any mutation happened since the last reset.
    dirty: bool,
}

impl EventBoard {
    /// Create a board with one empty default order list at index 0.
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
            orders: vec![EventOrder::new()],
            allocator: UidAllocator::new(),
            dirty: false,
        }
    }

    // -------------------------------------------------------------------
    // Event lifecycle
    // -------------------------------------------------------------------

    /// Create a new event and place it at the back of every order list.
    ///
    /// The chapter must be registered; the new UID is appended to its
    /// `events` collection. If no order list exists (the board was
    /// cleared), the default list is re-established first. Sets the dirty
    /// flag and returns the new UID.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ChapterNotFound`] if the chapter is not
    /// registered. Nothing is mutated in that case.
    pub fn create_event(
        &mut self,
        chapters: &mut ChapterRegistry,
        name: &str,
        description: &str,
        color: &str,
        chapter: ChapterId,
    ) -> Result<EventId, BoardError> {
        if !chapters.contains(chapter) {
            return Err(BoardError::ChapterNotFound(chapter));
        }

        let uid = EventId::new(self.allocator.next_uid());
        self.events.insert(
            uid,
            Event {
                id: uid,
                name: name.to_owned(),
                description: description.to_owned(),
                color: color.to_owned(),
                chapter: Some(chapter),
            },
        );
        crossref::attach(chapters, chapter, uid)?;

        if self.orders.is_empty() {
            self.orders.push(EventOrder::new());
        }
        for order in &mut self.orders {
            order.push(uid);
        }

        self.dirty = true;
        tracing::debug!(uid = %uid, lists = self.orders.len(), "event created");
        Ok(uid)
    }

    /// Insert an event under a caller-supplied UID (load path).
    ///
    /// Deserializers restore events and order lists separately, so the UID
    /// is reserved with the allocator but not appended to any order list.
    /// With `Some(chapter)` the event inherits the chapter's color (the
    /// save format carries no per-event color) and its UID is appended to
    /// the chapter's collection; with `None` the event is chapter-less and
    /// uncolored. Never marks the board dirty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateEvent`] if the UID is already in the
    /// table, or [`BoardError::ChapterNotFound`] if a chapter is given but
    /// not registered. Nothing is mutated in either case.
    pub fn restore_event(
        &mut self,
        chapters: &mut ChapterRegistry,
        uid: EventId,
        name: &str,
        description: &str,
        chapter: Option<ChapterId>,
    ) -> Result<(), BoardError> {
        if self.events.contains_key(&uid) {
            return Err(BoardError::DuplicateEvent(uid));
        }

        let color = match chapter {
            Some(id) => {
                let Some(entry) = chapters.chapter(id) else {
                    return Err(BoardError::ChapterNotFound(id));
                };
                entry.color.clone()
            }
            None => String::new(),
        };

        if !self.allocator.reserve(uid.into_inner()) {
            tracing::warn!(uid = %uid, "restored uid was already tracked by the allocator");
        }
        if let Some(id) = chapter {
            crossref::attach(chapters, id, uid)?;
        }
        self.events.insert(
            uid,
            Event {
                id: uid,
                name: name.to_owned(),
                description: description.to_owned(),
                color,
                chapter,
            },
        );
        Ok(())
    }

    /// Overwrite an event's name, description, and chapter in place.
    ///
    /// Returns `Ok(false)` when no event with the UID exists. When the
    /// chapter reference changes, the UID moves from the old chapter's
    /// collection to the new one; an old chapter the collaborator has
    /// already dropped is skipped with a warning. Same-chapter edits leave
    /// the collections untouched. Sets the dirty flag on success.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ChapterNotFound`] if the new chapter is not
    /// registered. Nothing is mutated in that case.
    pub fn edit_event(
        &mut self,
        chapters: &mut ChapterRegistry,
        uid: EventId,
        name: &str,
        description: &str,
        chapter: ChapterId,
    ) -> Result<bool, BoardError> {
        if !self.events.contains_key(&uid) {
            return Ok(false);
        }
        if !chapters.contains(chapter) {
            return Err(BoardError::ChapterNotFound(chapter));
        }

        let Some(event) = self.events.get_mut(&uid) else {
            return Ok(false);
        };
        let previous = event.chapter;
        name.clone_into(&mut event.name);
        description.clone_into(&mut event.description);
        event.chapter = Some(chapter);

        if previous != Some(chapter) {
            if let Some(old) = previous
                && crossref::detach(chapters, old, uid).is_err()
            {
                tracing::warn!(uid = %uid, chapter = %old, "stale chapter reference dropped during edit");
            }
            crossref::attach(chapters, chapter, uid)?;
        }

        self.dirty = true;
        Ok(true)
    }

    /// Remove an event and strip its UID from every order list.
    ///
    /// The UID is detached from its chapter's collection and retired with
    /// the allocator. A chapter the collaborator has already dropped is
    /// tolerated with a warning, so an event can always be deleted. Sets
    /// the dirty flag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EventNotFound`] if the UID is not in the
    /// table. Nothing is mutated in that case.
    pub fn remove_event(
        &mut self,
        chapters: &mut ChapterRegistry,
        uid: EventId,
    ) -> Result<(), BoardError> {
        let Some(event) = self.events.get(&uid) else {
            return Err(BoardError::EventNotFound(uid));
        };

        if let Some(chapter) = event.chapter
            && crossref::detach(chapters, chapter, uid).is_err()
        {
            tracing::warn!(uid = %uid, chapter = %chapter, "chapter missing during removal; event removed anyway");
        }

        self.events.remove(&uid);
        self.allocator.release(uid.into_inner());
        for order in &mut self.orders {
            order.remove(uid);
        }

        self.dirty = true;
        tracing::debug!(uid = %uid, "event removed");
        Ok(())
    }

    /// Remove all events and order lists and clear the dirty flag.
    ///
    /// No order list survives, not even the default; the next
    /// [`EventBoard::create_event`] re-establishes list 0. Retired UIDs
    /// stay retired: the allocator counter is not rewound.
    pub fn clear(&mut self) {
        self.events.clear();
        self.orders.clear();
        self.allocator.clear();
        self.dirty = false;
        tracing::debug!("board cleared");
    }

    // -------------------------------------------------------------------
    // Event queries
    // -------------------------------------------------------------------

    /// Get an immutable reference to an event.
    pub fn event(&self, uid: EventId) -> Option<&Event> {
        self.events.get(&uid)
    }

    /// Check whether an event with the given UID exists.
    pub fn contains_event(&self, uid: EventId) -> bool {
        self.events.contains_key(&uid)
    }

    /// Return the number of stored events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Check whether the table holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Find an event by name, matching case-insensitively.
    ///
    /// When several events share a name, the one with the lowest UID wins.
    pub fn event_by_name(&self, name: &str) -> Option<&Event> {
        let needle = name.to_lowercase();
        self.events
            .values()
            .find(|event| event.name.to_lowercase() == needle)
    }

    /// Export a single event as a typed record row.
    pub fn event_record(&self, uid: EventId) -> Option<EventRecord> {
        self.events.get(&uid).map(EventRecord::from)
    }

    /// Export every event as a typed record row.
    ///
    /// The rows are unordered; pair this with [`EventBoard::orders`] to
    /// persist the timeline orderings. An empty table yields an empty
    /// vector, never an error.
    pub fn snapshot(&self) -> Vec<EventRecord> {
        self.events.values().map(EventRecord::from).collect()
    }

    // -------------------------------------------------------------------
    // Order lists
    // -------------------------------------------------------------------

    /// Bounds-checked read-only view of one order list.
    pub fn order(&self, index: usize) -> Option<&[EventId]> {
        self.orders.get(index).map(EventOrder::as_slice)
    }

    /// Return the number of order lists.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate over all order lists in index order.
    pub fn orders(&self) -> impl Iterator<Item = &[EventId]> {
        self.orders.iter().map(EventOrder::as_slice)
    }

    /// Return the position of a UID within one order list.
    ///
    /// `None` when the list does not exist or does not contain the UID.
    pub fn position_in_order(&self, index: usize, uid: EventId) -> Option<usize> {
        self.orders.get(index)?.position(uid)
    }

    /// Exchange the events at two positions of one order list.
    ///
    /// Other lists and the event table are never touched. Sets the dirty
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OrderNotFound`] for a bad list index, or
    /// [`BoardError::PositionOutOfRange`] unless both positions are within
    /// the list. Nothing is mutated on error.
    pub fn swap_events(&mut self, index: usize, a: usize, b: usize) -> Result<(), BoardError> {
        let count = self.orders.len();
        let Some(order) = self.orders.get_mut(index) else {
            return Err(BoardError::OrderNotFound { index, count });
        };
        order.swap(a, b)?;
        self.dirty = true;
        Ok(())
    }

    /// Move the event at `from` so it ends up at `to` in one order list,
    /// shifting the entries in between by one place.
    ///
    /// `from == to` changes nothing but still counts as a mutation. Other
    /// lists and the event table are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OrderNotFound`] for a bad list index, or
    /// [`BoardError::PositionOutOfRange`] unless both positions are within
    /// the list. Nothing is mutated on error.
    pub fn move_event(&mut self, index: usize, from: usize, to: usize) -> Result<(), BoardError> {
        let count = self.orders.len();
        let Some(order) = self.orders.get_mut(index) else {
            return Err(BoardError::OrderNotFound { index, count });
        };
        order.shift(from, to)?;
        self.dirty = true;
        Ok(())
    }

    /// Append a whole order list (load path) and return its index.
    ///
    /// The sequence is validated at the door: every UID must already be in
    /// the table and no UID may repeat, since a restored list enters the
    /// same invariant space as the default one. Does not retroactively
    /// receive events created before it existed unless they are supplied
    /// in `sequence`. Never marks the board dirty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EventNotFound`] for a UID missing from the
    /// table, or [`BoardError::DuplicateInOrder`] for a repeated UID.
    /// Nothing is mutated in either case.
    pub fn restore_order(&mut self, sequence: Vec<EventId>) -> Result<usize, BoardError> {
        let mut seen = BTreeSet::new();
        for uid in &sequence {
            if !self.events.contains_key(uid) {
                return Err(BoardError::EventNotFound(*uid));
            }
            if !seen.insert(*uid) {
                return Err(BoardError::DuplicateInOrder(*uid));
            }
        }

        let index = self.orders.len();
        self.orders.push(EventOrder::from_sequence(sequence));
        Ok(index)
    }

    // -------------------------------------------------------------------
    // Dirty flag
    // -------------------------------------------------------------------

    /// Whether any mutation happened since the last reset.
    pub const fn has_changed(&self) -> bool {
        self.dirty
    }

    /// Mark the board clean (called after a successful save).
    pub const fn reset_changes(&mut self) {
        self.dirty = false;
    }
}

impl Default for EventBoard {
    fn default() -> Self {
        Self::new()
    }
}
