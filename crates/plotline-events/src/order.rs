//! A single event order list.
//!
//! An [`EventOrder`] is one ordering of event UIDs along a timeline. The
//! board owns several of them; each can be reordered independently while
//! membership stays identical across lists.

use plotline_types::EventId;

use crate::error::BoardError;

/// One ordered sequence of event UIDs.
///
/// The sequence never contains the same UID twice; the board enforces this
/// on every path that adds entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventOrder {
    /// The UID sequence, front to back.
    sequence: Vec<EventId>,
}

impl EventOrder {
    /// Create an empty order list.
    pub const fn new() -> Self {
        Self {
            sequence: Vec::new(),
        }
    }

    /// Create an order list from an existing UID sequence.
    pub const fn from_sequence(sequence: Vec<EventId>) -> Self {
        Self { sequence }
    }

    /// Read-only view of the sequence.
    pub fn as_slice(&self) -> &[EventId] {
        &self.sequence
    }

    /// Return the number of UIDs in the list.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Append a UID at the back of the list.
    pub fn push(&mut self, uid: EventId) {
        self.sequence.push(uid);
    }

    /// Remove a UID wherever it appears, preserving the relative order of
    /// the remaining entries. Returns `true` if the UID was present.
    pub fn remove(&mut self, uid: EventId) -> bool {
        let before = self.sequence.len();
        self.sequence.retain(|entry| *entry != uid);
        self.sequence.len() < before
    }

    /// Check whether a UID appears in the list.
    pub fn contains(&self, uid: EventId) -> bool {
        self.sequence.contains(&uid)
    }

    /// Return the position of a UID in the list.
    pub fn position(&self, uid: EventId) -> Option<usize> {
        self.sequence.iter().position(|entry| *entry == uid)
    }

    /// Exchange the UIDs at two positions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PositionOutOfRange`] unless both positions are
    /// within the list.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), BoardError> {
        let len = self.sequence.len();
        if a >= len {
            return Err(BoardError::PositionOutOfRange { position: a, len });
        }
        if b >= len {
            return Err(BoardError::PositionOutOfRange { position: b, len });
        }
        self.sequence.swap(a, b);
        Ok(())
    }

    /// Move the UID at `from` so it ends up at `to`, shifting everything in
    /// between by one place. `from == to` leaves the list unchanged.
    ///
    /// Implemented as a one-step rotation of the sub-slice between the two
    /// positions: forward moves rotate left, backward moves rotate right.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PositionOutOfRange`] unless both positions are
    /// within the list.
    pub fn shift(&mut self, from: usize, to: usize) -> Result<(), BoardError> {
        let len = self.sequence.len();
        if from >= len {
            return Err(BoardError::PositionOutOfRange { position: from, len });
        }
        if to >= len {
            return Err(BoardError::PositionOutOfRange { position: to, len });
        }
        if from == to {
            return Ok(());
        }

        let lo = from.min(to);
        let hi = from.max(to);
        // Both endpoints are bounds-checked above, so the window exists.
        let Some(window) = self.sequence.get_mut(lo..=hi) else {
            return Err(BoardError::PositionOutOfRange { position: hi, len });
        };
        if from < to {
            window.rotate_left(1);
        } else {
            window.rotate_right(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_of(raw: &[u64]) -> EventOrder {
        EventOrder::from_sequence(raw.iter().copied().map(EventId::new).collect())
    }

    fn raw_of(order: &EventOrder) -> Vec<u64> {
        order.as_slice().iter().map(|id| id.into_inner()).collect()
    }

    #[test]
    fn push_appends_at_the_back() {
        let mut order = EventOrder::new();
        assert!(order.is_empty());

        order.push(EventId::new(10));
        order.push(EventId::new(20));
        assert_eq!(raw_of(&order), vec![10, 20]);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut order = order_of(&[10, 20, 30, 40]);
        assert!(order.remove(EventId::new(20)));
        assert_eq!(raw_of(&order), vec![10, 30, 40]);
        assert!(!order.remove(EventId::new(20)));
    }

    #[test]
    fn position_finds_a_uid() {
        let order = order_of(&[10, 20, 30]);
        assert_eq!(order.position(EventId::new(30)), Some(2));
        assert_eq!(order.position(EventId::new(99)), None);
        assert!(order.contains(EventId::new(10)));
    }

    #[test]
    fn swap_exchanges_two_positions() {
        let mut order = order_of(&[10, 20, 30]);
        assert!(order.swap(0, 2).is_ok());
        assert_eq!(raw_of(&order), vec![30, 20, 10]);

        // Self-inverse.
        assert!(order.swap(0, 2).is_ok());
        assert_eq!(raw_of(&order), vec![10, 20, 30]);
    }

    #[test]
    fn swap_rejects_out_of_range_positions() {
        let mut order = order_of(&[10, 20]);
        let err = order.swap(0, 2);
        assert!(matches!(
            err,
            Err(BoardError::PositionOutOfRange { position: 2, len: 2 })
        ));
        assert_eq!(raw_of(&order), vec![10, 20]);
    }

    #[test]
    fn shift_forward_rotates_left() {
        let mut order = order_of(&[10, 20, 30, 40]);
        assert!(order.shift(0, 2).is_ok());
        assert_eq!(raw_of(&order), vec![20, 30, 10, 40]);
    }

    #[test]
    fn shift_backward_rotates_right() {
        let mut order = order_of(&[10, 20, 30, 40]);
        assert!(order.shift(3, 1).is_ok());
        assert_eq!(raw_of(&order), vec![10, 40, 20, 30]);
    }

    #[test]
    fn shift_to_adjacent_position_is_a_plain_swap() {
        let mut order = order_of(&[10, 20, 30]);
        assert!(order.shift(1, 2).is_ok());
        assert_eq!(raw_of(&order), vec![10, 30, 20]);
    }

    #[test]
    fn shift_to_same_position_changes_nothing() {
        let mut order = order_of(&[10, 20, 30]);
        assert!(order.shift(1, 1).is_ok());
        assert_eq!(raw_of(&order), vec![10, 20, 30]);
    }

    #[test]
    fn shift_rejects_out_of_range_positions() {
        let mut order = order_of(&[10, 20, 30]);
        assert!(matches!(
            order.shift(3, 0),
            Err(BoardError::PositionOutOfRange { position: 3, len: 3 })
        ));
        assert!(matches!(
            order.shift(0, 5),
            Err(BoardError::PositionOutOfRange { position: 5, len: 3 })
        ));
        assert_eq!(raw_of(&order), vec![10, 20, 30]);
    }

    #[test]
    fn shift_on_empty_list_is_out_of_range() {
        let mut order = EventOrder::new();
        assert!(matches!(
            order.shift(0, 0),
            Err(BoardError::PositionOutOfRange { position: 0, len: 0 })
        ));
    }
}
