//! Monotonic UID issuance for events.
//!
//! Each board owns its own [`UidAllocator`] instance; there is no global
//! state, so independent boards never hand out colliding UIDs and never
//! interfere with each other's lifecycles.

use std::collections::BTreeSet;

/// Issues unique event UIDs and tracks which ones are live.
///
/// The counter is monotonic: a released UID is retired, never re-issued by
/// the same allocator. Loading a project registers its UIDs through
/// [`UidAllocator::reserve`], which advances the counter past them so that
/// freshly issued UIDs stay distinct from loaded ones.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UidAllocator {
    /// The next UID to hand out.
    next: u64,
    /// UIDs currently in use by the board.
    live: BTreeSet<u64>,
}

impl UidAllocator {
    /// Create an allocator whose first issued UID is 1.
    ///
    /// 0 is never issued, which keeps it usable as a sentinel in test
    /// fixtures and external tooling.
    pub const fn new() -> Self {
        Self {
            next: 1,
            live: BTreeSet::new(),
        }
    }

    /// Create an allocator that starts issuing at `next`, with no live
    /// UIDs. Useful when restoring saved state.
    pub const fn starting_at(next: u64) -> Self {
        Self {
            next,
            live: BTreeSet::new(),
        }
    }

    /// Issue the next UID and mark it live.
    ///
    /// The counter saturates at `u64::MAX` instead of wrapping; exhausting
    /// the 64-bit space is out of scope for any real project.
    pub fn next_uid(&mut self) -> u64 {
        let uid = self.next;
        self.next = self.next.saturating_add(1);
        self.live.insert(uid);
        uid
    }

    /// Register a caller-supplied UID as live and advance the counter past
    /// it, so later [`UidAllocator::next_uid`] calls stay distinct.
    ///
    /// Returns `false` if the UID was already live.
    pub fn reserve(&mut self, uid: u64) -> bool {
        if !self.live.insert(uid) {
            return false;
        }
        if uid >= self.next {
            self.next = uid.saturating_add(1);
        }
        true
    }

    /// Retire a UID. It will not be issued again by this allocator.
    ///
    /// Returns `false` if the UID was not live.
    pub fn release(&mut self, uid: u64) -> bool {
        self.live.remove(&uid)
    }

    /// Check whether a UID is currently live.
    pub fn is_live(&self, uid: u64) -> bool {
        self.live.contains(&uid)
    }

    /// Return the number of live UIDs.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Forget all live UIDs without rewinding the counter.
    ///
    /// UIDs issued before the clear stay retired.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

impl Default for UidAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_uid_is_one_and_counter_is_monotonic() {
        let mut allocator = UidAllocator::new();
        assert_eq!(allocator.next_uid(), 1);
        assert_eq!(allocator.next_uid(), 2);
        assert_eq!(allocator.next_uid(), 3);
        assert_eq!(allocator.live_count(), 3);
    }

    #[test]
    fn released_uid_is_never_reissued() {
        let mut allocator = UidAllocator::new();
        let first = allocator.next_uid();
        let _ = allocator.next_uid();

        assert!(allocator.release(first));
        assert!(!allocator.is_live(first));

        // The counter does not rewind into the retired range.
        assert_eq!(allocator.next_uid(), 3);
        assert_eq!(allocator.next_uid(), 4);
    }

    #[test]
    fn release_of_unknown_uid_reports_false() {
        let mut allocator = UidAllocator::new();
        assert!(!allocator.release(99));
    }

    #[test]
    fn reserve_advances_the_counter() {
        let mut allocator = UidAllocator::new();
        assert!(allocator.reserve(40));
        assert!(allocator.reserve(17));
        assert!(allocator.is_live(40));
        assert!(allocator.is_live(17));

        // Next issuance clears the highest reserved UID.
        assert_eq!(allocator.next_uid(), 41);
    }

    #[test]
    fn reserve_of_live_uid_reports_false() {
        let mut allocator = UidAllocator::new();
        let uid = allocator.next_uid();
        assert!(!allocator.reserve(uid));
        assert_eq!(allocator.live_count(), 1);
    }

    #[test]
    fn clear_forgets_live_uids_but_keeps_the_counter() {
        let mut allocator = UidAllocator::new();
        let _ = allocator.next_uid();
        let _ = allocator.next_uid();

        allocator.clear();
        assert_eq!(allocator.live_count(), 0);

        // UIDs from before the clear stay retired.
        assert_eq!(allocator.next_uid(), 3);
    }

    #[test]
    fn starting_at_restores_the_counter() {
        let mut allocator = UidAllocator::starting_at(500);
        assert_eq!(allocator.next_uid(), 500);
        assert_eq!(allocator.next_uid(), 501);
    }

    #[test]
    fn counter_saturates_at_the_top_of_the_range() {
        let mut allocator = UidAllocator::starting_at(u64::MAX);
        assert_eq!(allocator.next_uid(), u64::MAX);
        // Saturated: the same value comes back rather than wrapping to 0.
        assert_eq!(allocator.next_uid(), u64::MAX);
    }
}
