//! Cross-reference adapter between the event board and the chapter registry.
//!
//! The board records which chapter each event belongs to; the chapter's own
//! `events` collection is the reverse index. These free functions are the
//! only code that touches that collection, so both directions of the
//! reference are maintained in one place.

use plotline_chapters::ChapterRegistry;
use plotline_types::{ChapterId, EventId};

use crate::error::BoardError;

/// Append an event UID to a chapter's `events` collection.
///
/// Idempotent: a UID already present is left where it is, not duplicated.
///
/// # Errors
///
/// Returns [`BoardError::ChapterNotFound`] if the chapter is not registered.
pub fn attach(
    chapters: &mut ChapterRegistry,
    chapter: ChapterId,
    event: EventId,
) -> Result<(), BoardError> {
    let Some(entry) = chapters.chapter_mut(chapter) else {
        return Err(BoardError::ChapterNotFound(chapter));
    };
    if !entry.events.contains(&event) {
        entry.events.push(event);
    }
    Ok(())
}

/// Remove an event UID from a chapter's `events` collection.
///
/// Removing a UID that is not in the collection is not an error; the
/// collection is simply left unchanged.
///
/// # Errors
///
/// Returns [`BoardError::ChapterNotFound`] if the chapter is not registered.
pub fn detach(
    chapters: &mut ChapterRegistry,
    chapter: ChapterId,
    event: EventId,
) -> Result<(), BoardError> {
    let Some(entry) = chapters.chapter_mut(chapter) else {
        return Err(BoardError::ChapterNotFound(chapter));
    };
    entry.events.retain(|uid| *uid != event);
    Ok(())
}

#[cfg(test)]
mod tests {
    use plotline_types::Chapter;

    use super::*;

    fn registry_with_chapter(id: u64) -> ChapterRegistry {
        let mut chapters = ChapterRegistry::new();
        let _ = chapters.add_chapter(Chapter::new(
            ChapterId::new(id),
            "Act One".to_owned(),
            "#204080".to_owned(),
        ));
        chapters
    }

    fn events_of(chapters: &ChapterRegistry, id: u64) -> Option<Vec<EventId>> {
        chapters.chapter(ChapterId::new(id)).map(|c| c.events.clone())
    }

    #[test]
    fn attach_appends_in_order() {
        let mut chapters = registry_with_chapter(1);
        assert!(attach(&mut chapters, ChapterId::new(1), EventId::new(10)).is_ok());
        assert!(attach(&mut chapters, ChapterId::new(1), EventId::new(20)).is_ok());
        assert_eq!(
            events_of(&chapters, 1),
            Some(vec![EventId::new(10), EventId::new(20)])
        );
    }

    #[test]
    fn attach_is_idempotent() {
        let mut chapters = registry_with_chapter(1);
        assert!(attach(&mut chapters, ChapterId::new(1), EventId::new(10)).is_ok());
        assert!(attach(&mut chapters, ChapterId::new(1), EventId::new(10)).is_ok());
        assert_eq!(events_of(&chapters, 1), Some(vec![EventId::new(10)]));
    }

    #[test]
    fn attach_to_unknown_chapter_fails() {
        let mut chapters = registry_with_chapter(1);
        let err = attach(&mut chapters, ChapterId::new(9), EventId::new(10));
        assert!(matches!(err, Err(BoardError::ChapterNotFound(id)) if id == ChapterId::new(9)));
    }

    #[test]
    fn detach_removes_the_uid() {
        let mut chapters = registry_with_chapter(1);
        let _ = attach(&mut chapters, ChapterId::new(1), EventId::new(10));
        let _ = attach(&mut chapters, ChapterId::new(1), EventId::new(20));

        assert!(detach(&mut chapters, ChapterId::new(1), EventId::new(10)).is_ok());
        assert_eq!(events_of(&chapters, 1), Some(vec![EventId::new(20)]));
    }

    #[test]
    fn detach_of_absent_uid_is_a_no_op() {
        let mut chapters = registry_with_chapter(1);
        let _ = attach(&mut chapters, ChapterId::new(1), EventId::new(10));

        assert!(detach(&mut chapters, ChapterId::new(1), EventId::new(99)).is_ok());
        assert_eq!(events_of(&chapters, 1), Some(vec![EventId::new(10)]));
    }

    #[test]
    fn detach_from_unknown_chapter_fails() {
        let mut chapters = registry_with_chapter(1);
        let err = detach(&mut chapters, ChapterId::new(9), EventId::new(10));
        assert!(matches!(err, Err(BoardError::ChapterNotFound(_))));
    }
}
