//! Chapter registry: the collaborator owning all chapters.
//!
//! The event board does not own chapters; it only cross-references them.
//! [`ChapterRegistry`] is the surface the board consumes: keyed lookup plus
//! the mutable [`Chapter`] `events` collection the board appends to and
//! removes from through its cross-reference adapter.

use std::collections::BTreeMap;

use plotline_types::{Chapter, ChapterId};

/// Errors that can occur during chapter registry operations.
#[derive(Debug, thiserror::Error)]
pub enum ChapterError {
    /// A chapter was inserted under an ID that is already registered.
    #[error("duplicate chapter id: {0}")]
    DuplicateChapter(ChapterId),
}

/// Registry of all chapters, keyed by their identifier.
///
/// The registry makes no assumptions about who issues chapter IDs; it only
/// rejects duplicates. Everything beyond lookup and the `events` collection
/// is the owning application's business.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChapterRegistry {
    /// All chapters indexed by their identifier.
    chapters: BTreeMap<ChapterId, Chapter>,
}

impl ChapterRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            chapters: BTreeMap::new(),
        }
    }

    /// Add a chapter to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ChapterError::DuplicateChapter`] if a chapter with the same
    /// ID already exists.
    pub fn add_chapter(&mut self, chapter: Chapter) -> Result<(), ChapterError> {
        let id = chapter.id;
        if self.chapters.contains_key(&id) {
            return Err(ChapterError::DuplicateChapter(id));
        }
        self.chapters.insert(id, chapter);
        Ok(())
    }

    /// Get an immutable reference to a chapter.
    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.get(&id)
    }

    /// Get a mutable reference to a chapter.
    pub fn chapter_mut(&mut self, id: ChapterId) -> Option<&mut Chapter> {
        self.chapters.get_mut(&id)
    }

    /// Check whether a chapter is registered.
    pub fn contains(&self, id: ChapterId) -> bool {
        self.chapters.contains_key(&id)
    }

    /// Remove a chapter from the registry, returning it if it was present.
    ///
    /// Events referencing the removed chapter keep their reference; the
    /// board tolerates the dangling link on removal and repairs it on the
    /// next edit.
    pub fn remove_chapter(&mut self, id: ChapterId) -> Option<Chapter> {
        self.chapters.remove(&id)
    }

    /// Return the number of registered chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Check whether the registry holds no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Iterate over all chapters immutably.
    pub fn chapters(&self) -> impl Iterator<Item = (&ChapterId, &Chapter)> {
        self.chapters.iter()
    }
}

impl Default for ChapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
