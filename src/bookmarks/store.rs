use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::model::Bookmark;

/// In-memory, insertion-ordered bookmark collection.
///
/// One store is created per running service (or per test) and shared through
/// `AppState`; its contents are gone when it is dropped.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Bookmark>>, StoreError> {
        self.bookmarks
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Bookmark>>, StoreError> {
        self.bookmarks
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    pub fn list(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.read()?.clone())
    }

    pub fn insert(&self, bookmark: Bookmark) -> Result<(), StoreError> {
        self.write()?.push(bookmark);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        Ok(self.read()?.iter().find(|b| b.id == id).cloned())
    }

    /// Removes the first bookmark with `id`, keeping the order of the rest.
    pub fn remove(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let mut bookmarks = self.write()?;
        let removed = bookmarks
            .iter()
            .position(|b| b.id == id)
            .map(|index| bookmarks.remove(index));
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }
}
