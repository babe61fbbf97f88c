//! Tags and the process-wide tag lookup table

use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::Id;

/// Tag entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: Id,
    pub name: String,
}

impl Tag {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Immutable id → tag lookup, loaded once at start-up
///
/// The tag set is small and never changes while the process runs, so the
/// table is shared behind an `Arc` and read without locking.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    by_id: HashMap<Id, Tag>,
    by_name: HashMap<String, Id>,
}

impl TagTable {
    /// Build the table from every stored tag
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        for tag in tags {
            by_name.insert(tag.name.clone(), tag.id);
            by_id.insert(tag.id, tag);
        }
        Self { by_id, by_name }
    }

    pub fn get(&self, id: Id) -> Option<&Tag> {
        self.by_id.get(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Tag> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// Resolve tag ids in order
    ///
    /// An id absent from the table means the stored row is inconsistent.
    pub fn resolve(&self, ids: &[Id]) -> Result<Vec<Tag>, DomainError> {
        ids.iter()
            .map(|&id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| DomainError::missing("tag", id))
            })
            .collect()
    }

    /// All tags ordered by id
    pub fn all(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.by_id.values().collect();
        tags.sort_by_key(|tag| tag.id);
        tags
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
