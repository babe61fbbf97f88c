//! Batch helpers shared by every "fetch many by id" implementation
//!
//! A batched lookup takes a collection of parent ids, runs one
//! `WHERE id = ANY($1)` style query over the de-duplicated set and hands the
//! rows back keyed by id. These helpers hold the parts of that contract that
//! do not depend on the store:
//!
//! - [`unique_ids`]: de-duplicate while keeping first-seen order
//! - [`index_by`]: one row per key (one-to-one relations)
//! - [`group_by`]: every requested parent gets an entry, possibly empty
//!   (one-to-many relations)
//! - [`require_present`]: turn an absent key into a `MissingReference`

use std::collections::{HashMap, HashSet};

use crate::error::DomainError;
use crate::value_objects::Id;

/// De-duplicate ids, preserving the order in which they first appear
pub fn unique_ids<I>(ids: I) -> Vec<Id>
where
    I: IntoIterator<Item = Id>,
{
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Raw i64 values for binding into a query
pub fn raw_ids(ids: &[Id]) -> Vec<i64> {
    ids.iter().map(|id| id.into_inner()).collect()
}

/// Key rows by id; for a duplicated key the last row wins
pub fn index_by<T, F>(rows: impl IntoIterator<Item = T>, key: F) -> HashMap<Id, T>
where
    F: Fn(&T) -> Id,
{
    rows.into_iter().map(|row| (key(&row), row)).collect()
}

/// Group child rows under their parent id
///
/// Every id in `parent_ids` has an entry, so callers can index the result
/// without distinguishing "no children" from "key absent". Rows whose key is
/// not a requested parent are dropped.
pub fn group_by<T, F>(
    parent_ids: &[Id],
    rows: impl IntoIterator<Item = T>,
    key: F,
) -> HashMap<Id, Vec<T>>
where
    F: Fn(&T) -> Id,
{
    let mut grouped: HashMap<Id, Vec<T>> =
        parent_ids.iter().map(|&id| (id, Vec::new())).collect();
    for row in rows {
        if let Some(children) = grouped.get_mut(&key(&row)) {
            children.push(row);
        }
    }
    grouped
}

/// Look up a required reference, failing with `MissingReference`
pub fn require_present<'a, T>(
    map: &'a HashMap<Id, T>,
    entity: &'static str,
    id: Id,
) -> Result<&'a T, DomainError> {
    map.get(&id).ok_or_else(|| DomainError::missing(entity, id))
}
