//! User and theme entities

use crate::value_objects::Id;

/// User row as stored
///
/// The theme and icon hash live in their own tables and are joined on by the
/// response assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub display_name: String,
    pub description: String,
}

impl User {
    /// Create a new User
    pub fn new(
        id: Id,
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            display_name: display_name.into(),
            description: description.into(),
        }
    }
}

/// Per-user theme, 1:1 with [`User`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: Id,
    pub user_id: Id,
    pub dark_mode: bool,
}

impl Theme {
    pub fn new(id: Id, user_id: Id, dark_mode: bool) -> Self {
        Self {
            id,
            user_id,
            dark_mode,
        }
    }
}
