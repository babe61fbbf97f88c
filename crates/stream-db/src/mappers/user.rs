//! User and theme entity <-> model mappers

use stream_core::entities::{Theme, User};
use stream_core::value_objects::Id;

use crate::models::{ThemeModel, UserModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            name: model.name,
            display_name: model.display_name,
            description: model.description,
        }
    }
}

/// Convert ThemeModel to Theme entity
impl From<ThemeModel> for Theme {
    fn from(model: ThemeModel) -> Self {
        Theme {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            dark_mode: model.dark_mode,
        }
    }
}
