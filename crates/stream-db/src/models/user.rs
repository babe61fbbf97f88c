//! User, theme and icon database models

use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
}

/// Database model for themes table
#[derive(Debug, Clone, FromRow)]
pub struct ThemeModel {
    pub id: i64,
    pub user_id: i64,
    pub dark_mode: bool,
}

/// Hash column of the icons table; the image itself is never selected here
#[derive(Debug, Clone, FromRow)]
pub struct IconHashModel {
    pub user_id: i64,
    pub hash: String,
}
