//! Entity to DTO mappers
//!
//! Only leaf entities convert directly; composites are assembled by the
//! services, which own the batched lookups for their references.

use stream_core::entities::{Tag, Theme, User};

use super::responses::{TagResponse, ThemeResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Theme> for ThemeResponse {
    fn from(theme: &Theme) -> Self {
        Self {
            id: theme.id,
            dark_mode: theme.dark_mode,
        }
    }
}

impl UserResponse {
    /// Combine a user row with its resolved theme and icon hash
    pub fn assemble(user: &User, theme: &Theme, icon_hash: &str) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            description: user.description.clone(),
            theme: ThemeResponse::from(theme),
            icon_hash: icon_hash.to_string(),
        }
    }
}

// ============================================================================
// Tag Mappers
// ============================================================================

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}
