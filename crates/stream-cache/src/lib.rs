//! # stream-cache
//!
//! Process-local caches for hot entities (users, icon hashes, livestreams).
//!
//! ## Features
//!
//! - **Batch lookups**: `get_many` serves hits from memory and sends only the
//!   misses to a caller-supplied loader in one call
//! - **Policies**: time-to-live expiry or invalidate-on-write, fixed per cache
//! - **Invalidation**: single key, wholesale replacement, or purge-all
//!
//! ## Example
//!
//! ```ignore
//! use stream_cache::{CacheSettings, EntityCaches};
//!
//! let caches = EntityCaches::new(&CacheSettings::default());
//! let users = caches
//!     .users
//!     .get_many(&ids, |misses| async move { repo.find_by_ids(&misses).await })
//!     .await?;
//! ```

pub mod entity_cache;
pub mod settings;

pub use entity_cache::{CachePolicy, EntityCache};
pub use settings::{CacheSettings, EntityCaches};
