//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects
//! defined in stream-core.

mod livecomment;
mod livestream;
mod statistics;
mod user;
