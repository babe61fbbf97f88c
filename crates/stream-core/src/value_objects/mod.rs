//! Value objects - immutable types identified by their value

mod id;

pub use id::Id;
