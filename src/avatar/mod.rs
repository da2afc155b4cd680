//! Avatar Module
//!
//! Avatar lookups and the cache-population step used by the avatar route.

mod populate;
mod source;

pub use populate::{conditionally_populate, populate_all};
pub use source::{AvatarSource, HttpAvatarSource};
