pub mod cache_aside;
pub mod cache_key;

pub use cache_aside::{CacheAside, CachePolicy};
