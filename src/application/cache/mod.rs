//! In-process caches.

mod response;

pub use response::{CacheEntry, ResponseCache};
