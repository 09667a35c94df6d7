//! Lookup result caching

pub mod lookup_cache;

pub use lookup_cache::{CacheStats, LookupCache};
