//! External lookup clients
//!
//! HTTP clients for the conservation-assessment and encyclopedia
//! collaborators. Both expose total lookup methods: every failure mode maps
//! to a display-ready fallback string, never an error.

pub mod endpoints;
pub mod redlist;
pub mod types;
pub mod wiki;
