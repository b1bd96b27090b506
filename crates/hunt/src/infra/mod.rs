//! Infrastructure Layer
//!
//! In-memory session storage and the HTTP client for the map host.

pub mod map_host;
pub mod memory;
