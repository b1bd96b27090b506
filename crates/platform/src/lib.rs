//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, constant-time compare)
//! - Cookie management

pub mod cookie;
pub mod crypto;
