//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod check_puzzle;
pub mod config;
pub mod fetch_sheet;
pub mod session_token;
pub mod submit_numbers;
