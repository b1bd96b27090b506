//! Presentation Layer - HTTP boundary
//!
//! DTOs, axum handlers and the router. This is the whole presenter
//! surface: a JSON API the page renders from.

pub mod dto;
pub mod handlers;
pub mod router;
