//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Route, HuntSession)
//! - Domain value objects (RouteName, Submission, PuzzleState)
//! - Domain services (sequence validation state machine)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
