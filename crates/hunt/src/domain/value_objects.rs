//! Domain Value Objects
//!
//! Immutable value types for the hunt domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of treasure-hunt routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RouteName {
    Middelfart,
    Aarhus,
}

impl RouteName {
    pub const ALL: [RouteName; 2] = [RouteName::Middelfart, RouteName::Aarhus];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Middelfart => "Middelfart",
            RouteName::Aarhus => "Aarhus",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Error for a route name outside the fixed set
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

/// One user submission: the ordered raw entries for a route's posts
///
/// Ephemeral. Consumed by the validator, never stored.
#[derive(Debug, Clone)]
pub struct Submission {
    entries: Vec<String>,
}

impl Submission {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All fields filled in
    ///
    /// A whitespace-only entry counts as filled: it goes on to the
    /// integer parse and fails there, like any other non-numeric input.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| !entry.is_empty())
    }

    /// Parse every entry as an integer, `None` if any entry fails
    pub fn parse_numbers(&self) -> Option<Vec<i64>> {
        self.entries
            .iter()
            .map(|entry| entry.trim().parse::<i64>().ok())
            .collect()
    }
}

/// The per-session puzzle flags driving which view the client shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PuzzleState {
    pub solved: bool,
    pub show_error: bool,
}

impl PuzzleState {
    pub const fn new() -> Self {
        Self {
            solved: false,
            show_error: false,
        }
    }
}
