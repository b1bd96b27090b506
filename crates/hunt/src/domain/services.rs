//! Domain Services
//!
//! Pure validation logic: the whole puzzle state machine lives here.

use crate::domain::entities::Route;
use crate::domain::value_objects::{PuzzleState, Submission};

/// Result of checking one submission against a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one field is still empty; nothing to check yet
    Incomplete,
    /// Complete but wrong: non-numeric entries or any position differing
    Mismatch,
    /// Every entry matches the expected sequence, in order
    Solved,
}

/// Check a submission against the route's expected sequence
///
/// The caller guarantees the lengths match; non-numeric input is a
/// plain mismatch, never a failure.
pub fn evaluate(route: &Route, submission: &Submission) -> Outcome {
    debug_assert_eq!(submission.len(), route.field_count());

    if !submission.is_complete() {
        return Outcome::Incomplete;
    }

    match submission.parse_numbers() {
        Some(numbers) if numbers == route.expected_sequence => Outcome::Solved,
        _ => Outcome::Mismatch,
    }
}

/// Apply an outcome to the session's puzzle state
///
/// `solved` is monotonic: a solved state is terminal and absorbs every
/// outcome. A mismatch raises the error banner; an incomplete
/// resubmission lowers it again.
pub fn apply(state: PuzzleState, outcome: Outcome) -> PuzzleState {
    if state.solved {
        return state;
    }
    match outcome {
        Outcome::Solved => PuzzleState {
            solved: true,
            show_error: false,
        },
        Outcome::Mismatch => PuzzleState {
            solved: false,
            show_error: true,
        },
        Outcome::Incomplete => PuzzleState {
            solved: false,
            show_error: false,
        },
    }
}
