//! Error handling for timeline operations.

use thiserror::Error;

/// A specialized `Result` type for timeline operations.
pub type Result<T> = std::result::Result<T, ScrublineError>;

/// Errors that can occur while working with a timeline store.
///
/// Lookups never produce an error; "not found" is reported through the
/// invalid sentinel segment instead. The only fallible operation is an
/// append whose elapsed time cannot extend the timeline.
#[derive(Error, Debug)]
pub enum ScrublineError {
    /// An argument violated an operation's precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
