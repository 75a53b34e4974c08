//! Selection error types.
//!
//! These replace the undefined behaviour of the naive approach (indexing
//! straight into a filtered list) with explicit, handleable errors.

/// Errors that can occur when selecting a transport option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// No option on the segment meets the comfort threshold
    #[error("no transport options meet the comfort threshold")]
    NoOptionsAvailable,

    /// A 1-indexed pick fell outside the shortlist
    #[error("choice {choice} is out of range (1-{available})")]
    ChoiceOutOfRange { choice: usize, available: usize },

    /// Interactive selection ended before a pick was made
    #[error("selection interrupted")]
    Interrupted,
}
