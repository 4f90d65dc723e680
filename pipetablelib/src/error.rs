//! Error types for pipetablelib

use thiserror::Error;

/// Errors that can occur while configuring or filling a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipeTableError {
    /// Border characters must come as exactly four
    #[error("border characters should have a length of 4, but got {actual}")]
    BorderCount { actual: usize },

    /// A header, alignment or row disagrees with the established column count
    #[error("row size should be {expected}, but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Unknown alignment token
    #[error("invalid alignment '{0}': expected one of l, r, c")]
    InvalidAlignment(String),

    /// Bulk add called without any rows
    #[error("no rows to add")]
    EmptyRows,
}
