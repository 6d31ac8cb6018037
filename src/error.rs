//! Recoverable error conditions reported by the transformation commands.
//!
//! These surface as user-visible notifications in the host; none of them
//! leaves the buffer partially mutated.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The split delimiter does not occur in the targeted text
    #[error("delimiter not found")]
    DelimiterMissing,

    /// Join requires a selection spanning at least two lines
    #[error("nothing to join: select multiple lines first")]
    NothingToJoin,
}
