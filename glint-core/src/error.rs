//! Error types for glint-core

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    /// A matcher reported a match that does not fit inside the text
    #[error("invalid match offset {offset}: keyword of {keyword_len} chars overruns text of {text_len} chars")]
    InvalidMatchOffset {
        offset: usize,
        keyword_len: usize,
        text_len: usize,
    },

    #[error("failed to serialize highlights: {0}")]
    Serialize(#[from] serde_json::Error),
}
