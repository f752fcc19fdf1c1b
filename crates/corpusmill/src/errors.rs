//! # Error Types

/// Errors from corpusmill operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusmillError {
    /// Vocab size exceeds the capacity of the token id type.
    #[error("vocab size ({size}) exceeds token id capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A symbol outside the derived vocabulary was encountered.
    #[error("symbol {symbol:?} is not in the vocabulary")]
    UnknownSymbol {
        /// The unmapped symbol.
        symbol: char,
    },

    /// A token id outside the vocabulary was encountered.
    #[error("token id {id} is not in the vocabulary (size {size})")]
    UnknownToken {
        /// The unmapped token id.
        id: u16,
        /// The size of the active vocabulary.
        size: usize,
    },

    /// Token value out of range for the artifact id type.
    #[error("token {token} out of range for u16 artifact encoding")]
    TokenOutOfRange {
        /// The token that did not fit.
        token: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for corpusmill operations.
pub type CMResult<T> = core::result::Result<T, CorpusmillError>;
