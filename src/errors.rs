use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MinHashError {
    /// k is missing, non-integral, zero or negative, or too large to index.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Empty sequence, or a sequence shorter than k.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// `position` is 1-based, relative to the string handed to the failing call.
    #[error("the provided DNA sample contains unwanted character: '{character}' at position {position}")]
    InvalidAlphabet { character: char, position: usize },
}

impl MinHashError {
    pub fn invalid_ksize<K: std::fmt::Display>(k: K) -> MinHashError {
        MinHashError::InvalidParameter {
            message: format!("the value of k ({}) should be a positive integer", k),
        }
    }
}
