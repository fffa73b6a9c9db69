//! Crate error type.
//!
//! Only configuration problems are errors. Phase guards in the round
//! engine (eliminating outside a vote, unknown ids) are silent no-ops and
//! never surface here.

use crate::words::Difficulty;

/// Errors raised while loading a word bank or dealing a game.
#[derive(Debug, thiserror::Error)]
pub enum UndercoverError {
    /// No category in the bank offers the requested difficulty.
    #[error("word bank has no category with difficulty {difficulty}")]
    EmptyBank { difficulty: Difficulty },

    /// Host-supplied bank JSON does not parse.
    #[error("malformed word bank: {0}")]
    MalformedBank(#[from] serde_json::Error),

    /// Host-supplied bank breaks a structural precondition.
    #[error("invalid word bank: {0}")]
    InvalidBank(String),
}

pub type Result<T> = std::result::Result<T, UndercoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UndercoverError::EmptyBank {
            difficulty: Difficulty::Hard,
        };
        assert_eq!(err.to_string(), "word bank has no category with difficulty hard");

        let err = UndercoverError::InvalidBank("category `x` is empty".into());
        assert_eq!(err.to_string(), "invalid word bank: category `x` is empty");
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: UndercoverError = parse_err.into();
        assert!(matches!(err, UndercoverError::MalformedBank(_)));
    }
}
