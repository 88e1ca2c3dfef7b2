use thiserror::Error;

/// Errors produced while loading a MaxSAT problem description.
///
/// All variants are fatal: a malformed input never yields a partial problem.
#[derive(Debug, Error)]
pub enum Error {
    /// The problem file could not be read.
    #[error("failed to read problem: {0}")]
    Io(#[from] std::io::Error),

    /// The input was empty or its first line held no tokens.
    #[error("missing variable-count header")]
    MissingHeader,

    /// The leading token could not be parsed as a nonnegative integer.
    #[error("invalid variable count {token:?}")]
    InvalidVariableCount { token: String },

    /// A clause line contained a token that is not an integer.
    #[error("line {line}: invalid literal token {token:?}")]
    InvalidLiteral { line: usize, token: String },

    /// A literal referenced a variable outside `1..=num_vars`.
    #[error("line {line}: literal {literal} out of range for {num_vars} variables")]
    LiteralOutOfRange {
        line: usize,
        literal: i32,
        num_vars: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
