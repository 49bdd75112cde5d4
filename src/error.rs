use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `0` has no sign, so it cannot be a literal.
    #[error("literal 0 in clause {clause} at position {position}")]
    ZeroLiteral { clause: usize, position: usize },

    #[error("literal {0} is out of range")]
    LiteralOutOfRange(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
