use thiserror::Error;

use crate::escape::EscapeError;

/// A parse failure, located at a 1-based line and column.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParseError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// 1-based line of the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the failure within its line.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Everything the grammar can reject.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input ended inside a value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A byte that cannot start a JSON value.
    #[error("unexpected character '{0}'")]
    SyntaxError(char),
    /// A literal that started like `null`, `true` or `false` but is not.
    #[error("malformed literal token")]
    BadToken,
    /// An object member that does not start with a quoted key.
    #[error("expected a string key")]
    MissingKey,
    /// A string with no closing quote.
    #[error("unterminated string")]
    MissingQuotes,
    /// Adjacent values with no separating comma.
    #[error("expected ',' between values")]
    MissingComma,
    /// A key with no following colon.
    #[error("expected ':' after object key")]
    MissingColon,
    /// A number with a digit-free integer, fraction or exponent part.
    #[error("expected digits in number")]
    MissingDigits,
    /// Bytes left over after a complete top-level value.
    #[error("trailing content after the top-level value")]
    JunkAfterInput,
    /// An object key whose escapes are semantically invalid.
    #[error(transparent)]
    Escape(#[from] EscapeError),
}
