//! Markup parse error types.

use std::fmt;

/// Result type for markup parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// A syntax error in a document, with the position where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset into the source.
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column in characters (1-based).
    pub column: usize,
    pub message: String,
}

impl ParseError {
    /// Creates an error at `offset`; line and column are filled in by [`ParseError::locate`].
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            line: 0,
            column: 0,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn xml(offset: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Xml, offset, message)
    }

    #[must_use]
    pub fn unknown_flag(offset: usize, name: &str) -> Self {
        Self::new(ParseErrorKind::UnknownFlag, offset, format!("'{name}'"))
    }

    #[must_use]
    pub fn invalid_condition(offset: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidCondition, offset, message)
    }

    #[must_use]
    pub fn missing_attribute(offset: usize, element: &str, name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingAttribute,
            offset,
            format!("<{element}> requires a {name} attribute"),
        )
    }

    #[must_use]
    pub fn invalid_attribute(offset: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidAttribute, offset, message)
    }

    /// Moves the error to another offset, keeping kind and message.
    #[must_use]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Fills in line and column from the offset.
    #[must_use]
    pub fn locate(mut self, source: &str) -> Self {
        let offset = self.offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        self.line = before.matches('\n').count() + 1;
        self.column = before
            .rsplit('\n')
            .next()
            .map_or(0, |line| line.chars().count())
            + 1;
        self
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed XML.
    Xml,
    /// A `<cond>` without its `</cond>`.
    UnterminatedConditional,
    /// Any other element left open at end of input.
    UnterminatedElement,
    /// A closing tag that does not match the open element.
    MismatchedTag,
    /// A condition names a flag outside the vocabulary.
    UnknownFlag,
    /// Malformed condition expression.
    InvalidCondition,
    MissingAttribute,
    InvalidAttribute,
    /// `<else/>` outside a conditional.
    MisplacedElse,
    /// Second `<else/>` in one conditional.
    DuplicateElse,
    /// `<get>` of a fragment not defined earlier.
    UndefinedFragment,
    /// `<def>` of a name already defined.
    DuplicateFragment,
    /// Content inside an element that must be empty.
    UnexpectedElement,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "XML error"),
            Self::UnterminatedConditional => write!(f, "unterminated conditional"),
            Self::UnterminatedElement => write!(f, "unterminated element"),
            Self::MismatchedTag => write!(f, "mismatched tag"),
            Self::UnknownFlag => write!(f, "unknown flag"),
            Self::InvalidCondition => write!(f, "invalid condition"),
            Self::MissingAttribute => write!(f, "missing attribute"),
            Self::InvalidAttribute => write!(f, "invalid attribute"),
            Self::MisplacedElse => write!(f, "misplaced else"),
            Self::DuplicateElse => write!(f, "duplicate else"),
            Self::UndefinedFragment => write!(f, "undefined fragment"),
            Self::DuplicateFragment => write!(f, "duplicate fragment"),
            Self::UnexpectedElement => write!(f, "unexpected element"),
        }
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::xml(0, err.to_string())
    }
}
