//! Syntax errors.
//!
//! A `SyntaxError` is the only failure callers see. It carries the whole
//! input and the span where matching stopped, which is enough to point at
//! the offending column of a field type inside a larger document.
//!
//! Each [`SyntaxErrorKind`] maps to a stable [`ErrorCode`] for
//! searchability.

mod context;


use std::fmt;

use conjure_ir::{IdentifierError, Span};
use thiserror::Error;

use crate::Expected;

pub use context::ErrorContext;

/// Stable identifiers for syntax errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected character
    E1001,
    /// Unclosed `<`
    E1002,
    /// Missing type name after `namespace.`
    E1003,
    /// Trailing input after a complete type
    E1004,
    /// Empty type expression
    E1005,
    /// Nesting depth limit exceeded
    E1006,
    /// Identifier failed validation
    E1007,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was actually at the error position.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Found {
    Char(char),
    EndOfInput,
}

impl Found {
    /// What sits at byte offset `pos` of `source`.
    pub fn at(source: &str, pos: usize) -> Self {
        source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(Found::EndOfInput, Found::Char)
    }

    /// Byte length of the found item (zero at end of input).
    pub fn len_utf8(self) -> usize {
        match self {
            Found::Char(ch) => ch.len_utf8(),
            Found::EndOfInput => 0,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(ch) if ch.is_whitespace() => write!(f, "whitespace {ch:?}"),
            Found::Char(ch) => write!(f, "`{ch}`"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The specific way a type expression was malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, found {found}")]
    Unexpected { expected: Expected, found: Found },

    #[error("unclosed `<`: expected `>`, found {found}")]
    UnclosedDelimiter { found: Found },

    #[error("expected a type name after `{namespace}.`, found {found}")]
    ExpectedIdentifier { namespace: String, found: Found },

    #[error("unexpected trailing input `{trailing}` after a complete type")]
    TrailingInput { trailing: String },

    #[error("empty type expression")]
    EmptyInput,

    #[error("type nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
}

impl SyntaxErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxErrorKind::Unexpected { .. } => ErrorCode::E1001,
            SyntaxErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1002,
            SyntaxErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1003,
            SyntaxErrorKind::TrailingInput { .. } => ErrorCode::E1004,
            SyntaxErrorKind::EmptyInput => ErrorCode::E1005,
            SyntaxErrorKind::NestingTooDeep { .. } => ErrorCode::E1006,
            SyntaxErrorKind::InvalidIdentifier(_) => ErrorCode::E1007,
        }
    }
}

/// A type expression that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// The complete input that was being parsed.
    pub input: String,
    /// Where matching stopped.
    pub span: Span,
    /// Innermost construct being parsed, if any.
    pub context: Option<ErrorContext>,
}

impl SyntaxError {
    #[cold]
    pub fn new(kind: SyntaxErrorKind, input: &str, span: Span) -> Self {
        SyntaxError {
            kind,
            input: input.to_owned(),
            span,
            context: None,
        }
    }

    /// `expected` was wanted at `pos`; report whatever is there instead.
    #[cold]
    pub fn unexpected(input: &str, pos: usize, expected: Expected) -> Self {
        let found = Found::at(input, pos);
        let span = Span::new(pos, pos + found.len_utf8());
        SyntaxError::new(SyntaxErrorKind::Unexpected { expected, found }, input, span)
    }

    /// Attach a context unless one is already present.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Byte offset where matching stopped.
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// 1-based line of the error position.
    pub fn line(&self) -> usize {
        self.prefix().matches('\n').count() + 1
    }

    /// 1-based column of the error position, counted in characters.
    pub fn column(&self) -> usize {
        let prefix = self.prefix();
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        prefix[line_start..].chars().count() + 1
    }

    /// Message without location, including the context if present.
    pub fn message(&self) -> String {
        match self.context {
            Some(context) => format!("{} while parsing {}", self.kind, context.description()),
            None => self.kind.to_string(),
        }
    }

    /// Plain-text diagnostic with the offending line and a caret marker.
    ///
    /// ```text
    /// error[E1001]: expected `,`, found `>` while parsing a map type
    ///   |
    /// 1 | map<string>
    ///   |           ^
    /// ```
    pub fn render(&self) -> String {
        let line_no = self.line().to_string();
        let gutter = " ".repeat(line_no.len());
        let prefix = self.prefix();
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.input[line_start..]
            .find('\n')
            .map_or(self.input.len(), |i| line_start + i);
        let line_text = &self.input[line_start..line_end];

        let marker_start = self.span.start.min(line_end);
        let marker_end = self.span.end.max(marker_start).min(line_end);
        let marker_width = self
            .input
            .get(marker_start..marker_end)
            .map_or(0, |s| s.chars().count())
            .max(1);
        let padding = " ".repeat(self.column() - 1);

        format!(
            "error[{code}]: {message}\n{gutter} |\n{line_no} | {line_text}\n{gutter} | {padding}{carets}\n",
            code = self.code(),
            message = self.message(),
            carets = "^".repeat(marker_width),
        )
    }

    fn prefix(&self) -> &str {
        let end = self.span.start.min(self.input.len());
        self.input.get(..end).unwrap_or("")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in type expression `{}` at column {}",
            self.message(),
            self.input,
            self.column()
        )
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SyntaxErrorKind::InvalidIdentifier(inner) => Some(inner),
            _ => None,
        }
    }
}
