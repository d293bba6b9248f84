//! Recursive descent parser for Conjure type expressions.
//!
//! Turns text such as `map<string, list<optional<com.Foo>>>` into a
//! [`TypeDescriptor`] tree, or a [`SyntaxError`] pointing at the offending
//! column.
//!
//! ```text
//! let ty = conjure_parse::parse("list<ns.Foo>")?;
//! assert_eq!(ty.to_string(), "list<ns.Foo>");
//! ```
//!
//! Embedding callers that parse a type out of a larger line use
//! [`parse_at`], which stops right after the expression and leaves the
//! cursor there.

mod config;
mod cursor;
mod error;
mod expected;
mod grammar;
mod observer;
mod outcome;
mod stack;

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};
pub use cursor::Cursor;
pub use error::{ErrorCode, ErrorContext, Found, SyntaxError, SyntaxErrorKind};
pub use expected::Expected;
pub use observer::{NoopObserver, TypeCounter, TypeObserver};
pub use outcome::ParseOutcome;

pub use conjure_ir::{
    DescriptorKind, IdentifierError, Namespace, PrimitiveKind, Reference, Span, TypeDescriptor,
    TypeName,
};

pub(crate) use outcome::{chain, one_of, require};

use std::fmt;

use tracing::debug;

/// Per-call parser state.
///
/// Lives for a single [`TypeParser::parse_at`] call; grammar rules are
/// methods on it.
pub(crate) struct Parser<'a, 'src> {
    cursor: &'a mut Cursor<'src>,
    config: &'a ParserConfig,
    observer: &'a dyn TypeObserver,
    /// Composite types currently open.
    depth: usize,
}

impl<'a, 'src> Parser<'a, 'src> {
    fn new(
        cursor: &'a mut Cursor<'src>,
        config: &'a ParserConfig,
        observer: &'a dyn TypeObserver,
    ) -> Self {
        Parser {
            cursor,
            config,
            observer,
            depth: 0,
        }
    }

    /// Report `ty` to the observer and wrap it as a match.
    fn matched(&self, ty: TypeDescriptor) -> ParseOutcome<TypeDescriptor> {
        self.observer.type_parsed(ty.kind());
        ParseOutcome::matched(ty)
    }

    #[cold]
    fn unexpected_at(&self, pos: usize, expected: Expected) -> SyntaxError {
        SyntaxError::unexpected(self.cursor.source(), pos, expected)
    }

    #[cold]
    fn error(&self, kind: SyntaxErrorKind, span: Span) -> SyntaxError {
        SyntaxError::new(kind, self.cursor.source(), span)
    }
}

/// Configured entry point.
///
/// Holds no per-call state, so one instance can serve any number of threads.
///
/// ```text
/// let counter = TypeCounter::new();
/// let parser = TypeParser::new()
///     .with_config(ParserConfig::default().with_max_depth(32))
///     .with_observer(&counter);
/// parser.parse("set<binary>")?;
/// assert_eq!(counter.get(DescriptorKind::Set), 1);
/// ```
#[derive(Copy, Clone)]
pub struct TypeParser<'obs> {
    config: ParserConfig,
    observer: &'obs dyn TypeObserver,
}

impl TypeParser<'static> {
    /// Default configuration, no observer.
    pub fn new() -> Self {
        TypeParser {
            config: ParserConfig::default(),
            observer: &observer::NOOP,
        }
    }
}

impl Default for TypeParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'obs> TypeParser<'obs> {
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Report every parsed node to `observer`.
    pub fn with_observer<'o>(self, observer: &'o dyn TypeObserver) -> TypeParser<'o> {
        TypeParser {
            config: self.config,
            observer,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `input`, which must hold exactly one type expression.
    ///
    /// Empty input and text left over after the expression are errors.
    /// Surrounding whitespace is only tolerated with [`ParserConfig::trim`].
    pub fn parse(&self, input: &str) -> Result<TypeDescriptor, SyntaxError> {
        let mut cursor = Cursor::new(input);
        if self.config.trim {
            cursor.skip_whitespace();
        }
        if cursor.is_at_end() {
            let pos = cursor.position();
            return Err(SyntaxError::new(
                SyntaxErrorKind::EmptyInput,
                input,
                Span::point(pos),
            ));
        }

        let ty = self.parse_at(&mut cursor)?;

        if self.config.trim {
            cursor.skip_whitespace();
        }
        if !cursor.is_at_end() {
            let pos = cursor.position();
            debug!(pos, "trailing input");
            return Err(SyntaxError::new(
                SyntaxErrorKind::TrailingInput {
                    trailing: cursor.rest().to_owned(),
                },
                input,
                Span::new(pos, input.len()),
            ));
        }
        Ok(ty)
    }

    /// Parse one type expression starting at the cursor.
    ///
    /// On success the cursor sits right after the expression and anything
    /// that follows is left untouched. On failure the cursor is back where
    /// it started.
    pub fn parse_at(&self, cursor: &mut Cursor<'_>) -> Result<TypeDescriptor, SyntaxError> {
        let start = cursor.position();
        cursor.mark();
        let outcome = Parser::new(cursor, &self.config, self.observer).parse_type();

        match outcome.into_result(cursor.source()) {
            Ok(ty) => {
                cursor.release();
                debug!(start, end = cursor.position(), kind = %ty.kind(), "parsed type");
                Ok(ty)
            }
            Err(error) => {
                cursor.rewind();
                debug!(start, code = %error.code(), offset = error.offset(), "type parse failed");
                Err(error)
            }
        }
    }
}

impl fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parse a complete type expression with the default configuration.
pub fn parse(input: &str) -> Result<TypeDescriptor, SyntaxError> {
    TypeParser::new().parse(input)
}

/// Parse one type expression at the cursor with the default configuration.
pub fn parse_at(cursor: &mut Cursor<'_>) -> Result<TypeDescriptor, SyntaxError> {
    TypeParser::new().parse_at(cursor)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
