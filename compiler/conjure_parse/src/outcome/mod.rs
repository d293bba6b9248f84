//! Three-way parse outcome for ordered alternation.
//!
//! Every grammar rule returns a `ParseOutcome`, which makes the difference
//! between "this rule does not apply here" and "this rule applies but the
//! input is wrong" explicit:
//!
//! | Variant | Meaning | Caller reaction |
//! |---------|---------|-----------------|
//! | `Matched` | Rule succeeded | Use the value |
//! | `NoMatch` | Rule did not apply, nothing consumed | Try the next alternative |
//! | `Failed` | Rule committed, then hit malformed input | Abort the whole parse |
//!
//! A rule commits once it has seen something that proves intent, such as a
//! `list` keyword or a `ns.` prefix. After that, missing pieces are hard
//! errors rather than reasons to try a different rule.
//!
//! ## Usage
//!
//! ```ignore
//! fn parse_type(&mut self) -> ParseOutcome<TypeDescriptor> {
//!     one_of!(self.cursor,
//!         self.parse_map(),              // Try map first
//!         self.parse_local_reference(),  // Bare names last
//!     )
//! }
//! ```

use crate::{ErrorContext, Expected, SyntaxError};

/// Result of running one grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// The rule matched and produced a value.
    Matched { value: T },

    /// Soft failure: the rule does not apply at `position`.
    ///
    /// No input was consumed. `expected` lists what the rule would have
    /// accepted, for error messages if every alternative falls through.
    NoMatch { expected: Expected, position: usize },

    /// Hard failure after the rule committed.
    Failed { error: SyntaxError },
}

impl<T> ParseOutcome<T> {
    // === Constructors ===

    #[inline]
    pub fn matched(value: T) -> Self {
        Self::Matched { value }
    }

    #[inline]
    pub fn no_match(expected: Expected, position: usize) -> Self {
        Self::NoMatch { expected, position }
    }

    #[inline]
    pub fn failed(error: SyntaxError) -> Self {
        Self::Failed { error }
    }

    // === Predicates ===

    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Returns `true` for a soft failure, the condition for trying the next
    /// alternative.
    #[inline]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    // === Transformations ===

    /// Map the matched value, preserving the variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseOutcome<U> {
        match self {
            Self::Matched { value } => ParseOutcome::Matched { value: f(value) },
            Self::NoMatch { expected, position } => ParseOutcome::NoMatch { expected, position },
            Self::Failed { error } => ParseOutcome::Failed { error },
        }
    }

    /// Attach "while parsing {context}" to hard errors.
    ///
    /// Soft failures are left alone: they drive backtracking and never
    /// reach the caller as-is.
    #[must_use]
    pub fn with_error_context(self, context: ErrorContext) -> Self {
        match self {
            Self::Failed { error } => Self::Failed {
                error: error.with_context(context),
            },
            other => other,
        }
    }

    /// Convert to `Result`, turning a soft failure into an "expected ..."
    /// error against `input`.
    pub fn into_result(self, input: &str) -> Result<T, SyntaxError> {
        match self {
            Self::Matched { value } => Ok(value),
            Self::NoMatch { expected, position } => {
                Err(SyntaxError::unexpected(input, position, expected))
            }
            Self::Failed { error } => Err(error),
        }
    }
}

// === Backtracking Macros ===
//
// `one_of!` is the ordered choice: each alternative runs between a cursor
// mark and a release (on match) or rewind (otherwise). `require!` is used
// after a rule has committed, so a soft failure there becomes a hard one.
// `chain!` unwraps a match and propagates either failure unchanged.

/// Try alternatives in order, returning the first that does not fall
/// through.
///
/// If every alternative falls through, returns a `NoMatch` whose expected
/// set is the union of all of theirs.
macro_rules! one_of {
    ($cursor:expr, $($alternative:expr),+ $(,)?) => {{
        let mut expected = $crate::Expected::empty();
        let mut furthest: usize = $cursor.position();
        let mut chosen = None;
        $(
            if chosen.is_none() {
                $cursor.mark();
                match $alternative {
                    $crate::ParseOutcome::NoMatch { expected: wanted, position } => {
                        expected |= wanted;
                        furthest = furthest.max(position);
                        $cursor.rewind();
                    }
                    outcome @ $crate::ParseOutcome::Matched { .. } => {
                        $cursor.release();
                        chosen = Some(outcome);
                    }
                    outcome @ $crate::ParseOutcome::Failed { .. } => {
                        $cursor.rewind();
                        chosen = Some(outcome);
                    }
                }
            }
        )+
        chosen.unwrap_or($crate::ParseOutcome::NoMatch {
            expected,
            position: furthest,
        })
    }};
}

/// Unwrap a match from a rule that must succeed now that the caller has
/// committed; otherwise return a hard error from the enclosing function.
macro_rules! require {
    ($input:expr, $parser:expr, $context:expr) => {
        match $parser {
            $crate::ParseOutcome::Matched { value } => value,
            $crate::ParseOutcome::Failed { error } => {
                return $crate::ParseOutcome::Failed {
                    error: error.with_context($context),
                };
            }
            $crate::ParseOutcome::NoMatch { expected, position } => {
                return $crate::ParseOutcome::Failed {
                    error: $crate::SyntaxError::unexpected($input, position, expected)
                        .with_context($context),
                };
            }
        }
    };
}

/// Unwrap a match, propagating either kind of failure unchanged.
macro_rules! chain {
    ($parser:expr) => {
        match $parser {
            $crate::ParseOutcome::Matched { value } => value,
            $crate::ParseOutcome::Failed { error } => {
                return $crate::ParseOutcome::Failed { error };
            }
            $crate::ParseOutcome::NoMatch { expected, position } => {
                return $crate::ParseOutcome::NoMatch { expected, position };
            }
        }
    };
}

pub(crate) use chain;
pub(crate) use one_of;
pub(crate) use require;
