//! Recursion guard for nested composite types.
//!
//! Depth is bounded twice: a counter enforces
//! [`ParserConfig::max_depth`](crate::ParserConfig) and reports
//! `NestingTooDeep`, while `stacker` grows the native stack so that a large
//! configured limit cannot overflow it.

use conjure_ir::Span;
use tracing::debug;

use crate::{ParseOutcome, Parser, SyntaxErrorKind};

/// If less than this much stack remains, grow before recursing.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

impl Parser<'_, '_> {
    /// Run `f` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current position instead of
    /// entering a level past the configured limit.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseOutcome<T>) -> ParseOutcome<T> {
        let limit = self.config.max_depth;
        if self.depth >= limit {
            let pos = self.cursor.position();
            debug!(pos, limit, "nesting limit reached");
            return ParseOutcome::failed(self.error(
                SyntaxErrorKind::NestingTooDeep { limit },
                Span::point(pos),
            ));
        }

        self.depth += 1;
        let outcome = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        outcome
    }
}
