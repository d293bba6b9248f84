//! Character cursor over a type expression.
//!
//! The cursor owns nothing: it borrows the source text and tracks a byte
//! offset plus a stack of saved offsets for backtracking.
//!
//! # Backtracking
//!
//! Any rule that can fail after consuming input brackets its attempt:
//!
//! ```text
//! cursor.mark();
//! match try_rule(cursor) {
//!     Some(v) => { cursor.release(); Some(v) }   // commit
//!     None => { cursor.rewind(); None }          // restore
//! }
//! ```
//!
//! [`Cursor::attempt`] packages that pattern. The `one_of!` macro uses the
//! same primitives between alternatives.

use conjure_ir::is_type_name_char;
use tracing::trace;



/// Cursor over the characters of one type expression.
///
/// Offsets are byte indices and always sit on a `char` boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    /// Saved offsets, innermost last.
    marks: Vec<usize>,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            pos: 0,
            marks: Vec::new(),
        }
    }

    /// Create a cursor at byte offset `pos` of `source`.
    ///
    /// Used by callers embedding a type expression inside larger syntax.
    /// Returns `None` if `pos` is past the end or not on a `char` boundary.
    pub fn starting_at(source: &'src str, pos: usize) -> Option<Self> {
        source.is_char_boundary(pos).then(|| Cursor {
            source,
            pos,
            marks: Vec::new(),
        })
    }

    /// The full input text.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns `true` if the next character is `ch`.
    #[inline]
    pub fn check_char(&self, ch: char) -> bool {
        self.current() == Some(ch)
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Number of outstanding marks.
    #[inline]
    pub fn mark_depth(&self) -> usize {
        self.marks.len()
    }

    /// Save the current offset.
    pub fn mark(&mut self) {
        trace!(pos = self.pos, depth = self.marks.len(), "mark");
        self.marks.push(self.pos);
    }

    /// Restore the most recent mark and drop it.
    pub fn rewind(&mut self) {
        debug_assert!(!self.marks.is_empty(), "rewind without a matching mark");
        if let Some(saved) = self.marks.pop() {
            trace!(from = self.pos, to = saved, "rewind");
            self.pos = saved;
        }
    }

    /// Drop the most recent mark, keeping progress made since.
    pub fn release(&mut self) {
        debug_assert!(!self.marks.is_empty(), "release without a matching mark");
        if let Some(saved) = self.marks.pop() {
            trace!(from = saved, to = self.pos, "release");
        }
    }

    /// Run `f` speculatively: keep its progress if it returns `Some`,
    /// otherwise restore the offset it started from.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        self.mark();
        let result = f(self);
        if result.is_some() {
            self.release();
        } else {
            self.rewind();
        }
        result
    }

    /// Consume `ch` if it is next.
    pub fn eat_char(&mut self, ch: char) -> bool {
        if self.check_char(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the literal `keyword` if it is next and stands alone.
    ///
    /// The keyword does not match when an identifier character follows,
    /// so `anyThing` is not `any` followed by `Thing`. Any other character,
    /// `.` included, ends the keyword.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };
        if after.chars().next().is_some_and(is_type_name_char) {
            return false;
        }
        trace!(pos = self.pos, keyword, "keyword");
        self.pos += keyword.len();
        true
    }

    /// Consume the longest run of characters matching `pred`.
    ///
    /// Returns the consumed text, which is empty if nothing matched.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Skip whitespace, returning the number of bytes skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        self.eat_while(char::is_whitespace).len()
    }
}
