//! Parser configuration.

/// Default limit on composite nesting.
///
/// Real schemas rarely nest more than a handful of levels; the limit only
/// exists so hostile input cannot drive unbounded recursion.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for a [`TypeParser`](crate::TypeParser).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested composite types (`list<list<...>>`).
    pub max_depth: usize,
    /// Accept leading and trailing whitespace around the whole expression.
    pub trim: bool,
}

impl ParserConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            trim: false,
        }
    }
}
