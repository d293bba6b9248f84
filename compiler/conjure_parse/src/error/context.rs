//! Error context for "while parsing X" messages.

/// What the parser was inside of when a hard error occurred.
///
/// The innermost context wins: once an error carries a context, enclosing
/// rules leave it alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// `list<...>`
    ListType,
    /// `set<...>`
    SetType,
    /// `optional<...>`
    OptionalType,
    /// `map<...>` outside its key and value.
    MapType,
    /// The key half of `map<K, V>`.
    MapKey,
    /// The value half of `map<K, V>`.
    MapValue,
    /// `namespace.Name`
    ForeignReference,
}

impl ErrorContext {
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::ListType => "a list type",
            Self::SetType => "a set type",
            Self::OptionalType => "an optional type",
            Self::MapType => "a map type",
            Self::MapKey => "the key of a map type",
            Self::MapValue => "the value of a map type",
            Self::ForeignReference => "a foreign reference",
        }
    }
}
