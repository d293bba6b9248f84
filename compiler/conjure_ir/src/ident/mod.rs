//! Identifier newtypes and their alphabets.
//!
//! Two alphabets exist:
//! - type names: Unicode alphanumerics, `_` and `$` (identifier-part chars)
//! - namespaces: ASCII letters only
//!
//! The parser scans with the same predicates the constructors validate
//! with, so a name produced by a successful parse always constructs.

use std::fmt;

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Words that open a composite or primitive rule.
///
/// A bare identifier spelled exactly like one of these never parses as a
/// local reference.
pub const KEYWORDS: [&str; 7] = [
    "map", "list", "set", "optional", "any", "binary", "datetime",
];

/// Returns `true` if `c` may appear in a type name.
#[inline]
pub fn is_type_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Returns `true` if `c` may appear in a namespace segment.
#[inline]
pub fn is_namespace_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Rejected identifier text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("{what} must not be empty")]
    Empty { what: &'static str },
    #[error("{what} `{text}` contains invalid character {ch:?} at byte {offset}")]
    InvalidChar {
        what: &'static str,
        text: String,
        ch: char,
        offset: usize,
    },
}

fn validate(what: &'static str, text: &str, allowed: fn(char) -> bool) -> Result<(), IdentifierError> {
    if text.is_empty() {
        return Err(IdentifierError::Empty { what });
    }
    match text.char_indices().find(|&(_, ch)| !allowed(ch)) {
        Some((offset, ch)) => Err(IdentifierError::InvalidChar {
            what,
            text: text.to_owned(),
            ch,
            offset,
        }),
        None => Ok(()),
    }
}

/// Name of a referenced type, e.g. `Foo` in `Foo` or `ns.Foo`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TypeName(String);

impl TypeName {
    /// Validate and wrap a type name.
    pub fn new(text: impl Into<String>) -> Result<Self, IdentifierError> {
        let text = text.into();
        validate("type name", &text, is_type_name_char)?;
        Ok(TypeName(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this name is spelled like a grammar keyword.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.contains(&self.0.as_str())
    }
}

/// Namespace segment of a foreign reference, e.g. `ns` in `ns.Foo`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Namespace(String);

impl Namespace {
    /// Validate and wrap a namespace segment.
    pub fn new(text: impl Into<String>) -> Result<Self, IdentifierError> {
        let text = text.into();
        validate("namespace", &text, is_namespace_char)?;
        Ok(Namespace(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_ident_traits {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = IdentifierError;

            fn try_from(text: String) -> Result<Self, Self::Error> {
                $ty::new(text)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = IdentifierError;

            fn try_from(text: &str) -> Result<Self, Self::Error> {
                $ty::new(text)
            }
        }

        impl From<$ty> for String {
            fn from(ident: $ty) -> String {
                ident.0
            }
        }
    };
}

impl_ident_traits!(TypeName);
impl_ident_traits!(Namespace);
