//! Type expression grammar.
//!
//! ```text
//! type      = map | list | set | optional
//!           | "any" | "binary" | "datetime"
//!           | foreign | local
//! map       = "map" ws "<" ws type ws "," ws type ws ">"
//! list      = "list" ws "<" ws type ws ">"
//! set       = "set" ws "<" ws type ws ">"
//! optional  = "optional" ws "<" ws type ws ">"
//! foreign   = namespace "." name
//! local     = name
//! namespace = [A-Za-z]+
//! name      = (alphanumeric | "_" | "$")+
//! ```
//!
//! Alternatives are tried in the order listed and the first match wins.
//! Keywords end at the first non-identifier character, so `map.Location`
//! commits to the map rule and fails there; a namespace can never be
//! spelled like a keyword.

mod composite;
mod primitive;
mod reference;


use conjure_ir::{PrimitiveKind, TypeDescriptor};

use crate::{one_of, ParseOutcome, Parser};

impl Parser<'_, '_> {
    /// Parse one type expression at the cursor.
    ///
    /// Stops right after the expression; whatever follows is the caller's.
    pub(crate) fn parse_type(&mut self) -> ParseOutcome<TypeDescriptor> {
        one_of!(
            self.cursor,
            self.parse_map(),
            self.parse_list(),
            self.parse_set(),
            self.parse_optional(),
            self.parse_primitive(PrimitiveKind::Any),
            self.parse_primitive(PrimitiveKind::Binary),
            self.parse_primitive(PrimitiveKind::DateTime),
            self.parse_foreign_reference(),
            self.parse_local_reference(),
        )
    }
}
