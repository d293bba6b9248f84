//! `any`, `binary` and `datetime`.

use conjure_ir::{PrimitiveKind, TypeDescriptor};

use crate::{Expected, ParseOutcome, Parser};

fn expected_for(kind: PrimitiveKind) -> Expected {
    match kind {
        PrimitiveKind::Any => Expected::ANY,
        PrimitiveKind::Binary => Expected::BINARY,
        PrimitiveKind::DateTime => Expected::DATETIME,
    }
}

impl Parser<'_, '_> {
    pub(crate) fn parse_primitive(&mut self, kind: PrimitiveKind) -> ParseOutcome<TypeDescriptor> {
        if self.cursor.eat_keyword(kind.keyword()) {
            self.matched(TypeDescriptor::Primitive(kind))
        } else {
            ParseOutcome::no_match(expected_for(kind), self.cursor.position())
        }
    }
}
