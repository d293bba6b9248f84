//! Parameterized types: `list<T>`, `set<T>`, `optional<T>`, `map<K, V>`.
//!
//! Each rule commits as soon as its keyword matches. From then on a bad
//! delimiter or an unparsable inner type is a hard error, never a reason to
//! try the next alternative.

use conjure_ir::{Span, TypeDescriptor};
use tracing::debug;

use crate::{chain, require, ErrorContext, Expected, Found, ParseOutcome, Parser, SyntaxErrorKind};

impl Parser<'_, '_> {
    pub(crate) fn parse_list(&mut self) -> ParseOutcome<TypeDescriptor> {
        self.parse_single_param("list", Expected::LIST, ErrorContext::ListType, TypeDescriptor::list)
    }

    pub(crate) fn parse_set(&mut self) -> ParseOutcome<TypeDescriptor> {
        self.parse_single_param("set", Expected::SET, ErrorContext::SetType, TypeDescriptor::set)
    }

    pub(crate) fn parse_optional(&mut self) -> ParseOutcome<TypeDescriptor> {
        self.parse_single_param(
            "optional",
            Expected::OPTIONAL,
            ErrorContext::OptionalType,
            TypeDescriptor::optional,
        )
    }

    /// `map<K, V>`. Key and value may themselves be any type, maps included.
    pub(crate) fn parse_map(&mut self) -> ParseOutcome<TypeDescriptor> {
        let start = self.cursor.position();
        if !self.cursor.eat_keyword("map") {
            return ParseOutcome::no_match(Expected::MAP, start);
        }
        debug!(keyword = "map", pos = start, "committed to composite");

        self.nested(|p| {
            chain!(p.open_angle());
            let key = require!(p.cursor.source(), p.parse_type(), ErrorContext::MapKey);

            p.cursor.skip_whitespace();
            if !p.cursor.eat_char(',') {
                return ParseOutcome::failed(p.unexpected_at(p.cursor.position(), Expected::COMMA));
            }
            p.cursor.skip_whitespace();

            let value = require!(p.cursor.source(), p.parse_type(), ErrorContext::MapValue);
            chain!(p.close_angle());
            p.matched(TypeDescriptor::map(key, value))
        })
        .with_error_context(ErrorContext::MapType)
    }

    /// `keyword<T>`, wrapped by `wrap`.
    fn parse_single_param(
        &mut self,
        keyword: &'static str,
        expected: Expected,
        context: ErrorContext,
        wrap: fn(TypeDescriptor) -> TypeDescriptor,
    ) -> ParseOutcome<TypeDescriptor> {
        let start = self.cursor.position();
        if !self.cursor.eat_keyword(keyword) {
            return ParseOutcome::no_match(expected, start);
        }
        debug!(keyword, pos = start, "committed to composite");

        self.nested(|p| {
            chain!(p.open_angle());
            let inner = require!(p.cursor.source(), p.parse_type(), context);
            chain!(p.close_angle());
            p.matched(wrap(inner))
        })
        .with_error_context(context)
    }

    /// `ws "<" ws`
    fn open_angle(&mut self) -> ParseOutcome<()> {
        self.cursor.skip_whitespace();
        if !self.cursor.eat_char('<') {
            return ParseOutcome::failed(self.unexpected_at(self.cursor.position(), Expected::OPEN_ANGLE));
        }
        self.cursor.skip_whitespace();
        ParseOutcome::matched(())
    }

    /// `ws ">"`
    fn close_angle(&mut self) -> ParseOutcome<()> {
        self.cursor.skip_whitespace();
        if self.cursor.eat_char('>') {
            return ParseOutcome::matched(());
        }
        let pos = self.cursor.position();
        let found = Found::at(self.cursor.source(), pos);
        ParseOutcome::failed(self.error(
            SyntaxErrorKind::UnclosedDelimiter { found },
            Span::new(pos, pos + found.len_utf8()),
        ))
    }
}
