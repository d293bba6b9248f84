//! References to user-defined types.
//!
//! A foreign reference `ns.Name` is tried before a local `Name`: a local
//! name can never contain `.`, so the order only matters for which rule
//! reports the error.

use conjure_ir::{is_namespace_char, is_type_name_char, Namespace, Span, TypeDescriptor, TypeName};

use crate::{ErrorContext, Expected, Found, ParseOutcome, Parser, SyntaxErrorKind};

impl Parser<'_, '_> {
    /// `namespace "." name`
    ///
    /// Falls through unless a namespace and its dot are both present. Once
    /// they are, a missing name is a hard error.
    pub(crate) fn parse_foreign_reference(&mut self) -> ParseOutcome<TypeDescriptor> {
        let start = self.cursor.position();
        let Some(namespace) = self.cursor.attempt(|cursor| {
            let namespace = cursor.eat_while(is_namespace_char);
            (!namespace.is_empty() && cursor.eat_char('.')).then_some(namespace)
        }) else {
            return ParseOutcome::no_match(Expected::NAMESPACE, start);
        };

        let name_start = self.cursor.position();
        let name = self.cursor.eat_while(is_type_name_char);
        if name.is_empty() {
            let found = Found::at(self.cursor.source(), name_start);
            let error = self
                .error(
                    SyntaxErrorKind::ExpectedIdentifier {
                        namespace: namespace.to_owned(),
                        found,
                    },
                    Span::new(name_start, name_start + found.len_utf8()),
                )
                .with_context(ErrorContext::ForeignReference);
            return ParseOutcome::failed(error);
        }

        let span = Span::new(start, self.cursor.position());
        let built = Namespace::new(namespace).and_then(|ns| Ok((ns, TypeName::new(name)?)));
        match built {
            Ok((namespace, name)) => self.matched(TypeDescriptor::foreign(namespace, name)),
            Err(err) => ParseOutcome::failed(
                self.error(err.into(), span)
                    .with_context(ErrorContext::ForeignReference),
            ),
        }
    }

    /// `name`
    pub(crate) fn parse_local_reference(&mut self) -> ParseOutcome<TypeDescriptor> {
        let start = self.cursor.position();
        let name = self.cursor.eat_while(is_type_name_char);
        if name.is_empty() {
            return ParseOutcome::no_match(Expected::TYPE_NAME, start);
        }

        match TypeName::new(name) {
            Ok(name) => self.matched(TypeDescriptor::local(name)),
            Err(err) => ParseOutcome::failed(
                self.error(err.into(), Span::new(start, self.cursor.position())),
            ),
        }
    }
}
