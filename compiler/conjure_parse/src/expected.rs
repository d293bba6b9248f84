//! Sets of things the grammar would have accepted at a position.
//!
//! Soft failures carry an `Expected` set so that, when every alternative
//! falls through, the error can list them all ("expected `map`, `list`, ...,
//! or a type name") instead of reporting only the last rule tried.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Grammar items a rule was looking for.
    ///
    /// Bit order is the order items are listed in messages, which follows
    /// the top-level alternation order.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Expected: u16 {
        const MAP = 1 << 0;
        const LIST = 1 << 1;
        const SET = 1 << 2;
        const OPTIONAL = 1 << 3;
        const ANY = 1 << 4;
        const BINARY = 1 << 5;
        const DATETIME = 1 << 6;
        const NAMESPACE = 1 << 7;
        const TYPE_NAME = 1 << 8;
        const OPEN_ANGLE = 1 << 9;
        const CLOSE_ANGLE = 1 << 10;
        const COMMA = 1 << 11;

        /// Everything that can start a type expression.
        const TYPE = Self::MAP.bits()
            | Self::LIST.bits()
            | Self::SET.bits()
            | Self::OPTIONAL.bits()
            | Self::ANY.bits()
            | Self::BINARY.bits()
            | Self::DATETIME.bits()
            | Self::NAMESPACE.bits()
            | Self::TYPE_NAME.bits();
    }
}

/// Message names, in listing order.
const DESCRIPTIONS: [(Expected, &str); 12] = [
    (Expected::MAP, "`map`"),
    (Expected::LIST, "`list`"),
    (Expected::SET, "`set`"),
    (Expected::OPTIONAL, "`optional`"),
    (Expected::ANY, "`any`"),
    (Expected::BINARY, "`binary`"),
    (Expected::DATETIME, "`datetime`"),
    (Expected::NAMESPACE, "a namespace"),
    (Expected::TYPE_NAME, "a type name"),
    (Expected::OPEN_ANGLE, "`<`"),
    (Expected::CLOSE_ANGLE, "`>`"),
    (Expected::COMMA, "`,`"),
];

impl Expected {
    /// Format the set for an error message.
    ///
    /// A namespace is only ever a prefix of a type name, so it is left out
    /// when a type name is also expected.
    pub fn format_expected(self) -> String {
        let mut set = self;
        if set.contains(Expected::TYPE_NAME) {
            set.remove(Expected::NAMESPACE);
        }

        let names: Vec<&'static str> = DESCRIPTIONS
            .iter()
            .filter(|(item, _)| set.contains(*item))
            .map(|&(_, name)| name)
            .collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => (*single).to_string(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_expected())
    }
}
