//! Type descriptors.
//!
//! `TypeDescriptor` captures the full structure of a type expression as
//! written. Names are recorded syntactically; nothing here resolves a
//! reference against a symbol table.
//!
//! The `Display` impl renders canonical text (`map<K, V>`, `ns.Name`) that
//! parses back to an equal tree, provided no local name or namespace is
//! spelled like a keyword.

use std::fmt;

use crate::{Namespace, TypeName};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

/// Built-in scalar/opaque types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    Any,
    Binary,
    DateTime,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 3] = [Self::Any, Self::Binary, Self::DateTime];

    /// Keyword spelling in type expressions.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Any => "any",
            PrimitiveKind::Binary => "binary",
            PrimitiveKind::DateTime => "datetime",
        }
    }

    pub const fn descriptor_kind(self) -> DescriptorKind {
        match self {
            PrimitiveKind::Any => DescriptorKind::Any,
            PrimitiveKind::Binary => DescriptorKind::Binary,
            PrimitiveKind::DateTime => DescriptorKind::DateTime,
        }
    }
}

/// Fieldless tag naming each descriptor construct.
///
/// Keys the parser's telemetry hook and usage statistics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DescriptorKind {
    Any,
    Binary,
    DateTime,
    List,
    Set,
    Optional,
    Map,
    LocalReference,
    ForeignReference,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 9] = [
        Self::Any,
        Self::Binary,
        Self::DateTime,
        Self::List,
        Self::Set,
        Self::Optional,
        Self::Map,
        Self::LocalReference,
        Self::ForeignReference,
    ];

    /// Human-readable name, used in statistics output.
    pub const fn name(self) -> &'static str {
        match self {
            DescriptorKind::Any => "any",
            DescriptorKind::Binary => "binary",
            DescriptorKind::DateTime => "datetime",
            DescriptorKind::List => "list",
            DescriptorKind::Set => "set",
            DescriptorKind::Optional => "optional",
            DescriptorKind::Map => "map",
            DescriptorKind::LocalReference => "local reference",
            DescriptorKind::ForeignReference => "foreign reference",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TypeDescriptor {
    /// `any`, `binary` or `datetime`
    Primitive(PrimitiveKind),

    /// `list<T>`
    List(Box<TypeDescriptor>),

    /// `set<T>`
    Set(Box<TypeDescriptor>),

    /// `optional<T>`
    Optional(Box<TypeDescriptor>),

    /// `map<K, V>`
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },

    /// A bare name defined in the referencing document's namespace.
    LocalReference(TypeName),

    /// `namespace.Name`, defined in another namespace.
    ForeignReference { namespace: Namespace, name: TypeName },
}

/// A borrowed view of one reference inside a descriptor tree.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Reference<'a> {
    Local(&'a TypeName),
    Foreign {
        namespace: &'a Namespace,
        name: &'a TypeName,
    },
}

impl<'a> Reference<'a> {
    /// The referenced type's name, ignoring any namespace.
    ///
    /// Borrows from the descriptor tree, not from this view.
    pub fn name(&self) -> &'a TypeName {
        match self {
            Reference::Local(name) | Reference::Foreign { name, .. } => name,
        }
    }
}

impl TypeDescriptor {
    #[inline]
    pub fn any() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Any)
    }

    #[inline]
    pub fn binary() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Binary)
    }

    #[inline]
    pub fn datetime() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::DateTime)
    }

    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::List(Box::new(element))
    }

    pub fn set(element: TypeDescriptor) -> Self {
        TypeDescriptor::Set(Box::new(element))
    }

    pub fn optional(element: TypeDescriptor) -> Self {
        TypeDescriptor::Optional(Box::new(element))
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn local(name: TypeName) -> Self {
        TypeDescriptor::LocalReference(name)
    }

    pub fn foreign(namespace: Namespace, name: TypeName) -> Self {
        TypeDescriptor::ForeignReference { namespace, name }
    }

    /// The construct at the root of this tree.
    pub fn kind(&self) -> DescriptorKind {
        match self {
            TypeDescriptor::Primitive(kind) => kind.descriptor_kind(),
            TypeDescriptor::List(_) => DescriptorKind::List,
            TypeDescriptor::Set(_) => DescriptorKind::Set,
            TypeDescriptor::Optional(_) => DescriptorKind::Optional,
            TypeDescriptor::Map { .. } => DescriptorKind::Map,
            TypeDescriptor::LocalReference(_) => DescriptorKind::LocalReference,
            TypeDescriptor::ForeignReference { .. } => DescriptorKind::ForeignReference,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::List(_)
                | TypeDescriptor::Set(_)
                | TypeDescriptor::Optional(_)
                | TypeDescriptor::Map { .. }
        )
    }

    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::LocalReference(_) | TypeDescriptor::ForeignReference { .. }
        )
    }

    /// Nesting depth; leaves have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            TypeDescriptor::List(inner)
            | TypeDescriptor::Set(inner)
            | TypeDescriptor::Optional(inner) => inner.depth() + 1,
            TypeDescriptor::Map { key, value } => key.depth().max(value.depth()) + 1,
            TypeDescriptor::Primitive(_)
            | TypeDescriptor::LocalReference(_)
            | TypeDescriptor::ForeignReference { .. } => 1,
        }
    }

    /// Every reference in the tree, in source order.
    pub fn references(&self) -> Vec<Reference<'_>> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<Reference<'a>>) {
        match self {
            TypeDescriptor::Primitive(_) => {}
            TypeDescriptor::List(inner)
            | TypeDescriptor::Set(inner)
            | TypeDescriptor::Optional(inner) => inner.collect_references(out),
            TypeDescriptor::Map { key, value } => {
                key.collect_references(out);
                value.collect_references(out);
            }
            TypeDescriptor::LocalReference(name) => out.push(Reference::Local(name)),
            TypeDescriptor::ForeignReference { namespace, name } => {
                out.push(Reference::Foreign { namespace, name });
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => f.write_str(kind.keyword()),
            TypeDescriptor::List(inner) => write!(f, "list<{inner}>"),
            TypeDescriptor::Set(inner) => write!(f, "set<{inner}>"),
            TypeDescriptor::Optional(inner) => write!(f, "optional<{inner}>"),
            TypeDescriptor::Map { key, value } => write!(f, "map<{key}, {value}>"),
            TypeDescriptor::LocalReference(name) => write!(f, "{name}"),
            TypeDescriptor::ForeignReference { namespace, name } => {
                write!(f, "{namespace}.{name}")
            }
        }
    }
}
