//! Conjure IR - type descriptor model
//!
//! This crate holds the values produced by the type-expression parser:
//! - [`TypeDescriptor`], the closed tree of primitive, composite and
//!   reference types
//! - [`TypeName`] and [`Namespace`], validated identifier newtypes
//! - [`DescriptorKind`], a fieldless tag per construct (telemetry key)
//! - [`Span`], byte ranges into parsed input
//!
//! Descriptors are plain owned values. A tree is built bottom-up by a single
//! parse call and handed to the caller, who may embed it in a larger schema
//! document. Trees are finite and acyclic by construction.

mod descriptor;
mod ident;
mod span;

pub use descriptor::{DescriptorKind, PrimitiveKind, Reference, TypeDescriptor};
pub use ident::{
    is_namespace_char, is_type_name_char, IdentifierError, Namespace, TypeName, KEYWORDS,
};
pub use span::Span;
