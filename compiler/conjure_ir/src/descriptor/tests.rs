use super::*;
use pretty_assertions::assert_eq;

fn name(text: &str) -> TypeName {
    TypeName::new(text).unwrap()
}

fn ns(text: &str) -> Namespace {
    Namespace::new(text).unwrap()
}

#[test]
fn display_renders_canonical_text() {
    let ty = TypeDescriptor::map(
        TypeDescriptor::local(name("string")),
        TypeDescriptor::list(TypeDescriptor::optional(TypeDescriptor::foreign(
            ns("my"),
            name("Foo"),
        ))),
    );
    assert_eq!(ty.to_string(), "map<string, list<optional<my.Foo>>>");
}

#[test]
fn display_primitives_use_keywords() {
    assert_eq!(TypeDescriptor::any().to_string(), "any");
    assert_eq!(TypeDescriptor::binary().to_string(), "binary");
    assert_eq!(TypeDescriptor::datetime().to_string(), "datetime");
    assert_eq!(
        TypeDescriptor::set(TypeDescriptor::binary()).to_string(),
        "set<binary>"
    );
}

#[test]
fn kind_matches_root_construct() {
    assert_eq!(TypeDescriptor::any().kind(), DescriptorKind::Any);
    assert_eq!(TypeDescriptor::datetime().kind(), DescriptorKind::DateTime);
    assert_eq!(
        TypeDescriptor::optional(TypeDescriptor::any()).kind(),
        DescriptorKind::Optional
    );
    assert_eq!(
        TypeDescriptor::foreign(ns("a"), name("B")).kind(),
        DescriptorKind::ForeignReference
    );
}

#[test]
fn classification_predicates() {
    let list = TypeDescriptor::list(TypeDescriptor::any());
    assert!(list.is_composite());
    assert!(!list.is_primitive());
    assert!(!list.is_reference());

    let local = TypeDescriptor::local(name("Foo"));
    assert!(local.is_reference());
    assert!(!local.is_composite());

    assert!(TypeDescriptor::binary().is_primitive());
}

#[test]
fn depth_counts_deepest_branch() {
    assert_eq!(TypeDescriptor::any().depth(), 1);
    let nested = TypeDescriptor::list(TypeDescriptor::list(TypeDescriptor::list(
        TypeDescriptor::any(),
    )));
    assert_eq!(nested.depth(), 4);
    let map = TypeDescriptor::map(TypeDescriptor::any(), nested);
    assert_eq!(map.depth(), 5);
}

#[test]
fn references_are_in_source_order() {
    let ty = TypeDescriptor::map(
        TypeDescriptor::local(name("Key")),
        TypeDescriptor::set(TypeDescriptor::map(
            TypeDescriptor::foreign(ns("other"), name("Inner")),
            TypeDescriptor::local(name("Value")),
        )),
    );
    let names: Vec<&str> = ty.references().iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Key", "Inner", "Value"]);
    assert!(matches!(
        ty.references()[1],
        Reference::Foreign { namespace, .. } if namespace.as_str() == "other"
    ));
}

#[test]
fn primitive_kinds_map_to_descriptor_kinds() {
    let kinds: Vec<DescriptorKind> = PrimitiveKind::ALL
        .iter()
        .map(|k| k.descriptor_kind())
        .collect();
    assert_eq!(
        kinds,
        vec![DescriptorKind::Any, DescriptorKind::Binary, DescriptorKind::DateTime]
    );
}

#[test]
fn reference_names_outlive_the_reference_list() {
    let ty = TypeDescriptor::list(TypeDescriptor::foreign(ns("api"), name("Elem")));
    let first: &TypeName = ty.references()[0].name();
    assert_eq!(first.as_str(), "Elem");
}
