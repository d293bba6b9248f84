//! Generated-input properties.

use conjure_ir::KEYWORDS;
use proptest::prelude::*;

use crate::{parse, parse_at, Cursor, Namespace, PrimitiveKind, TypeDescriptor, TypeName};

/// Uppercase first letter keeps generated names clear of the keywords.
fn arb_name() -> impl Strategy<Value = TypeName> {
    "[A-Z][A-Za-z0-9_$]{0,8}".prop_map(|s| TypeName::new(s).unwrap())
}

/// Lowercase namespaces, skipping the ones spelled like keywords.
fn arb_namespace() -> impl Strategy<Value = Namespace> {
    "[a-z]{1,8}"
        .prop_filter("keyword namespaces do not parse", |s| !KEYWORDS.contains(&s.as_str()))
        .prop_map(|s| Namespace::new(s).unwrap())
}

fn arb_descriptor() -> impl Strategy<Value = TypeDescriptor> {
    let leaf = prop_oneof![
        prop::sample::select(PrimitiveKind::ALL.to_vec()).prop_map(TypeDescriptor::Primitive),
        arb_name().prop_map(TypeDescriptor::local),
        (arb_namespace(), arb_name()).prop_map(|(ns, name)| TypeDescriptor::foreign(ns, name)),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeDescriptor::list),
            inner.clone().prop_map(TypeDescriptor::set),
            inner.clone().prop_map(TypeDescriptor::optional),
            (inner.clone(), inner).prop_map(|(key, value)| TypeDescriptor::map(key, value)),
        ]
    })
}

/// Render `ty` with `ws` wherever the grammar tolerates whitespace.
fn render_spaced(ty: &TypeDescriptor, ws: &str) -> String {
    match ty {
        TypeDescriptor::List(inner) => format!("list{ws}<{ws}{}{ws}>", render_spaced(inner, ws)),
        TypeDescriptor::Set(inner) => format!("set{ws}<{ws}{}{ws}>", render_spaced(inner, ws)),
        TypeDescriptor::Optional(inner) => {
            format!("optional{ws}<{ws}{}{ws}>", render_spaced(inner, ws))
        }
        TypeDescriptor::Map { key, value } => format!(
            "map{ws}<{ws}{}{ws},{ws}{}{ws}>",
            render_spaced(key, ws),
            render_spaced(value, ws)
        ),
        leaf => leaf.to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn canonical_text_round_trips(ty in arb_descriptor()) {
        prop_assert_eq!(parse(&ty.to_string()).unwrap(), ty);
    }

    #[test]
    fn whitespace_inside_delimiters_is_insignificant(
        ty in arb_descriptor(),
        ws in "[ \t\n]{0,3}",
    ) {
        prop_assert_eq!(parse(&render_spaced(&ty, &ws)).unwrap(), ty);
    }

    #[test]
    fn parse_at_consumes_exactly_one_expression(
        ty in arb_descriptor(),
        tail in prop::sample::select(vec![";", ")", ">", ", x", " rest"]),
    ) {
        let text = ty.to_string();
        let input = format!("{text}{tail}");
        let mut cursor = Cursor::new(&input);
        prop_assert_eq!(parse_at(&mut cursor).unwrap(), ty);
        prop_assert_eq!(cursor.position(), text.len());
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,40}") {
        let mut cursor = Cursor::new(&input);
        match parse_at(&mut cursor) {
            Ok(_) => prop_assert!(cursor.position() > 0),
            Err(err) => {
                prop_assert_eq!(cursor.position(), 0);
                prop_assert!(err.span.end <= input.len());
                prop_assert!(err.column() >= 1);
            }
        }
        let _ = parse(&input);
    }
}
