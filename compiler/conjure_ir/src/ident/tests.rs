use super::*;
use pretty_assertions::assert_eq;

#[test]
fn type_name_accepts_identifier_part_chars() {
    for text in ["Foo", "foo_bar", "Foo2", "2fast", "$ref", "Ünïcödé", "_"] {
        let name = TypeName::new(text);
        assert!(name.is_ok(), "{text} should be a valid type name");
    }
}

#[test]
fn type_name_rejects_empty() {
    assert_eq!(
        TypeName::new(""),
        Err(IdentifierError::Empty { what: "type name" })
    );
}

#[test]
fn type_name_reports_first_bad_char() {
    let Err(IdentifierError::InvalidChar { ch, offset, .. }) = TypeName::new("ab.cd") else {
        panic!("expected InvalidChar");
    };
    assert_eq!(ch, '.');
    assert_eq!(offset, 2);
}

#[test]
fn namespace_is_ascii_letters_only() {
    assert!(Namespace::new("com").is_ok());
    assert!(Namespace::new("ComPalantir").is_ok());
    assert!(Namespace::new("ns2").is_err());
    assert!(Namespace::new("my_ns").is_err());
    assert!(Namespace::new("é").is_err());
    assert!(Namespace::new("").is_err());
}

#[test]
fn keyword_detection_is_exact() {
    assert!(TypeName::new("any").map(|n| n.is_keyword()).unwrap_or(false));
    assert!(TypeName::new("datetime").map(|n| n.is_keyword()).unwrap_or(false));
    assert!(!TypeName::new("anyThing").map(|n| n.is_keyword()).unwrap_or(true));
    assert!(!TypeName::new("List").map(|n| n.is_keyword()).unwrap_or(true));
}

#[test]
fn equality_is_case_sensitive() {
    assert_ne!(TypeName::new("foo"), TypeName::new("Foo"));
}

#[test]
fn conversions_round_trip_text() {
    let name = TypeName::try_from("Widget");
    assert_eq!(name.map(String::from), Ok("Widget".to_owned()));
    let ns = Namespace::try_from("api".to_owned());
    assert_eq!(ns.map(|n| n.to_string()), Ok("api".to_owned()));
}
