//! End-to-end parsing of registry files.

use std::path::{Path, PathBuf};

use pen::{Config, Error, Identifier, ObjectIdentifier, parse::HeaderError, parse::header::Field};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/enterprise-numbers.txt")
}

#[test]
fn fixture_parses() {
    let registry = pen::load(&fixture(), &Config::default()).unwrap();

    assert_eq!(registry.count(), 6);
    assert_eq!(registry.title(), "PRIVATE ENTERPRISE NUMBERS");
    assert_eq!(
        registry.section(),
        "SMI Network Management Private Enterprise Codes"
    );
    assert_eq!(
        registry.last_updated().unwrap().to_string(),
        "2024-05-01"
    );
    assert_eq!(
        registry.source().unwrap().as_str(),
        "https://www.iana.org/assignments/enterprise-numbers.txt"
    );
    assert_eq!(registry.find_by_identifier(9_i64).unwrap().organization, "ciscoSystems");
}

#[test]
fn fixture_parses_with_boundary_checks() {
    let config = Config {
        verify_boundaries: true,
        ..Config::default()
    };
    let registry = pen::load(&fixture(), &config).unwrap();
    assert_eq!(registry.count(), 6);
}

#[test]
fn every_identifier_shape_finds_the_same_entry() {
    let registry = pen::load(&fixture(), &Config::default()).unwrap();
    let expected = registry.find_by_identifier(54399_i64).unwrap();

    let oid: ObjectIdentifier = "1.3.6.1.4.1.54399".parse().unwrap();
    let queries = [
        Identifier::from("54399"),
        Identifier::from("1.3.6.1.4.1.54399"),
        Identifier::from(vec![1_i64, 3, 6, 1, 4, 1, 54399]),
        Identifier::from(oid),
    ];
    for query in queries {
        assert_eq!(registry.find_by_identifier(query.clone()), Some(expected), "{query:?}");
    }

    assert_eq!(
        registry.find_by_path("/iso/org/dod/internet/private/enterprise/54399"),
        Some(expected)
    );
    assert_eq!(registry.find_by_email("SUBCON.CO.42@gmail.com"), Some(expected));
    assert_eq!(registry.find_by_contact("jessecoretta"), Some(expected));
}

#[test]
fn structured_identifier_with_foreign_prefix_misses() {
    let registry = pen::load(&fixture(), &Config::default()).unwrap();
    for leaf in [0, 1, 2, 9, 99, 54399] {
        let foreign = ObjectIdentifier::new(vec![1, 3, 6, 1, 4, 2, leaf]);
        assert!(registry.find_by_identifier(foreign).is_none());
    }
}

#[test]
fn minimal_document() {
    let text = "\nTitle\n\n[updated 2020-02-29]\n\nSection.\n\nPrefix: iso.org.dod (1.3.6)\n\nsource https://example.com/pen\n99\n  Example Org\n  Jane Doe\n    jane&example.com\n";
    assert_eq!(text.lines().count(), 14);

    let registry = pen::parse_str(text).unwrap();
    assert_eq!(registry.count(), 1);
    assert_eq!(registry.title(), "Title");
    assert_eq!(registry.section(), "Section");
    assert_eq!(registry.last_updated().unwrap().to_string(), "2020-02-29");
    assert_eq!(registry.prefix().unwrap().iri(), "/iso/org/dod");

    let entry = registry.find_by_identifier(99_i64).unwrap();
    assert_eq!(entry.organization, "Example Org");
    assert_eq!(entry.contact, "Jane Doe");
    assert_eq!(entry.emails, ["jane&example.com"]);
    assert_eq!(registry.find_by_email("jane@example.com"), Some(entry));
    assert_eq!(registry.find_by_path("/iso/org/dod/99"), Some(entry));
}

#[test]
fn prefix_with_one_token_is_fatal() {
    let text = "\nTitle\n\n[updated 2020-02-29]\n\nSection.\n\nPrefix: iso.org.dod\n\nsource https://example.com/pen\n99\n  Example Org\n  Jane Doe\n    jane&example.com\n";

    let error = pen::parse_str(text).unwrap_err();
    let Error::Header(error) = error else {
        panic!("expected a header error, got {error:?}");
    };
    assert!(matches!(error, HeaderError::Prefix { line: 8, .. }));
    assert_eq!(error.field(), Field::Prefix);
}
