#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use skore_construct::config;
use skore_core::{Charset, TypedValue};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
packets:
  - name: "say"
    header: 1000
    fields:
      - { integer: 1, amout: 2 } # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_ARGUMENT");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
packets:
  - name: "ping"
    header: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.encoding.charset, Charset::Latin1);
    assert_eq!(cfg.packets[0].name, "ping");
    assert!(cfg.packets[0].fields.is_empty());
}

#[test]
fn fields_and_charset() {
    let ok = r#"
version: 1
encoding:
  charset: utf8
packets:
  - name: "say"
    header: 1000
    fields:
      - { integer: -7 }
      - { boolean: false, amount: 3 }
      - { string: "hello" }
"#;
    let cfg = config::load_from_str(ok).unwrap();
    assert_eq!(cfg.encoding.charset, Charset::Utf8);
    let say = cfg.packet("say").unwrap();
    assert_eq!(say.header, 1000);
    assert_eq!(say.fields[0].value().unwrap(), TypedValue::Integer(-7));
    assert_eq!(say.fields[1].amount, 3);
    assert_eq!(say.fields[2].value().unwrap(), TypedValue::from("hello"));
    assert!(cfg.packet("missing").is_none());
}

#[test]
fn wrong_version_is_unsupported() {
    let bad = r#"
version: 2
packets:
  - name: "ping"
    header: 1
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn semantic_errors_are_rejected() {
    let cases = [
        ("empty packets", "version: 1\npackets: []\n"),
        (
            "duplicate names",
            "version: 1\npackets:\n  - { name: a, header: 1 }\n  - { name: a, header: 2 }\n",
        ),
        ("blank name", "version: 1\npackets:\n  - { name: ' ', header: 1 }\n"),
        (
            "zero amount",
            "version: 1\npackets:\n  - name: a\n    header: 1\n    fields:\n      - { integer: 1, amount: 0 }\n",
        ),
        (
            "two values in one field",
            "version: 1\npackets:\n  - name: a\n    header: 1\n    fields:\n      - { integer: 1, boolean: true }\n",
        ),
        (
            "no value",
            "version: 1\npackets:\n  - name: a\n    header: 1\n    fields:\n      - { amount: 2 }\n",
        ),
        ("header overflow", "version: 1\npackets:\n  - { name: a, header: 70000 }\n"),
    ];

    for (what, yaml) in cases {
        let err = config::load_from_str(yaml).expect_err(what);
        assert_eq!(err.code().as_str(), "INVALID_ARGUMENT", "case={what}");
    }
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
