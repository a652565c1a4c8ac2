//! Integration tests for the response line decoder.
//!
//! Lines are taken from real mailbox administration sessions: quota
//! listings, `LIST` output and `NAMESPACE` replies.

#![allow(clippy::unwrap_used)]

use mailadm_imap::{Decoder, DecoderConfig, Error, Nesting, Value, decode};
use proptest::prelude::*;

fn atoms(items: &[&str]) -> Vec<Value> {
    items.iter().map(|s| Value::atom(*s)).collect()
}

#[test]
fn test_quota_response() {
    let values = decode("user.test (STORAGE 1478047 4194304)").unwrap();

    assert_eq!(values.len(), 2);
    assert_eq!(values[0], Value::atom("user.test"));
    assert_eq!(
        values[1],
        Value::list(atoms(&["STORAGE", "1478047", "4194304"]))
    );
}

#[test]
fn test_list_response() {
    let values = decode(r#"(\HasNoChildren) "." user.joe.Listen.kde-announce"#).unwrap();

    assert_eq!(values.len(), 3);
    assert_eq!(values[0].as_list().unwrap(), atoms(&[r"\HasNoChildren"]));
    assert_eq!(values[1], Value::atom("."));
    assert_eq!(values[2], Value::atom("user.joe.Listen.kde-announce"));
}

#[test]
fn test_namespace_response() {
    let line = r##"(("" "/")) (("~" "/")) (("#shared/" "/")("#public/" "/")("#ftp/" "/")("#news." "."))"##;
    let values = decode(line).unwrap();

    assert_eq!(values.len(), 3);
    assert!(values.iter().all(Value::is_list));
    let lens: Vec<_> = values
        .iter()
        .map(|v| v.as_list().unwrap().len())
        .collect();
    assert_eq!(lens, [1, 1, 4]);

    let shared = values[2].as_list().unwrap();
    assert_eq!(shared[0], Value::atom(r##"("#shared/" "/")"##));
    assert_eq!(shared[1], Value::atom(r##"("#public/" "/")"##));
}

#[test]
fn test_namespace_blobs_expand() {
    let decoder = Decoder::default();
    let values = decoder.decode(r#"(("~" "/"))"#).unwrap();

    let personal = decoder.expand(&values[0].as_list().unwrap()[0]).unwrap();
    assert_eq!(personal, Value::list(atoms(&["~", "/"])));
}

#[test]
fn test_recursive_namespace() {
    let decoder = Decoder::new(DecoderConfig::builder().nesting(Nesting::Recursive).build());
    let values = decoder
        .decode(r##"(("" "/")) NIL (("#news." ".") ("#ftp/" NIL))"##)
        .unwrap();

    assert_eq!(
        values,
        vec![
            Value::list(vec![Value::list(atoms(&["", "/"]))]),
            Value::nil(),
            Value::list(vec![
                Value::list(atoms(&["#news.", "."])),
                Value::list(vec![Value::atom("#ftp/"), Value::nil()]),
            ]),
        ]
    );
}

#[test]
fn test_nil_is_not_empty_string() {
    let nil = decode("NIL").unwrap();
    let empty = decode("\"\"").unwrap();

    assert_eq!(nil, vec![Value::nil()]);
    assert_eq!(empty, vec![Value::atom("")]);
    assert_ne!(nil, empty);
}

#[test]
fn test_literal_with_delimiters() {
    let values = decode("{5}a (b)").unwrap();
    assert_eq!(values, atoms(&["a (b)"]));
}

#[test]
fn test_literal_mailbox_name() {
    let values = decode("(\\Noselect) \"/\" {10}Sent (old)").unwrap();
    assert_eq!(values[2], Value::atom("Sent (old)"));
}

#[test]
fn test_status_with_response_code() {
    let values = decode("(OK [READ-WRITE] Completed)").unwrap();
    assert_eq!(
        values,
        vec![Value::list(atoms(&["OK[READ-WRITE]", "Completed"]))]
    );
}

#[test]
fn test_braces_inside_nested_atom() {
    for line in ["((a{5}b) c)", "((a{x}b) c)"] {
        let values = decode(line).unwrap();
        let blob = &line[1..8];
        assert_eq!(values, vec![Value::list(atoms(&[blob, "c"]))]);
    }
}

#[test]
fn test_response_code_after_nil_and_list() {
    assert_eq!(
        decode("NIL [X] (a) [Y] b").unwrap(),
        vec![
            Value::nil(),
            Value::atom("[X]"),
            Value::list(atoms(&["a"])),
            Value::atom("[Y]"),
            Value::atom("b"),
        ]
    );
}

#[test]
fn test_recursive_nesting_is_bounded() {
    let decoder = Decoder::new(DecoderConfig::builder().nesting(Nesting::Recursive).build());
    let line = format!("{}{}", "(".repeat(200_000), ")".repeat(200_000));

    let err = decoder.decode(&line).unwrap_err();
    assert!(matches!(err, Error::NestingTooDeep { max: 64, .. }));
    assert_eq!(err.position(), 64);
}

#[test]
fn test_bytes_input() {
    let values = decode(b"a \"b c\"".as_slice()).unwrap();
    assert_eq!(values, atoms(&["a", "b c"]));
}

#[test]
fn test_errors() {
    assert_eq!(
        decode("a \"unterminated").unwrap_err(),
        Error::UnterminatedQuotedString { position: 2 }
    );
    assert_eq!(
        decode("a (b c").unwrap_err(),
        Error::UnterminatedList { position: 2 }
    );
    assert!(matches!(
        decode("{x}abc").unwrap_err(),
        Error::InvalidLiteralHeader { .. }
    ));
    assert_eq!(
        decode("{10}short").unwrap_err(),
        Error::TruncatedLiteral {
            position: 4,
            expected: 10,
            available: 5,
        }
    );
    assert_eq!(
        decode(b"\"\xc3\"".as_slice()).unwrap_err(),
        Error::InvalidUtf8 { position: 1 }
    );
}

#[test]
fn test_shared_decoder_across_threads() {
    let decoder = Decoder::default();
    let line = "user.test (STORAGE 1478047 4194304)";
    let expected = decoder.decode(line).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| decoder.decode(line).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

proptest! {
    #[test]
    fn quoted_without_escapes_is_verbatim(text in "[^\"\\\\]*") {
        let values = decode(format!("\"{text}\"")).unwrap();
        prop_assert_eq!(values, vec![Value::atom(text)]);
    }

    #[test]
    fn literal_is_verbatim(text in any::<String>()) {
        let values = decode(format!("{{{}}}{text}", text.len())).unwrap();
        prop_assert_eq!(values, vec![Value::atom(text)]);
    }

    #[test]
    fn decoding_is_deterministic(line in "[a-zA-Z0-9 ()\\[\\]{}\"\\\\\r\n]{0,48}") {
        prop_assert_eq!(decode(&line), decode(&line));
    }

    #[test]
    fn errors_stay_within_line(line in "[a-zA-Z0-9 ()\\[\\]{}\"\\\\\r\n]{0,48}") {
        if let Err(e) = decode(&line) {
            prop_assert!(e.position() <= line.len());
        }
    }
}
