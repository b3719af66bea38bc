use super::*;

use std::{borrow::Cow, io::Write};

use crate::{from_str, tests::some, to_string, ErrorKind, Value, ValueKind};

#[test]
fn parse_generated() {
    // debug builds are slow, so just run a handful of cases
    let iterations = {
        #[cfg(debug)]
        {
            100
        }

        #[cfg(not(debug))]
        {
            2000
        }
    };

    for _ in 0..iterations {
        // Check the parser against some randomly generated JSON data
        // with whitespace scattered between its tokens
        let input = some::json_object();

        let expected: serde_json::Value = match serde_json::from_str(&input) {
            Ok(v) => v,
            Err(e) => {
                panic!("parsing `{}`: {}", input, e);
            }
        };

        let value = match Value::parse_str(&input) {
            Ok(v) => v,
            Err(e) => {
                panic!("parsing `{}`: {}", input, e);
            }
        };

        assert_same(&expected, &value);

        // the encoded form parses back to the same value
        let reparsed = Value::parse_owned(&value.to_string()).unwrap();
        assert_eq!(value, reparsed);
    }
}

#[test]
fn parse_kinds() {
    let value = Value::parse_str(r#"[null, true, -3, 2.5, "s", [], {}]"#).unwrap();

    let kinds: Vec<_> = value.as_array().unwrap().iter().map(|v| v.kind()).collect();

    assert_eq!(
        vec![
            ValueKind::Null,
            ValueKind::Bool,
            ValueKind::Int,
            ValueKind::Float,
            ValueKind::Str,
            ValueKind::Array,
            ValueKind::Object,
        ],
        kinds
    );
}

#[test]
fn parse_accessors() {
    let value = Value::parse_str(r#"{"a":{"b":[1,2.5,"x",true,null]}}"#).unwrap();

    let b = value.get("a").and_then(|a| a.get("b")).unwrap().as_array().unwrap();

    assert_eq!(Some(1), b[0].as_i64());
    assert_eq!(Some(1.0), b[0].as_f64());
    assert_eq!(None, b[1].as_i64());
    assert_eq!(Some(2.5), b[1].as_f64());
    assert_eq!(Some("x"), b[2].as_str());
    assert_eq!(Some(true), b[3].as_bool());
    assert!(b[4].is_null());

    assert!(value.get("missing").is_none());
    assert!(b[0].get("a").is_none());
    assert_eq!(1, value.as_object().unwrap().len());
}

#[test]
fn parse_keeps_insertion_order() {
    let value = Value::parse_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_ref()).collect();

    assert_eq!(vec!["z", "a", "m"], keys);
    assert_eq!(r#"{"z":1,"a":2,"m":3}"#, value.to_string());
}

#[test]
fn parse_view_borrows_unescaped_strings() {
    let value = Value::parse_str(r#"{"plain":"a","esc\u0061ped":"b\n"}"#).unwrap();
    let object = value.as_object().unwrap();

    let (k, v) = object.get_index(0).unwrap();
    assert!(matches!(k, Cow::Borrowed("plain")));
    assert!(matches!(v, Value::Str(Cow::Borrowed("a"))));

    let (k, v) = object.get_index(1).unwrap();
    assert!(matches!(k, Cow::Owned(_)));
    assert_eq!("escaped", &**k);
    assert!(matches!(v, Value::Str(Cow::Owned(_))));
}

#[test]
fn parse_owned_outlives_input() {
    let value = {
        let input = String::from(r#"{"a":["b"]}"#);

        Value::parse_owned(&input).unwrap()
    };

    let b = &value.get("a").unwrap().as_array().unwrap()[0];
    assert!(matches!(b, Value::Str(Cow::Owned(_))));
}

#[test]
fn parse_into_owned() {
    let value = {
        let input = String::from(r#"{"a":"b"}"#);

        Value::parse_str(&input).unwrap().into_owned()
    };

    assert_eq!(Some("b"), value.get("a").and_then(|a| a.as_str()));
}

#[test]
fn parse_slice() {
    let value = Value::parse_slice(b"[1,\"\xe5\xa3\x81\"]").unwrap();

    assert_eq!(Some("壁"), value.as_array().unwrap()[1].as_str());
}

#[test]
fn parse_duplicate_keys_fail() {
    let err = Value::parse_str(r#"{"a":1,"a":2}"#).unwrap_err();

    assert_eq!(&ErrorKind::DuplicateKey("a".to_owned()), err.kind());
    assert_eq!(Some(8), err.offset());

    // escaped keys are compared by their content
    assert!(Value::parse_str(r#"{"a":1,"\u0061":2}"#).is_err());

    // the same document decodes into a record, with the last value winning
    #[derive(Debug, Default)]
    struct A {
        a: i32,
    }

    crate::record!(A { a });

    assert_eq!(2, from_str::<A>(r#"{"a":1,"a":2}"#).unwrap().a);
}

#[test]
fn parse_numbers() {
    let value = Value::parse_str("[0, -0, 1.0, 1e2, 9223372036854775807, 9223372036854775808, 0.5]").unwrap();

    assert_eq!(
        &[
            Value::Int(0),
            Value::Int(0),
            Value::Int(1),
            Value::Int(100),
            Value::Int(i64::MAX),
            Value::Float(9223372036854775808.0),
            Value::Float(0.5),
        ][..],
        value.as_array().unwrap()
    );
}

#[test]
fn parse_trailing_characters_fail() {
    let err = Value::parse_str("{} {}").unwrap_err();

    assert_eq!(&ErrorKind::TrailingCharacters, err.kind());
}

#[test]
fn parse_unknown_token_fails() {
    let err = Value::parse_str("[1, x]").unwrap_err();

    assert_eq!(
        &ErrorKind::UnexpectedToken {
            expected: "a value",
            found: 'x'
        },
        err.kind()
    );
    assert_eq!(Some(4), err.offset());
}

#[test]
fn display_is_compact() {
    let value = Value::parse_str("{ \"a\" : [ 1 , 2.5 , \"x\\\"\" ] , \"b\" : null }").unwrap();

    assert_eq!(r#"{"a":[1,2.5,"x\""],"b":null}"#, value.to_string());
    assert_eq!(value.to_string(), to_string(&value));
}

#[test]
fn value_as_record_field() {
    let book: Book = from_str(r#"{"title":"t","extra":{"n":[1,{"m":null}]}}"#).unwrap();

    assert_eq!(r#"{"n":[1,{"m":null}]}"#, book.extra.to_string());
    assert_eq!(
        r#"{"title":"t","authors":[],"extra":{"n":[1,{"m":null}]}}"#,
        to_string(&book)
    );
}

#[test]
fn to_serde_json() {
    let input = r#"{"a":[1,-2.5,"x",true,null],"b":{}}"#;

    let expected: serde_json::Value = serde_json::from_str(input).unwrap();
    let value = Value::parse_str(input).unwrap();

    assert_eq!(expected, value.to_serde_json());
}

#[test]
fn from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"id":3,"name":"from a file","age":1}"#).unwrap();

    let value = crate::value::from_file(file.path()).unwrap();
    assert_eq!(Some("from a file"), value.get("name").and_then(|n| n.as_str()));

    let person: Person = crate::from_file(file.path()).unwrap();
    assert_eq!(3, person.id);

    let mut person = Person::default();
    crate::decode_file(&mut person, file.path()).unwrap();
    assert_eq!("from a file", person.name);
}

#[test]
fn from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = crate::from_file::<Person>(&path).unwrap_err();

    assert_eq!(&ErrorKind::FileNotFound(path), err.kind());
    assert_eq!(None, err.offset());
}

#[test]
fn from_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let err = crate::value::from_file(file.path()).unwrap_err();

    assert_eq!(&ErrorKind::EmptyFile(file.path().to_owned()), err.kind());
}

#[test]
fn from_invalid_utf8_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\"ab\xff\"").unwrap();

    let err = crate::from_file::<String>(file.path()).unwrap_err();

    assert_eq!(&ErrorKind::InvalidUtf8, err.kind());
    assert_eq!(Some(3), err.offset());
}
