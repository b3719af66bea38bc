/*
Invalid inputs always fail with an error rather than panicking, looping forever
or producing invalid UTF8 strings.

Many of these cases come from deciding on semantics when things break, so
they check the kind of error and where it was reported, not just that one occurred.
*/

use super::*;

use std::collections::HashMap;

use crate::{decode_str, from_slice, from_str, ErrorKind, Value};

fn unexpected(expected: &'static str, found: char) -> ErrorKind {
    ErrorKind::UnexpectedToken { expected, found }
}

#[test]
fn err_missing_close_brace() {
    let err = from_str::<Person>(r#"{"id":1,"name":"x""#).unwrap_err();

    assert_eq!(&ErrorKind::UnexpectedEnd, err.kind());
    assert!(err.is_eof());
}

#[test]
fn err_missing_comma() {
    let err = from_str::<Person>(r#"{"id":1 "name":"x"}"#).unwrap_err();

    assert_eq!(&unexpected("`,` or `}`", '"'), err.kind());
    assert_eq!(Some(8), err.offset());
}

#[test]
fn err_trailing_comma() {
    let err = from_str::<Person>(r#"{"id":1,}"#).unwrap_err();
    assert_eq!(&unexpected("`\"`", '}'), err.kind());

    let err = from_str::<Vec<u8>>("[1,]").unwrap_err();
    assert_eq!(Some(3), err.offset());
}

#[test]
fn err_missing_colon() {
    let err = from_str::<Person>(r#"{"id" 1}"#).unwrap_err();

    assert_eq!(&unexpected("`:`", '1'), err.kind());
}

#[test]
fn err_wrong_shape() {
    let err = from_str::<Vec<u8>>("{}").unwrap_err();
    assert_eq!(&unexpected("`[`", '{'), err.kind());

    let err = from_str::<Person>("[]").unwrap_err();
    assert_eq!(&unexpected("`{`", '['), err.kind());

    let err = from_str::<String>("1").unwrap_err();
    assert_eq!(&unexpected("`\"`", '1'), err.kind());

    let err = from_str::<bool>("1").unwrap_err();
    assert_eq!(&unexpected("`true` or `false`", '1'), err.kind());
}

#[test]
fn err_malformed_literal() {
    let err = from_str::<bool>("trie").unwrap_err();
    assert_eq!(&ErrorKind::MalformedLiteral("true"), err.kind());

    let err = from_str::<Option<u8>>("nul}").unwrap_err();
    assert_eq!(&ErrorKind::MalformedLiteral("null"), err.kind());

    let err = from_str::<bool>("fals").unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn err_empty_input() {
    assert!(from_str::<u8>("").unwrap_err().is_eof());
    assert!(from_str::<Person>("  ").unwrap_err().is_eof());
    assert!(Value::parse_str("").unwrap_err().is_eof());
}

#[test]
fn err_number_out_of_range() {
    let err = from_str::<u8>("300").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    let err = from_str::<u8>("-1").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    let err = from_str::<i32>("1e10").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    let err = from_str::<f64>("1e400").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    // exponents that land exactly one past the largest value
    let err = from_str::<u64>("1.8446744073709551616e19").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    let err = from_str::<i64>("9.223372036854775808e18").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    let err = from_str::<u8>("2.56e2").unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());

    let err = from_str::<Person>(r#"{"age":99999999999}"#).unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());
    assert_eq!(Some(7), err.offset());
}

#[test]
fn err_malformed_number() {
    for input in ["-", "1.", "1.e5", "1e", "1e+", ".5", "-x"] {
        assert!(from_str::<f64>(input).is_err(), "{}", input);
    }

    // leading zeros stop the number early
    let err = from_str::<u8>("01").unwrap_err();
    assert_eq!(&ErrorKind::TrailingCharacters, err.kind());
}

#[test]
fn err_trailing_characters() {
    let err = from_str::<Person>("{} x").unwrap_err();

    assert_eq!(&ErrorKind::TrailingCharacters, err.kind());
    assert_eq!(Some(3), err.offset());
}

#[test]
fn err_comments_outside_unknown_values() {
    assert!(from_str::<Person>("// comment\n{}").is_err());
    assert!(from_str::<Person>(r#"{"id": /* comment */ 1}"#).is_err());
    assert!(Value::parse_str("[1 /* comment */]").is_err());
}

#[test]
#[cfg(not(strict_keys))]
fn err_unterminated_comment_in_unknown_value() {
    let err = from_str::<Person>(r#"{"bogus": /* never closed 1}"#).unwrap_err();

    assert!(err.is_eof());
}

#[test]
#[cfg(strict_keys)]
fn err_unknown_key() {
    let err = from_str::<Person>(r#"{"id":1,"bogus":{"a":[1,2,3]}}"#).unwrap_err();

    assert_eq!(&ErrorKind::UnknownKey("bogus".to_owned()), err.kind());
    assert_eq!(Some(9), err.offset());
}

#[test]
fn err_invalid_escape() {
    for input in [
        r#""\j""#,
        r#""\u58""#,
        r#""\u""#,
        r#""\u58\r""#,
        r#""\ud83d""#,
        r#""\ud83d\ude""#,
        r#""\ud83dsome bytes \ude04""#,
        r#""\ude04""#,
        "\"\\😄 and some more\"",
    ] {
        let err = from_str::<String>(input).unwrap_err();

        assert_eq!(&ErrorKind::InvalidEscape, err.kind(), "{}", input);
        assert_eq!(Some(1), err.offset(), "{}", input);
    }
}

#[test]
fn err_invalid_escape_offset() {
    let err = from_str::<Person>(r#"{"name":"abc\q"}"#).unwrap_err();

    assert_eq!(&ErrorKind::InvalidEscape, err.kind());
    assert_eq!(Some(12), err.offset());
}

#[test]
fn err_unterminated_string() {
    assert!(from_str::<String>(r#""this string is not finished"#).unwrap_err().is_eof());
    assert!(from_str::<String>(r#""ends in an escape\""#).unwrap_err().is_eof());
}

#[test]
fn err_escaped_borrow() {
    let err = from_str::<&str>(r#""esc\naped""#).unwrap_err();
    assert_eq!(&ErrorKind::EscapedBorrow, err.kind());

    let err = from_str::<Book>(r#"{"title":"\u0041"}"#).unwrap_err();
    assert_eq!(&ErrorKind::EscapedBorrow, err.kind());
}

#[test]
fn err_invalid_char() {
    assert!(from_str::<char>(r#""ab""#).is_err());
    assert!(from_str::<char>(r#""""#).is_err());
}

#[test]
fn err_invalid_enum_value() {
    let err = from_str::<Level>(" 7").unwrap_err();

    assert_eq!(&ErrorKind::InvalidEnumValue(7), err.kind());
    assert_eq!(Some(1), err.offset());
}

#[test]
fn err_fixed_array_too_long() {
    let err = from_str::<[u8; 2]>("[1,2,3]").unwrap_err();

    assert_eq!(&unexpected("`]`", '3'), err.kind());
}

#[test]
fn err_tuple_too_long() {
    let err = from_str::<(u8,)>("[1, 2]").unwrap_err();

    assert_eq!(&unexpected("`]`", '2'), err.kind());
}

#[test]
fn err_invalid_map_key() {
    let err = from_str::<HashMap<u32, u8>>(r#"{"x":1}"#).unwrap_err();
    assert_eq!(&ErrorKind::NumberParse, err.kind());
    assert_eq!(Some(2), err.offset());

    let err = from_str::<HashMap<u32, u8>>(r#"{"1 2":1}"#).unwrap_err();
    assert_eq!(&ErrorKind::TrailingCharacters, err.kind());
    assert_eq!(Some(4), err.offset());
}

#[test]
fn err_invalid_utf8() {
    let err = from_slice::<String>(b"\"\xff\"").unwrap_err();

    assert_eq!(&ErrorKind::InvalidUtf8, err.kind());
    assert_eq!(Some(1), err.offset());
}

#[test]
fn err_depth_limit() {
    let depth = crate::config::MAX_DEPTH + 1;
    let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let err = Value::parse_str(&input).unwrap_err();
    assert_eq!(&ErrorKind::DepthLimitExceeded, err.kind());

    let err = Value::parse_str(&"[".repeat(100_000)).unwrap_err();
    assert_eq!(&ErrorKind::DepthLimitExceeded, err.kind());
}

#[test]
#[cfg(not(strict_keys))]
fn err_depth_limit_in_unknown_value() {
    let depth = crate::config::MAX_DEPTH;
    let input = format!(r#"{{"bogus":{}{}}}"#, "[".repeat(depth), "]".repeat(depth));

    // the record itself counts towards the limit
    let err = from_str::<Person>(&input).unwrap_err();
    assert_eq!(&ErrorKind::DepthLimitExceeded, err.kind());
}

#[test]
fn err_leaves_partial_result() {
    let mut person = Person::default();

    let err = decode_str(&mut person, r#"{"id":1,"name":"x","age":"old"}"#).unwrap_err();

    assert_eq!(&ErrorKind::NumberParse, err.kind());
    assert_eq!(1, person.id);
    assert_eq!("x", person.name);
}

#[test]
fn err_display() {
    let err = from_str::<Person>(r#"{"id" 1}"#).unwrap_err();

    assert_eq!("expected `:`, found `1` at offset 6", err.to_string());
}
