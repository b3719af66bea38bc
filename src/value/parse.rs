use std::borrow::Cow;

use crate::{
    de::{decode_array, decode_object, to_finite_f64, Cursor, Num, Str, Token},
    error::{Error, ErrorKind},
};

use super::{Object, Value};

/**
How the strings of a value are produced from the input.

Views borrow from the input whenever a string has no escapes. Copies always own their strings.
*/
pub(super) type Strings<'de, 'v> = fn(Str<'de>) -> Result<Cow<'v, str>, Error>;

pub(super) fn view<'de>(s: Str<'de>) -> Result<Cow<'de, str>, Error> {
    s.to_unescaped()
}

pub(super) fn copy(s: Str) -> Result<Cow<'static, str>, Error> {
    Ok(Cow::Owned(s.to_unescaped()?.into_owned()))
}

/**
Parse the next complete value at the cursor.
*/
pub(super) fn parse_value<'de, 'v>(
    cursor: &mut Cursor<'de>,
    strings: Strings<'de, 'v>,
) -> Result<Value<'v>, Error> {
    match cursor.peek_token()? {
        Token::Null => {
            cursor.match_literal("null")?;
            Ok(Value::Null)
        }
        Token::Bool => Ok(Value::Bool(cursor.scan_bool()?)),
        Token::Num => parse_number(cursor.scan_number()?),
        Token::Str => Ok(Value::Str(strings(cursor.scan_str()?)?)),
        Token::Array => {
            let mut array = Vec::new();

            decode_array(cursor, |_, cursor| {
                array.push(parse_value(cursor, strings)?);
                Ok(())
            })?;

            Ok(Value::Array(array))
        }
        Token::Object => {
            let mut object = Object::new();

            decode_object(cursor, |key, cursor| {
                let offset = key.offset();
                let key = strings(key)?;

                if object.contains_key(&*key) {
                    return Err(Error::at(ErrorKind::DuplicateKey(key.into_owned()), offset));
                }

                let value = parse_value(cursor, strings)?;
                object.insert(key, value);

                Ok(())
            })?;

            Ok(Value::Object(object))
        }
    }
}

/**
Integers that fit an `i64` are kept exact. Everything else goes through a
float, which is narrowed back to an integer if nothing is lost in doing so.
*/
fn parse_number<'v>(num: Num) -> Result<Value<'v>, Error> {
    if num.is_integral() {
        if let Ok(int) = num.as_str().parse::<i64>() {
            return Ok(Value::Int(int));
        }
    }

    let float = to_finite_f64(num)?;
    let int = float as i64;

    if float.fract() == 0.0 && int as f64 == float && int != i64::MAX {
        Ok(Value::Int(int))
    } else {
        Ok(Value::Float(float))
    }
}
