/*!
A dynamic JSON value.

[`Value`] is used when there's no static type to decode into. Objects keep
their members in the order they appeared in the input and, unlike records,
reject duplicate keys.

Values come in two modes. Views, from [`Value::parse_str`], borrow strings
and keys from the input whenever they contain no escapes, so they can't
outlive it. Copies, from [`Value::parse_owned`], own all their strings.
*/

mod parse;

use std::{borrow::Cow, fmt, path::Path};

use indexmap::IndexMap;

use crate::{
    de::{Cursor, Decode},
    error::Error,
    fs,
    ser::{escape::encode_str, Encode},
    shape::{Shape, Shaped},
};

/**
The members of a JSON object, in the order they were parsed.
*/
pub type Object<'a> = IndexMap<Cow<'a, str>, Value<'a>>;

/**
Any JSON value.
*/
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value<'a> {
    #[default]
    Null,
    Bool(bool),
    /// A number that's exactly representable as an `i64`.
    Int(i64),
    Float(f64),
    Str(Cow<'a, str>),
    Array(Vec<Value<'a>>),
    Object(Object<'a>),
}

/**
The kind of a [`Value`], without its contents.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Array,
    Object,
}

impl<'a> Value<'a> {
    /**
    Parse a complete JSON document, borrowing unescaped strings from it.
    */
    pub fn parse_str(input: &'a str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);

        let value = parse::parse_value(&mut cursor, parse::view)?;
        cursor.finish()?;

        Ok(value)
    }

    /**
    Parse a complete JSON document in a UTF8 byte buffer, borrowing unescaped strings from it.
    */
    pub fn parse_slice(input: &'a [u8]) -> Result<Self, Error> {
        let mut cursor = Cursor::from_slice(input)?;

        let value = parse::parse_value(&mut cursor, parse::view)?;
        cursor.finish()?;

        Ok(value)
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /**
    Get the value as a float.

    Integers are converted, which may lose precision for very large values.
    */
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Value::Object(v) => Some(v),
            _ => None,
        }
    }

    /**
    Get a member of an object by its key.

    This returns `None` if the value isn't an object or doesn't have the key.
    */
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.as_object().and_then(|object| object.get(key))
    }

    /**
    Copy any borrowed strings so the value no longer depends on its input.
    */
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(v) => Value::Bool(v),
            Value::Int(v) => Value::Int(v),
            Value::Float(v) => Value::Float(v),
            Value::Str(v) => Value::Str(Cow::Owned(v.into_owned())),
            Value::Array(v) => Value::Array(v.into_iter().map(Value::into_owned).collect()),
            Value::Object(v) => Value::Object(
                v.into_iter()
                    .map(|(k, v)| (Cow::Owned(k.into_owned()), v.into_owned()))
                    .collect(),
            ),
        }
    }

    /**
    Convert the value into a `serde_json::Value`.
    */
    #[cfg(any(test, feature = "serde_json"))]
    pub fn to_serde_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(*v),
            Value::Int(v) => serde_json::Value::Number((*v).into()),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(v) => serde_json::Value::String(v.to_string()),
            Value::Array(v) => serde_json::Value::Array(v.iter().map(Value::to_serde_json).collect()),
            Value::Object(v) => serde_json::Value::Object(
                v.iter()
                    .map(|(k, v)| (k.to_string(), v.to_serde_json()))
                    .collect(),
            ),
        }
    }
}

impl Value<'static> {
    /**
    Parse a complete JSON document into a value that owns all its strings.
    */
    pub fn parse_owned(input: &str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);

        let value = parse::parse_value(&mut cursor, parse::copy)?;
        cursor.finish()?;

        Ok(value)
    }
}

/**
Read and parse a whole file into a value that owns all its strings.
*/
pub fn from_file(path: impl AsRef<Path>) -> Result<Value<'static>, Error> {
    let input = fs::read_file(path.as_ref())?;

    Value::parse_owned(&input)
}

impl<'a> Shaped for Value<'a> {
    const SHAPE: Shape = Shape::Value;
}

impl<'de> Decode<'de> for Value<'de> {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        *self = parse::parse_value(cursor, parse::view)?;

        Ok(())
    }
}

impl<'a> Encode for Value<'a> {
    fn encode(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(v) => v.encode(out),
            Value::Int(v) => v.encode(out),
            Value::Float(v) => v.encode(out),
            Value::Str(v) => encode_str(v, out),
            Value::Array(v) => v.encode(out),
            Value::Object(v) => {
                out.push('{');

                for (i, (k, v)) in v.iter().enumerate() {
                    if i != 0 {
                        out.push(',');
                    }

                    encode_str(k, out);
                    out.push(':');
                    v.encode(out);
                }

                out.push('}');
            }
        }
    }
}

impl<'a> fmt::Display for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();
        self.encode(&mut out);

        f.write_str(&out)
    }
}
