/*!
Types that can be used as the keys of maps.

JSON object keys are always strings. String-like keys are taken as-is, while
numbers, booleans and characters are parsed out of the key's text and written
back into it quoted.
*/

use std::borrow::Cow;

use crate::{
    de::{Cursor, DecodeOwned, Str},
    error::{Error, ErrorKind},
    ser::{escape::encode_str, Encode},
};

/**
A type that can be decoded from the key of an object member.
*/
pub trait DecodeKey<'de>: Sized {
    /**
    Convert the key of an object member.
    */
    fn from_key(key: Str<'de>) -> Result<Self, Error>;
}

/**
A type that can be encoded as the key of an object member.
*/
pub trait EncodeKey {
    /**
    Encode the key as a quoted JSON string onto the end of a buffer.
    */
    fn encode_key(&self, out: &mut String);
}

impl<'de> DecodeKey<'de> for String {
    #[inline]
    fn from_key(key: Str<'de>) -> Result<Self, Error> {
        Ok(key.to_unescaped()?.into_owned())
    }
}

impl<'de> DecodeKey<'de> for &'de str {
    #[inline]
    fn from_key(key: Str<'de>) -> Result<Self, Error> {
        key.to_borrowed()
    }
}

impl<'de> DecodeKey<'de> for Cow<'de, str> {
    #[inline]
    fn from_key(key: Str<'de>) -> Result<Self, Error> {
        key.to_unescaped()
    }
}

impl<'de> DecodeKey<'de> for char {
    fn from_key(key: Str<'de>) -> Result<Self, Error> {
        let text = key.to_unescaped()?;

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            (_, found) => Err(Error::at(
                ErrorKind::UnexpectedToken {
                    expected: "a single character",
                    found: found.unwrap_or('"'),
                },
                key.offset(),
            )),
        }
    }
}

impl EncodeKey for String {
    #[inline]
    fn encode_key(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl<'a> EncodeKey for &'a str {
    #[inline]
    fn encode_key(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl<'a> EncodeKey for Cow<'a, str> {
    #[inline]
    fn encode_key(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl EncodeKey for char {
    #[inline]
    fn encode_key(&self, out: &mut String) {
        self.encode(out)
    }
}

/**
Parse a key's text as a complete JSON value.

Errors are reported against the key's position in the original input.
*/
fn parse_key<T: DecodeOwned + Default>(key: Str) -> Result<T, Error> {
    let text = key.to_unescaped()?;
    let mut cursor = Cursor::new(&text);

    let mut value = T::default();
    value
        .decode(&mut cursor)
        .and_then(|_| cursor.finish())
        .map_err(|err| match (key.is_escaped(), err.offset()) {
            // offsets into unescaped text don't line up with the input
            (false, Some(offset)) => err.relocate(key.offset() + offset),
            _ => err.relocate(key.offset()),
        })?;

    Ok(value)
}

macro_rules! quoted_key {
    ($($ty:ty),+) => {
        $(
            impl<'de> DecodeKey<'de> for $ty {
                #[inline]
                fn from_key(key: Str<'de>) -> Result<Self, Error> {
                    parse_key(key)
                }
            }

            impl EncodeKey for $ty {
                #[inline]
                fn encode_key(&self, out: &mut String) {
                    out.push('"');
                    self.encode(out);
                    out.push('"');
                }
            }
        )+
    };
}

quoted_key!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
