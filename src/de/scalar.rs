use std::borrow::Cow;

use super::{Cursor, Decode, Num};

use crate::{
    error::{Error, ErrorKind},
    shape::Shaped,
};

impl<'de> Decode<'de> for bool {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        *self = cursor.scan_bool()?;

        Ok(())
    }
}

macro_rules! decode_int {
    ($($ty:ty),+) => {
        $(
            impl<'de> Decode<'de> for $ty {
                #[inline]
                fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
                    let num = cursor.scan_number()?;

                    *self = if num.is_integral() {
                        match num.parse() {
                            Ok(value) => value,
                            // `-0` is zero, but unsigned parsers reject the sign
                            Err(_) if is_negative_zero(num.as_str()) => 0,
                            Err(err) => return Err(err),
                        }
                    } else {
                        // numbers with a fraction or exponent are truncated
                        let truncated = to_finite_f64(num)?.trunc();

                        // `MAX as f64` may round up to the next power of two, which is out of range
                        if truncated >= <$ty>::MIN as f64 && truncated < <$ty>::MAX as f64 + 1.0 {
                            truncated as $ty
                        } else {
                            return Err(Error::at(ErrorKind::NumberParse, num.offset()));
                        }
                    };

                    Ok(())
                }
            }
        )+
    };
}

decode_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[inline]
fn is_negative_zero(num: &str) -> bool {
    num.strip_prefix('-')
        .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b == b'0'))
        .unwrap_or(false)
}

impl<'de> Decode<'de> for f64 {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        *self = to_finite_f64(cursor.scan_number()?)?;

        Ok(())
    }
}

impl<'de> Decode<'de> for f32 {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        let num = cursor.scan_number()?;
        let value: f32 = num.parse()?;

        if value.is_finite() {
            *self = value;
            Ok(())
        } else {
            Err(Error::at(ErrorKind::NumberParse, num.offset()))
        }
    }
}

/**
Parse a number as a float, treating overflow to infinity as out of range.
*/
#[inline]
pub(crate) fn to_finite_f64(num: Num) -> Result<f64, Error> {
    let value: f64 = num.parse()?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::at(ErrorKind::NumberParse, num.offset()))
    }
}

impl<'de> Decode<'de> for char {
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        let s = cursor.scan_str()?;
        let unescaped = s.to_unescaped()?;

        let mut chars = unescaped.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                *self = ch;
                Ok(())
            }
            (_, found) => Err(Error::at(
                ErrorKind::UnexpectedToken {
                    expected: "a single character",
                    found: found.unwrap_or('"'),
                },
                s.offset(),
            )),
        }
    }
}

impl<'de> Decode<'de> for String {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        let s = cursor.scan_str()?;

        self.clear();
        s.unescape_into(self)
    }
}

impl<'de> Decode<'de> for &'de str {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        *self = cursor.scan_str()?.to_borrowed()?;

        Ok(())
    }
}

impl<'de> Decode<'de> for Cow<'de, str> {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        *self = cursor.scan_str()?.to_unescaped()?;

        Ok(())
    }
}

impl<'de, T: Decode<'de> + Shaped + ?Sized> Decode<'de> for Box<T> {
    #[inline]
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        (**self).decode(cursor)
    }
}
