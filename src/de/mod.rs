/*!
Type-directed decoding.

Decoding is driven by the static shape of the destination. Each shape has a
single [`Decode`] implementation that consumes the tokens it expects from a
[`Cursor`] and writes them into an existing value. Records consult their
field registry to find which field a key belongs to, then recurse into that
field's shape.

Decoding writes into the destination as it goes. If an error is hit partway
through, the destination is left with whatever was decoded up to that point.
Sequences are cleared before their first element is decoded, but nothing
else is reset.

The parser is recursive, with an explicit limit on how deeply records, arrays
and objects can nest. All scratch space used for unescaping is owned by the
call that needs it.
*/

mod container;
mod cursor;
mod record;
mod scalar;

use crate::{error::Error, shape::Shaped};

pub use self::{
    cursor::{Cursor, Num, Str, Token},
    record::decode_record,
};

pub(crate) use self::{
    container::{decode_array, decode_object},
    scalar::to_finite_f64,
};

/**
A type that can be decoded from JSON.

The `'de` lifetime is the lifetime of the input, for types that borrow from it.
*/
pub trait Decode<'de>: Shaped {
    /**
    Decode the value at the cursor into `self`.
    */
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error>;
}

/**
A type that can be decoded from JSON without borrowing from the input.
*/
pub trait DecodeOwned: for<'de> Decode<'de> {}

impl<T> DecodeOwned for T where T: for<'de> Decode<'de> {}

/**
Decode a complete JSON document into an existing value.

Whitespace is allowed around the value, but nothing else.
*/
#[inline]
pub fn decode_str<'de, T: Decode<'de>>(dst: &mut T, input: &'de str) -> Result<(), Error> {
    let mut cursor = Cursor::new(input);

    dst.decode(&mut cursor)?;
    cursor.finish()
}

/**
Decode a complete JSON document in a UTF8 byte buffer into an existing value.
*/
#[inline]
pub fn decode_slice<'de, T: Decode<'de>>(dst: &mut T, input: &'de [u8]) -> Result<(), Error> {
    let mut cursor = Cursor::from_slice(input)?;

    dst.decode(&mut cursor)?;
    cursor.finish()
}

/**
Decode a complete JSON document into a new value.
*/
#[inline]
pub fn from_str<'de, T: Decode<'de> + Default>(input: &'de str) -> Result<T, Error> {
    let mut value = T::default();
    decode_str(&mut value, input)?;

    Ok(value)
}

/**
Decode a complete JSON document in a UTF8 byte buffer into a new value.
*/
#[inline]
pub fn from_slice<'de, T: Decode<'de> + Default>(input: &'de [u8]) -> Result<T, Error> {
    let mut value = T::default();
    decode_slice(&mut value, input)?;

    Ok(value)
}
