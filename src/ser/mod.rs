/*!
Type-directed encoding.

Encoding mirrors decoding: each shape has a single [`Encode`] implementation
that appends compact JSON to a `String`. There's no whitespace in the output,
records write their fields in declaration order, and encoding can't fail.
*/

mod container;
pub(crate) mod escape;
mod scalar;

use crate::{registry::Record, shape::Shaped};

/**
A type that can be encoded as JSON.
*/
pub trait Encode: Shaped {
    /**
    Append the value to the end of a buffer.
    */
    fn encode(&self, out: &mut String);
}

/**
Encode a value as a compact JSON string.
*/
#[inline]
pub fn to_string<T: Encode + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.encode(&mut out);

    out
}

/**
Encode a value as compact JSON in a UTF8 byte buffer.
*/
#[inline]
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    to_string(value).into_bytes()
}

/**
Append a value as compact JSON to the end of an existing buffer.
*/
#[inline]
pub fn encode_into<T: Encode + ?Sized>(value: &T, out: &mut String) {
    value.encode(out)
}

/**
Encode a record as an object with its fields in declaration order.
*/
pub fn encode_record<'de, R: Record<'de>>(record: &R, out: &mut String) {
    let registry = R::registry();

    out.push('{');

    for field in registry.fields() {
        if field.index() != 0 {
            out.push(',');
        }

        out.push_str(registry.encoded_key(field));
        record.encode_field(field, out);
    }

    out.push('}');
}
