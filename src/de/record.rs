use super::{container::decode_object, Cursor, Str};

use crate::{
    config::{self, UnknownKeys},
    error::{Error, ErrorKind},
    registry::Record,
};

/**
Decode an object into the fields of a record.

Keys are looked up in the record's registry. A leading `@` on a key is
ignored, so `"@id"` and `"id"` both reach the field keyed `id`. Members with
keys the record doesn't declare are skipped or fail the decode, depending on
how the crate was built.

If the same key appears more than once, the last value wins.
Fields that don't appear in the input keep whatever value they had.
*/
pub fn decode_record<'de, R: Record<'de>>(record: &mut R, cursor: &mut Cursor<'de>) -> Result<(), Error> {
    let registry = R::registry();
    let mut scratch = String::new();

    decode_object(cursor, |key, cursor| {
        let name = key_name(key, &mut scratch)?;

        match registry.lookup(name) {
            Some(field) => record.decode_field(field, cursor),
            None => unknown_key(registry.record(), key, name, cursor),
        }
    })
}

/**
Get the text of a key, unescaping it into `scratch` if needed.
*/
#[inline]
fn key_name<'a>(key: Str<'a>, scratch: &'a mut String) -> Result<&'a str, Error> {
    let name = if key.is_escaped() {
        scratch.clear();
        key.unescape_into(scratch)?;

        scratch.as_str()
    } else {
        key.as_raw()
    };

    Ok(name.strip_prefix('@').unwrap_or(name))
}

#[cold]
fn unknown_key(record: &'static str, key: Str, name: &str, cursor: &mut Cursor) -> Result<(), Error> {
    match config::UNKNOWN_KEYS {
        UnknownKeys::Skip => {
            tracing::trace!(record, key = name, "skipping unknown key");

            cursor.skip_value()
        }
        UnknownKeys::Fail => Err(Error::at(ErrorKind::UnknownKey(name.to_owned()), key.offset())),
    }
}
