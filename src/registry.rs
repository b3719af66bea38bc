/*!
Field registries for records.

A record is a struct whose fields have been described once, in order, by the
[`record!`](crate::record) macro. From that description a [`FieldRegistry`]
is built the first time the record is decoded or encoded. The registry maps
JSON keys to [`Field`]s, which the record's own [`Record::decode_field`] and
[`Record::encode_field`] use to reach the right struct field.

Registries are built inside a one-time initialization cell and are never
mutated afterwards, so any number of threads can decode the same record type
at once.
*/

use std::fmt;

use hashbrown::HashMap;

use crate::{de::Cursor, error::Error, ser::escape::encode_str};

/**
A handle to a single field of a record.

Fields are the position of the field in the record's declaration.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field(usize);

impl Field {
    /**
    The position of the field in the record's declaration.
    */
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/**
The immutable mapping from JSON keys to the fields of a record.
*/
pub struct FieldRegistry {
    record: &'static str,
    keys: Box<[&'static str]>,
    lookup: HashMap<&'static str, Field>,
    /**
    Each key as an escaped JSON string followed by a `:`, ready to be written.
    */
    encoded_keys: Box<[Box<str>]>,
}

/**
A record type with a registry of its fields.

This trait is implemented by the [`record!`](crate::record) macro.
The `'de` lifetime is the lifetime of the input borrowed fields point into.
*/
pub trait Record<'de>: Sized {
    /**
    The registry of fields for this record type.
    */
    fn registry() -> &'static FieldRegistry;

    /**
    Decode the value at the cursor into the given field.
    */
    fn decode_field(&mut self, field: Field, cursor: &mut Cursor<'de>) -> Result<(), Error>;

    /**
    Encode the given field onto the end of a buffer.
    */
    fn encode_field(&self, field: Field, out: &mut String);
}

impl FieldRegistry {
    /**
    Build a registry from the keys of a record's fields, in declaration order.

    # Panics

    This method panics if the same key is declared more than once.
    That's a mistake in the record's description rather than its input.
    */
    pub fn new(record: &'static str, keys: &[&'static str]) -> Self {
        let mut lookup = HashMap::with_capacity(keys.len());

        for (index, key) in keys.iter().enumerate() {
            let existing = lookup.insert(*key, Field(index));

            assert!(
                existing.is_none(),
                "record `{}` declares the key `{}` more than once",
                record,
                key
            );
        }

        let encoded_keys = keys
            .iter()
            .map(|key| {
                let mut encoded = String::with_capacity(key.len() + 3);
                encode_str(key, &mut encoded);
                encoded.push(':');

                encoded.into_boxed_str()
            })
            .collect();

        tracing::debug!(record, fields = keys.len(), "built field registry");

        FieldRegistry {
            record,
            keys: keys.into(),
            lookup,
            encoded_keys,
        }
    }

    /**
    The name of the record this registry describes.
    */
    #[inline]
    pub fn record(&self) -> &'static str {
        self.record
    }

    /**
    The number of fields in the record.
    */
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /**
    Find the field for a JSON key.

    Keys are matched exactly.
    */
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<Field> {
        self.lookup.get(key).copied()
    }

    /**
    The key of a field.
    */
    #[inline]
    pub fn key(&self, field: Field) -> &'static str {
        self.keys[field.0]
    }

    /**
    Iterate through the fields in declaration order.
    */
    #[inline]
    pub fn fields(&self) -> impl ExactSizeIterator<Item = Field> {
        (0..self.keys.len()).map(Field)
    }

    #[inline]
    pub(crate) fn encoded_key(&self, field: Field) -> &str {
        &self.encoded_keys[field.0]
    }
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("record", &self.record)
            .field("keys", &self.keys)
            .finish()
    }
}
