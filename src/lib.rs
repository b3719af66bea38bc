/*!
# `acorn-json`

## 🌰⚡

A type-directed JSON codec. Structs are described once with [`record!`] and
from then on can be decoded from and encoded to JSON without any runtime
reflection. Object keys are resolved to fields through a registry that's
built the first time a record type is used and is immutable afterwards.

```
#[derive(Debug, Default, PartialEq)]
struct Person {
    id: u64,
    name: String,
    age: i32,
}

acorn_json::record!(Person { id, name, age });

let person: Person = acorn_json::from_str(r#"{"name":"tom","age":20,"id":1}"#).unwrap();

assert_eq!(r#"{"id":1,"name":"tom","age":20}"#, acorn_json::to_string(&person));
```

When there's no static type to decode into, the dynamic [`Value`] model
can represent any JSON document.

## Decoding

Decoding is driven by the [`Shape`] of the destination, which is fixed by
the type. Every shape has a single strategy, so a `Vec<T>` is always an
array, a `HashMap<K, V>` is always an object, and so on.

A few things worth knowing:

- Keys in records can appear in any order. A leading `@` on a key is ignored.
- Keys a record doesn't declare are skipped, along with their values. Building
  with the `strict-keys` feature makes them fail the decode instead.
- If the same key appears more than once in a record, the last value wins.
  The dynamic [`Value`] rejects duplicate keys instead.
- A failed decode may leave the destination partially written.
- Documents can't nest more than [`config::MAX_DEPTH`] records, arrays and objects deep.

## ⚠️ CAREFUL

Some scanning uses unchecked indexing. Any unchecked operations performed on
the input are done using macros that use the checked variant in test/debug
builds (or when the `checked` cfg is enabled) to make sure we don't ever
cause UB when working through documents.
*/

#![cfg_attr(published, deny(warnings))]
#![allow(clippy::question_mark, clippy::len_without_is_empty)]

#[macro_use]
mod macros;

mod std_ext;
mod unescape;

pub mod config;
pub mod de;
pub mod error;
pub mod fs;
pub mod key;
mod record;
pub mod registry;
pub mod ser;
pub mod shape;
pub mod value;

pub use self::{
    de::{decode_slice, decode_str, from_slice, from_str, Cursor, Decode, DecodeOwned},
    error::{Error, ErrorKind},
    fs::{decode_file, from_file},
    key::{DecodeKey, EncodeKey},
    registry::{Field, FieldRegistry, Record},
    ser::{encode_into, to_string, to_vec, Encode},
    shape::{Shape, Shaped},
    value::{Value, ValueKind},
};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;
}
