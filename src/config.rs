/*!
Process-wide decoding configuration.

These are fixed when the crate is built rather than chosen per call.
*/

/**
What a record does with a key it doesn't declare.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Skip the key's value, whatever its structure.
    Skip,
    /// Fail the whole decode.
    Fail,
}

/**
The unknown-key policy this crate was built with.

This is `Skip` unless the `strict-keys` feature (or the `ACORNJSON_STRICT_KEYS`
environment variable at build time) is enabled.
*/
#[cfg(not(strict_keys))]
pub const UNKNOWN_KEYS: UnknownKeys = UnknownKeys::Skip;

#[cfg(strict_keys)]
pub const UNKNOWN_KEYS: UnknownKeys = UnknownKeys::Fail;

/**
A cap on the maximum nesting of records, arrays and objects in a document.

It makes sure degenerate inputs like `[[[[[[[[[[[[[[[[[[[[[[[[[..`
can't exhaust the stack.
*/
pub const MAX_DEPTH: usize = 128;
