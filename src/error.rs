/*!
Errors produced while decoding JSON.

Every failure in the scanner, the decoder and the dynamic value parser
surfaces as a single [`Error`] that aborts the whole call. There's no local
recovery: callers either propagate the error with `?` or inspect its
[`ErrorKind`] as a status.
*/

use std::{io, path::PathBuf};

/**
A failure to decode a JSON document.

The offset, when present, is the byte position in the input where the
problem was detected.
*/
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}{}", .offset.map(|offset| format!(" at offset {}", offset)).unwrap_or_default())]
pub struct Error {
    kind: ErrorKind,
    offset: Option<usize>,
}

/**
The kind of failure that stopped decoding.
*/
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A `true`, `false` or `null` literal was misspelt.
    #[error("expected `{0}`")]
    MalformedLiteral(&'static str),
    /// The input ended while a token was still expected.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A delimiter or opening character wasn't the one expected.
    #[error("expected {expected}, found `{}`", .found.escape_debug())]
    UnexpectedToken { expected: &'static str, found: char },
    /// A number was malformed or doesn't fit its destination.
    #[error("failed to parse number")]
    NumberParse,
    /// An escape sequence in a string was unknown, truncated or an unpaired surrogate.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A record saw a key it doesn't declare while strict keys are enabled.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    /// A dynamic object contained the same key twice.
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),
    /// The document nests deeper than the configured maximum.
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
    /// The input isn't valid UTF8.
    #[error("input is not valid UTF8")]
    InvalidUtf8,
    /// There's non-whitespace content after the decoded value.
    #[error("trailing characters after value")]
    TrailingCharacters,
    /// A borrowed string destination was given escaped content.
    #[error("escaped strings can't be borrowed from the input")]
    EscapedBorrow,
    /// An integer didn't match any variant of an enumeration.
    #[error("{0} is not a valid enumeration value")]
    InvalidEnumValue(i128),
    /// The file to load doesn't exist.
    #[error("file `{}` not found", .0.display())]
    FileNotFound(PathBuf),
    /// The file to load is empty.
    #[error("file `{}` is empty", .0.display())]
    EmptyFile(PathBuf),
    /// The file to load couldn't be read.
    #[error("failed to read `{}`: {kind}", .path.display())]
    Io { path: PathBuf, kind: io::ErrorKind },
}

impl Error {
    #[cold]
    pub(crate) fn at(kind: ErrorKind, offset: usize) -> Self {
        Error {
            kind,
            offset: Some(offset),
        }
    }

    #[cold]
    pub(crate) fn detached(kind: ErrorKind) -> Self {
        Error { kind, offset: None }
    }

    /**
    The kind of failure.
    */
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /**
    The byte offset in the input where the failure was detected, if it came from the input.
    */
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /**
    Whether the failure was caused by the input ending too early.
    */
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEnd)
    }

    /**
    Move the error to a different position.

    Used when a fragment of the input, like a map key, is decoded with its own cursor.
    */
    #[inline]
    pub(crate) fn relocate(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error::detached(kind)
    }
}
