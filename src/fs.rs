/*!
Loading whole JSON files.

The file is read into memory in one go before anything is decoded.
*/

use std::{fs, io, path::Path};

use crate::{
    de::{self, DecodeOwned},
    error::{Error, ErrorKind},
};

/**
Read a whole file as UTF8 text.
*/
pub(crate) fn read_file(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::detached(ErrorKind::FileNotFound(path.to_owned())),
        kind => Error::detached(ErrorKind::Io {
            path: path.to_owned(),
            kind,
        }),
    })?;

    if bytes.is_empty() {
        return Err(Error::detached(ErrorKind::EmptyFile(path.to_owned())));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded file");

    String::from_utf8(bytes)
        .map_err(|err| Error::at(ErrorKind::InvalidUtf8, err.utf8_error().valid_up_to()))
}

/**
Decode a whole file into an existing value.
*/
pub fn decode_file<T: DecodeOwned>(dst: &mut T, path: impl AsRef<Path>) -> Result<(), Error> {
    let input = read_file(path.as_ref())?;

    de::decode_str(dst, &input)
}

/**
Decode a whole file into a new value.
*/
pub fn from_file<T: DecodeOwned + Default>(path: impl AsRef<Path>) -> Result<T, Error> {
    let mut value = T::default();
    decode_file(&mut value, path)?;

    Ok(value)
}
