/*!
String unescaping for JSON strings.

The cursor only finds the closing quote of a string, skipping over anything
that follows a `\`. Escapes are validated and decoded here, when a caller
actually needs the unescaped content.

Runs of bytes between escapes are copied in one go. Buffers are always owned
by the caller, so concurrent decodes never share scratch space.
*/

use crate::{
    error::{Error, ErrorKind},
    std_ext::char::{is_high_surrogate, try_from_hex4, try_from_utf16_surrogate_pair},
};

/**
Unescape the body of a JSON string (without its quotes) onto the end of `buf`.

The `offset` is the position of `raw` in the original input, used to report errors.
*/
pub(crate) fn unescape_into(raw: &str, offset: usize, buf: &mut String) -> Result<(), Error> {
    let input = raw.as_bytes();

    buf.reserve(input.len());

    let mut start = 0;
    while let Some(found) = memchr::memchr(b'\\', get_unchecked!(input, start..)) {
        let escape_offset = start + found;

        // flush everything before the escape
        buf.push_str(str_get_unchecked!(raw, start..escape_offset));

        let (ch, read) = unescape_one(input, escape_offset)
            .ok_or_else(|| Error::at(ErrorKind::InvalidEscape, offset + escape_offset))?;

        buf.push(ch);
        start = escape_offset + read;
    }

    buf.push_str(str_get_unchecked!(raw, start..));

    Ok(())
}

/**
Unescape the body of a JSON string into a new buffer.
*/
pub(crate) fn unescape(raw: &str, offset: usize) -> Result<String, Error> {
    let mut buf = String::with_capacity(raw.len());
    unescape_into(raw, offset, &mut buf)?;

    Ok(buf)
}

/**
Decode the escape starting at the `\` at `at`, returning the character and the number of bytes read.
*/
#[inline]
fn unescape_one(input: &[u8], at: usize) -> Option<(char, usize)> {
    test_assert!(input.get(at) == Some(&b'\\'));

    let ch = match *input.get(at + 1)? {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\x08',
        b'f' => '\x0c',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => {
            let (ch, read) = unescape_unicode(input, at + 2)?;
            return Some((ch, read + 2));
        }
        _ => return None,
    };

    Some((ch, 2))
}

#[inline]
fn unescape_unicode(input: &[u8], at: usize) -> Option<(char, usize)> {
    let first = try_from_hex4(input.get(at..at + 4)?)?;

    if is_high_surrogate(first) {
        // the low half must follow immediately as its own `\u` escape
        if input.get(at + 4..at + 6)? != b"\\u" {
            return None;
        }

        let second = try_from_hex4(input.get(at + 6..at + 10)?)?;
        let ch = try_from_utf16_surrogate_pair(first, second)?;

        Some((ch, 10))
    } else {
        // a lone low surrogate isn't a character
        char::from_u32(first as u32).map(|ch| (ch, 4))
    }
}
