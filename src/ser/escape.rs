/*!
Escaping strings for output.

Quotes, backslashes and control characters are escaped. Everything else,
including `/` and non-ASCII text, is written through unchanged.
*/

const UU: u8 = b'u';
const __: u8 = 0;

/**
How each byte is escaped, or `0` if it's written as-is.

Bytes that escape as `u` are written as `\u00XX`.
*/
static ESCAPE: [u8; 256] = {
    let mut table = [__; 256];

    let mut b = 0;
    while b < 0x20 {
        table[b] = UU;
        b += 1;
    }

    table[b'\x08' as usize] = b'b';
    table[b'\t' as usize] = b't';
    table[b'\n' as usize] = b'n';
    table[b'\x0c' as usize] = b'f';
    table[b'\r' as usize] = b'r';
    table[b'"' as usize] = b'"';
    table[b'\\' as usize] = b'\\';

    table
};

const HEX: &[u8; 16] = b"0123456789abcdef";

/**
Write a string as a quoted, escaped JSON string onto the end of a buffer.
*/
pub(crate) fn encode_str(value: &str, out: &mut String) {
    out.reserve(value.len() + 2);
    out.push('"');

    let bytes = value.as_bytes();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let escape = ESCAPE[b as usize];

        if escape == __ {
            continue;
        }

        // escaped bytes are all ASCII, so `i` is always a char boundary
        out.push_str(str_get_unchecked!(value, start..i));

        out.push('\\');
        if escape == UU {
            out.push_str("u00");
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0xf) as usize] as char);
        } else {
            out.push(escape as char);
        }

        start = i + 1;
    }

    out.push_str(str_get_unchecked!(value, start..));
    out.push('"');
}
