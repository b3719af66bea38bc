/**
Whether a UTF-16 code unit is the leading half of a surrogate pair.
*/
#[inline]
pub fn is_high_surrogate(code: u16) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

/**
Whether a UTF-16 code unit is the trailing half of a surrogate pair.
*/
#[inline]
pub fn is_low_surrogate(code: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}

/**
Combine a surrogate pair into the character beyond the basic plane it encodes.
*/
pub fn try_from_utf16_surrogate_pair(high: u16, low: u16) -> Option<char> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }

    // Courtesy of: http://www.russellcottrell.com/greek/utilities/SurrogatePairCalculator.htm
    let code = ((high as u32 - 0xD800) * 0x400) + (low as u32 - 0xDC00) + 0x10000;

    char::try_from(code).ok()
}

/**
Decode exactly 4 hexadecimal digits into a UTF-16 code unit.
*/
#[inline]
pub fn try_from_hex4(digits: &[u8]) -> Option<u16> {
    if digits.len() != 4 {
        return None;
    }

    let mut code = 0u16;
    for &digit in digits {
        let nibble = match digit {
            b'0'..=b'9' => digit - b'0',
            b'a'..=b'f' => digit - b'a' + 10,
            b'A'..=b'F' => digit - b'A' + 10,
            _ => return None,
        };

        code = (code << 4) | nibble as u16;
    }

    Some(code)
}
