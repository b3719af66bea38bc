use std::{borrow::Cow, str, str::FromStr};

use crate::{
    config,
    error::{Error, ErrorKind},
    unescape,
};

/**
A position within an immutable JSON input.

The cursor only ever moves forward. All the scanning the decoder, the value
parser and the key skipper do goes through its primitives, which check
bounds before every read and report running out of input as an error.
*/
#[derive(Debug, Clone)]
pub struct Cursor<'de> {
    input: &'de str,
    offset: usize,
    depth: usize,
}

/**
The kind of value that starts at the cursor, determined by its first character.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Object,
    Array,
    Str,
    Num,
    Bool,
    Null,
}

/**
A JSON string borrowed from the input, without its quotes.

The string may contain escapes that haven't been decoded yet.
*/
#[derive(Debug, Clone, Copy)]
pub struct Str<'de> {
    raw: &'de str,
    escaped: bool,
    offset: usize,
}

/**
A JSON number borrowed from the input.

The text is known to match the JSON number grammar.
*/
#[derive(Debug, Clone, Copy)]
pub struct Num<'de> {
    raw: &'de str,
    integral: bool,
    offset: usize,
}

impl<'de> Cursor<'de> {
    /**
    Create a cursor at the start of some input.
    */
    #[inline]
    pub fn new(input: &'de str) -> Self {
        Cursor {
            input,
            offset: 0,
            depth: 0,
        }
    }

    /**
    Create a cursor at the start of a byte buffer, validating it's UTF8.
    */
    #[inline]
    pub fn from_slice(input: &'de [u8]) -> Result<Self, Error> {
        match str::from_utf8(input) {
            Ok(input) => Ok(Cursor::new(input)),
            Err(e) => Err(Error::at(ErrorKind::InvalidUtf8, e.valid_up_to())),
        }
    }

    /**
    The byte offset of the cursor in the input.
    */
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /**
    The number of records, arrays and objects the cursor is currently inside.
    */
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /**
    Whether the whole input has been consumed.
    */
    #[inline]
    pub fn is_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /**
    The input that hasn't been consumed yet.
    */
    #[inline]
    pub fn remaining(&self) -> &'de str {
        // skipping an escaped byte may leave the cursor inside a multi-byte character
        self.input.get(self.offset..).unwrap_or("")
    }

    #[inline]
    fn remaining_bytes(&self) -> &'de [u8] {
        if self.is_end() {
            &[]
        } else {
            get_unchecked!(self.input.as_bytes(), self.offset..)
        }
    }

    /**
    Look at the next byte without consuming it.
    */
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.offset < self.input.len() {
            Some(*get_unchecked!(self.input.as_bytes(), self.offset))
        } else {
            None
        }
    }

    /**
    Look at the next byte without consuming it, failing if the input has ended.
    */
    #[inline]
    pub fn peek_or_eof(&self) -> Result<u8, Error> {
        match self.peek() {
            Some(b) => Ok(b),
            None => Err(self.error(ErrorKind::UnexpectedEnd)),
        }
    }

    /**
    Consume the byte that was just peeked.
    */
    #[inline]
    pub fn bump(&mut self) {
        test_assert!(self.offset < self.input.len());

        self.offset += 1;
    }

    /**
    Skip insignificant whitespace.
    */
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.bump();
        }
    }

    /**
    Skip insignificant whitespace along with `//` and `/* */` comments.

    Comments aren't valid JSON, so this is only used when skipping the values of unknown keys.
    */
    pub fn skip_whitespace_and_comments(&mut self) -> Result<(), Error> {
        loop {
            self.skip_whitespace();

            if let Some(b'/') = self.peek() {
                self.skip_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), Error> {
        test_assert!(self.peek() == Some(b'/'));
        self.bump();

        match self.peek_or_eof()? {
            b'/' => {
                self.bump();

                // a line comment runs to the end of the line, or the input
                match memchr::memchr(b'\n', self.remaining_bytes()) {
                    Some(end) => self.offset += end + 1,
                    None => self.offset = self.input.len(),
                }

                Ok(())
            }
            b'*' => {
                self.bump();

                match memchr::memmem::find(self.remaining_bytes(), b"*/") {
                    Some(end) => {
                        self.offset += end + 2;
                        Ok(())
                    }
                    None => {
                        self.offset = self.input.len();
                        Err(self.error(ErrorKind::UnexpectedEnd))
                    }
                }
            }
            _ => Err(self.unexpected("`/` or `*`")),
        }
    }

    /**
    Skip whitespace and consume the given structural character.
    */
    #[inline]
    pub fn eat(&mut self, expected_byte: u8, expected: &'static str) -> Result<(), Error> {
        self.skip_whitespace();

        if self.peek() == Some(expected_byte) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /**
    Skip whitespace and consume the given structural character, if it's next.
    */
    #[inline]
    pub fn eat_if(&mut self, expected_byte: u8) -> bool {
        self.skip_whitespace();

        if self.peek() == Some(expected_byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    /**
    Consume the literal `true`, `false` or `null`.
    */
    pub fn match_literal(&mut self, literal: &'static str) -> Result<(), Error> {
        let remaining = self.remaining();

        if remaining.starts_with(literal) {
            self.offset += literal.len();
            Ok(())
        } else if literal.starts_with(remaining) {
            // the input was truncated in the middle of the literal
            self.offset = self.input.len();
            Err(self.error(ErrorKind::UnexpectedEnd))
        } else {
            Err(self.error(ErrorKind::MalformedLiteral(literal)))
        }
    }

    /**
    Skip whitespace and classify the value that starts next.
    */
    #[inline]
    pub fn peek_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        match self.peek_or_eof()? {
            b'{' => Ok(Token::Object),
            b'[' => Ok(Token::Array),
            b'"' => Ok(Token::Str),
            b'-' | b'0'..=b'9' => Ok(Token::Num),
            b't' | b'f' => Ok(Token::Bool),
            b'n' => Ok(Token::Null),
            _ => Err(self.unexpected("a value")),
        }
    }

    /**
    Skip whitespace and consume the literal `true` or `false`.
    */
    pub fn scan_bool(&mut self) -> Result<bool, Error> {
        self.skip_whitespace();

        match self.peek_or_eof()? {
            b't' => self.match_literal("true").map(|_| true),
            b'f' => self.match_literal("false").map(|_| false),
            _ => Err(self.unexpected("`true` or `false`")),
        }
    }

    /**
    Skip whitespace and consume a quoted string.

    Escapes are skipped over, but not decoded or validated.
    Use [`Str::to_unescaped`] to do that.
    */
    pub fn scan_str(&mut self) -> Result<Str<'de>, Error> {
        self.eat(b'"', "`\"`")?;

        let start = self.offset;
        let mut escaped = false;

        loop {
            let bytes = self.remaining_bytes();

            match memchr::memchr2(b'"', b'\\', bytes) {
                Some(found) => {
                    let at = self.offset + found;

                    if *get_unchecked!(bytes, found) == b'"' {
                        self.offset = at + 1;

                        return Ok(Str {
                            raw: str_get_unchecked!(self.input, start..at),
                            escaped,
                            offset: start,
                        });
                    }

                    // skip the `\` and whatever it escapes
                    // the escaped byte is never a quote that terminates the string
                    escaped = true;
                    self.offset = (at + 2).min(self.input.len());
                }
                None => {
                    self.offset = self.input.len();
                    return Err(self.error(ErrorKind::UnexpectedEnd));
                }
            }
        }
    }

    /**
    Skip whitespace and consume a number.

    The number must match the JSON grammar: an optional `-`, integral digits,
    an optional fraction and an optional exponent.
    */
    pub fn scan_number(&mut self) -> Result<Num<'de>, Error> {
        self.skip_whitespace();

        let start = self.offset;
        let mut integral = true;

        if let Some(b'-') = self.peek() {
            self.bump();
        }

        self.eat_digits()?;

        if let Some(b'.') = self.peek() {
            self.bump();
            integral = false;

            self.eat_digits()?;
        }

        if let Some(b'e' | b'E') = self.peek() {
            self.bump();
            integral = false;

            if let Some(b'+' | b'-') = self.peek() {
                self.bump();
            }

            self.eat_digits()?;
        }

        Ok(Num {
            raw: str_get_unchecked!(self.input, start..self.offset),
            integral,
            offset: start,
        })
    }

    #[inline]
    fn eat_digits(&mut self) -> Result<(), Error> {
        let start = self.offset;

        while let Some(b'0'..=b'9') = self.peek() {
            self.bump();
        }

        if self.offset == start {
            if self.is_end() {
                Err(self.error(ErrorKind::UnexpectedEnd))
            } else {
                Err(self.error(ErrorKind::NumberParse))
            }
        } else {
            Ok(())
        }
    }

    /**
    Skip over a complete value of any kind, along with surrounding whitespace and comments.

    Maps and arrays are skipped by matching brackets without looking at their contents
    beyond strings and comments.
    */
    pub fn skip_value(&mut self) -> Result<(), Error> {
        self.skip_whitespace_and_comments()?;

        match self.peek_or_eof()? {
            b'{' | b'[' => self.skip_nested()?,
            b'"' => {
                self.scan_str()?;
            }
            b't' => self.match_literal("true")?,
            b'f' => self.match_literal("false")?,
            b'n' => self.match_literal("null")?,
            b'-' | b'0'..=b'9' => {
                self.scan_number()?;
            }
            _ => return Err(self.unexpected("a value")),
        }

        self.skip_whitespace_and_comments()
    }

    fn skip_nested(&mut self) -> Result<(), Error> {
        let mut depth = 0usize;

        loop {
            match self.peek_or_eof()? {
                b'{' | b'[' => {
                    self.bump();
                    self.enter()?;

                    depth += 1;
                }
                b'}' | b']' => {
                    self.bump();
                    self.leave();

                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                b'"' => {
                    self.scan_str()?;
                }
                b'/' => self.skip_comment()?,
                _ => self.bump(),
            }
        }
    }

    /**
    Enter a record, array or object, failing if the document nests too deeply.
    */
    #[inline]
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;

        if self.depth > config::MAX_DEPTH {
            Err(self.error(ErrorKind::DepthLimitExceeded))
        } else {
            Ok(())
        }
    }

    /**
    Leave a record, array or object entered with [`Cursor::enter`].
    */
    #[inline]
    pub fn leave(&mut self) {
        test_assert!(self.depth > 0);

        self.depth = self.depth.saturating_sub(1);
    }

    /**
    Skip trailing whitespace and make sure there's nothing else left in the input.
    */
    #[inline]
    pub fn finish(&mut self) -> Result<(), Error> {
        self.skip_whitespace();

        if self.is_end() {
            Ok(())
        } else {
            Err(self.error(ErrorKind::TrailingCharacters))
        }
    }

    /**
    An error at the current position.
    */
    #[cold]
    pub fn error(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.offset)
    }

    /**
    An error at an earlier position in the input.
    */
    #[cold]
    pub fn error_at(&self, kind: ErrorKind, offset: usize) -> Error {
        test_assert!(offset <= self.offset);

        Error::at(kind, offset)
    }

    /**
    An error for finding something other than what was expected at the current position.
    */
    #[cold]
    pub fn unexpected(&self, expected: &'static str) -> Error {
        match self.remaining().chars().next() {
            Some(found) => self.error(ErrorKind::UnexpectedToken { expected, found }),
            None => self.error(ErrorKind::UnexpectedEnd),
        }
    }
}

impl<'de> Str<'de> {
    /**
    Returns the underlying string, without attempting to unescape it.
    */
    #[inline]
    pub fn as_raw(&self) -> &'de str {
        self.raw
    }

    /**
    Whether the string contains any escapes.
    */
    #[inline]
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /**
    The byte offset of the string's content in the input.
    */
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /**
    Returns the underlying string.

    If the string is escaped then this method will allocate and unescape it.
    */
    #[inline]
    pub fn to_unescaped(&self) -> Result<Cow<'de, str>, Error> {
        if self.escaped {
            Ok(Cow::Owned(unescape::unescape(self.raw, self.offset)?))
        } else {
            Ok(Cow::Borrowed(self.raw))
        }
    }

    /**
    Append the unescaped string to a buffer.
    */
    #[inline]
    pub fn unescape_into(&self, buf: &mut String) -> Result<(), Error> {
        if self.escaped {
            unescape::unescape_into(self.raw, self.offset, buf)
        } else {
            buf.push_str(self.raw);
            Ok(())
        }
    }

    /**
    Returns the underlying string if it can be borrowed as-is.
    */
    #[inline]
    pub fn to_borrowed(&self) -> Result<&'de str, Error> {
        if self.escaped {
            Err(Error::at(ErrorKind::EscapedBorrow, self.offset))
        } else {
            Ok(self.raw)
        }
    }
}

impl<'de> Num<'de> {
    /**
    Returns the text of the number.
    */
    #[inline]
    pub fn as_str(&self) -> &'de str {
        self.raw
    }

    /**
    Whether the number has no fraction or exponent.
    */
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.integral
    }

    /**
    The byte offset of the number in the input.
    */
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /**
    Parse the text of the number into some numeric type.
    */
    #[inline]
    pub fn parse<T: FromStr>(&self) -> Result<T, Error> {
        self.raw
            .parse()
            .map_err(|_| Error::at(ErrorKind::NumberParse, self.offset))
    }
}
