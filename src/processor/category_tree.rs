//! Category tree parsing
//!
//! The catalog stores each product's category hierarchy as a string-encoded
//! sequence literal, for example `["Clothing >> Women >> Dresses"]`. The
//! first element must be a string; it may use single or double quotes, `r`
//! and `u` prefixes, adjacent-literal concatenation and the usual backslash
//! escapes (`\n`, `\xHH`, `\uXXXX`, `\UXXXXXXXX`, octal, ...). Later elements
//! can be any literal and are only checked for well-formedness. Tuples
//! (`("A >> B",)`) are accepted like lists.

use thiserror::Error;

/// Nesting limit for skipped elements
const MAX_NESTING: usize = 64;

/// Reasons a category tree literal could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryTreeError {
    #[error("expected '[' or '(' at offset {0}")]
    ExpectedListStart(usize),

    #[error("expected a quoted string at offset {0}")]
    ExpectedString(usize),

    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    #[error("expected a literal value at offset {0}")]
    ExpectedValue(usize),

    #[error("expected ',' or closing bracket at offset {0}")]
    ExpectedSeparator(usize),

    #[error("unexpected trailing input at offset {0}")]
    TrailingInput(usize),
}

/// Parsed category sequence, keeping the first `>>`-delimited path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTree {
    first_path: Option<String>,
    len: usize,
}

impl CategoryTree {
    /// Parse a list or tuple literal whose first element is a path string
    pub fn parse(input: &str) -> Result<Self, CategoryTreeError> {
        let mut cursor = Cursor::new(input);

        cursor.skip_whitespace();
        let close = match cursor.peek() {
            Some('[') => ']',
            Some('(') => ')',
            _ => return Err(CategoryTreeError::ExpectedListStart(cursor.pos)),
        };
        cursor.bump();

        let mut first_path = None;
        let mut len = 0;
        loop {
            cursor.skip_whitespace();
            if cursor.eat(close) {
                break;
            }

            if len == 0 {
                first_path = Some(cursor.string_literal()?);
            } else {
                cursor.skip_value(0)?;
            }
            len += 1;

            cursor.skip_whitespace();
            if cursor.eat(',') {
                continue;
            }
            // `("A")` is a parenthesized string, not a tuple
            if close == ')' && len == 1 {
                return Err(CategoryTreeError::ExpectedSeparator(cursor.pos));
            }
            if cursor.eat(close) {
                break;
            }
            return Err(CategoryTreeError::ExpectedSeparator(cursor.pos));
        }

        cursor.skip_whitespace();
        if !cursor.is_at_end() {
            return Err(CategoryTreeError::TrailingInput(cursor.pos));
        }

        Ok(Self { first_path, len })
    }

    #[cfg(test)]
    fn first_path(&self) -> Option<&str> {
        self.first_path.as_deref()
    }

    /// Number of elements in the sequence
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Last segment of the first path, trimmed
    ///
    /// `None` when the sequence is empty or the segment is blank.
    pub fn leaf_category(&self, delimiter: &str) -> Option<&str> {
        self.first_path
            .as_deref()?
            .rsplit(delimiter)
            .next()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

#[derive(Debug, Clone, Copy)]
struct StringPrefix {
    raw: bool,
    bytes: bool,
}

/// Byte-offset cursor over the literal
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// A text string literal; byte strings and other values are rejected
    fn string_literal(&mut self) -> Result<String, CategoryTreeError> {
        let start = self.pos;
        match self.string_parts()? {
            Some((value, false)) => Ok(value),
            _ => Err(CategoryTreeError::ExpectedString(start)),
        }
    }

    /// Consume a string prefix (`r`, `u`, `b`, `rb`, `br`) if a quote follows it
    fn string_prefix(&mut self) -> Option<StringPrefix> {
        let rest = &self.input[self.pos..];
        let prefix_len = rest.find(['\'', '"'])?;

        let (raw, bytes) = match rest[..prefix_len].to_ascii_lowercase().as_str() {
            "" | "u" => (false, false),
            "r" => (true, false),
            "b" => (false, true),
            "rb" | "br" => (true, true),
            _ => return None,
        };

        self.pos += prefix_len;
        Some(StringPrefix { raw, bytes })
    }

    /// Read one string literal, joining adjacent literals
    ///
    /// Returns `None` without consuming input if no string starts here;
    /// otherwise the decoded text and whether it was a byte string.
    fn string_parts(&mut self) -> Result<Option<(String, bool)>, CategoryTreeError> {
        let Some(first) = self.string_prefix() else {
            return Ok(None);
        };

        let mut value = String::new();
        let mut prefix = first;
        loop {
            self.quoted_body(prefix, &mut value)?;

            let checkpoint = self.pos;
            self.skip_whitespace();
            let part_start = self.pos;
            match self.string_prefix() {
                Some(next) if next.bytes == first.bytes => prefix = next,
                // Text and byte strings cannot be joined
                Some(_) => return Err(CategoryTreeError::ExpectedString(part_start)),
                None => {
                    self.pos = checkpoint;
                    return Ok(Some((value, first.bytes)));
                }
            }
        }
    }

    fn quoted_body(
        &mut self,
        prefix: StringPrefix,
        value: &mut String,
    ) -> Result<(), CategoryTreeError> {
        let start = self.pos;
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(CategoryTreeError::ExpectedString(start)),
        };

        loop {
            match self.bump() {
                None | Some('\n') => return Err(CategoryTreeError::UnterminatedString(start)),
                Some(c) if c == quote => return Ok(()),
                Some(c) if prefix.bytes && !c.is_ascii() => {
                    return Err(CategoryTreeError::ExpectedString(start));
                }
                // Raw strings keep the backslash, but it still guards the next quote
                Some('\\') if prefix.raw => match self.bump() {
                    None => return Err(CategoryTreeError::UnterminatedString(start)),
                    Some(c) => {
                        value.push('\\');
                        value.push(c);
                    }
                },
                Some('\\') => self.escape(start, prefix.bytes, value)?,
                Some(c) => value.push(c),
            }
        }
    }

    /// Decode one escape; the cursor sits just past the backslash
    fn escape(
        &mut self,
        string_start: usize,
        bytes: bool,
        value: &mut String,
    ) -> Result<(), CategoryTreeError> {
        let escape_start = self.pos - 1;

        let decoded = match self.bump() {
            None => return Err(CategoryTreeError::UnterminatedString(string_start)),
            Some('\n') => return Ok(()), // line continuation
            Some(c @ ('\\' | '\'' | '"')) => c,
            Some('a') => '\x07',
            Some('b') => '\x08',
            Some('f') => '\x0c',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('v') => '\x0b',
            Some(c @ '0'..='7') => {
                let mut code = c as u32 - '0' as u32;
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            self.bump();
                        }
                        None => break,
                    }
                }
                char::from_u32(code).ok_or(CategoryTreeError::InvalidEscape(escape_start))?
            }
            Some('x') => self.hex_escape(2, escape_start)?,
            Some('u') if !bytes => self.hex_escape(4, escape_start)?,
            Some('U') if !bytes => self.hex_escape(8, escape_start)?,
            // Named characters need the Unicode name table
            Some('N') if !bytes => return Err(CategoryTreeError::InvalidEscape(escape_start)),
            // Unknown escapes are kept verbatim
            Some(c) => {
                value.push('\\');
                c
            }
        };

        value.push(decoded);
        Ok(())
    }

    /// Exactly `digits` hex digits naming a Unicode scalar value
    fn hex_escape(&mut self, digits: usize, escape_start: usize) -> Result<char, CategoryTreeError> {
        let invalid = CategoryTreeError::InvalidEscape(escape_start);
        let end = self.pos + digits;

        let hex = self
            .input
            .get(self.pos..end)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| invalid.clone())?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| invalid.clone())?;

        self.pos = end;
        char::from_u32(code).ok_or(invalid)
    }

    /// Validate and discard any literal value
    fn skip_value(&mut self, depth: usize) -> Result<(), CategoryTreeError> {
        let start = self.pos;
        if depth > MAX_NESTING {
            return Err(CategoryTreeError::ExpectedValue(start));
        }

        if self.string_parts()?.is_some() {
            return Ok(());
        }

        let close = match self.peek() {
            Some('[') => ']',
            Some('(') => ')',
            Some('{') => '}',
            _ => return self.skip_scalar(),
        };
        self.bump();

        loop {
            self.skip_whitespace();
            if self.eat(close) {
                return Ok(());
            }

            self.skip_value(depth + 1)?;
            self.skip_whitespace();

            if close == '}' && self.eat(':') {
                self.skip_whitespace();
                self.skip_value(depth + 1)?;
                self.skip_whitespace();
            }

            if self.eat(',') {
                continue;
            }
            if self.eat(close) {
                return Ok(());
            }
            return Err(CategoryTreeError::ExpectedSeparator(self.pos));
        }
    }

    /// Numbers (optionally signed) and the `True`/`False`/`None` constants
    fn skip_scalar(&mut self) -> Result<(), CategoryTreeError> {
        let start = self.pos;

        let signed = matches!(self.peek(), Some('+' | '-'));
        if signed {
            self.bump();
            self.skip_whitespace();
        }

        let token_start = self.pos;
        let mut prev = ' ';
        while let Some(c) = self.peek() {
            let exponent_sign = matches!(c, '+' | '-') && matches!(prev, 'e' | 'E');
            if !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_') || exponent_sign) {
                break;
            }
            prev = c;
            self.bump();
        }

        let token = &self.input[token_start..self.pos];
        let mut chars = token.chars();
        let is_number = match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        let is_constant = !signed && matches!(token, "True" | "False" | "None");

        if is_number || is_constant {
            Ok(())
        } else {
            Err(CategoryTreeError::ExpectedValue(start))
        }
    }
}
