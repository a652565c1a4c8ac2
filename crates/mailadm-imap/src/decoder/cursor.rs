//! Read cursor, token classifier and string/atom/literal reader.

use super::token::Token;
use crate::{Error, Result};

/// Read position over one immutable response line.
///
/// A cursor lives for exactly one decode call. `pos` never exceeds `size`.
pub struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
    size: usize,
    /// Payload bytes still owed by the most recent `{n}` header.
    pending_literal: Option<usize>,
    chunk_size: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `line`.
    pub fn new(line: &'a [u8], chunk_size: usize) -> Self {
        Self {
            line,
            pos: 0,
            size: line.len(),
            pending_literal: None,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Returns the current position in the line.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if at end of input.
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.size
    }

    /// Peeks at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    /// Advances by one byte.
    pub fn advance(&mut self) {
        self.skip(1);
    }

    /// Skips n bytes, stopping at end of input.
    fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.size);
    }

    /// Skips a run of ASCII spaces. Tabs and line breaks are not separators.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.advance();
        }
    }

    /// Skips a run of CR and LF bytes.
    pub fn skip_line_breaks(&mut self) {
        while matches!(self.peek(), Some(b'\r' | b'\n')) {
            self.advance();
        }
    }

    /// Returns true if the next token opens a list. Consumes only spaces.
    pub fn looks_like_list(&mut self) -> bool {
        self.skip_spaces();
        self.peek() == Some(b'(')
    }

    /// Returns true if the next token is a literal.
    ///
    /// This consumes the whole `{n}` header and records `n` as pending, so it
    /// must be called once per header.
    pub fn looks_like_literal(&mut self) -> Result<bool> {
        self.skip_spaces();
        if self.peek() != Some(b'{') {
            return Ok(false);
        }
        let size = self.read_literal_header()?;
        self.pending_literal = Some(size);
        Ok(true)
    }

    /// Returns true if a string, atom or literal starts here.
    pub fn looks_like_string(&self) -> bool {
        match self.peek() {
            Some(b'{' | b'"') => true,
            Some(b) => !matches!(b, b' ' | b'(' | b')' | b'[' | b']' | b'\r' | b'\n'),
            None => false,
        }
    }

    /// Reads one literal, quoted string or bare atom.
    pub fn read_token(&mut self) -> Result<Token> {
        if self.pending_literal.is_none() {
            self.looks_like_literal()?;
        }
        if self.pending_literal.is_some() {
            return self.read_literal();
        }

        self.skip_spaces();
        if self.peek() == Some(b'"') {
            self.read_quoted_string()
        } else {
            self.read_atom()
        }
    }

    /// Parses `{digits}` at the cursor, leaving it just past `}`.
    ///
    /// A trailing `+` (non-synchronizing literal) is accepted.
    fn read_literal_header(&mut self) -> Result<usize> {
        self.advance(); // Skip {
        let start = self.pos;

        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => self.advance(),
                b'}' => break,
                b'+' if self.line.get(self.pos + 1) == Some(&b'}') => self.advance(),
                _ => return Err(self.header_error("non-numeric literal length")),
            }
        }

        if self.is_eof() {
            return Err(self.header_error("missing closing brace"));
        }

        let digits = &self.line[start..self.pos];
        let digits = digits.strip_suffix(b"+").unwrap_or(digits);
        if digits.is_empty() {
            return Err(self.header_error("missing literal length"));
        }

        let size = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| self.header_error("literal length out of range"))?;

        self.advance(); // Skip }
        Ok(size)
    }

    /// Reads the pending literal payload verbatim, in bounded chunks.
    fn read_literal(&mut self) -> Result<Token> {
        let start = self.pos;
        let expected = self.pending_literal.unwrap_or(0);
        let available = self.size - start;
        if expected > available {
            self.pending_literal = None;
            return Err(Error::TruncatedLiteral {
                position: start,
                expected,
                available,
            });
        }

        let mut data = Vec::with_capacity(expected);
        while let Some(remaining) = self.pending_literal.filter(|&n| n > 0) {
            let take = remaining.min(self.chunk_size);
            data.extend_from_slice(&self.line[self.pos..self.pos + take]);
            self.skip(take);
            self.pending_literal = Some(remaining - take);
        }
        self.pending_literal = None;

        let text = String::from_utf8(data).map_err(|_| Error::InvalidUtf8 { position: start })?;
        Ok(Token::Literal(text))
    }

    /// Reads a quoted string token.
    ///
    /// The raw content is unescaped in two passes: every `\"` becomes `"`,
    /// then every remaining `\\` becomes `\`. Inputs such as `\\"` therefore
    /// decode differently from a single-pass unescape; the two-pass result is
    /// the one callers depend on.
    fn read_quoted_string(&mut self) -> Result<Token> {
        let start = self.pos;
        let end = self.quoted_end(start)?;
        let raw = self.text(start + 1, end - 1)?;
        self.pos = end;

        let text = raw.replace("\\\"", "\"").replace("\\\\", "\\");
        Ok(Token::Quoted(text))
    }

    /// Reads a bare atom up to the next delimiter.
    fn read_atom(&mut self) -> Result<Token> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if is_atom_delimiter(b) {
                break;
            }
            self.advance();
        }
        Ok(Token::Atom(self.text(start, self.pos)?))
    }

    /// Skips the quoted string opening at the cursor without decoding it.
    pub fn skip_quoted(&mut self) -> Result<()> {
        self.pos = self.quoted_end(self.pos)?;
        Ok(())
    }

    /// Returns true if a well-formed `{digits}` header starts a token here.
    ///
    /// The `{` must follow a space or `(`; a brace inside an atom such as
    /// `a{5}b` is plain text.
    pub fn at_literal_header(&self) -> bool {
        if self.peek() != Some(b'{') {
            return false;
        }
        let starts_token = self.pos == 0 || matches!(self.line[self.pos - 1], b' ' | b'(');
        if !starts_token {
            return false;
        }

        let body = &self.line[self.pos + 1..];
        let digits = body.iter().take_while(|b| b.is_ascii_digit()).count();
        let rest = &body[digits..];
        digits > 0 && (rest.starts_with(b"}") || rest.starts_with(b"+}"))
    }

    /// Skips a literal header and its payload without decoding them.
    pub fn skip_literal(&mut self) -> Result<()> {
        let expected = self.read_literal_header()?;
        let available = self.size - self.pos;
        if expected > available {
            return Err(Error::TruncatedLiteral {
                position: self.pos,
                expected,
                available,
            });
        }
        self.skip(expected);
        Ok(())
    }

    /// Returns the offset just past the quote closing the string at `start`.
    ///
    /// A backslash escapes the following byte, whatever it is.
    fn quoted_end(&self, start: usize) -> Result<usize> {
        let mut i = start + 1;
        while i < self.size {
            match self.line[i] {
                b'\\' => i += 2,
                b'"' => return Ok(i + 1),
                _ => i += 1,
            }
        }
        Err(Error::UnterminatedQuotedString { position: start })
    }

    /// Returns `line[start..end]` as an owned string.
    pub fn text(&self, start: usize, end: usize) -> Result<String> {
        std::str::from_utf8(&self.line[start..end])
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8 { position: start })
    }

    fn header_error(&self, reason: &'static str) -> Error {
        Error::InvalidLiteralHeader {
            position: self.pos,
            reason,
        }
    }
}

/// Returns true if the byte ends a bare atom.
#[must_use]
pub const fn is_atom_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'(' | b')' | b'[' | b']' | b'\r' | b'\n' | b'"')
}
