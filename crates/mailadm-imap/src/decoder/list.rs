//! Parenthesized list reader.

use super::cursor::Cursor;
use super::token::Token;
use crate::{Error, Result, Value};

/// Element accumulator shared by the list reader and the top-level driver.
///
/// Between `[` and `]` the collector is in concatenation mode: tokens are
/// appended to the text of the previous element instead of starting a new
/// one. This folds response codes such as `OK [READ-WRITE]` into a single
/// `OK[READ-WRITE]` element.
#[derive(Debug)]
pub struct Elements {
    items: Vec<Value>,
    concat: bool,
    map_nil: bool,
}

impl Elements {
    /// Creates an empty collector. `map_nil` turns bare `NIL` atoms into
    /// [`Value::nil`].
    pub const fn new(map_nil: bool) -> Self {
        Self {
            items: Vec::new(),
            concat: false,
            map_nil,
        }
    }

    /// Adds a token, concatenating it while in concatenation mode.
    pub fn push_token(&mut self, token: Token) {
        if self.concat
            && let Some(text) = self.items.last_mut().and_then(Value::text_mut)
        {
            text.push_str(&token.into_text());
            return;
        }
        self.items.push(token.into_value(self.map_nil));
    }

    /// Adds a value as a new element.
    pub fn push_value(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Handles `[`: enters concatenation mode.
    pub fn open_bracket(&mut self) {
        self.concat = true;
        self.append_char('[');
    }

    /// Handles `]`: leaves concatenation mode.
    pub fn close_bracket(&mut self) {
        self.append_char(']');
        self.concat = false;
    }

    fn append_char(&mut self, c: char) {
        match self.items.last_mut().and_then(Value::text_mut) {
            Some(text) => text.push(c),
            None => self.items.push(Value::atom(c)),
        }
    }

    /// Returns the collected elements.
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}

/// Reads one list with the cursor on its `(`, keeping nested lists opaque.
///
/// A list nested one level deep is returned as a single atom holding its raw
/// text, parens included; anything nested further stays inside that text.
/// Quoted strings and literals inside a nested list are skipped whole so
/// that parens in their content do not affect depth tracking. A `{` only
/// opens a literal when it starts a token and the header is well formed.
pub fn read_opaque(cursor: &mut Cursor<'_>) -> Result<Vec<Value>> {
    let open = cursor.position();
    cursor.advance();

    let mut elements = Elements::new(false);
    let mut depth = 0usize;
    let mut blob_start = open;

    loop {
        let Some(byte) = cursor.peek() else {
            return Err(Error::UnterminatedList { position: open });
        };

        match (byte, depth) {
            (b'(', _) => {
                depth += 1;
                if depth == 1 {
                    blob_start = cursor.position();
                }
                cursor.advance();
            }
            (b')', 0) => {
                cursor.advance();
                return Ok(elements.into_items());
            }
            (b')', _) => {
                if depth == 1 {
                    let blob = cursor.text(blob_start, cursor.position() + 1)?;
                    elements.push_value(Value::atom(blob));
                }
                depth -= 1;
                cursor.advance();
            }
            (b'"', 1..) => cursor.skip_quoted()?,
            (b'{', 1..) if cursor.at_literal_header() => cursor.skip_literal()?,
            (_, 1..) | (b' ' | b'\r' | b'\n', 0) => cursor.advance(),
            (b'[', 0) => {
                elements.open_bracket();
                cursor.advance();
            }
            (b']', 0) => {
                elements.close_bracket();
                cursor.advance();
            }
            (_, 0) => {
                let token = cursor.read_token()?;
                cursor.skip_line_breaks();
                elements.push_token(token);
            }
        }
    }
}

/// Reads one list with the cursor on its `(`, decoding nested lists into
/// [`Value::List`] at every depth.
///
/// `depth` is the nesting level of this list, starting at 1; a list deeper
/// than `max_depth` is rejected before it is read.
pub fn read_recursive(
    cursor: &mut Cursor<'_>,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<Value>> {
    let open = cursor.position();
    if depth > max_depth {
        return Err(Error::NestingTooDeep {
            position: open,
            max: max_depth,
        });
    }
    cursor.advance();

    let mut elements = Elements::new(true);

    loop {
        match cursor.peek() {
            None => return Err(Error::UnterminatedList { position: open }),
            Some(b'(') => {
                let items = read_recursive(cursor, depth + 1, max_depth)?;
                elements.push_value(Value::List(items));
            }
            Some(b')') => {
                cursor.advance();
                return Ok(elements.into_items());
            }
            Some(b' ' | b'\r' | b'\n') => cursor.advance(),
            Some(b'[') => {
                elements.open_bracket();
                cursor.advance();
            }
            Some(b']') => {
                elements.close_bracket();
                cursor.advance();
            }
            Some(_) => {
                let token = cursor.read_token()?;
                cursor.skip_line_breaks();
                elements.push_token(token);
            }
        }
    }
}
