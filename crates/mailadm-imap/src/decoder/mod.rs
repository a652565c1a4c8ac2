//! Response line decoder.
//!
//! Turns one complete server response line into a sequence of [`Value`]s.
//! The decoder is sans-I/O: the caller strips the line terminator and
//! appends every announced literal payload before decoding.
//!
//! # Example
//!
//! ```
//! use mailadm_imap::{Value, decode};
//!
//! let values = decode(r#"(\HasNoChildren) "." user.joe"#).unwrap();
//!
//! assert_eq!(values[0], Value::list(vec![Value::atom(r"\HasNoChildren")]));
//! assert_eq!(values[1], Value::atom("."));
//! assert_eq!(values[2], Value::atom("user.joe"));
//! ```

mod cursor;
mod list;
mod token;

use cursor::Cursor;
use list::Elements;

use crate::{DecoderConfig, Error, Nesting, Result, Value};

/// Decodes a line with the default configuration.
///
/// # Errors
///
/// Returns an error if the line is not syntactically valid.
pub fn decode(line: impl AsRef<[u8]>) -> Result<Vec<Value>> {
    Decoder::default().decode(line)
}

/// Response line decoder.
///
/// Holds configuration only; every call to [`Decoder::decode`] scans with a
/// fresh cursor, so one decoder can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with the given configuration.
    #[must_use]
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one response line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line exceeds the configured maximum length,
    /// or on an unterminated quoted string or list, a malformed or truncated
    /// literal, invalid UTF-8, a stray `)`, or recursive nesting past
    /// `max_depth`.
    pub fn decode(&self, line: impl AsRef<[u8]>) -> Result<Vec<Value>> {
        let line = line.as_ref();

        if let Some(max) = self.config.max_line_length
            && line.len() > max
        {
            tracing::debug!(length = line.len(), max, "Response line too long");
            return Err(Error::LineTooLong {
                length: line.len(),
                max,
            });
        }

        let mut cursor = Cursor::new(line, self.config.literal_chunk_size);
        match self.decode_values(&mut cursor) {
            Ok(values) => {
                tracing::trace!(
                    length = line.len(),
                    count = values.len(),
                    "Decoded response line"
                );
                Ok(values)
            }
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    position = e.position(),
                    length = line.len(),
                    "Failed to decode response line"
                );
                Err(e)
            }
        }
    }

    /// Decodes the raw text of an opaque nested list.
    ///
    /// Atoms whose text starts with `(` are decoded with this decoder and the
    /// resulting list returned; with [`Nesting::Opaque`] that descends one
    /// more level. Any other value is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the atom text is not a valid line.
    pub fn expand(&self, value: &Value) -> Result<Value> {
        let Some(text) = value.as_str().filter(|text| text.starts_with('(')) else {
            return Ok(value.clone());
        };

        let mut values = self.decode(text)?;
        if values.len() == 1 && values[0].is_list() {
            Ok(values.remove(0))
        } else {
            Ok(Value::List(values))
        }
    }

    fn decode_values(&self, cursor: &mut Cursor<'_>) -> Result<Vec<Value>> {
        let mut elements = Elements::new(true);

        while !cursor.is_eof() {
            if cursor.looks_like_list() {
                let items = match self.config.nesting {
                    Nesting::Opaque => list::read_opaque(cursor)?,
                    Nesting::Recursive => list::read_recursive(cursor, 1, self.config.max_depth)?,
                };
                elements.push_value(Value::List(items));
                continue;
            }

            if cursor.looks_like_literal()? || cursor.looks_like_string() {
                let token = cursor.read_token()?;
                elements.push_token(token);
                continue;
            }

            match cursor.peek() {
                // Only spaces remained.
                None => break,
                Some(b'[') => {
                    elements.open_bracket();
                    cursor.advance();
                }
                Some(b']') => {
                    elements.close_bracket();
                    cursor.advance();
                }
                Some(b'\r' | b'\n') => cursor.skip_line_breaks(),
                Some(b) => {
                    return Err(Error::UnexpectedDelimiter {
                        position: cursor.position(),
                        found: char::from(b),
                    });
                }
            }
        }

        Ok(elements.into_items())
    }
}
