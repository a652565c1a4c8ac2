//! Token types produced by the cursor.

use crate::Value;

/// A single string-like token read from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Bare atom.
    Atom(String),
    /// Quoted string, already unescaped.
    Quoted(String),
    /// Literal payload announced by `{n}`.
    Literal(String),
}

impl Token {
    /// Returns the decoded text.
    pub fn into_text(self) -> String {
        match self {
            Self::Atom(text) | Self::Quoted(text) | Self::Literal(text) => text,
        }
    }

    /// Converts into a value. With `map_nil`, a bare `NIL` atom becomes
    /// [`Value::nil`]; quoted and literal `NIL` never do.
    pub fn into_value(self, map_nil: bool) -> Value {
        match self {
            Self::Atom(text) if map_nil && text == "NIL" => Value::nil(),
            token => Value::atom(token.into_text()),
        }
    }
}
