//! Decoded response values.

/// A value decoded from a response line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Atom, quoted string, literal, or raw nested-list text.
    Atom {
        /// Decoded text. Empty for NIL.
        text: String,
        /// Set only for the NIL atom, so that NIL and `""` stay distinct.
        is_null: bool,
    },
    /// Parenthesized list, in wire order.
    List(Vec<Self>),
}

impl Value {
    /// Creates a non-null atom.
    #[must_use]
    pub fn atom(text: impl Into<String>) -> Self {
        Self::Atom {
            text: text.into(),
            is_null: false,
        }
    }

    /// Creates the NIL atom.
    #[must_use]
    pub const fn nil() -> Self {
        Self::Atom {
            text: String::new(),
            is_null: true,
        }
    }

    /// Creates a list.
    #[must_use]
    pub const fn list(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    /// Returns the atom text, or `None` for lists.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Atom { text, .. } => Some(text),
            Self::List(_) => None,
        }
    }

    /// Returns the list elements, or `None` for atoms.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            Self::Atom { .. } => None,
        }
    }

    /// Returns true for the NIL atom.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Atom { is_null: true, .. })
    }

    /// Returns true for lists.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Consumes the value and returns its atom text.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Atom { text, .. } => Some(text),
            Self::List(_) => None,
        }
    }

    /// Mutable access to the text of a non-null atom, used when
    /// concatenating bracket codes. NIL has no text to extend.
    pub(crate) fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Atom {
                text,
                is_null: false,
            } => Some(text),
            Self::Atom { is_null: true, .. } | Self::List(_) => None,
        }
    }
}
