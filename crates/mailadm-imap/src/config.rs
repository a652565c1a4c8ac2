//! Decoder configuration types.

/// Default upper bound on a single literal read, in bytes.
pub const DEFAULT_LITERAL_CHUNK_SIZE: usize = 4096;

/// Default list nesting limit for [`Nesting::Recursive`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How lists nested inside a list are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nesting {
    /// Lists nested inside a list are returned as raw text atoms, parens
    /// included. Callers decode them on demand.
    #[default]
    Opaque,
    /// Every nested list is decoded into a [`Value::List`](crate::Value::List).
    Recursive,
}

/// Response decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest number of literal bytes copied in one step.
    pub literal_chunk_size: usize,
    /// Treatment of nested lists.
    pub nesting: Nesting,
    /// Lines longer than this are rejected before scanning.
    pub max_line_length: Option<usize>,
    /// Deepest list nesting accepted by [`Nesting::Recursive`], counting the
    /// outermost list as 1.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            literal_chunk_size: DEFAULT_LITERAL_CHUNK_SIZE,
            nesting: Nesting::Opaque,
            max_line_length: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::new()
    }
}

/// Builder for decoder configuration.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfigBuilder {
    literal_chunk_size: Option<usize>,
    nesting: Nesting,
    max_line_length: Option<usize>,
    max_depth: Option<usize>,
}

impl DecoderConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the literal chunk size. Zero is raised to one.
    #[must_use]
    pub const fn literal_chunk_size(mut self, size: usize) -> Self {
        self.literal_chunk_size = Some(size);
        self
    }

    /// Sets the nesting mode.
    #[must_use]
    pub const fn nesting(mut self, nesting: Nesting) -> Self {
        self.nesting = nesting;
        self
    }

    /// Sets the maximum accepted line length.
    #[must_use]
    pub const fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    /// Sets the nesting limit for recursive decoding. Zero is raised to one.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> DecoderConfig {
        DecoderConfig {
            literal_chunk_size: self
                .literal_chunk_size
                .map_or(DEFAULT_LITERAL_CHUNK_SIZE, |size| size.max(1)),
            nesting: self.nesting,
            max_line_length: self.max_line_length,
            max_depth: self.max_depth.map_or(DEFAULT_MAX_DEPTH, |depth| depth.max(1)),
        }
    }
}
