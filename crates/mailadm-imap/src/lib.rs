//! # mailadm-imap
//!
//! Decoder for single IMAP server response lines, as needed by mailbox
//! administration tools that read quota, `LIST` and `NAMESPACE` replies.
//!
//! ## Features
//!
//! - **Atoms, quoted strings and literals**: quoted strings are unescaped,
//!   `{n}` literals are taken verbatim in bounded chunks
//! - **NIL vs empty string**: a bare `NIL` decodes to [`Value::nil`], `""` to
//!   an empty non-null atom
//! - **Response code folding**: `OK [READ-WRITE]` becomes one
//!   `OK[READ-WRITE]` element
//! - **Opaque nesting**: lists nested inside a list are returned as raw text
//!   by default, decodable on demand with [`Decoder::expand`]
//! - **Sans-I/O**: no network access and no buffering across reads
//!
//! ## Quick Start
//!
//! ```
//! use mailadm_imap::{Value, decode};
//!
//! let values = decode("user.test (STORAGE 1478047 4194304)")?;
//!
//! assert_eq!(values[0].as_str(), Some("user.test"));
//! let quota = values[1].as_list().unwrap_or_default();
//! assert_eq!(quota[0], Value::atom("STORAGE"));
//! # Ok::<(), mailadm_imap::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Decoder configuration
//! - [`decoder`]: Line decoder
//! - [`value`]: Decoded value tree

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decoder;
mod error;
pub mod value;

pub use config::{DecoderConfig, DecoderConfigBuilder, Nesting};
pub use decoder::{Decoder, decode};
pub use error::{Error, Result};
pub use value::Value;
