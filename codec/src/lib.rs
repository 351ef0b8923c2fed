//! Serialize structured data into a deterministic binary format.
//!
//! # Overview
//!
//! A binary serialization library designed to efficiently and safely:
//! - Serialize structured data into a stable, auditable byte layout
//! - Deserialize untrusted binary input into structured data
//!
//! The encoding carries no schema, field names or type tags. The only framing is a length
//! prefix before variable-size values and a presence flag before optional values, so the
//! reader must already know the type it expects.
//!
//! # Supported Types
//!
//! Every encodable type has exactly one [`Shape`], fixed by its type:
//! - Hooks: any type implementing [`EncodeHook`] or [`DecodeHook`] and registered with
//!   [`hook!`]
//! - Fixed-size arrays `[T; N]` (no length prefix)
//! - Text (`String`, `str`) and raw bytes ([`bytes::Bytes`])
//! - Sequences (`Vec<T>`, `[T]`)
//! - `Option<T>`
//! - Fieldless enumerations registered with [`enumeration!`]
//! - Primitives: `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`, `i64`, `i128`,
//!   `f32`, `f64`, `bool`
//! - Tuples and structs registered with [`aggregate!`]
//!
//! A type with no implementation cannot be encoded or decoded, and using it is a compile
//! error.
//!
//! Unsigned integers are varint encoded in [`Mode::Compact`] (the default) and fixed width in
//! [`Mode::Fixed`]. Everything else is always fixed width and big-endian.
//!
//! # Safety
//!
//! Every length prefix is checked against [`Config::max_length`] (by default
//! [`DEFAULT_MAX_LENGTH`]) before it is used, so an adversarial length cannot trigger an
//! oversized allocation. Every struct or hooked value spends one level of
//! [`Config::max_depth`] (by default [`DEFAULT_MAX_DEPTH`]), so deeply nested input fails
//! instead of exhausting the stack. Decoded values are always backed by fresh allocations and
//! never borrow from the input.
//!
//! # Example
//!
//! ```
//! use ledger_codec::{aggregate, Config, Decode, Encode, Mode};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Item {
//!     xy: (u64, u64),
//!     z: Option<u32>,
//!     metadata: [u8; 11],
//!     tags: Vec<String>,
//! }
//! aggregate!(Item { xy, z, metadata, tags });
//!
//! let item = Item {
//!     xy: (1, 70000),
//!     z: Some(3),
//!     metadata: [0; 11],
//!     tags: vec!["a".into()],
//! };
//!
//! // Default configuration: compact unsigned integers.
//! let encoded = item.encode();
//! assert_eq!(encoded.len(), 1 + 5 + 2 + 11 + 3);
//! assert_eq!(Item::decode(encoded).unwrap(), item);
//!
//! // Fixed-width unsigned integers.
//! let cfg = Config::default().with_mode(Mode::Fixed);
//! let encoded = item.encode_cfg(&cfg);
//! assert_eq!(encoded.len(), 16 + 5 + 11 + 3);
//! assert_eq!(Item::decode_cfg(encoded, &cfg).unwrap(), item);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod hook;
pub mod io;
pub mod length;
pub mod shape;
pub mod types;
pub mod varint;

// Re-export main types and traits
pub use bytes;
pub use codec::{
    decode_as, decode_from_bytes, decode_from_source, encode_into, encode_to_bytes,
    encode_to_sink, Decode, Encode, EncodeFixed, FixedSize, Read, ReadExt, Write,
};
pub use config::{Config, Mode, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};
pub use error::Error;
pub use hook::{check_hook, Boxed, DecodeHook, EncodeHook, Owned, Qualifier, Shared};
pub use shape::Shape;
