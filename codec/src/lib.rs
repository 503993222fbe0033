//! Deserialize structured data from a compact binary wire format.
//!
//! # Overview
//!
//! Decodes untrusted binary input into typed values. Every decode advances a caller-owned
//! [`bytes::Buf`] and either populates the destination or fails with an [`Error`] describing the
//! first problem encountered. Encoding is not provided.
//!
//! Variants and records may nest at most [`util::MAX_DEPTH`] levels deep, and sequences may not
//! hold elements that occupy no bytes on the wire, so the work done is bounded by the input.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u8`, `u16`, `u32`, `u64`, `u128`, `i8`, `i16`, `i32`, `i64`, `i128`, `f32`,
//!   `f64`, `bool` (fixed width, little-endian)
//! - Variable-length integers: [`varint::VarUint32`], [`varint::VarUint64`], [`varint::VarInt32`]
//! - Text: `String` and [`bytes::Bytes`]
//! - Collections: `Vec<T>`, `Option<T>`, and tuples (including pairs) up to 12 elements
//! - Tagged unions, via the [`variant!`] macro or a hand-written [`variant::Variant`]
//! - Records, via the [`record!`] macro or a hand-written [`record::Record`]
//!
//! # Wire Format
//!
//! ```text
//! varuint          7 data bits per byte, high bit = more bytes follow, low group first
//! varint32         varuint32 v; odd v is negative: (!v >> 1) | 0x8000_0000, even v: v >> 1
//! primitive        size_of::<T>() bytes, little-endian
//! Vec<primitive>   length (varuint64 on 64-bit targets, varuint32 otherwise) + packed values
//! Vec<T>           varuint32 length + each element
//! text             varuint32 length + raw bytes
//! Option<T>        1-byte flag (nonzero = present) + T if present
//! (A, B, ..)       A + B + ..
//! variant          varuint32 tag + selected alternative
//! record           each field in declared order
//! ```
//!
//! # Example
//!
//! ```
//! use binwire_codec::{decode, record, variant, DecodeExt, Error};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Account {
//!     id: i32,
//!     name: String,
//! }
//!
//! record!(Account { id, name });
//!
//! variant! {
//!     #[derive(Debug, PartialEq)]
//!     enum Message {
//!         Ping(()),
//!         Open(Account),
//!     }
//! }
//!
//! // Decode into an existing value
//! let mut account = Account::default();
//! let mut buf = &[0x07, 0x00, 0x00, 0x00, 0x03, b'b', b'o', b'b'][..];
//! decode(&mut account, &mut buf).unwrap();
//! assert_eq!(account.name, "bob");
//!
//! // Decode a whole message
//! let message = Message::decode(&[0x01, 0x01, 0x00, 0x00, 0x00, 0x00][..]).unwrap();
//! assert_eq!(message, Message::Open(Account { id: 1, name: String::new() }));
//!
//! // Unknown tags are rejected
//! assert!(matches!(Message::decode(&[0x02][..]), Err(Error::BadVariantIndex(2))));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod types;
pub mod util;
pub mod variant;
pub mod varint;

// Re-export main types and traits
pub use codec::{decode, decode_cfg, Decode, DecodeExt, FixedSize, Read, ReadExt};
pub use config::RangeCfg;
pub use error::Error;

// Hidden from docs because it is needed for the macros to name `Buf`.
#[doc(hidden)]
pub use ::bytes;
