//! Reads and writes self-describing binary buffers. Every value is preceded by a one-byte
//! [`TypeTag`], and decoding checks that tag before it interprets the bytes that follow.
//!
//! Supported kinds are `bool`, single-byte characters, `i32`, `i64`, `f32`, `f64`,
//! length-prefixed strings, sequences, linked sequences, mappings, sets, and user-defined
//! aggregates (see [`aggregate!`]). Multi-byte scalars are always little-endian on the wire.
//!
//! The format has no magic number, version, or overall length. Writer and reader must agree on
//! the order and kinds of the values they exchange.
//!
//! ```
//! use std::collections::BTreeMap;
//! use tagged_binary_io::BinaryWriter;
//!
//! let mut w = BinaryWriter::new();
//! w.write_i32(7);
//! w.write_str("seven").unwrap();
//! w.write(&BTreeMap::from([(1, "one".to_string())])).unwrap();
//!
//! let mut r = w.reader();
//! assert_eq!(r.read_i32(), Ok(7));
//! assert_eq!(r.read_str(), Ok("seven"));
//! let m: BTreeMap<i32, String> = r.read().unwrap();
//! assert_eq!(m[&1], "one");
//! assert!(r.is_empty());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod aggregate;
pub mod byte_order;
mod codec;
mod container;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod reader;
mod scalar;
mod tag;
mod writer;


pub use aggregate::{FieldList, FieldListMut, Serializable};
pub use codec::{Decode, Encode};
pub use error::{Error, Result};
pub use reader::{BinaryReader, MAX_DEPTH};
pub use tag::TypeTag;
pub use writer::BinaryWriter;
