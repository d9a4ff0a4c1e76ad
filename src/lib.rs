//! wireprim: encoding primitives for schema-driven binary protocols
//!
//! This crate provides the byte-level building blocks a protocol reader or
//! writer is assembled from: variable-length unsigned integers, zigzag mapping
//! for signed values, and string transcoding between element width and wire
//! code-unit width.
//!
//! # Wire Format
//!
//! ```text
//! varint   : [1ggggggg]* [0ggggggg]     7-bit groups, least significant first
//! signed   : zigzag(value) as varint   0,-1,1,-2,.. -> 0,1,2,3,..
//! string   : unit* (no length prefix)  u8 units, or u16 units little-endian
//! ```
//!
//! # Buffers
//!
//! All I/O goes through the [`OutputBuffer`] and [`InputBuffer`] traits. A
//! buffer type that encodes varints faster on its own declares the
//! [`capability::Native`] strategy and implements
//! [`capability::NativeVarintOutput`] / [`capability::NativeVarintInput`];
//! the codec then routes through it with no runtime check.
//!
//! # Example
//!
//! ```rust
//! use wireprim::*;
//!
//! let mut buf = [0u8; 64];
//! let mut writer = SliceWriter::new(&mut buf);
//!
//! write_varint(&mut writer, 300u32)?;
//! write_signed_varint(&mut writer, -2i64)?;
//! write_varint(&mut writer, 2u32)?; // string length
//! write_narrow_string(&mut writer, b"ok")?;
//! let len = writer.position();
//! assert_eq!(&buf[..3], &[0xAC, 0x02, 0x03]);
//!
//! let mut reader = SliceReader::new(&buf[..len]);
//! let id: u32 = read_varint(&mut reader)?;
//! let delta: i64 = read_signed_varint(&mut reader)?;
//! let n: u32 = read_varint(&mut reader)?;
//! let mut name: Vec<u8> = Vec::new();
//! read_narrow_string::<_, u8>(&mut reader, &mut name, n)?;
//!
//! assert_eq!((id, delta, name.as_slice()), (300, -2, &b"ok"[..]));
//! # Ok::<(), wireprim::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod buffer;
pub mod capability;
pub mod error;
pub mod hex;
pub mod reader;
pub mod string;
pub mod varint;
pub mod writer;
pub mod zigzag;

#[cfg(all(feature = "std", test))]
pub mod bench;

// Re-export main types
pub use buffer::{write_raw_blob, InputBuffer, OutputBuffer};
pub use error::{Error, Result};
pub use reader::SliceReader;
pub use string::{
    read_narrow_string, read_string, read_wide_string, write_narrow_string, write_string,
    write_wide_string,
};
pub use varint::{read_varint, varint_len, write_varint};
pub use writer::SliceWriter;
pub use zigzag::{decode_zigzag, encode_zigzag, read_signed_varint, write_signed_varint};
