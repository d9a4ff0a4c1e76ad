//! Buffer capability traits
//!
//! The codec never touches memory directly; it moves bytes through these
//! primitives. A buffer also declares its varint strategy, see
//! [`crate::capability`].

use alloc::vec::Vec;

use crate::capability::{Generic, Strategy};
use crate::error::{Error, Result};

/// Sink the encoders write into
pub trait OutputBuffer {
    /// Varint strategy for this buffer type
    type VarintWrite: Strategy;

    /// Append one byte
    fn write_u8(&mut self, byte: u8) -> Result<()>;

    /// Append a run of bytes
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Append an opaque blob
    ///
    /// Forwards to [`write_bytes`](Self::write_bytes). Override when the
    /// buffer can take the blob without copying it.
    #[inline]
    fn write_raw_blob(&mut self, blob: &[u8]) -> Result<()> {
        self.write_bytes(blob)
    }
}

/// Source the decoders read from
pub trait InputBuffer {
    /// Varint strategy for this buffer type
    type VarintRead: Strategy;

    /// Consume one byte
    fn read_u8(&mut self) -> Result<u8>;

    /// Fill `out` completely, or fail without a partial guarantee
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<()>;
}

/// Write an opaque byte range through the buffer's blob hook
#[inline]
pub fn write_raw_blob<B: OutputBuffer + ?Sized>(buf: &mut B, blob: &[u8]) -> Result<()> {
    buf.write_raw_blob(blob)
}

impl OutputBuffer for Vec<u8> {
    type VarintWrite = Generic;

    #[inline]
    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Reading advances the slice past the consumed bytes.
impl<'a> InputBuffer for &'a [u8] {
    type VarintRead = Generic;

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        let (&byte, rest) = self.split_first().ok_or(Error::UnexpectedEof)?;
        *self = rest;
        Ok(byte)
    }

    #[inline]
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() > self.len() {
            return Err(Error::UnexpectedEof);
        }
        let (head, rest) = self.split_at(out.len());
        out.copy_from_slice(head);
        *self = rest;
        Ok(())
    }
}
