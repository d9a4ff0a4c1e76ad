//! Fixed-capacity writer over a caller-provided slice
//!
//! The writer never allocates. Varints are encoded straight into the remaining
//! space, so it declares the [`Native`] strategy.

use crate::buffer::OutputBuffer;
use crate::capability::{Native, NativeVarintOutput};
use crate::error::{Error, Result};
use crate::varint::{self, VarUnsigned};

/// Writer that fills a user-provided buffer front to back
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    /// Create new writer over the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Get current position in buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining buffer capacity
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reset writer for reuse with the same buffer
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Get a slice of the written data
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl OutputBuffer for SliceWriter<'_> {
    type VarintWrite = Native;

    #[inline]
    fn write_u8(&mut self, byte: u8) -> Result<()> {
        if self.pos >= self.buf.len() {
            return Err(Error::ShortBuffer);
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.remaining() {
            return Err(Error::ShortBuffer);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

impl<T: VarUnsigned> NativeVarintOutput<T> for SliceWriter<'_> {
    #[inline]
    fn write_variable_unsigned(&mut self, value: T) -> Result<()> {
        let written = varint::encode_to_slice(value, &mut self.buf[self.pos..])?;
        self.pos += written;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::varint::write_varint;

    #[test]
    fn test_writer_basic() {
        let mut buf = [0u8; 16];
        let mut writer = SliceWriter::new(&mut buf);

        writer.write_u8(0xAB).unwrap();
        writer.write_bytes(b"xyz").unwrap();
        write_varint(&mut writer, 300u32).unwrap();

        assert_eq!(writer.position(), 6);
        assert_eq!(writer.remaining(), 10);
        assert_eq!(writer.as_slice(), &[0xAB, b'x', b'y', b'z', 0xAC, 0x02]);
    }

    #[test]
    fn test_writer_buffer_too_small() {
        let mut buf = [0u8; 3];
        let mut writer = SliceWriter::new(&mut buf);

        assert_eq!(writer.write_bytes(b"abcd"), Err(Error::ShortBuffer));
        assert_eq!(writer.position(), 0);

        assert_eq!(write_varint(&mut writer, u32::MAX), Err(Error::ShortBuffer));

        writer.write_bytes(b"abc").unwrap();
        assert_eq!(writer.write_u8(0), Err(Error::ShortBuffer));
    }

    #[test]
    fn test_writer_reset() {
        let mut buf = [0u8; 8];
        let mut writer = SliceWriter::new(&mut buf);

        write_varint(&mut writer, 1u64 << 20).unwrap();
        writer.reset();
        assert_eq!(writer.position(), 0);

        write_varint(&mut writer, 7u8).unwrap();
        assert_eq!(writer.as_slice(), &[7]);
    }
}
