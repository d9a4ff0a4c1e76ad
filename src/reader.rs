//! Zero-copy reader over a borrowed slice
//!
//! Varints are decoded in place from the unread tail, so the reader declares
//! the [`Native`] strategy.

use crate::buffer::InputBuffer;
use crate::capability::{Native, NativeVarintInput};
use crate::error::{Error, Result};
use crate::varint::{self, VarUnsigned};

/// Cursor for reading a byte slice with position tracking
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Create new reader for the given buffer
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Get current read position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining bytes in cursor
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check if cursor is at end
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Skip bytes in the cursor
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(Error::UnexpectedEof);
        }
        self.pos += n;
        Ok(())
    }

    /// Read raw bytes without copying
    #[inline]
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(len)?;
        self.pos += len;
        Ok(bytes)
    }

    /// Peek at bytes without advancing cursor
    #[inline]
    pub fn peek_bytes(&self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::UnexpectedEof);
        }
        Ok(&self.buf[self.pos..self.pos + len])
    }
}

impl InputBuffer for SliceReader<'_> {
    type VarintRead = Native;

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        if self.pos >= self.buf.len() {
            return Err(Error::UnexpectedEof);
        }
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline]
    fn read_bytes(&mut self, out: &mut [u8]) -> Result<()> {
        let bytes = self.read_slice(out.len())?;
        out.copy_from_slice(bytes);
        Ok(())
    }
}

impl<T: VarUnsigned> NativeVarintInput<T> for SliceReader<'_> {
    #[inline]
    fn read_variable_unsigned(&mut self) -> Result<T> {
        let (value, consumed) = varint::decode_from_slice(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::varint::read_varint;

    #[test]
    fn test_reader_operations() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut reader = SliceReader::new(&data);

        assert_eq!(reader.remaining(), 8);
        assert!(!reader.is_at_end());

        assert_eq!(reader.read_u8().unwrap(), 1);
        reader.skip(2).unwrap();
        assert_eq!(reader.remaining(), 5);

        let peeked = reader.peek_bytes(2).unwrap();
        assert_eq!(peeked, &[4, 5]);
        assert_eq!(reader.remaining(), 5); // peek doesn't advance

        let mut out = [0u8; 2];
        reader.read_bytes(&mut out).unwrap();
        assert_eq!(out, [4, 5]);

        assert_eq!(reader.read_slice(3).unwrap(), &[6, 7, 8]);
        assert!(reader.is_at_end());
        assert_eq!(reader.read_u8(), Err(Error::UnexpectedEof));
    }

    #[test]
    fn test_reader_varints() {
        let data = [0x00, 0x7F, 0x80, 0x01, 0xAC, 0x02];
        let mut reader = SliceReader::new(&data);

        assert_eq!(read_varint::<_, u32>(&mut reader).unwrap(), 0);
        assert_eq!(read_varint::<_, u8>(&mut reader).unwrap(), 127);
        assert_eq!(read_varint::<_, u64>(&mut reader).unwrap(), 128);
        assert_eq!(read_varint::<_, u16>(&mut reader).unwrap(), 300);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_reader_truncated_varint() {
        let data = [0xFF, 0xFF];
        let mut reader = SliceReader::new(&data);

        assert_eq!(
            read_varint::<_, u32>(&mut reader),
            Err(Error::UnexpectedEof)
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_reader_skip_past_end() {
        let data = [0u8; 4];
        let mut reader = SliceReader::new(&data);
        assert_eq!(reader.skip(5), Err(Error::UnexpectedEof));
        assert_eq!(reader.read_slice(5), Err(Error::UnexpectedEof));
    }
}
