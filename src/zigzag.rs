//! ZigZag mapping of signed integers onto unsigned ones
//!
//! `0, -1, 1, -2, 2, ...` map to `0, 1, 2, 3, 4, ...`, so values close to zero
//! stay short once varint encoded. The mapping is a bijection over each width,
//! `MIN` included.

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::capability::{ReadVarintWith, WriteVarintWith};
use crate::error::Result;
use crate::varint::{self, VarUnsigned};

/// Signed integers with a zigzag counterpart of the same width
pub trait ZigZag: Copy {
    /// Unsigned type of the same width
    type Unsigned: VarUnsigned;

    /// Map to the unsigned domain
    fn zigzag_encode(self) -> Self::Unsigned;

    /// Map back from the unsigned domain
    fn zigzag_decode(value: Self::Unsigned) -> Self;
}

macro_rules! impl_zigzag {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {$(
        impl ZigZag for $signed {
            type Unsigned = $unsigned;

            #[inline]
            fn zigzag_encode(self) -> $unsigned {
                // Arithmetic shift smears the sign bit across the word
                ((self << 1) ^ (self >> (<$signed>::BITS - 1))) as $unsigned
            }

            #[inline]
            fn zigzag_decode(value: $unsigned) -> $signed {
                ((value >> 1) ^ (value & 1).wrapping_neg()) as $signed
            }
        }
    )*};
}

impl_zigzag! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}

/// ZigZag-encode a signed value
#[inline]
pub fn encode_zigzag<T: ZigZag>(value: T) -> T::Unsigned {
    value.zigzag_encode()
}

/// Decode a zigzag-encoded value back to its signed form
#[inline]
pub fn decode_zigzag<T: ZigZag>(value: T::Unsigned) -> T {
    T::zigzag_decode(value)
}

/// Write a signed value as a zigzag varint
#[inline]
pub fn write_signed_varint<B, T>(buf: &mut B, value: T) -> Result<()>
where
    B: OutputBuffer + ?Sized,
    T: ZigZag,
    B::VarintWrite: WriteVarintWith<B, T::Unsigned>,
{
    varint::write_varint(buf, value.zigzag_encode())
}

/// Read a signed value written by [`write_signed_varint`]
#[inline]
pub fn read_signed_varint<B, T>(buf: &mut B) -> Result<T>
where
    B: InputBuffer + ?Sized,
    T: ZigZag,
    B::VarintRead: ReadVarintWith<B, T::Unsigned>,
{
    varint::read_varint(buf).map(T::zigzag_decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::SliceReader;
    use alloc::vec::Vec;

    #[test]
    fn test_small_values() {
        assert_eq!(encode_zigzag(0i32), 0);
        assert_eq!(encode_zigzag(-1i32), 1);
        assert_eq!(encode_zigzag(1i32), 2);
        assert_eq!(encode_zigzag(-2i32), 3);
        assert_eq!(encode_zigzag(2i32), 4);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(encode_zigzag(i8::MAX), u8::MAX - 1);
        assert_eq!(encode_zigzag(i8::MIN), u8::MAX);
        assert_eq!(encode_zigzag(i64::MIN), u64::MAX);
        assert_eq!(decode_zigzag::<i64>(u64::MAX), i64::MIN);
        assert_eq!(decode_zigzag::<i16>(u16::MAX - 1), i16::MAX);
    }

    #[test]
    fn test_exhaustive_i8_i16() {
        for x in i8::MIN..=i8::MAX {
            assert_eq!(decode_zigzag::<i8>(encode_zigzag(x)), x);
        }
        for x in i16::MIN..=i16::MAX {
            assert_eq!(decode_zigzag::<i16>(encode_zigzag(x)), x);
        }
    }

    #[test]
    fn test_signed_varint_roundtrip() {
        let values = [0i64, -1, 1, -64, 64, i64::MIN, i64::MAX];
        let mut out: Vec<u8> = Vec::new();
        for &v in &values {
            write_signed_varint(&mut out, v).unwrap();
        }

        // -64 fits one byte, 64 needs two
        assert_eq!(&out[..5], &[0x00, 0x01, 0x02, 0x7F, 0x80]);

        let mut reader = SliceReader::new(&out);
        for &v in &values {
            assert_eq!(read_signed_varint::<_, i64>(&mut reader).unwrap(), v);
        }
        assert!(reader.is_at_end());
    }
}
