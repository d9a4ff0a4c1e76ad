//! Variable-length integer encoding (LEB128)
//!
//! Each byte carries 7 value bits, least-significant group first. The high bit
//! is set on every byte except the last. A value of width `N` bits never needs
//! more than `ceil(N / 7)` bytes.
//!
//! [`write_varint`] and [`read_varint`] dispatch on the buffer's declared
//! [`Strategy`](crate::capability::Strategy): buffers that bring their own
//! encoder get it, everything else runs [`write_varint_generic`] /
//! [`read_varint_generic`].

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::capability::{ReadVarintWith, WriteVarintWith};
use crate::error::{Error, Result};

/// Maximum bytes needed for a u8 varint (2 bytes)
pub const MAX_VARINT_U8_SIZE: usize = 2;

/// Maximum bytes needed for a u16 varint (3 bytes)
pub const MAX_VARINT_U16_SIZE: usize = 3;

/// Maximum bytes needed for a u32 varint (5 bytes)
pub const MAX_VARINT_U32_SIZE: usize = 5;

/// Maximum bytes needed for a u64 varint (10 bytes)
pub const MAX_VARINT_U64_SIZE: usize = 10;

/// Unsigned integer widths that have a varint encoding
pub trait VarUnsigned: Copy + Eq + core::fmt::Debug {
    /// Width in bits
    const BITS: u32;
    /// Byte budget of the encoding, `ceil(BITS / 7)`
    const MAX_ENCODED_LEN: usize;
    /// Zero of this width
    const ZERO: Self;

    /// Low 8 bits of the value
    fn low_byte(self) -> u8;

    /// Logical right shift by one 7-bit group
    fn shr7(self) -> Self;

    /// OR a 7-bit group in at `shift`; bits past the width are dropped
    fn with_group(self, group: u8, shift: u32) -> Self;
}

macro_rules! impl_var_unsigned {
    ($($ty:ty => $max:expr),* $(,)?) => {$(
        impl VarUnsigned for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MAX_ENCODED_LEN: usize = $max;
            const ZERO: Self = 0;

            #[inline]
            fn low_byte(self) -> u8 {
                self as u8
            }

            #[inline]
            fn shr7(self) -> Self {
                self >> 7
            }

            #[inline]
            fn with_group(self, group: u8, shift: u32) -> Self {
                self | (group as $ty).wrapping_shl(shift)
            }
        }
    )*};
}

impl_var_unsigned! {
    u8 => MAX_VARINT_U8_SIZE,
    u16 => MAX_VARINT_U16_SIZE,
    u32 => MAX_VARINT_U32_SIZE,
    u64 => MAX_VARINT_U64_SIZE,
}

/// Write `value` as a varint, using the buffer's native encoder if it has one
#[inline]
pub fn write_varint<B, T>(buf: &mut B, value: T) -> Result<()>
where
    B: OutputBuffer + ?Sized,
    T: VarUnsigned,
    B::VarintWrite: WriteVarintWith<B, T>,
{
    <B::VarintWrite as WriteVarintWith<B, T>>::write(buf, value)
}

/// Read a varint, using the buffer's native decoder if it has one
#[inline]
pub fn read_varint<B, T>(buf: &mut B) -> Result<T>
where
    B: InputBuffer + ?Sized,
    T: VarUnsigned,
    B::VarintRead: ReadVarintWith<B, T>,
{
    <B::VarintRead as ReadVarintWith<B, T>>::read(buf)
}

/// Generic varint encoder built on [`OutputBuffer::write_u8`]
pub fn write_varint_generic<B, T>(buf: &mut B, value: T) -> Result<()>
where
    B: OutputBuffer + ?Sized,
    T: VarUnsigned,
{
    let mut value = value;

    loop {
        let group = value.low_byte() & 0x7F;
        value = value.shr7();

        if value == T::ZERO {
            return buf.write_u8(group);
        }

        buf.write_u8(group | 0x80)?;
    }
}

/// Generic varint decoder built on [`InputBuffer::read_u8`]
///
/// Fails with [`Error::InvalidVarint`] when the continuation bit is still set
/// on byte number `T::MAX_ENCODED_LEN`. Surplus bits in that final byte are
/// discarded.
pub fn read_varint_generic<B, T>(buf: &mut B) -> Result<T>
where
    B: InputBuffer + ?Sized,
    T: VarUnsigned,
{
    let mut result = T::ZERO;
    let mut shift = 0;

    for _ in 0..T::MAX_ENCODED_LEN {
        let byte = buf.read_u8()?;
        result = result.with_group(byte & 0x7F, shift);

        if byte & 0x80 == 0 {
            return Ok(result);
        }

        shift += 7;
    }

    log::debug!(
        "rejecting varint longer than {} bytes for u{}",
        T::MAX_ENCODED_LEN,
        T::BITS
    );
    Err(Error::InvalidVarint)
}

/// Number of bytes `value` occupies once encoded
#[inline]
pub fn varint_len<T: VarUnsigned>(value: T) -> usize {
    let mut value = value.shr7();
    let mut len = 1;

    while value != T::ZERO {
        value = value.shr7();
        len += 1;
    }

    len
}

/// Encode `value` into the front of `buf`
///
/// Returns the number of bytes written, or Error::ShortBuffer if insufficient space.
#[inline]
pub fn encode_to_slice<T: VarUnsigned>(value: T, buf: &mut [u8]) -> Result<usize> {
    let mut value = value;
    let mut pos = 0;

    loop {
        if pos >= buf.len() {
            return Err(Error::ShortBuffer);
        }

        let group = value.low_byte() & 0x7F;
        value = value.shr7();

        if value == T::ZERO {
            buf[pos] = group;
            return Ok(pos + 1);
        }

        buf[pos] = group | 0x80;
        pos += 1;
    }
}

/// Decode a varint from the front of `buf`
///
/// Returns (value, bytes_consumed) or an error. Applies the same byte budget as
/// [`read_varint_generic`].
#[inline]
pub fn decode_from_slice<T: VarUnsigned>(buf: &[u8]) -> Result<(T, usize)> {
    let mut result = T::ZERO;
    let mut shift = 0;
    let mut pos = 0;

    loop {
        if pos >= T::MAX_ENCODED_LEN {
            log::debug!(
                "rejecting varint longer than {} bytes for u{}",
                T::MAX_ENCODED_LEN,
                T::BITS
            );
            return Err(Error::InvalidVarint);
        }

        if pos >= buf.len() {
            return Err(Error::UnexpectedEof);
        }

        let byte = buf[pos];
        pos += 1;

        result = result.with_group(byte & 0x7F, shift);

        if byte & 0x80 == 0 {
            return Ok((result, pos));
        }

        shift += 7;
    }
}
