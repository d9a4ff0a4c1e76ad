//! String transcoding between element width and wire code-unit width
//!
//! A string is a run of elements (`u8`, `u16` or `u32`). On the wire it is a
//! run of code units, either narrow (`u8`) or wide (`u16`, little-endian), with
//! no length prefix; the length travels out of band.
//!
//! When element and unit have the same width the payload is copied in bulk.
//! Otherwise each element is converted on its own: narrowing drops the high
//! bits and widening zero-extends. Narrowing is lossy on purpose and never an
//! error.

use alloc::vec::Vec;

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::error::{Error, Result};

/// Bytes staged per bulk chunk for multi-byte code units
const BULK_CHUNK_BYTES: usize = 256;

/// Width category of a code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharWidth {
    /// 8-bit units
    Narrow,
    /// 16-bit units
    Wide,
}

/// String element type
pub trait StringChar: Copy + Default {
    /// Size in bytes
    const SIZE: usize;

    /// Zero-extend to 32 bits
    fn to_u32(self) -> u32;

    /// Keep the low `SIZE * 8` bits
    fn from_u32_lossy(value: u32) -> Self;

    /// View as raw bytes when the element is a single byte
    #[inline]
    fn as_bytes(_chars: &[Self]) -> Option<&[u8]> {
        None
    }

    /// Mutable byte view when the element is a single byte
    #[inline]
    fn as_bytes_mut(_chars: &mut [Self]) -> Option<&mut [u8]> {
        None
    }
}

/// Code unit a buffer carries strings in
pub trait CodeUnit: StringChar {
    /// Width category
    const WIDTH: CharWidth;

    /// Store little-endian into `out[..SIZE]`
    fn put_le(self, out: &mut [u8]);

    /// Load little-endian from `bytes[..SIZE]`
    fn get_le(bytes: &[u8]) -> Self;

    /// Write one unit
    #[inline]
    fn write_to<B: OutputBuffer + ?Sized>(self, buf: &mut B) -> Result<()> {
        let mut bytes = [0u8; 4];
        self.put_le(&mut bytes);
        buf.write_bytes(&bytes[..Self::SIZE])
    }

    /// Read one unit
    #[inline]
    fn read_from<B: InputBuffer + ?Sized>(buf: &mut B) -> Result<Self> {
        let mut bytes = [0u8; 4];
        buf.read_bytes(&mut bytes[..Self::SIZE])?;
        Ok(Self::get_le(&bytes))
    }
}

impl StringChar for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_u32_lossy(value: u32) -> Self {
        value as u8
    }

    #[inline]
    fn as_bytes(chars: &[Self]) -> Option<&[u8]> {
        Some(chars)
    }

    #[inline]
    fn as_bytes_mut(chars: &mut [Self]) -> Option<&mut [u8]> {
        Some(chars)
    }
}

impl StringChar for u16 {
    const SIZE: usize = 2;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_u32_lossy(value: u32) -> Self {
        value as u16
    }
}

impl StringChar for u32 {
    const SIZE: usize = 4;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn from_u32_lossy(value: u32) -> Self {
        value
    }
}

impl CodeUnit for u8 {
    const WIDTH: CharWidth = CharWidth::Narrow;

    #[inline]
    fn put_le(self, out: &mut [u8]) {
        out[0] = self;
    }

    #[inline]
    fn get_le(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn write_to<B: OutputBuffer + ?Sized>(self, buf: &mut B) -> Result<()> {
        buf.write_u8(self)
    }

    #[inline]
    fn read_from<B: InputBuffer + ?Sized>(buf: &mut B) -> Result<Self> {
        buf.read_u8()
    }
}

impl CodeUnit for u16 {
    const WIDTH: CharWidth = CharWidth::Wide;

    #[inline]
    fn put_le(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.to_le_bytes());
    }

    #[inline]
    fn get_le(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }
}

/// Byte length of `length` units of `U`
#[inline]
fn payload_len<U: CodeUnit>(length: usize) -> Result<usize> {
    length.checked_mul(U::SIZE).ok_or(Error::Overflow)
}

/// Write `value` as a run of `U` code units
///
/// The number of units written is `value.len()`; pass a sub-slice to write a
/// prefix.
pub fn write_string<U, B, C>(buf: &mut B, value: &[C]) -> Result<()>
where
    U: CodeUnit,
    B: OutputBuffer + ?Sized,
    C: StringChar,
{
    if C::SIZE != U::SIZE {
        for &ch in value {
            U::from_u32_lossy(ch.to_u32()).write_to(buf)?;
        }
        return Ok(());
    }

    if let Some(bytes) = C::as_bytes(value) {
        return buf.write_bytes(bytes);
    }

    let mut scratch = [0u8; BULK_CHUNK_BYTES];
    for chunk in value.chunks(BULK_CHUNK_BYTES / U::SIZE) {
        let staged = &mut scratch[..payload_len::<U>(chunk.len())?];
        for (slot, &ch) in staged.chunks_exact_mut(U::SIZE).zip(chunk) {
            U::from_u32_lossy(ch.to_u32()).put_le(slot);
        }
        buf.write_bytes(staged)?;
    }
    Ok(())
}

/// Fill `out` with `out.len()` code units of type `U`
pub fn read_string_into<U, B, C>(buf: &mut B, out: &mut [C]) -> Result<()>
where
    U: CodeUnit,
    B: InputBuffer + ?Sized,
    C: StringChar,
{
    if C::SIZE != U::SIZE {
        for slot in out.iter_mut() {
            *slot = C::from_u32_lossy(U::read_from(buf)?.to_u32());
        }
        return Ok(());
    }

    if let Some(bytes) = C::as_bytes_mut(out) {
        return buf.read_bytes(bytes);
    }

    let mut scratch = [0u8; BULK_CHUNK_BYTES];
    for chunk in out.chunks_mut(BULK_CHUNK_BYTES / U::SIZE) {
        let staged = &mut scratch[..payload_len::<U>(chunk.len())?];
        buf.read_bytes(staged)?;
        for (slot, unit) in chunk.iter_mut().zip(staged.chunks_exact(U::SIZE)) {
            *slot = C::from_u32_lossy(U::get_le(unit).to_u32());
        }
    }
    Ok(())
}

/// Replace the contents of `value` with `length` code units of type `U`
///
/// `length` is trusted; a short buffer surfaces as the buffer's own error.
pub fn read_string<U, B, C>(buf: &mut B, value: &mut Vec<C>, length: u32) -> Result<()>
where
    U: CodeUnit,
    B: InputBuffer + ?Sized,
    C: StringChar,
{
    let length = usize::try_from(length).map_err(|_| Error::Overflow)?;
    payload_len::<U>(length)?;

    value.clear();
    value.resize(length, C::default());
    read_string_into::<U, _, _>(buf, value.as_mut_slice())
}

/// Write `value` as narrow (8-bit) code units
#[inline]
pub fn write_narrow_string<B, C>(buf: &mut B, value: &[C]) -> Result<()>
where
    B: OutputBuffer + ?Sized,
    C: StringChar,
{
    write_string::<u8, _, _>(buf, value)
}

/// Write `value` as wide (16-bit) code units
#[inline]
pub fn write_wide_string<B, C>(buf: &mut B, value: &[C]) -> Result<()>
where
    B: OutputBuffer + ?Sized,
    C: StringChar,
{
    write_string::<u16, _, _>(buf, value)
}

/// Read `length` narrow code units into `value`
#[inline]
pub fn read_narrow_string<B, C>(buf: &mut B, value: &mut Vec<C>, length: u32) -> Result<()>
where
    B: InputBuffer + ?Sized,
    C: StringChar,
{
    read_string::<u8, _, _>(buf, value, length)
}

/// Read `length` wide code units into `value`
#[inline]
pub fn read_wide_string<B, C>(buf: &mut B, value: &mut Vec<C>, length: u32) -> Result<()>
where
    B: InputBuffer + ?Sized,
    C: StringChar,
{
    read_string::<u16, _, _>(buf, value, length)
}
