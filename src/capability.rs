//! Capability classification for variable-length integer I/O
//!
//! Every buffer names a varint strategy through its associated types
//! [`OutputBuffer::VarintWrite`] and [`InputBuffer::VarintRead`]:
//!
//! - [`Generic`] runs the bit-level algorithm in [`crate::varint`] on top of
//!   the buffer's byte primitives.
//! - [`Native`] forwards to the buffer's own [`NativeVarintOutput`] /
//!   [`NativeVarintInput`] implementation for the requested width.
//!
//! The choice is fixed per buffer type and resolved statically, so no buffer
//! instance is ever consulted. A native implementation must produce and
//! consume exactly the bytes the generic algorithm does.
//!
//! ```rust
//! use wireprim::capability::{native_read, native_write};
//! use wireprim::{SliceReader, SliceWriter};
//!
//! assert!(native_write::<SliceWriter<'_>>());
//! assert!(native_read::<SliceReader<'_>>());
//! assert!(!native_write::<Vec<u8>>());
//! ```

use crate::buffer::{InputBuffer, OutputBuffer};
use crate::error::Result;
use crate::varint::{self, VarUnsigned};

/// Marker for a varint strategy, see [`Generic`] and [`Native`]
pub trait Strategy {
    /// Whether this strategy delegates to the buffer
    const NATIVE: bool;
}

/// Strategy that runs the generic varint algorithm over byte primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generic {}

/// Strategy that delegates to the buffer's own varint implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Native {}

impl Strategy for Generic {
    const NATIVE: bool = false;
}

impl Strategy for Native {
    const NATIVE: bool = true;
}

/// Buffer-provided varint encoding for unsigned width `T`
///
/// Required for every width a buffer with `VarintWrite = Native` is used with.
pub trait NativeVarintOutput<T: VarUnsigned>: OutputBuffer {
    /// Write `value` in the standard 7-bit continuation encoding
    fn write_variable_unsigned(&mut self, value: T) -> Result<()>;
}

/// Buffer-provided varint decoding for unsigned width `T`
///
/// Required for every width a buffer with `VarintRead = Native` is used with.
pub trait NativeVarintInput<T: VarUnsigned>: InputBuffer {
    /// Read a value in the standard 7-bit continuation encoding
    fn read_variable_unsigned(&mut self) -> Result<T>;
}

/// Write path selected by a strategy for buffer `B` and width `T`
pub trait WriteVarintWith<B: ?Sized, T>: Strategy {
    /// Encode `value` into `buf`
    fn write(buf: &mut B, value: T) -> Result<()>;
}

/// Read path selected by a strategy for buffer `B` and width `T`
pub trait ReadVarintWith<B: ?Sized, T>: Strategy {
    /// Decode a value from `buf`
    fn read(buf: &mut B) -> Result<T>;
}

impl<B, T> WriteVarintWith<B, T> for Generic
where
    B: OutputBuffer + ?Sized,
    T: VarUnsigned,
{
    #[inline]
    fn write(buf: &mut B, value: T) -> Result<()> {
        varint::write_varint_generic(buf, value)
    }
}

impl<B, T> WriteVarintWith<B, T> for Native
where
    B: NativeVarintOutput<T> + ?Sized,
    T: VarUnsigned,
{
    #[inline]
    fn write(buf: &mut B, value: T) -> Result<()> {
        buf.write_variable_unsigned(value)
    }
}

impl<B, T> ReadVarintWith<B, T> for Generic
where
    B: InputBuffer + ?Sized,
    T: VarUnsigned,
{
    #[inline]
    fn read(buf: &mut B) -> Result<T> {
        varint::read_varint_generic(buf)
    }
}

impl<B, T> ReadVarintWith<B, T> for Native
where
    B: NativeVarintInput<T> + ?Sized,
    T: VarUnsigned,
{
    #[inline]
    fn read(buf: &mut B) -> Result<T> {
        buf.read_variable_unsigned()
    }
}

/// Whether `B` writes varints through its own implementation
#[inline]
pub const fn native_write<B: OutputBuffer + ?Sized>() -> bool {
    <B::VarintWrite as Strategy>::NATIVE
}

/// Whether `B` reads varints through its own implementation
#[inline]
pub const fn native_read<B: InputBuffer + ?Sized>() -> bool {
    <B::VarintRead as Strategy>::NATIVE
}
