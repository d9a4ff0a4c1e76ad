//! Hex digits for diagnostic output

use core::fmt;

use crate::error::{Error, Result};

/// Lowercase ASCII digit for the low nibble of `n`
#[inline]
pub const fn hex_digit(n: u8) -> u8 {
    let d = n & 0x0F;
    if d < 10 {
        b'0' + d
    } else {
        b'a' + d - 10
    }
}

/// Nibble value of an ASCII hex digit, either case
#[inline]
pub const fn hex_value(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidHexDigit),
    }
}

/// Displays a byte slice as contiguous lowercase hex
///
/// ```rust
/// use wireprim::hex::HexDump;
///
/// assert_eq!(format!("{}", HexDump(&[0x80, 0x01])), "8001");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for &byte in self.0 {
            f.write_char(hex_digit(byte >> 4) as char)?;
            f.write_char(hex_digit(byte) as char)?;
        }
        Ok(())
    }
}
