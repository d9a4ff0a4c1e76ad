//! Error types for the wireprim codec layer

/// Errors that can occur while encoding or decoding primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Output buffer has no room for the write
    ShortBuffer,
    /// Input ended before the value was complete
    UnexpectedEof,
    /// Varint continuation bit still set past the width's byte budget
    InvalidVarint,
    /// Length arithmetic does not fit in `usize`
    Overflow,
    /// Character is not a hexadecimal digit
    InvalidHexDigit,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::ShortBuffer => "buffer too small for operation",
            Error::UnexpectedEof => "unexpected end of input",
            Error::InvalidVarint => "varint exceeds the byte budget of its width",
            Error::Overflow => "integer overflow in length calculation",
            Error::InvalidHexDigit => "invalid hexadecimal digit",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for wireprim operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions_are_distinct() {
        let all = [
            Error::ShortBuffer,
            Error::UnexpectedEof,
            Error::InvalidVarint,
            Error::Overflow,
            Error::InvalidHexDigit,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.description(), b.description());
            }
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_uses_description() {
        use std::string::ToString;
        assert_eq!(
            Error::InvalidVarint.to_string(),
            "varint exceeds the byte budget of its width"
        );
    }
}
