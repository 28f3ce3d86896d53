//! Error types for the byteview codec

/// Errors reported by the checked `try_*` operations
///
/// The plain read/write operations treat a short region as a programming
/// error and panic with the same message this type displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Byte region shorter than the operation width
    ShortBuffer {
        /// Bytes the operation touches
        needed: usize,
        /// Bytes the region actually holds
        len: usize,
    },
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::ShortBuffer { .. } => "byte region too short",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ShortBuffer { needed, len } => {
                write!(f, "{}: need {} bytes, got {}", self.description(), needed, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for checked byteview operations
pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `buf` holds at least `needed` bytes
#[inline]
pub(crate) fn check_len(buf: &[u8], needed: usize) -> Result<()> {
    if buf.len() < needed {
        return Err(Error::ShortBuffer {
            needed,
            len: buf.len(),
        });
    }
    Ok(())
}

/// Panicking form of [`check_len`], reported at the caller's location
#[inline]
#[track_caller]
pub(crate) fn require_len(buf: &[u8], needed: usize) {
    if let Err(e) = check_len(buf, needed) {
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert_eq!(check_len(&[0u8; 4], 4), Ok(()));
        assert_eq!(check_len(&[0u8; 9], 4), Ok(()));
        assert_eq!(
            check_len(&[0u8; 3], 4),
            Err(Error::ShortBuffer { needed: 4, len: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "byte region too short: need 8 bytes, got 0")]
    fn test_require_len_panics() {
        require_len(&[], 8);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        use std::string::ToString;

        let err = Error::ShortBuffer { needed: 3, len: 2 };
        assert_eq!(err.to_string(), "byte region too short: need 3 bytes, got 2");
    }
}
