//! # Error Types
//!
//! This module defines the error types returned by the decoder and encoder.
//!
//! Only framing problems are errors. A sentence whose framing is intact but
//! whose fields are malformed still decodes successfully; the affected
//! fields are simply left invalid (see [`Tpv`](crate::Tpv)).

use thiserror::Error;

/// Result code of a successful decode.
pub const OK: i32 = 0;

const MESSAGES: [&str; 6] = [
    "No error while parsing NMEA",
    "Header '$' missing",
    "Footer CRLF missing",
    "Checksum did not match",
    "Sentence truncated",
    "Unsupported NMEA sentence",
];

/// Represents all possible framing errors that can occur while decoding a sentence.
///
/// Each variant maps to a stable numeric result code, see [`DecodeError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The sentence does not start with `$`.
    #[error("Header '$' missing")]
    Header,

    /// The sentence does not end with `\r\n` after the checksum.
    ///
    /// With [`LineEndingMode::Forbidden`](crate::LineEndingMode::Forbidden)
    /// this is also returned when anything follows the checksum.
    #[error("Footer CRLF missing")]
    Footer,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence body)
    /// and the checksum found in the sentence.
    #[error("Checksum did not match")]
    Checksum {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// The sentence ends before its structure is complete.
    #[error("Sentence truncated")]
    Truncated,

    /// The sentence ID is not one of the supported sentence types.
    #[error("Unsupported NMEA sentence")]
    Unsupported,
}

impl DecodeError {
    /// Returns the numeric result code of this error.
    ///
    /// ```rust
    /// use nmea0183_tpv::{DecodeError, error_string};
    ///
    /// assert_eq!(DecodeError::Truncated.code(), 4);
    /// assert_eq!(error_string(DecodeError::Truncated.code()), "Sentence truncated");
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            DecodeError::Header => 1,
            DecodeError::Footer => 2,
            DecodeError::Checksum { .. } => 3,
            DecodeError::Truncated => 4,
            DecodeError::Unsupported => 5,
        }
    }
}

/// Errors returned by the sentence encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The destination cannot hold the encoded sentence.
    #[error("buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall {
        /// Number of bytes the encoded sentence needs
        required: usize,
        /// Number of bytes the destination provides
        available: usize,
    },
}

/// Maps a result code to a human-readable message.
///
/// Codes outside the known range map to `"Unknown error"`.
///
/// ```rust
/// use nmea0183_tpv::{OK, error_string};
///
/// assert_eq!(error_string(OK), "No error while parsing NMEA");
/// assert_eq!(error_string(9999), "Unknown error");
/// ```
pub fn error_string(code: i32) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|index| MESSAGES.get(index))
        .copied()
        .unwrap_or("Unknown error")
}
