//! # Sentence Encoder
//!
//! Wraps a comma-joined sentence body as `$<body>*<HH>\r\n`, where `HH` is
//! the checksum of the body in upper case hex. The body is written as given
//! up to its first NUL byte, if any; its structure is not checked.

use core::fmt::Write;

use crate::{
    error::EncodeError,
    nmea0183::{checksum, until_nul},
};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes added around the body: `$`, `*`, two checksum digits and `\r\n`.
const FRAMING_LEN: usize = 6;

fn hex_digits(cc: u8) -> [u8; 2] {
    [
        HEX_DIGITS[usize::from(cc >> 4)],
        HEX_DIGITS[usize::from(cc & 0x0F)],
    ]
}

/// Encodes a sentence into `destination` and terminates it with a NUL byte.
///
/// Returns the index of the NUL, which is also the length of the sentence.
/// `destination` must hold at least `body.len() + 7` bytes, counting the
/// body up to its first NUL.
///
/// ```rust
/// use nmea0183_tpv::encode_to_slice;
///
/// let mut buffer = [0u8; 32];
/// let end = encode_to_slice(&mut buffer, "PMTK251,38400").unwrap();
///
/// assert_eq!(&buffer[..end], b"$PMTK251,38400*27\r\n");
/// assert_eq!(buffer[end], 0);
/// ```
pub fn encode_to_slice(
    destination: &mut [u8],
    body: impl AsRef<[u8]>,
) -> Result<usize, EncodeError> {
    let body = until_nul(body.as_ref());
    let end = body.len() + FRAMING_LEN;

    let Some(out) = destination.get_mut(..=end) else {
        return Err(EncodeError::BufferTooSmall {
            required: end + 1,
            available: destination.len(),
        });
    };

    let (head, tail) = out.split_at_mut(body.len() + 1);
    head[0] = b'$';
    head[1..].copy_from_slice(body);

    let [hi, lo] = hex_digits(checksum(body));
    tail.copy_from_slice(&[b'*', hi, lo, b'\r', b'\n', 0]);

    Ok(end)
}

/// Encodes a sentence into a fixed-capacity string.
///
/// `N` must be at least `body.len() + 6`.
///
/// ```rust
/// use nmea0183_tpv::encode;
///
/// let sentence = encode::<82>("PMTK251,38400").unwrap();
/// assert_eq!(sentence.as_str(), "$PMTK251,38400*27\r\n");
///
/// assert!(encode::<8>("PMTK251,38400").is_err());
/// ```
pub fn encode<const N: usize>(body: &str) -> Result<heapless::String<N>, EncodeError> {
    let body = body.find('\0').map_or(body, |end| &body[..end]);
    let mut sentence = heapless::String::new();

    write!(sentence, "${body}*{:02X}\r\n", checksum(body.as_bytes())).map_err(|_| {
        EncodeError::BufferTooSmall {
            required: body.len() + FRAMING_LEN,
            available: N,
        }
    })?;

    Ok(sentence)
}
