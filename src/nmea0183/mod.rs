//! # NMEA 0183 Sentence Decoder
//!
//! This module provides the framing side of decoding: it checks the
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` structure of a sentence, validates its
//! checksum, splits its fields and hands them to the extractor of the
//! sentence type.
//!
//! The decoder is configurable to accept variations in:
//! - Checksum requirements (required or optional)
//! - Line ending requirements (CRLF required or forbidden)
//!
//! The default configuration is strict and is what [`decode`] uses.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take, take_till, take_while_m_n},
    character::complete::char,
    combinator::{map_res, peek},
};

use crate::{
    error::DecodeError,
    nmea_content::{Fields, SentenceId, TalkerId, Tpv},
};

/// Defines how the decoder should handle sentence checksums.
///
/// The checksum is written as `*CC`, where `CC` is two hexadecimal digits
/// holding the XOR of every byte between the `$` and the `*`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// A sentence that ends before its `*` is truncated.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Without a `*`, the sentence body ends at the first `\r` or at the end
    /// of the input, and no checksum is compared.
    Optional,
}

/// Defines how the decoder should handle CRLF line endings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// CRLF line ending is required and must follow the checksum.
    ///
    /// Anything after the `\r\n` is ignored.
    Required,

    /// CRLF line ending is forbidden.
    ///
    /// The sentence must end right after its checksum, or after its body when
    /// the checksum is optional and absent. Any trailing byte is a footer error.
    Forbidden,
}

/// Creates a configured [`Decoder`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_tpv::{ChecksumMode, DecodeError, DecoderBuilder, LineEndingMode, Tpv};
///
/// let mut tpv = Tpv::new();
///
/// // Strict: checksum and CRLF both required
/// let strict = DecoderBuilder::new().build();
/// assert!(strict.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n").is_ok());
/// assert_eq!(
///     strict.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48"),
///     Err(DecodeError::Footer)
/// );
/// assert_eq!(
///     strict.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K\r\n"),
///     Err(DecodeError::Truncated)
/// );
///
/// // Lenient: checksum optional, CRLF forbidden
/// let lenient = DecoderBuilder::new()
///     .checksum_mode(ChecksumMode::Optional)
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build();
/// assert!(lenient.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").is_ok());
/// assert!(lenient.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").is_ok());
/// assert!(lenient.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*99").is_err());
/// assert!(lenient.decode(&mut tpv, "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K\r\n").is_err());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct DecoderBuilder {
    /// Checksum mode for the decoder.
    checksum_mode: ChecksumMode,

    /// Line ending mode for the decoder.
    line_ending_mode: LineEndingMode,
}

impl DecoderBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Required`]
    /// - Line ending mode: [`LineEndingMode::Required`]
    pub fn new() -> Self {
        DecoderBuilder {
            checksum_mode: ChecksumMode::Required,
            line_ending_mode: LineEndingMode::Required,
        }
    }

    /// Sets the checksum mode for the decoder.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode for the decoder.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the decoder with the configured settings.
    pub fn build(self) -> Decoder {
        Decoder {
            checksum_mode: self.checksum_mode,
            line_ending_mode: self.line_ending_mode,
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        DecoderBuilder::new()
    }
}

/// A framed sentence: its talker ID, its sentence type and its fields.
///
/// The fields are the comma-separated values following the sentence ID,
/// borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Talker ID, e.g. `GP`
    pub talker_id: TalkerId,
    /// Sentence type
    pub sentence_id: SentenceId,
    /// Fields after the sentence ID
    pub fields: Fields<'a>,
}

/// Decodes sentences into a [`Tpv`] record.
///
/// Use [`DecoderBuilder`] to relax the checksum or line ending requirements.
/// `Decoder::default()` is the strict decoder used by [`decode`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
}

impl Decoder {
    /// Checks the framing of a sentence and splits it into its fields.
    ///
    /// The record is not involved; this is the first half of
    /// [`Decoder::decode`]. A NUL byte ends the input early.
    ///
    /// ```rust
    /// use nmea0183_tpv::{Decoder, SentenceId};
    ///
    /// let frame = Decoder::default()
    ///     .split(b"$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n")
    ///     .unwrap();
    ///
    /// assert_eq!(frame.talker_id.as_str(), Some("GP"));
    /// assert_eq!(frame.sentence_id, SentenceId::GSA);
    /// assert_eq!(frame.fields.len(), 17);
    /// assert_eq!(frame.fields.get(1), b"3");
    /// ```
    pub fn split<'a>(&self, sentence: &'a [u8]) -> Result<Frame<'a>, DecodeError> {
        let sentence = until_nul(sentence);

        let (i, _) = header(sentence).map_err(|_| DecodeError::Header)?;
        let (i, talker_id) = talker_id(i).map_err(|_| DecodeError::Truncated)?;
        let (i, id) = sentence_id(i).map_err(|_| DecodeError::Truncated)?;
        let sentence_id = SentenceId::from_bytes(&id).ok_or(DecodeError::Unsupported)?;

        let (i, data) = data(i, self.checksum_mode).map_err(|_| DecodeError::Truncated)?;

        let i = match i.split_first() {
            Some((b'*', cc)) => {
                let (i, found) = hex_byte(cc).map_err(|_| DecodeError::Truncated)?;
                let expected = talker_id.0[0] ^ talker_id.0[1] ^ checksum(data);

                if found != expected {
                    return Err(DecodeError::Checksum { expected, found });
                }
                // One checksum character leaves no room for a footer.
                if cc.len() < 2 {
                    return Err(DecodeError::Footer);
                }
                i
            }
            _ if self.checksum_mode == ChecksumMode::Optional => i,
            _ => return Err(DecodeError::Truncated),
        };

        match self.line_ending_mode {
            LineEndingMode::Required => {
                crlf(i).map_err(|_| DecodeError::Footer)?;
            }
            LineEndingMode::Forbidden if !i.is_empty() => return Err(DecodeError::Footer),
            LineEndingMode::Forbidden => {}
        }

        Ok(Frame {
            talker_id,
            sentence_id,
            fields: data.split(|&byte| byte == b',').skip(1).collect(),
        })
    }

    /// Decodes a sentence and updates `tpv` with the values it carries.
    ///
    /// On success the record holds the fields of the decoded sentence type and
    /// the talker ID of the sentence; every other field keeps its value. On a
    /// framing error the record is left untouched.
    ///
    /// ```rust
    /// use nmea0183_tpv::{Decoder, SentenceId, Tpv};
    ///
    /// let mut tpv = Tpv::new();
    /// let id = Decoder::default()
    ///     .decode(&mut tpv, "$GPVTG,176.90,T,,M,3.68,N,6.81,K,A*36\r\n")
    ///     .unwrap();
    ///
    /// assert_eq!(id, SentenceId::VTG);
    /// assert_eq!(tpv.track, Some(176900));
    /// assert_eq!(tpv.speed, Some(1891));
    /// ```
    pub fn decode(
        &self,
        tpv: &mut Tpv,
        sentence: impl AsRef<[u8]>,
    ) -> Result<SentenceId, DecodeError> {
        let frame = match self.split(sentence.as_ref()) {
            Ok(frame) => frame,
            Err(error) => {
                log::debug!("rejected \"{}\": {error}", sentence.as_ref().escape_ascii());
                return Err(error);
            }
        };

        log::trace!(
            "decoding {}{} with {} fields",
            frame.talker_id,
            frame.sentence_id,
            frame.fields.len()
        );

        frame.sentence_id.extract(tpv, &frame.fields);
        tpv.talker_id = Some(frame.talker_id);

        Ok(frame.sentence_id)
    }
}

/// Decodes a sentence with the strict default [`Decoder`].
///
/// The sentence must include its checksum and its `\r\n` footer.
///
/// ```rust
/// use nmea0183_tpv::{DecodeError, Tpv, decode};
///
/// let mut tpv = Tpv::new();
/// decode(&mut tpv, "$GPGLL,3704.229,N,07647.090,W,153030.311,A*23\r\n").unwrap();
/// assert_eq!(tpv.latitude, Some(37070483));
///
/// assert_eq!(decode(&mut tpv, "GPGLL*23\r\n"), Err(DecodeError::Header));
/// ```
pub fn decode(tpv: &mut Tpv, sentence: impl AsRef<[u8]>) -> Result<SentenceId, DecodeError> {
    Decoder::default().decode(tpv, sentence)
}

/// Calculates the NMEA 0183 checksum: the XOR of every byte of `bytes`.
///
/// ```rust
/// use nmea0183_tpv::checksum;
///
/// assert_eq!(checksum(b"PMTK251,38400"), 0x27);
/// assert_eq!(checksum(b""), 0);
/// ```
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Cuts `sentence` at its first NUL byte, if any.
pub(crate) fn until_nul(sentence: &[u8]) -> &[u8] {
    match sentence.iter().position(|&byte| byte == 0) {
        Some(end) => &sentence[..end],
        None => sentence,
    }
}

fn header(i: &[u8]) -> IResult<&[u8], char> {
    char('$').parse(i)
}

fn talker_id(i: &[u8]) -> IResult<&[u8], TalkerId> {
    map_res(take(2usize), |id: &[u8]| <[u8; 2]>::try_from(id).map(TalkerId)).parse(i)
}

/// Peeks at the sentence ID, which is also part of the checksummed data.
fn sentence_id(i: &[u8]) -> IResult<&[u8], [u8; 3]> {
    peek(map_res(take(3usize), <[u8; 3]>::try_from)).parse(i)
}

/// Takes the checksummed data, from the sentence ID up to the checksum.
fn data(i: &[u8], checksum_mode: ChecksumMode) -> IResult<&[u8], &[u8]> {
    match checksum_mode {
        ChecksumMode::Required => take_till(|byte: u8| byte == b'*').parse(i),
        ChecksumMode::Optional => take_till(|byte: u8| byte == b'*' || byte == b'\r').parse(i),
    }
}

/// Parses the checksum characters after `*`.
///
/// Both upper and lower case hex digits are accepted. Any other character
/// counts as zero, so it surfaces as a checksum mismatch. A missing second
/// character counts as zero as well; only a missing first one is an error.
fn hex_byte(i: &[u8]) -> IResult<&[u8], u8> {
    take_while_m_n(1, 2, |_: u8| true)
        .map(|cc: &[u8]| {
            let [hi, lo] = [0, 1].map(|k| cc.get(k).copied().map_or(0, hex_value));
            hi << 4 | lo
        })
        .parse(i)
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => 0,
    }
}

fn crlf(i: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&b"\r\n"[..]).parse(i)
}

#[cfg(test)]
mod tests {
    mod checksum;
    mod footer;
    mod framing;
    mod modes;
}
