//! # Field Scanners
//!
//! Fixed-point parsers for the numeric fields of a sentence.
//!
//! The `nom` parsers in this module follow the field grammar strictly but
//! stop at the first character that does not belong to it; whatever follows
//! is left unparsed. The `parse_*` wrappers turn a failed match into `None`,
//! which is how a malformed field ends up invalid without failing the
//! sentence.

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::opt,
    sequence::preceded,
};

use crate::nmea_content::{LAT_LON_FACTOR, VALUE_FACTOR};

/// Folds ASCII digits into `value`, most significant first.
///
/// Overflow wraps; field widths keep real-world values well within range.
pub(crate) fn accumulate(value: i32, digits: &[u8]) -> i32 {
    digits.iter().fold(value, |value, &digit| {
        value.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
    })
}

pub(crate) fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Parses a decimal number `-?[0-9]+(\.[0-9]{1,3})?` scaled by [`VALUE_FACTOR`].
///
/// At most three fractional digits are used; further digits are left unparsed.
pub fn number(i: &[u8]) -> IResult<&[u8], i32> {
    let (i, sign) = opt(char('-'))
        .map(|minus| if minus.is_some() { -1 } else { 1 })
        .parse(i)?;
    let (i, integer) = digit1(i)?;
    let (i, fraction) = opt(preceded(char('.'), take_while_m_n(0, 3, is_digit))).parse(i)?;
    let fraction: &[u8] = fraction.unwrap_or_default();

    let value = accumulate(accumulate(0, integer), fraction);
    let factor = VALUE_FACTOR / 10i32.pow(fraction.len() as u32);

    Ok((i, value.wrapping_mul(factor).wrapping_mul(sign)))
}

/// Parses an angular distance in NMEA `(d)ddmm.mmmmmm` notation.
///
/// `direction` selects both the sign and the number of whole-degree digits:
/// two for latitude (`N`, `S`) and three for longitude (`E`, `W`). The result
/// is in degrees scaled by [`LAT_LON_FACTOR`]. Converting arc minutes to
/// degrees truncates.
pub fn angular_distance(i: &[u8], direction: u8) -> IResult<&[u8], i32> {
    let (sign, width) = match direction {
        b'N' => (1, 2),
        b'S' => (-1, 2),
        b'E' => (1, 3),
        b'W' => (-1, 3),
        _ => {
            return Err(nom::Err::Error(nom::error::make_error(
                i,
                nom::error::ErrorKind::OneOf,
            )));
        }
    };

    let (i, degrees) = take_while_m_n(width, width, is_digit).parse(i)?;
    let (i, minutes) = take_while_m_n(2, 2, is_digit).parse(i)?;
    let (i, _) = char('.').parse(i)?;
    let (i, fraction) = take_while_m_n(1, 6, is_digit).parse(i)?;

    let degrees = accumulate(0, degrees) * LAT_LON_FACTOR;
    let factor = LAT_LON_FACTOR / 10i32.pow(fraction.len() as u32);
    let minutes = accumulate(accumulate(0, minutes), fraction) * factor;

    Ok((i, (degrees + minutes / 60) * sign))
}

/// Returns the first byte of a field, if any.
pub(crate) fn first(field: &[u8]) -> Option<u8> {
    field.first().copied()
}

/// Decodes a number field, see [`number`].
///
/// ```rust
/// use nmea0183_tpv::parse::parse_number;
///
/// assert_eq!(parse_number(b"12.5"), Some(12500));
/// assert_eq!(parse_number(b"-25.669"), Some(-25669));
/// assert_eq!(parse_number(b""), None);
/// ```
pub fn parse_number(field: &[u8]) -> Option<i32> {
    number(field).ok().map(|(_, value)| value)
}

/// Decodes a latitude or longitude field, see [`angular_distance`].
///
/// ```rust
/// use nmea0183_tpv::parse::parse_angular_distance;
///
/// assert_eq!(parse_angular_distance(b"4807.038", b'N'), Some(48117300));
/// assert_eq!(parse_angular_distance(b"01131.000", b'W'), Some(-11516666));
/// assert_eq!(parse_angular_distance(b"4807", b'N'), None);
/// ```
pub fn parse_angular_distance(field: &[u8], direction: u8) -> Option<i32> {
    angular_distance(field, direction)
        .ok()
        .map(|(_, value)| value)
}

/// Decodes an altitude; the unit must be meters (`M`).
pub fn parse_altitude(field: &[u8], unit: Option<u8>) -> Option<i32> {
    match unit {
        Some(b'M') => parse_number(field),
        _ => None,
    }
}

/// Decodes a track; the type must be degrees true (`T`).
pub fn parse_track(field: &[u8], kind: Option<u8>) -> Option<i32> {
    match kind {
        Some(b'T') => parse_number(field),
        _ => None,
    }
}

/// Decodes a speed and converts it to meters per second.
///
/// Kilometers per hour (`K`) are multiplied by 10/36 and knots (`N`) by
/// 1000/1944, both truncating.
///
/// ```rust
/// use nmea0183_tpv::parse::parse_speed;
///
/// assert_eq!(parse_speed(b"6.81", Some(b'K')), Some(1891));
/// assert_eq!(parse_speed(b"3.68", Some(b'N')), Some(1893));
/// assert_eq!(parse_speed(b"3.68", Some(b'M')), None);
/// ```
pub fn parse_speed(field: &[u8], unit: Option<u8>) -> Option<i32> {
    match unit {
        Some(b'K') => parse_number(field).map(|speed| speed.wrapping_mul(10) / 36),
        Some(b'N') => parse_number(field).map(|speed| speed.wrapping_mul(1000) / 1944),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        let cases: [(&[u8], Option<i32>); 12] = [
            (b"0", Some(0)),
            (b"18.893", Some(18893)),
            (b"12.5", Some(12500)),
            (b"12.", Some(12000)),
            (b"-25.669", Some(-25669)),
            (b"176.90", Some(176900)),
            (b"1.23456", Some(1234)),
            (b"7M", Some(7000)),
            (b"", None),
            (b"-", None),
            (b"-.5", None),
            (b"+5", None),
        ];

        for (input, expected) in cases {
            assert_eq!(
                parse_number(input),
                expected,
                "input: {:?}",
                input.escape_ascii().to_string()
            );
        }
    }

    #[test]
    fn test_number_rest() {
        let result = number(b"1.23456");
        assert_eq!(result, Ok((&b"56"[..], 1234)));
    }

    #[test]
    fn test_angular_distance() {
        let cases: [(&[u8], u8, Option<i32>); 12] = [
            (b"4807.038", b'N', Some(48117300)),
            (b"4807.038", b'S', Some(-48117300)),
            (b"3723.46587704", b'N', Some(37391097)),
            (b"12202.26957864", b'W', Some(-122037826)),
            (b"3704.229", b'N', Some(37070483)),
            (b"07647.090", b'W', Some(-76784833)),
            (b"4807.038", b'X', None),
            (b"4807.038", b'E', None),
            (b"4807038", b'N', None),
            (b"4807.", b'N', None),
            (b"48a7.038", b'N', None),
            (b"", b'N', None),
        ];

        for (input, direction, expected) in cases {
            assert_eq!(
                parse_angular_distance(input, direction),
                expected,
                "input: {:?} {}",
                input.escape_ascii().to_string(),
                direction as char
            );
        }
    }

    #[test]
    fn test_altitude() {
        assert_eq!(parse_altitude(b"545.4", Some(b'M')), Some(545400));
        assert_eq!(parse_altitude(b"545.4", Some(b'F')), None);
        assert_eq!(parse_altitude(b"545.4", None), None);
    }

    #[test]
    fn test_track() {
        assert_eq!(parse_track(b"054.7", Some(b'T')), Some(54700));
        assert_eq!(parse_track(b"054.7", Some(b'M')), None);
        assert_eq!(parse_track(b"", Some(b'T')), None);
    }

    #[test]
    fn test_speed() {
        assert_eq!(parse_speed(b"010.2", Some(b'K')), Some(2833));
        assert_eq!(parse_speed(b"005.5", Some(b'N')), Some(2829));
        assert_eq!(parse_speed(b"022.4", Some(b'N')), Some(11522));
        assert_eq!(parse_speed(b"0.0", Some(b'N')), Some(0));
        assert_eq!(parse_speed(b"", Some(b'K')), None);
        assert_eq!(parse_speed(b"1.0", None), None);
    }
}
