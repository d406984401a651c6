use core::fmt::{self, Write};

use nom::{IResult, Parser, bytes::complete::take_while_m_n, character::complete::satisfy};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nmea_content::parse::is_digit;

/// UTC time stamp assembled from the date and time fields of several sentences.
///
/// NMEA splits the date and the time of day across fields, and not every
/// sentence carries both. A `Timestamp` is updated component by component:
/// a sentence with only a time leaves the date untouched and vice versa. It
/// renders as a fixed-width ISO 8601 string, `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Components are stored as received, so a timestamp that was never given a
/// date renders with a zero year, month and day.
///
/// ```rust
/// use nmea0183_tpv::{Tpv, decode};
///
/// let mut tpv = Tpv::new();
/// decode(&mut tpv, b"$GPZDA,050306,29,10,2003,,*43\r\n").unwrap();
///
/// assert_eq!(tpv.time.year(), 2003);
/// assert_eq!(tpv.time.to_string(), "2003-10-29T05:03:06.000Z");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

/// Length of the rendered timestamp.
pub const TIMESTAMP_LEN: usize = 24;

/// Parses one decimal digit no greater than `max`.
fn digit(i: &[u8], max: char) -> IResult<&[u8], u8> {
    satisfy(|c| ('0'..=max).contains(&c))
        .map(|c| c as u8 - b'0')
        .parse(i)
}

/// Replaces the decimal digit of `value` at `place` (1, 10, 100, ...).
fn set_digit(value: u16, place: u16, digit: u8) -> u16 {
    value - value / place % 10 * place + u16::from(digit) * place
}

/// Overwrites the leading decimal digits of a `width` digit value.
///
/// `digits` replace the existing digits one for one from the most
/// significant position; positions past the end of `digits` keep their value.
fn splice_digits(value: u16, width: u32, digits: &[u8]) -> u16 {
    digits.iter().enumerate().fold(value, |value, (k, &digit)| {
        set_digit(value, 10u16.pow(width - 1 - k as u32), digit - b'0')
    })
}

/// Writes two-digit components from `i`, one digit at a time.
///
/// Each pair is a component and the largest allowed tens digit. A digit is
/// written as soon as it matches, and the first digit that does not match
/// stops the update, even halfway through a component. Returns the rest of
/// the input when every digit matched.
fn splice_pairs<'a, const N: usize>(
    mut i: &'a [u8],
    components: [(&mut u8, char); N],
) -> Option<&'a [u8]> {
    for (component, max_tens) in components {
        for (place, max) in [(10, max_tens), (1, '9')] {
            let (rest, value) = digit(i, max).ok()?;
            *component = *component - *component / place % 10 * place + value * place;
            i = rest;
        }
    }

    Some(i)
}

impl Timestamp {
    /// Year, `0` until a date has been decoded
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month, `0` until a date has been decoded
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, `0` until a date has been decoded
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Millisecond of the second
    pub fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Renders the timestamp into a fixed-capacity string, without allocating.
    pub fn to_iso8601(&self) -> heapless::String<TIMESTAMP_LEN> {
        let mut s = heapless::String::new();
        // Components decoded from digit pairs always fit the fixed width.
        let _ = write!(s, "{self}");
        s
    }

    /// Updates the time of day from a `hhmmss(.sss)` field.
    ///
    /// Digits are written one at a time, hour first; the first digit out of
    /// range stops the update and keeps the digits already written.
    /// Fractional digits replace the leading millisecond digits; without a
    /// fraction the milliseconds are reset to zero.
    pub(crate) fn set_time(&mut self, field: &[u8]) {
        let Some(i) = splice_pairs(
            field,
            [
                (&mut self.hour, '2'),
                (&mut self.minute, '5'),
                (&mut self.second, '5'),
            ],
        ) else {
            return;
        };

        match i.split_first() {
            Some((b'.', fraction)) => {
                let digits = fraction
                    .iter()
                    .take(3)
                    .take_while(|&&byte| is_digit(byte))
                    .count();
                self.millisecond = splice_digits(self.millisecond, 3, &fraction[..digits]);
            }
            _ => self.millisecond = 0,
        }
    }

    /// Updates the date from a `ddmmyy` field.
    ///
    /// Digits are written one at a time like [`Timestamp::set_time`]. The
    /// century becomes 20 once both year digits have matched.
    pub(crate) fn set_date(&mut self, field: &[u8]) {
        let Some(i) = splice_pairs(field, [(&mut self.day, '3'), (&mut self.month, '1')]) else {
            return;
        };

        let Ok((i, tens)) = digit(i, '9') else {
            return;
        };
        self.year = set_digit(self.year, 10, tens);

        let Ok((_, units)) = digit(i, '9') else {
            return;
        };
        self.year = 2000 + set_digit(self.year, 1, units) % 100;
    }

    /// Updates the date from separate day, month and four-digit year fields.
    ///
    /// Up to four leading year digits are taken as they are, with no range check.
    pub(crate) fn set_extended_date(&mut self, day: &[u8], month: &[u8], year: &[u8]) {
        if splice_pairs(day, [(&mut self.day, '3')]).is_none() {
            return;
        }
        if splice_pairs(month, [(&mut self.month, '1')]).is_none() {
            return;
        }

        let year: IResult<&[u8], &[u8]> = take_while_m_n(0, 4, is_digit).parse(year);
        if let Ok((_, digits)) = year {
            self.year = splice_digits(self.year, 4, digits);
        }
    }

    /// Converts the timestamp into a [`time::PrimitiveDateTime`].
    ///
    /// Returns `None` unless every component forms a real calendar date and
    /// time of day, which in particular excludes a timestamp that has never
    /// received a date.
    #[cfg(feature = "time")]
    pub fn to_primitive_date_time(&self) -> Option<time::PrimitiveDateTime> {
        let month = time::Month::try_from(self.month).ok()?;
        let date = time::Date::from_calendar_date(i32::from(self.year), month, self.day).ok()?;
        let time = time::Time::from_hms_milli(self.hour, self.minute, self.second, self.millisecond)
            .ok()?;

        Some(time::PrimitiveDateTime::new(date, time))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
