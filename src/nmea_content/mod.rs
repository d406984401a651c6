//! # NMEA Content
//!
//! The decoded side of a sentence: the [`Tpv`] record, the fixed-point field
//! scanners, the timestamp reconstruction and the per-sentence extractors.
//!
//! All values are scaled integers. Divide by [`VALUE_FACTOR`] or
//! [`LAT_LON_FACTOR`] to recover the decimal value.

pub mod parse;
mod sentences;
mod timestamp;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use sentences::{Fields, MAX_FIELDS, Mode, SentenceId, Status};
pub use timestamp::{TIMESTAMP_LEN, Timestamp};

/// Scale factor of altitude, track and speed values.
pub const VALUE_FACTOR: i32 = 1000;

/// Scale factor of latitude and longitude values.
pub const LAT_LON_FACTOR: i32 = 1_000_000;

/// Marker for an invalid or unset value when a field is flattened with [`Tpv::raw`].
pub const INVALID_VALUE: i32 = i32::MAX;

/// Two-character identifier of the device that sent a sentence, e.g. `GP`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalkerId(pub [u8; 2]);

impl TalkerId {
    /// Returns the raw bytes of the talker ID.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Returns the talker ID as a string slice, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            write!(f, "{}", byte.escape_ascii())?;
        }
        Ok(())
    }
}

/// Time-Position-Velocity report.
///
/// A `Tpv` holds the best known fix state after decoding zero or more
/// sentences. Each successful decode updates only the fields carried by
/// that sentence type; everything else keeps its previous value.
///
/// Numeric fields are `None` when no valid value has been decoded, or when
/// the last sentence carrying them had a malformed value.
///
/// ```rust
/// use nmea0183_tpv::{Mode, Tpv};
///
/// let tpv = Tpv::new();
/// assert_eq!(tpv.mode, Mode::Unknown);
/// assert_eq!(tpv.latitude, None);
/// assert_eq!(tpv.time.to_string(), "0000-00-00T00:00:00.000Z");
/// assert!(tpv.talker_id.is_none());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tpv {
    /// NMEA fix mode
    pub mode: Mode,
    /// Altitude above mean sea level in meters, scaled by [`VALUE_FACTOR`]
    pub altitude: Option<i32>,
    /// Latitude in degrees, scaled by [`LAT_LON_FACTOR`], north positive
    pub latitude: Option<i32>,
    /// Longitude in degrees, scaled by [`LAT_LON_FACTOR`], east positive
    pub longitude: Option<i32>,
    /// Course over ground in degrees from true north, scaled by [`VALUE_FACTOR`]
    pub track: Option<i32>,
    /// Speed over ground in meters per second, scaled by [`VALUE_FACTOR`]
    pub speed: Option<i32>,
    /// Time stamp in UTC
    pub time: Timestamp,
    /// Talker ID of the last successfully decoded sentence
    pub talker_id: Option<TalkerId>,
}

impl Tpv {
    /// Creates a record in its initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flattens a field to a plain integer, using [`INVALID_VALUE`] for `None`.
    ///
    /// ```rust
    /// use nmea0183_tpv::{INVALID_VALUE, Tpv};
    ///
    /// assert_eq!(Tpv::raw(Some(18893)), 18893);
    /// assert_eq!(Tpv::raw(None), INVALID_VALUE);
    /// ```
    pub fn raw(value: Option<i32>) -> i32 {
        value.unwrap_or(INVALID_VALUE)
    }
}
