//! # NMEA 0183 TPV Decoder
//!
//! This library decodes NMEA 0183 sentences from GPS receivers into a
//! fixed-point Time-Position-Velocity record, [`Tpv`], and encodes sentence
//! bodies into complete sentences with checksum and footer.
//!
//! Sentences have the format `$TTSSS,D1,D2,...,Dn*CC\r\n`. Supported
//! sentence types are GGA, GLL, GSA, RMC, VTG and ZDA. Each decoded sentence
//! updates only the fields it carries, so a record fed with a stream of
//! sentences accumulates the best known fix.
//!
//! Decoding never allocates, and all values are scaled integers:
//! - latitude and longitude in degrees, scaled by [`LAT_LON_FACTOR`]
//! - altitude (m), track (degrees) and speed (m/s), scaled by [`VALUE_FACTOR`]
//!
//! Only framing problems are errors. A malformed field leaves its value
//! `None` and the sentence still decodes.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_tpv::{Mode, Tpv, decode, encode};
//!
//! let mut tpv = Tpv::new();
//!
//! decode(&mut tpv, "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n").unwrap();
//! decode(&mut tpv, "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n")
//!     .unwrap();
//!
//! assert_eq!(tpv.mode, Mode::Fix3D);
//! assert_eq!(tpv.latitude, Some(48117300));
//! assert_eq!(tpv.longitude, Some(11516666));
//! assert_eq!(tpv.altitude, None);
//! assert_eq!(tpv.time.to_string(), "2094-03-23T12:35:19.000Z");
//!
//! let sentence = encode::<82>("PMTK251,38400").unwrap();
//! assert_eq!(sentence.as_str(), "$PMTK251,38400*27\r\n");
//! ```

mod encode;
pub mod error;
mod nmea0183;
mod nmea_content;

pub use encode::{encode, encode_to_slice};
pub use error::{DecodeError, EncodeError, OK, error_string};
pub use nmea0183::*;
pub use nmea_content::{
    Fields, INVALID_VALUE, LAT_LON_FACTOR, MAX_FIELDS, Mode, SentenceId, Status, TIMESTAMP_LEN,
    TalkerId, Timestamp, Tpv, VALUE_FACTOR, parse,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod decode;
    mod encode;
}
