mod gga;
mod gll;
mod gsa;
mod rmc;
mod vtg;
mod zda;

use gga::GGA;
use gll::GLL;
use gsa::GSA;
use rmc::RMC;
use vtg::VTG;
use zda::ZDA;

use core::fmt;

use crate::nmea_content::{Tpv, parse::first};

/// Maximum number of fields kept from a single sentence.
///
/// Fields past this limit still count towards the checksum but are dropped.
pub const MAX_FIELDS: usize = 32;

/// The comma-separated fields of a sentence, following the sentence ID.
///
/// Each field borrows from the decoded input. Reading a field past the end
/// yields an empty field, which every extractor treats as malformed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields<'a>(heapless::Vec<&'a [u8], MAX_FIELDS>);

impl<'a> Fields<'a> {
    /// Appends a field, returning `false` once the list is full.
    pub(crate) fn push(&mut self, field: &'a [u8]) -> bool {
        self.0.push(field).is_ok()
    }

    /// Returns the field at `index`, or an empty field if there is none.
    pub fn get(&self, index: usize) -> &'a [u8] {
        self.0.get(index).copied().unwrap_or_default()
    }

    /// Returns the first byte of the field at `index`.
    pub fn first(&self, index: usize) -> Option<u8> {
        first(self.get(index))
    }

    /// Number of fields in the sentence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the sentence carries no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.0.iter().copied()
    }
}

/// Splits the part of a sentence between the first `,` and the `*`.
#[cfg(test)]
pub(crate) fn fields(body: &[u8]) -> Fields<'_> {
    body.split(|&byte| byte == b',').collect()
}

/// A sentence type that knows how to fold its fields into a [`Tpv`].
///
/// Extractors validate only the content of the fields they read and never
/// the number of fields. A malformed field leaves the corresponding value
/// invalid without failing the sentence.
pub(crate) trait Extract {
    /// The three-character sentence ID.
    const ID: [u8; 3];

    /// Updates `tpv` with the values carried by this sentence.
    fn extract(tpv: &mut Tpv, fields: &Fields<'_>);
}

/// Supported sentence types.
///
/// | Variant | Sentence Type                              | Updates                                      |
/// |---------|--------------------------------------------|----------------------------------------------|
/// | GGA     | Global Positioning System Fix Data         | time, latitude, longitude, altitude          |
/// | GLL     | Geographic Position - Latitude/Longitude   | latitude, longitude, time (if valid)         |
/// | GSA     | GPS DOP and active satellites              | mode                                         |
/// | RMC     | Recommended Minimum Navigation Information | time, position, track, speed, date (if valid)|
/// | VTG     | Track made good and Ground speed           | track, speed                                 |
/// | ZDA     | Time & Date                                | time, date                                   |
///
/// ```rust
/// use nmea0183_tpv::SentenceId;
///
/// assert_eq!(SentenceId::from_bytes(b"RMC"), Some(SentenceId::RMC));
/// assert_eq!(SentenceId::from_bytes(b"GSV"), None);
/// assert_eq!(SentenceId::ZDA.as_str(), "ZDA");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceId {
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GPS DOP and active satellites
    GSA,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Track made good and Ground speed
    VTG,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA,
}

impl SentenceId {
    /// Looks up a sentence ID.
    pub fn from_bytes(id: &[u8; 3]) -> Option<Self> {
        match *id {
            GGA::ID => Some(Self::GGA),
            GLL::ID => Some(Self::GLL),
            GSA::ID => Some(Self::GSA),
            RMC::ID => Some(Self::RMC),
            VTG::ID => Some(Self::VTG),
            ZDA::ID => Some(Self::ZDA),
            _ => None,
        }
    }

    /// The sentence ID as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GGA => "GGA",
            Self::GLL => "GLL",
            Self::GSA => "GSA",
            Self::RMC => "RMC",
            Self::VTG => "VTG",
            Self::ZDA => "ZDA",
        }
    }

    /// Runs the extractor of this sentence type.
    pub(crate) fn extract(self, tpv: &mut Tpv, fields: &Fields<'_>) {
        match self {
            Self::GGA => GGA::extract(tpv, fields),
            Self::GLL => GLL::extract(tpv, fields),
            Self::GSA => GSA::extract(tpv, fields),
            Self::RMC => RMC::extract(tpv, fields),
            Self::VTG => VTG::extract(tpv, fields),
            Self::ZDA => ZDA::extract(tpv, fields),
        }
    }
}

impl<'a> FromIterator<&'a [u8]> for Fields<'a> {
    /// Collects fields, dropping any past [`MAX_FIELDS`].
    fn from_iter<T: IntoIterator<Item = &'a [u8]>>(iter: T) -> Self {
        let mut fields = Self::default();
        for field in iter {
            if !fields.push(field) {
                break;
            }
        }
        fields
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! parsable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$fallback_meta:meta])*
            _ => $fallback:ident,
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        parsable_enum! {
            $(#[$meta])*
            #[derive(Default)]
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $char => $variant,
                )*
                ;
                #[default]
                $(#[$fallback_meta])*
                $fallback
            }
        }

        impl $name {
            /// Decodes the first character of a field, falling back when it is not recognized.
            pub fn from_field(field: &[u8]) -> Self {
                Self::parser(field).map_or(Self::$fallback, |(_, value)| value)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
            $(
                ;
                $(#[$extra_meta:meta])*
                $extra:ident
            )?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$extra_meta])*
                $extra,
            )?
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Parses the variant encoded by the next character.
            pub fn parser(i: &[u8]) -> nom::IResult<&[u8], Self> {
                nom::Parser::parse(
                    &mut nom::branch::alt(($(
                        nom::Parser::map(nom::character::complete::char($char), |_| Self::$variant),
                    )*)),
                    i,
                )
            }
        }
    };
}

parsable_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

impl Status {
    /// Returns `true` when the field holds the valid status `A`.
    pub fn is_valid(field: &[u8]) -> bool {
        matches!(Self::parser(field), Ok((_, Status::Valid)))
    }
}

parsable_enum! {
    /// NMEA fix mode
    pub enum Mode {
        /// Have not yet received a sentence containing fix information
        _ => Unknown,
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D fix, altitude is a pseudo value
        '2' => Fix2D,
        /// 3 - 3D fix, including a good altitude value
        '3' => Fix3D,
    }
}
