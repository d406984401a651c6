use crate::nmea_content::{
    Tpv,
    sentences::{Extract, Fields, Mode},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Only the fix mode (field 2) is kept.
pub(crate) struct GSA;

impl Extract for GSA {
    const ID: [u8; 3] = *b"GSA";

    fn extract(tpv: &mut Tpv, fields: &Fields<'_>) {
        tpv.mode = Mode::from_field(fields.get(1));
    }
}
