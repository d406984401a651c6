use crate::nmea_content::{
    Tpv,
    parse::{parse_altitude, parse_angular_distance},
    sentences::{Extract, Fields},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14   15
///         |         |       | |        | | |  |   |   | |   | |   |    |
///  $--GGA,hhmmss.ss,ddmm.mm,a,ddmmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Updates the time of day, the position and the altitude. Fix quality,
/// satellite count, dilution and geoidal separation are not kept.
pub(crate) struct GGA;

impl Extract for GGA {
    const ID: [u8; 3] = *b"GGA";

    fn extract(tpv: &mut Tpv, fields: &Fields<'_>) {
        tpv.time.set_time(fields.get(0));
        tpv.latitude = fields
            .first(2)
            .and_then(|direction| parse_angular_distance(fields.get(1), direction));
        tpv.longitude = fields
            .first(4)
            .and_then(|direction| parse_angular_distance(fields.get(3), direction));
        tpv.altitude = parse_altitude(fields.get(8), fields.first(9));
    }
}
