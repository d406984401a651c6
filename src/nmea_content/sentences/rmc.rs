use crate::nmea_content::{
    Tpv,
    parse::{parse_angular_distance, parse_speed, parse_track},
    sentences::{Extract, Fields, Status},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// The sentence is ignored unless the status (field 2) is `A`. Speed is
/// given in knots and the track in degrees true. The two-digit year is
/// always read as 20YY.
pub(crate) struct RMC;

impl Extract for RMC {
    const ID: [u8; 3] = *b"RMC";

    fn extract(tpv: &mut Tpv, fields: &Fields<'_>) {
        if !Status::is_valid(fields.get(1)) {
            log::trace!("RMC: status is not valid, skipping");
            return;
        }

        tpv.time.set_time(fields.get(0));
        tpv.latitude = fields
            .first(3)
            .and_then(|direction| parse_angular_distance(fields.get(2), direction));
        tpv.longitude = fields
            .first(5)
            .and_then(|direction| parse_angular_distance(fields.get(4), direction));
        tpv.track = parse_track(fields.get(7), Some(b'T'));
        tpv.speed = parse_speed(fields.get(6), Some(b'N'));
        tpv.time.set_date(fields.get(8));
    }
}
