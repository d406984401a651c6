use crate::nmea_content::{
    Tpv,
    parse::{parse_speed, parse_track},
    sentences::{Extract, Fields},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// Only the true track (fields 1 and 2) and the second speed (fields 7 and
/// 8), normally in km/h, are used. Both are rejected when their unit
/// character does not match.
pub(crate) struct VTG;

impl Extract for VTG {
    const ID: [u8; 3] = *b"VTG";

    fn extract(tpv: &mut Tpv, fields: &Fields<'_>) {
        tpv.track = parse_track(fields.get(0), fields.first(1));
        tpv.speed = parse_speed(fields.get(6), fields.first(7));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nmea_content::sentences::fields;

    #[test]
    fn test_vtg_extract() {
        let cases: [(&[u8], Option<i32>, Option<i32>); 5] = [
            (b"176.90,T,,M,3.68,N,6.81,K,A", Some(176900), Some(1891)),
            (b"054.7,T,034.4,M,005.5,N,010.2,K", Some(54700), Some(2833)),
            (b"054.7,M,034.4,M,005.5,N,010.2,N", None, Some(5246)),
            (b",T,,M,,N,,K", None, None),
            (b"054.7,T", Some(54700), None),
        ];

        for (input, track, speed) in cases {
            let mut tpv = Tpv::new();
            VTG::extract(&mut tpv, &fields(input));

            assert_eq!(tpv.track, track, "input: {:?}", input.escape_ascii().to_string());
            assert_eq!(tpv.speed, speed, "input: {:?}", input.escape_ascii().to_string());
        }
    }
}
