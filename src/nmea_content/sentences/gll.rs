use crate::nmea_content::{
    Tpv,
    parse::parse_angular_distance,
    sentences::{Extract, Fields, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// The sentence is ignored unless the status (field 6) is `A`.
pub(crate) struct GLL;

impl Extract for GLL {
    const ID: [u8; 3] = *b"GLL";

    fn extract(tpv: &mut Tpv, fields: &Fields<'_>) {
        if !Status::is_valid(fields.get(5)) {
            log::trace!("GLL: status is not valid, skipping");
            return;
        }

        tpv.latitude = fields
            .first(1)
            .and_then(|direction| parse_angular_distance(fields.get(0), direction));
        tpv.longitude = fields
            .first(3)
            .and_then(|direction| parse_angular_distance(fields.get(2), direction));
        tpv.time.set_time(fields.get(4));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nmea_content::sentences::fields;

    #[test]
    fn test_gll_extract() {
        let cases: [(&[u8], i32, i32, &str); 2] = [
            (
                b"3704.229,N,07647.090,W,153030.311,A",
                37070483,
                -76784833,
                "0000-00-00T15:30:30.311Z",
            ),
            (
                b"4916.45,N,12311.12,W,225444,A,",
                49274166,
                -123185333,
                "0000-00-00T22:54:44.000Z",
            ),
        ];

        for (input, latitude, longitude, time) in cases {
            let mut tpv = Tpv::new();
            GLL::extract(&mut tpv, &fields(input));

            assert_eq!(tpv.latitude, Some(latitude));
            assert_eq!(tpv.longitude, Some(longitude));
            assert_eq!(tpv.time.to_string(), time);
        }
    }

    #[test]
    fn test_gll_status_gate() {
        let cases: [&[u8]; 4] = [
            b"3704.229,N,07647.090,W,153030.311,V",
            b"3704.229,N,07647.090,W,153030.311,",
            b"3704.229,N,07647.090,W,153030.311",
            b"3704.229,N,07647.090,W,153030.311,a",
        ];

        for input in cases {
            let mut tpv = Tpv::new();
            tpv.latitude = Some(1);
            let before = tpv.clone();

            GLL::extract(&mut tpv, &fields(input));
            assert_eq!(tpv, before, "input: {:?}", input.escape_ascii().to_string());
        }
    }
}
