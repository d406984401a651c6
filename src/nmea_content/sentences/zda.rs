use crate::nmea_content::{
    Tpv,
    sentences::{Extract, Fields},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// The local time zone (fields 5 and 6) is ignored.
pub(crate) struct ZDA;

impl Extract for ZDA {
    const ID: [u8; 3] = *b"ZDA";

    fn extract(tpv: &mut Tpv, fields: &Fields<'_>) {
        tpv.time.set_time(fields.get(0));
        tpv.time
            .set_extended_date(fields.get(1), fields.get(2), fields.get(3));
    }
}
