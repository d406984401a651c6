use std::process::ExitCode;

use nmea0183_tpv::{LAT_LON_FACTOR, Mode, Tpv, VALUE_FACTOR, decode};

const PROGNAME: &str = "simple_usage";

fn print_value(name: &str, value: Option<i32>, scale: i32, precision: usize) {
    match value {
        Some(value) => println!("{name}: {:.precision$}", f64::from(value) / f64::from(scale)),
        None => println!("{name}: INVALID"),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(nmea), None) = (args.next(), args.next()) else {
        eprintln!("Usage: {PROGNAME} NMEA");
        return ExitCode::FAILURE;
    };

    let sentence = format!("{nmea}\r\n");
    let mut tpv = Tpv::new();

    if let Err(error) = decode(&mut tpv, &sentence) {
        eprintln!("Error ({}): {error}", error.code());
        return ExitCode::FAILURE;
    }

    match tpv.talker_id {
        Some(talker_id) => println!("Talker ID: {talker_id}"),
        None => println!("Talker ID:"),
    }
    println!("Time Stamp: {}", tpv.time);
    print_value("Latitude", tpv.latitude, LAT_LON_FACTOR, 6);
    print_value("Longitude", tpv.longitude, LAT_LON_FACTOR, 6);
    print_value("Altitude", tpv.altitude, VALUE_FACTOR, 3);
    print_value("Track", tpv.track, VALUE_FACTOR, 3);
    print_value("Speed", tpv.speed, VALUE_FACTOR, 3);

    let mode = match tpv.mode {
        Mode::Unknown => "Unknown",
        Mode::NoFix => "No fix",
        Mode::Fix2D => "2D",
        Mode::Fix3D => "3D",
    };
    println!("Mode: {mode}\n");

    ExitCode::SUCCESS
}
