use std::io::{self, Write};

use crate::geodesy::Geodetic;

/// Render the three-line LON/LAT/HAE report.
///
/// Floats use the shortest round-trip form, so integral values keep their
/// decimal point (`0.0`) and NaN/inf pass through unchanged.
pub fn format_report(llh: &Geodetic) -> String {
    format!(
        "LON: {:?} deg\nLAT: {:?} deg\nHAE: {:?} km\n",
        llh.lon_deg, llh.lat_deg, llh.hae_km
    )
}

pub fn write_report<W: Write>(out: &mut W, llh: &Geodetic) -> io::Result<()> {
    out.write_all(format_report(llh).as_bytes())?;
    out.flush()
}
