#![no_std]

use core::fmt::Write;

use calendric::format::CLocale;
use calendric::DateTime;

pub fn create_time() -> Result<(), calendric::Error> {
    let dt = DateTime::from_ymd_hms(2019, 1, 1, 0, 0, 0)?;
    let _ = dt.timestamp_millis().ok_or(calendric::Error::InvalidDateTime)?;
    Ok(())
}

pub fn format_time<W: Write>(w: &mut W) -> Result<(), calendric::Error> {
    DateTime::from_timestamp_millis(0).format_to(w, &CLocale, "C", "%a %Y-%m-%d")
}
