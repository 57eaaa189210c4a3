//! EXIF capture-date extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{In, Tag, Value};

/// EXIF stores capture timestamps as local time with no zone.
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Read `DateTimeOriginal` from the image at `path`.
///
/// Returns `None` on any failure: unreadable file, missing or corrupt EXIF
/// data, malformed date string. Extraction problems never abort a scan;
/// the scanner falls back to the discovery time.
pub fn capture_date(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let raw = match &field.value {
        Value::Ascii(strings) => strings.first()?,
        _ => return None,
    };

    std::str::from_utf8(raw).ok().and_then(parse_exif_datetime)
}

/// Parse the EXIF `YYYY:MM:DD HH:MM:SS` form.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), EXIF_DATETIME_FORMAT).ok()
}
