//! Fixed-width output catalog.
//!
//! One line per point:
//!
//! ```text
//!  1.10904 +20.66974 AND  PER
//! ^^^^^^^^ ^^^^^^^^^ ^^^^ ^^^^
//!   RA       Dec     con1 con2
//! ```
//!
//! RA is right-aligned in 8 columns with 5 decimals; Dec is signed with two
//! integer digits and 5 decimals; constellation codes are left-aligned in 4
//! columns. The first line of every group leaves both codes blank, since it
//! repeats the end of the previous edge rather than starting a border.

use crate::errors::BoundsResult;
use crate::point::BoundaryPoint;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Formats a declination as `+DD.DDDDD`.
///
/// ```
/// use celestial_bounds::format::format_dec;
///
/// assert_eq!(format_dec(5.12345), "+05.12345");
/// assert_eq!(format_dec(-12.5), "-12.50000");
/// ```
pub fn format_dec(dec: f64) -> String {
    format!("{:+09.5}", dec)
}

fn format_fields(ra: f64, dec: f64, con1: &str, con2: &str) -> String {
    format!("{:8.5} {} {:<4} {:<4}\n", ra, format_dec(dec), con1, con2)
}

/// Formats one point with its own constellation tags.
pub fn format_point(point: &BoundaryPoint) -> String {
    format_fields(
        point.ra(),
        point.dec(),
        point.primary().unwrap_or(""),
        point.secondary().unwrap_or(""),
    )
}

/// Formats groups of points in order, blanking the tags of each group's
/// first point. Every returned line ends with `\n`.
pub fn format_catalog<G>(groups: &[G]) -> Vec<String>
where
    G: AsRef<[BoundaryPoint]>,
{
    let mut lines = Vec::with_capacity(groups.iter().map(|g| g.as_ref().len()).sum());
    for group in groups {
        let points = group.as_ref();
        if let Some((first, rest)) = points.split_first() {
            lines.push(format_fields(first.ra(), first.dec(), "", ""));
            lines.extend(rest.iter().map(format_point));
        }
    }
    lines
}

/// Writes catalog lines to `path` through a sibling `.tmp` file that is
/// renamed into place once complete.
pub fn write_catalog<S: AsRef<str>>(path: &Path, lines: &[S]) -> BoundsResult<()> {
    let temp_path = temp_path_for(path);

    let result = (|| -> BoundsResult<()> {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote catalog");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
