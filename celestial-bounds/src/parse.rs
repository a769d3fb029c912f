//! Catalog readers.
//!
//! Two text layouts are understood:
//!
//! | Layout | Example | Regex |
//! |--------|---------|-------|
//! | [`Raw`](CatalogLayout::Raw) | ` 1.00000 +20.00000 AND  PER` | `^([ \d]\d\.\d{5}) ([\+-]\d{2}\.\d{5}) (\w+)(?: {1,2}(\w+))?\s*$` |
//! | [`Annotated`](CatalogLayout::Annotated) | ` 1.0000000 +20.0000000\|AND \|O` | `(\d?\d\.\d{7})\s([\+-]\d{2}\.\d{7})\|(\w{3,4})\s?\|(.)` |
//!
//! The raw layout is the source boundary catalog: RA in hours and Dec in
//! degrees to five decimals, the constellation the traversal belongs to, and
//! (except on the first vertex of a traversal) the constellation on the other
//! side of the edge. The annotated layout is the densified catalog published
//! with seven decimals and an `O` flag on original vertices.
//!
//! Raw records must fill the whole line, so an overlong RA or a third
//! constellation code is rejected rather than truncated.
//!
//! Any non-blank line that does not match is a fatal [`BoundsError::Parse`];
//! nothing is skipped silently.

use crate::errors::{BoundsError, BoundsResult};
use crate::point::{BoundaryPoint, PointKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;

static RAW_RECORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ \d]\d\.\d{5}) ([\+-]\d{2}\.\d{5}) (\w+)(?: {1,2}(\w+))?\s*$").unwrap()
});

static ANNOTATED_RECORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d?\d\.\d{7})\s([\+-]\d{2}\.\d{7})\|(\w{3,4})\s?\|(.)").unwrap()
});

/// Text layout of a boundary catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLayout {
    Raw,
    Annotated,
}

impl CatalogLayout {
    /// Number of banner lines `(header, footer)` around the records in the
    /// catalog as distributed.
    pub fn banner_lines(&self) -> (usize, usize) {
        match self {
            Self::Raw => (0, 0),
            Self::Annotated => (7, 2),
        }
    }
}

/// Parses one raw-layout record. `line_number` is 1-based and only used for
/// error reporting.
pub fn parse_line(line_number: usize, line: &str) -> BoundsResult<BoundaryPoint> {
    let caps = RAW_RECORD_REGEX.captures(line).ok_or_else(|| {
        BoundsError::parse(line_number, line, "expected `RA DEC CON [CON]`")
    })?;

    let ra = parse_coordinate(line_number, line, &caps[1], "right ascension")?;
    let dec = parse_coordinate(line_number, line, &caps[2], "declination")?;
    let secondary = caps.get(4).map(|m| m.as_str());

    Ok(BoundaryPoint::original(ra, dec, &caps[3], secondary))
}

/// Parses one annotated-layout record.
pub fn parse_annotated_line(line_number: usize, line: &str) -> BoundsResult<BoundaryPoint> {
    let caps = ANNOTATED_RECORD_REGEX.captures(line).ok_or_else(|| {
        BoundsError::parse(line_number, line, "expected `RA DEC|CON |F`")
    })?;

    let ra = parse_coordinate(line_number, line, &caps[1], "right ascension")?;
    let dec = parse_coordinate(line_number, line, &caps[2], "declination")?;
    let kind = if &caps[4] == "O" {
        PointKind::Original
    } else {
        PointKind::Interpolated
    };

    Ok(BoundaryPoint::sample(
        ra,
        dec,
        Some(caps[3].to_string()),
        None,
        kind,
    ))
}

fn parse_coordinate(line_number: usize, line: &str, field: &str, name: &str) -> BoundsResult<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| BoundsError::parse(line_number, line, &format!("invalid {}", name)))
}

/// Parses a raw-layout catalog held in memory. Blank lines are ignored.
pub fn parse_catalog(text: &str) -> BoundsResult<Vec<BoundaryPoint>> {
    parse_lines(text.lines().enumerate(), CatalogLayout::Raw)
}

/// Reads a raw-layout catalog in order.
pub fn read_catalog<R: BufRead>(reader: R) -> BoundsResult<Vec<BoundaryPoint>> {
    read_points(reader, CatalogLayout::Raw, 0, 0)
}

/// Reads a catalog in either layout, dropping `skip_header` leading and
/// `skip_footer` trailing lines first (the published annotated catalog wraps
/// its records in a fixed banner).
pub fn read_points<R: BufRead>(
    reader: R,
    layout: CatalogLayout,
    skip_header: usize,
    skip_footer: usize,
) -> BoundsResult<Vec<BoundaryPoint>> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let end = lines.len().saturating_sub(skip_footer);
    let start = skip_header.min(end);

    parse_lines(
        lines[start..end]
            .iter()
            .enumerate()
            .map(|(i, line)| (start + i, line.as_str())),
        layout,
    )
}

fn parse_lines<'a, I>(lines: I, layout: CatalogLayout) -> BoundsResult<Vec<BoundaryPoint>>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut points = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let point = match layout {
            CatalogLayout::Raw => parse_line(index + 1, line)?,
            CatalogLayout::Annotated => parse_annotated_line(index + 1, line)?,
        };
        points.push(point);
    }
    tracing::debug!(count = points.len(), ?layout, "parsed boundary catalog");
    Ok(points)
}
