//! Coordinate lists as comma separated `x,y` rows.
//!
//! Reading is lenient about layout: blank lines and `#` comments are
//! skipped, extra columns are ignored and a first row whose two leading
//! fields are not numbers is taken as a header.

use crate::coordinate::Coordinate;
use crate::float_types::Real;
use crate::io::IoError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Read an ordered coordinate list from the CSV file at `path`.
pub fn read_coords_csv(path: impl AsRef<Path>) -> Result<Vec<Coordinate>, IoError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let coords = parse_coords(&text)?;
    debug!(path = %path.display(), points = coords.len(), "read coordinates");
    Ok(coords)
}

/// Parse CSV text into coordinates, one per data row.
pub fn parse_coords(text: &str) -> Result<Vec<Coordinate>, IoError> {
    let mut coords = Vec::new();
    let mut seen_row = false;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let first_row = !seen_row;
        seen_row = true;

        let mut fields = line.split(',').map(str::trim);
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            return Err(IoError::MalformedInput(format!(
                "line {}: expected two fields, found `{line}`",
                index + 1
            )));
        };

        match (x.parse::<Real>(), y.parse::<Real>()) {
            (Ok(x), Ok(y)) => coords.push(Coordinate::new(x, y)),
            (Err(_), Err(_)) if first_row => continue,
            (Err(error), _) | (_, Err(error)) => return Err(IoError::ParseFloat(error)),
        }
    }

    if coords.is_empty() {
        return Err(IoError::MalformedInput("no coordinates found".to_string()));
    }
    Ok(coords)
}

/// Write `coords` as `x,y` rows, creating or truncating the file at `path`.
///
/// Values are written in their shortest round-trip form, so reading the file
/// back yields the same numbers.
pub fn write_coords_csv(path: impl AsRef<Path>, coords: &[Coordinate]) -> Result<(), IoError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(fs::File::create(path)?);
    for c in coords {
        writeln!(out, "{},{}", c.x, c.y)?;
    }
    out.flush()?;
    debug!(path = %path.display(), points = coords.len(), "wrote coordinates");
    Ok(())
}
