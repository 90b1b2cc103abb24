//! Progress-history CSV export.
//!
//! The format is consumed by an external route-animation script:
//!
//! - line 1: all location coordinates as `x,y,` pairs (trailing comma),
//!   depot first;
//! - per progress frame: one comma-terminated line of stop indices per
//!   route, then a literal `END` line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SolverError;
use crate::models::{Point, RouteSet};

/// Writes a progress history to `path` in the animation CSV format.
///
/// `locations` must be ordered depot-first, matching the indices used in the
/// routes.
///
/// # Errors
///
/// Returns [`SolverError::Io`] when the file cannot be created or written.
pub fn export_routes_progress(
    progress: &[RouteSet],
    locations: &[Point],
    path: &Path,
) -> Result<(), SolverError> {
    let mut out = BufWriter::new(File::create(path)?);

    for location in locations {
        write!(out, "{},{},", location.x, location.y)?;
    }
    writeln!(out)?;

    for route_set in progress {
        for route in route_set {
            for stop in route.stops() {
                write!(out, "{stop},")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "END")?;
    }

    out.flush()?;
    Ok(())
}
