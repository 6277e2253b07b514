//! CSV export of projection series

use super::series::ProjectionResult;
use crate::error::ProjectionError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write `period,balance,cumulative_contributions` with one row per period
pub fn write_series_csv<W: Write>(
    result: &ProjectionResult,
    writer: W,
) -> Result<(), ProjectionError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in &result.series {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_series_csv_path<P: AsRef<Path>>(
    result: &ProjectionResult,
    path: P,
) -> Result<(), ProjectionError> {
    let file = File::create(path)?;
    write_series_csv(result, file)
}
