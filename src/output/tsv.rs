//! Tab-separated statistics writer.

use crate::aggregator::histogram::TabTimeHistogram;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `tabs_open\tclassification_time_ms` row per measurement
///
/// Returns the number of rows written. No header row.
pub fn write_histogram(
    histogram: &TabTimeHistogram,
    output_path: impl AsRef<Path>,
) -> Result<usize, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing statistics to: {}", output_path.display());

    super::prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    let rows = write_rows(histogram, &mut writer)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Statistics written successfully ({} rows)", rows);
    Ok(rows)
}

/// Write the rows to any writer
pub fn write_rows<W: Write>(histogram: &TabTimeHistogram, writer: &mut W) -> Result<usize, OutputError> {
    let mut rows = 0;
    for (tabs_open, time) in histogram.rows() {
        writeln!(writer, "{}\t{}", tabs_open, format_time(time)).map_err(OutputError::WriteFailed)?;
        rows += 1;
    }
    Ok(rows)
}

/// Format a time, keeping one decimal on whole numbers (`12` -> `12.0`)
pub fn format_time(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
