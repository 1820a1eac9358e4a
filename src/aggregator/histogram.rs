//! Tabs-open / classification-time histogram built from a classification log.

use crate::parser::log_line::parse_log_line;
use crate::utils::error::LogError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// tabs_open -> classification times (ms), in log order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabTimeHistogram {
    buckets: BTreeMap<i64, Vec<f64>>,
}

impl TabTimeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one measurement
    pub fn record(&mut self, tabs_open: i64, classification_time_ms: f64) {
        self.buckets
            .entry(tabs_open)
            .or_default()
            .push(classification_time_ms);
    }

    /// Measurements recorded for a tab count
    pub fn get(&self, tabs_open: i64) -> Option<&[f64]> {
        self.buckets.get(&tabs_open).map(Vec::as_slice)
    }

    /// One `(tabs_open, time)` pair per measurement, keys ascending
    pub fn rows(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(tabs, times)| times.iter().map(move |time| (*tabs, *time)))
    }

    /// Number of distinct tab counts
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of measurements
    pub fn sample_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Line counts from one scan of a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogScanStats {
    pub lines: usize,
    pub samples: usize,
    pub ignored: usize,
    pub malformed: usize,
}

impl LogScanStats {
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Samples: {} | Ignored: {} | Malformed: {}",
            self.lines, self.samples, self.ignored, self.malformed
        )
    }
}

/// Build the histogram from any line source
///
/// Lines that are not valid UTF-8 are decoded lossily. Malformed
/// measurement lines are skipped and counted.
pub fn collect_histogram<R: BufRead>(reader: R) -> std::io::Result<(TabTimeHistogram, LogScanStats)> {
    let mut histogram = TabTimeHistogram::new();
    let mut stats = LogScanStats::default();

    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        stats.lines += 1;

        match parse_log_line(&line) {
            Ok(Some(record)) => {
                histogram.record(record.tabs_open, record.classification_time_ms);
                stats.samples += 1;
            }
            Ok(None) => stats.ignored += 1,
            Err(e) => {
                debug!("Skipping malformed line {}: {}", stats.lines, e);
                stats.malformed += 1;
            }
        }
    }

    Ok((histogram, stats))
}

/// Build the histogram from a log file
pub fn histogram_from_file(path: impl AsRef<Path>) -> Result<(TabTimeHistogram, LogScanStats), LogError> {
    let path = path.as_ref();
    info!("Reading classification log: {}", path.display());

    let read_failed = |source: std::io::Error| LogError::ReadFailed {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(read_failed)?;
    collect_histogram(BufReader::new(file)).map_err(read_failed)
}
