use crate::analyze::record::parse_record;
use crate::analyze::tokenize::split_fields;

use std::collections::HashMap;
use std::io::{self, BufRead};

/// Latency samples observed for one normalized path during a single run.
///
/// Samples are append-only in insertion order. Derived values are recomputed
/// on demand, never cached, and need at least one sample.
#[derive(Debug, Default, Clone)]
pub struct UrlStats {
    times: Vec<f64>,
}

impl UrlStats {
    pub fn push(&mut self, request_time: f64) {
        self.times.push(request_time);
    }

    pub fn count(&self) -> usize {
        self.times.len()
    }

    pub fn sum(&self) -> f64 {
        self.times.iter().sum()
    }

    pub fn avg(&self) -> f64 {
        self.sum() / self.times.len() as f64
    }

    pub fn max(&self) -> f64 {
        self.times.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Median over the sorted samples, with two quirks this report format
    /// has always had: a lone sample is halved, and odd counts above one
    /// take the element one position past the true middle.
    pub fn median(&self) -> f64 {
        let mut sorted = self.times.clone();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n == 1 {
            sorted[0] / 2.0
        } else if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2 + 1]
        }
    }
}

/// Everything one pass over the log produced. Owned by the caller; nothing
/// survives the run.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub stats: HashMap<String, UrlStats>,
    pub parse_errors: u64,
    pub total_lines: u64,
}

/// Streams `reader` line by line, tokenizing and parsing each one and
/// folding latencies into per-path accumulators.
///
/// Malformed lines are logged, counted and skipped; they never abort the
/// run. An I/O error from the underlying reader does.
pub fn aggregate<R: BufRead>(reader: R) -> io::Result<Aggregation> {
    let mut agg = Aggregation::default();

    for line in reader.lines() {
        let line = line?;
        agg.total_lines += 1;

        let record = match parse_record(split_fields(&line)) {
            Ok(record) => record,
            Err(err) => {
                tracing::error!("skipping line {}: {}", agg.total_lines, err);
                agg.parse_errors += 1;
                continue;
            }
        };

        let Some(path) = record.normalized_path() else {
            tracing::error!("skipping line {}: empty request field", agg.total_lines);
            agg.parse_errors += 1;
            continue;
        };

        agg.stats
            .entry(path.to_string())
            .or_default()
            .push(record.request_time);
    }

    Ok(agg)
}
