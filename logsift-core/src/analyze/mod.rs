//! Access Log Analysis Pipeline
//!
//! This module turns one nginx access log into per-endpoint latency
//! statistics. The log is never held in memory as a whole: lines stream out
//! of the (possibly gzipped) file one at a time, each line is split into its
//! fields, the fields become a typed record, and the record's latency is
//! folded into the accumulator for its endpoint.
//!
//! A line that cannot be tokenized or parsed is counted and skipped; whether
//! the accumulated error count is low enough to trust the run is decided by
//! the pipeline controller, not here.
//!
//! The overall data flow is:
//!
//! discover (newest log file)
//! stream (plain or gzip lines)
//! tokenize
//! record
//! aggregate
//! summarize
//!

mod aggregate;
mod discover;
mod record;
mod stream;
mod summarize;
mod tokenize;

#[cfg(test)]
mod tests;

pub use aggregate::{Aggregation, UrlStats, aggregate};
pub use discover::{LogSource, find_latest_log};
pub use record::{AccessRecord, ParseError, parse_record};
pub use stream::open_log;
pub use summarize::{SummaryRow, build_summary};
pub use tokenize::split_fields;
