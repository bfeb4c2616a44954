use crate::analyze::aggregate::UrlStats;

use serde::Serialize;
use std::collections::HashMap;

/// One finalized statistics row for a single normalized path.
///
/// Field names are the keys the report template consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
}

/// Reduces the accumulator map into report rows ranked by share of total
/// request time, descending.
///
/// Percentages are each path's share of the totals across all paths; every
/// time-derived value is rounded to three decimals. The sort is stable, so
/// rows with equal shares keep their relative order. An empty map yields an
/// empty row list.
pub fn build_summary(stats: &HashMap<String, UrlStats>) -> Vec<SummaryRow> {
    let all_count: u64 = stats.values().map(|s| s.count() as u64).sum();
    let all_time: f64 = stats.values().map(UrlStats::sum).sum();

    let mut rows: Vec<SummaryRow> = stats
        .iter()
        .map(|(url, stat)| SummaryRow {
            url: url.clone(),
            count: stat.count() as u64,
            count_perc: round3(stat.count() as f64 / all_count as f64),
            time_sum: round3(stat.sum()),
            time_perc: round3(stat.sum() / all_time),
            time_avg: round3(stat.avg()),
            time_max: round3(stat.max()),
            time_med: round3(stat.median()),
        })
        .collect();

    rows.sort_by(|a, b| b.time_perc.total_cmp(&a.time_perc));
    rows
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
