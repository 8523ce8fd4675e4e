//! Maps raw per-metric values onto a common 0–100 scale so radar-style
//! comparisons across metrics with very different natural ranges stay
//! meaningful. Upper bounds are position-specific: 0.6 goals per 90 is
//! elite for a midfielder and ordinary for a striker.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricBound {
    pub upper_bound: f32,
}

/// Expected per-90 upper bounds per metric for one position group.
pub type RoleTable = BTreeMap<String, MetricBound>;

/// Scale `raw` against the metric's expected upper bound, capped to
/// [0, 100]. Metrics absent from the table (or with a non-positive bound)
/// pass through unchanged — new upstream metrics degrade silently instead
/// of breaking the chart.
pub fn normalize(raw: f32, metric: &str, table: &RoleTable) -> f32 {
    match table.get(metric) {
        Some(bound) if bound.upper_bound > 0.0 => (raw / bound.upper_bound * 100.0).clamp(0.0, 100.0),
        _ => raw,
    }
}

/// Metrics that are already rates or percentages; per-90 conversion leaves
/// them alone.
const PERCENTAGE_METRICS: [&str; 8] = [
    "accurate_passes_percentage",
    "accurate_long_balls_percentage",
    "successful_dribbles_percentage",
    "goal_conversion_percentage",
    "ground_duels_won_percentage",
    "aerial_duels_won_percentage",
    "total_duels_won_percentage",
    "rating",
];

/// Metrics kept as season totals.
const TOTAL_METRICS: [&str; 3] = ["appearances", "matches_started", "minutes_played"];

/// Convert season totals to per-90-minute rates. `minutes` below one full
/// game still counts as one game so short careers don't explode the rates.
pub fn per90(data: &BTreeMap<String, f32>, minutes: f32) -> BTreeMap<String, f32> {
    let equivalent_games = (minutes / 90.0).max(1.0);
    data.iter()
        .map(|(metric, &value)| {
            let converted = if PERCENTAGE_METRICS.contains(&metric.as_str())
                || TOTAL_METRICS.contains(&metric.as_str())
            {
                value
            } else {
                value / equivalent_games
            };
            (metric.clone(), converted)
        })
        .collect()
}

fn table(entries: &[(&str, f32)]) -> RoleTable {
    entries
        .iter()
        .map(|&(metric, upper_bound)| (metric.to_string(), MetricBound { upper_bound }))
        .collect()
}

static FORWARD_TABLE: Lazy<RoleTable> = Lazy::new(|| {
    table(&[
        ("goals", 0.9),
        ("assists", 0.5),
        ("expected_goals", 0.8),
        ("total_shots", 4.5),
        ("shots_on_target", 2.0),
        ("key_passes", 2.0),
        ("successful_dribbles", 3.0),
        ("aerial_duels_won", 3.5),
        ("goal_conversion_percentage", 35.0),
    ])
});

static MIDFIELD_TABLE: Lazy<RoleTable> = Lazy::new(|| {
    table(&[
        ("goals", 0.45),
        ("assists", 0.45),
        ("key_passes", 2.8),
        ("accurate_long_balls", 6.0),
        ("total_shots", 2.5),
        ("successful_dribbles", 2.5),
        ("tackles", 3.5),
        ("interceptions", 2.5),
        ("accurate_passes_percentage", 92.0),
    ])
});

static DEFENSE_TABLE: Lazy<RoleTable> = Lazy::new(|| {
    table(&[
        ("tackles", 3.5),
        ("interceptions", 3.0),
        ("clearances", 6.0),
        ("aerial_duels_won", 4.0),
        ("key_passes", 1.2),
        ("accurate_long_balls", 7.0),
        ("accurate_passes_percentage", 93.0),
        ("ground_duels_won_percentage", 75.0),
        ("aerial_duels_won_percentage", 75.0),
    ])
});

static KEEPER_TABLE: Lazy<RoleTable> = Lazy::new(|| {
    table(&[
        ("saves", 5.0),
        ("high_claims", 1.5),
        ("punches", 1.0),
        ("runs_out", 1.2),
        ("accurate_long_balls", 8.0),
        ("accurate_passes_percentage", 90.0),
    ])
});

static OUTFIELD_TABLE: Lazy<RoleTable> = Lazy::new(|| {
    table(&[
        ("goals", 0.5),
        ("assists", 0.4),
        ("key_passes", 2.0),
        ("tackles", 3.0),
        ("interceptions", 2.5),
        ("successful_dribbles", 2.5),
        ("aerial_duels_won", 3.0),
        ("accurate_passes_percentage", 90.0),
    ])
});

/// The built-in role table for a position code. Unknown codes fall back to
/// the generic outfield table.
pub fn role_table(position: &str) -> &'static RoleTable {
    match position {
        "F" => &FORWARD_TABLE,
        "M" => &MIDFIELD_TABLE,
        "D" => &DEFENSE_TABLE,
        "G" => &KEEPER_TABLE,
        _ => &OUTFIELD_TABLE,
    }
}
