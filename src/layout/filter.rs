// Percentile-based dataset thinning so crowded leagues stay readable.
// Points that clear the top-share cutoff on either axis (and a minimum
// minutes-played gate) survive; two progressively looser passes keep the
// plot from going empty on small populations.

use crate::config::FilterConfig;
use crate::ir::DataPoint;

/// Reduce `points` to the ones worth plotting for the current metric pair.
///
/// The focus point, when present, always survives and leads the result.
/// Survivors otherwise keep their dataset order; the final top-N fallback
/// orders by combined score descending with ascending-id ties.
pub fn filter_quality(
    points: &[DataPoint],
    focus: Option<u64>,
    config: &FilterConfig,
) -> Vec<DataPoint> {
    let x_threshold = share_threshold(points, config.top_share, |p| p.x);
    let y_threshold = share_threshold(points, config.top_share, |p| p.y);

    let mut survivors: Vec<DataPoint> = points
        .iter()
        .filter(|p| {
            let active = p.minutes.is_none_or(|m| m >= config.min_minutes);
            (p.x >= x_threshold || p.y >= y_threshold) && active
        })
        .cloned()
        .collect();

    if survivors.len() < config.min_population {
        let relaxed_x = share_threshold(points, config.relaxed_share, |p| p.x);
        let relaxed_y = share_threshold(points, config.relaxed_share, |p| p.y);
        survivors = points
            .iter()
            .filter(|p| {
                let active = p.minutes.is_none_or(|m| m >= config.relaxed_minutes);
                (p.x >= relaxed_x || p.y >= relaxed_y) && active
            })
            .cloned()
            .collect();
    }

    if survivors.len() < config.min_fallback {
        let mut ranked: Vec<DataPoint> = points.to_vec();
        ranked.sort_by(|a, b| {
            let score_a = a.x + a.y;
            let score_b = b.x + b.y;
            score_b
                .partial_cmp(&score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        ranked.truncate(config.top_n);
        survivors = ranked;
    }

    // The focus point leads; drop any duplicate of it from the survivors.
    let mut result = Vec::with_capacity(survivors.len() + 1);
    if let Some(focus_id) = focus
        && let Some(focus_point) = points.iter().find(|p| p.id == focus_id)
    {
        result.push(focus_point.clone());
    }
    for point in survivors {
        if result.iter().any(|kept| kept.id == point.id) {
            continue;
        }
        result.push(point);
    }
    result
}

/// The value at the top-`share` rank of `points` under `key`, descending.
/// Empty input (or an out-of-range rank) yields 0, which lets every
/// non-negative value through.
fn share_threshold(points: &[DataPoint], share: f32, key: impl Fn(&DataPoint) -> f32) -> f32 {
    let mut values: Vec<f32> = points.iter().map(key).filter(|v| v.is_finite()).collect();
    values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let rank = (values.len() as f32 * share).floor() as usize;
    values.get(rank).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u64, x: f32, y: f32, minutes: f32) -> DataPoint {
        DataPoint {
            id,
            name: format!("P{id}"),
            x,
            y,
            minutes: Some(minutes),
        }
    }

    fn league(n: u64) -> Vec<DataPoint> {
        (0..n)
            .map(|i| point(i, i as f32, (n - i) as f32 * 0.5, 900.0))
            .collect()
    }

    #[test]
    fn focus_always_survives() {
        // A focus point with zeros on both axes and no minutes.
        let mut points = league(40);
        points.push(point(99, 0.0, 0.0, 0.0));
        let result = filter_quality(&points, Some(99), &FilterConfig::default());
        assert_eq!(result[0].id, 99);
        assert_eq!(result.iter().filter(|p| p.id == 99).count(), 1);
    }

    #[test]
    fn low_minutes_points_are_dropped() {
        let mut points = league(40);
        points.push(point(99, 100.0, 100.0, 30.0));
        let result = filter_quality(&points, None, &FilterConfig::default());
        assert!(!result.iter().any(|p| p.id == 99));
    }

    #[test]
    fn small_population_falls_back_to_top_n() {
        let points = league(5);
        let result = filter_quality(&points, None, &FilterConfig::default());
        // Fewer than min_fallback survive the threshold passes, so the
        // top-N fallback keeps the whole (small) population.
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn top_n_fallback_ranks_by_combined_score() {
        let points = vec![
            point(1, 1.0, 1.0, 900.0),
            point(2, 5.0, 5.0, 900.0),
            point(3, 3.0, 3.0, 900.0),
        ];
        let mut config = FilterConfig::default();
        config.top_n = 2;
        let result = filter_quality(&points, None, &config);
        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn missing_minutes_never_excludes() {
        let mut points = league(40);
        points.push(DataPoint {
            id: 99,
            name: "walk-on".into(),
            x: 100.0,
            y: 100.0,
            minutes: None,
        });
        let result = filter_quality(&points, None, &FilterConfig::default());
        assert!(result.iter().any(|p| p.id == 99));
    }
}
