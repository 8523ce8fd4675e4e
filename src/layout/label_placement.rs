// Label placement and collision avoidance for scatter-point labels.
// All functions here work with pure pixel-space geometry; the engine never
// draws and never fails — worst case a label gets the least-crowded offset
// the bounded spiral search could find.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scale::{Domain, to_screen};
use crate::config::PlacementConfig;
use crate::ir::DataPoint;

/// Pixel offset from a point's dot to its label anchor. The label text is
/// horizontally centered and vertically centered on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub dx: f32,
    pub dy: f32,
}

/// Assign every labelable point a label offset.
///
/// Points are processed top-to-bottom in domain space (ties broken by
/// ascending id), each taking the first candidate offset that collides with
/// neither an earlier label nor any other plotted dot. When every fixed
/// candidate collides, a bounded spiral search keeps the offset with the
/// fewest dot collisions. The returned map has exactly one entry per
/// labelable point; identical inputs produce identical output.
pub fn place_labels(
    labelable: &[DataPoint],
    all_points: &[DataPoint],
    domain: &Domain,
    side: f32,
    config: &PlacementConfig,
) -> BTreeMap<u64, LabelOffset> {
    let mut order: Vec<&DataPoint> = labelable.iter().collect();
    order.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    // Screen positions of everything that can collide with a label.
    let dots: Vec<(u64, (f32, f32))> = all_points
        .iter()
        .map(|p| (p.id, to_screen(p.x, p.y, domain, side)))
        .collect();

    let mut placed: Vec<(u64, (f32, f32))> = Vec::with_capacity(order.len());
    let mut offsets = BTreeMap::new();

    for point in order {
        let dot = to_screen(point.x, point.y, domain, side);
        let offset = match first_free_candidate(dot, point.id, &placed, &dots, config) {
            Some(offset) => offset,
            None => spiral_fallback(dot, point.id, &dots, config),
        };
        placed.push((point.id, (dot.0 + offset.dx, dot.1 + offset.dy)));
        offsets.insert(point.id, offset);
    }

    offsets
}

fn first_free_candidate(
    dot: (f32, f32),
    id: u64,
    placed: &[(u64, (f32, f32))],
    dots: &[(u64, (f32, f32))],
    config: &PlacementConfig,
) -> Option<LabelOffset> {
    for &(dx, dy) in &config.candidates {
        let anchor = (dot.0 + dx, dot.1 + dy);
        if collides_with_labels(anchor, placed, config) {
            continue;
        }
        if count_dot_collisions(anchor, id, dots, config, true) > 0 {
            continue;
        }
        return Some(LabelOffset { dx, dy });
    }
    None
}

/// Expanding radius/angle sweep used when every fixed candidate collides.
/// Keeps the offset with the fewest dot collisions seen so far and stops
/// the moment a collision-free one turns up. Always returns something.
fn spiral_fallback(
    dot: (f32, f32),
    id: u64,
    dots: &[(u64, (f32, f32))],
    config: &PlacementConfig,
) -> LabelOffset {
    let fallback = config.candidates.first().copied().unwrap_or((0.0, -22.0));
    let mut best = LabelOffset {
        dx: fallback.0,
        dy: fallback.1,
    };
    let mut best_collisions = usize::MAX;

    let mut radius = config.spiral_start_radius;
    while radius <= config.spiral_max_radius {
        let mut angle = 0.0f32;
        while angle < 360.0 {
            let radians = angle.to_radians();
            let dx = radians.cos() * radius;
            let dy = radians.sin() * radius;
            let anchor = (dot.0 + dx, dot.1 + dy);
            let collisions = count_dot_collisions(anchor, id, dots, config, false);
            if collisions < best_collisions {
                best_collisions = collisions;
                best = LabelOffset { dx, dy };
                if collisions == 0 {
                    return best;
                }
            }
            angle += config.spiral_angle_step_deg.max(1.0);
        }
        radius += config.spiral_radius_step.max(1.0);
    }

    best
}

/// AABB overlap against already-placed label anchors: two label boxes of
/// the configured size overlap when both axis separations are below the
/// full box dimension.
fn collides_with_labels(
    anchor: (f32, f32),
    placed: &[(u64, (f32, f32))],
    config: &PlacementConfig,
) -> bool {
    placed.iter().any(|&(_, prev)| {
        (anchor.0 - prev.0).abs() < config.label_half_width * 2.0
            && (anchor.1 - prev.1).abs() < config.label_half_height * 2.0
    })
}

/// Count dots whose marker the label box would sit on. The point being
/// placed is skipped — its own dot is always adjacent to its label. When
/// `stop_at_first` is set the count short-circuits at 1.
fn count_dot_collisions(
    anchor: (f32, f32),
    id: u64,
    dots: &[(u64, (f32, f32))],
    config: &PlacementConfig,
    stop_at_first: bool,
) -> usize {
    let reach_x = config.label_half_width + config.dot_radius;
    let reach_y = config.label_half_height + config.dot_radius;
    let mut count = 0;
    for &(other_id, pos) in dots {
        if other_id == id {
            continue;
        }
        if (anchor.0 - pos.0).abs() < reach_x && (anchor.1 - pos.1).abs() < reach_y {
            count += 1;
            if stop_at_first {
                return count;
            }
        }
    }
    count
}
