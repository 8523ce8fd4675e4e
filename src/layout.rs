use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ir::{DataPoint, Selection};

pub mod filter;
pub mod label_placement;
pub mod scale;

pub use label_placement::{LabelOffset, place_labels};
pub use scale::{Domain, compute_square_domain, to_screen};

/// How a dot is drawn relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    Focus,
    Highlight,
    Base,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotLayout {
    pub id: u64,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub emphasis: Emphasis,
}

/// A placed label: the dot it annotates, the resolved anchor, and the
/// offset between them (the leader line runs dot → anchor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub id: u64,
    pub text: String,
    pub dot_x: f32,
    pub dot_y: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub offset: LabelOffset,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterLayout {
    pub domain: Domain,
    pub side: f32,
    pub dots: Vec<DotLayout>,
    pub labels: Vec<PlacedLabel>,
}

/// One full layout pass: derive the square domain from the visible points,
/// map every point to screen space, and place a label for each selected
/// point. Non-finite points are dropped up front; everything downstream
/// assumes finite coordinates.
pub fn compute_scatter_layout(
    points: &[DataPoint],
    selection: &Selection,
    config: &Config,
) -> ScatterLayout {
    let visible: Vec<DataPoint> = points.iter().filter(|p| p.is_finite()).cloned().collect();

    let domain = compute_square_domain(&visible, config.domain.pad);
    let side = config.domain.screen_side;

    let labelable: Vec<DataPoint> = selection
        .labeled_points(&visible)
        .into_iter()
        .cloned()
        .collect();
    let offsets = place_labels(&labelable, &visible, &domain, side, &config.placement);

    let emphasis_of = |id: u64| {
        if Some(id) == selection.focus {
            Emphasis::Focus
        } else if selection.highlighted.contains(&id) {
            Emphasis::Highlight
        } else {
            Emphasis::Base
        }
    };

    let dots: Vec<DotLayout> = visible
        .iter()
        .map(|p| {
            let (x, y) = to_screen(p.x, p.y, &domain, side);
            let emphasis = emphasis_of(p.id);
            let radius = match emphasis {
                Emphasis::Focus => config.render.focus_radius,
                Emphasis::Highlight => config.render.highlight_radius,
                Emphasis::Base => config.render.base_radius,
            };
            DotLayout {
                id: p.id,
                name: p.name.clone(),
                x,
                y,
                radius,
                emphasis,
            }
        })
        .collect();

    let labels: Vec<PlacedLabel> = labelable
        .iter()
        .map(|p| {
            let (x, y) = to_screen(p.x, p.y, &domain, side);
            // place_labels guarantees an entry for every labelable point.
            let offset = offsets[&p.id];
            PlacedLabel {
                id: p.id,
                text: p.name.clone(),
                dot_x: x,
                dot_y: y,
                anchor_x: x + offset.dx,
                anchor_y: y + offset.dy,
                offset,
                emphasis: emphasis_of(p.id),
            }
        })
        .collect();

    ScatterLayout {
        domain,
        side,
        dots,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u64, x: f32, y: f32) -> DataPoint {
        DataPoint {
            id,
            name: format!("P{id}"),
            x,
            y,
            minutes: None,
        }
    }

    #[test]
    fn layout_labels_focus_and_highlights_only() {
        let points = vec![
            point(1, 0.0, 0.0),
            point(2, 5.0, 5.0),
            point(3, 10.0, 10.0),
        ];
        let mut selection = Selection::with_focus(1);
        selection.toggle(3);
        let layout = compute_scatter_layout(&points, &selection, &Config::default());
        assert_eq!(layout.dots.len(), 3);
        let labeled: Vec<u64> = layout.labels.iter().map(|l| l.id).collect();
        assert_eq!(labeled, vec![1, 3]);
        assert_eq!(layout.labels[0].emphasis, Emphasis::Focus);
        assert_eq!(layout.labels[1].emphasis, Emphasis::Highlight);
    }

    #[test]
    fn empty_selection_gives_no_labels() {
        let points = vec![point(1, 0.0, 0.0)];
        let layout = compute_scatter_layout(&points, &Selection::default(), &Config::default());
        assert!(layout.labels.is_empty());
        assert_eq!(layout.dots.len(), 1);
    }

    #[test]
    fn non_finite_points_never_reach_the_layout() {
        let mut bad = point(2, 0.0, 0.0);
        bad.y = f32::NAN;
        let points = vec![point(1, 0.0, 0.0), bad];
        let layout = compute_scatter_layout(&points, &Selection::default(), &Config::default());
        assert_eq!(layout.dots.len(), 1);
    }

    #[test]
    fn anchor_equals_dot_plus_offset() {
        let points = vec![point(1, 2.0, 3.0), point(2, 4.0, 1.0)];
        let selection = Selection::with_focus(2);
        let layout = compute_scatter_layout(&points, &selection, &Config::default());
        let label = &layout.labels[0];
        assert_eq!(label.anchor_x, label.dot_x + label.offset.dx);
        assert_eq!(label.anchor_y, label.dot_y + label.offset.dy);
    }
}
