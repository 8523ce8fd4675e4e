// Domain derivation and domain→screen conversion. Pure math, no knowledge
// of selection state or rendering.

use serde::{Deserialize, Serialize};

use crate::ir::DataPoint;

/// The data-space square a chart maps onto screen pixels. Both axes always
/// span the same range so one scale factor serves both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Domain {
    pub fn unit() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }

    pub fn span(&self) -> f32 {
        self.x_max - self.x_min
    }
}

/// Derive a square, padded domain from the finite coordinates in `points`.
///
/// Each axis is centered on its own midpoint; both get a half-width of
/// `max_range * (1 + pad) / 2` where `max_range` is the larger of the two
/// natural ranges. Points with a non-finite coordinate are ignored. An
/// empty (or all-non-finite) input yields the unit domain rather than an
/// error: an empty plot is a valid, empty state.
pub fn compute_square_domain(points: &[DataPoint], pad: f32) -> Domain {
    let mut x_min = f32::INFINITY;
    let mut x_max = f32::NEG_INFINITY;
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for point in points {
        if !point.is_finite() {
            continue;
        }
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return Domain::unit();
    }

    let x_range = x_max - x_min;
    let y_range = y_max - y_min;
    let mut max_range = x_range.max(y_range);
    if max_range == 0.0 {
        // All points coincide; substitute a unit range so the domain stays
        // non-degenerate.
        max_range = 1.0;
    }

    let x_center = (x_max + x_min) / 2.0;
    let y_center = (y_max + y_min) / 2.0;
    let half_range = max_range * (1.0 + pad) / 2.0;

    Domain {
        x_min: x_center - half_range,
        x_max: x_center + half_range,
        y_min: y_center - half_range,
        y_max: y_center + half_range,
    }
}

/// Map a domain coordinate to a pixel position on a `side`-sized square.
/// Screen y grows downward, so domain y is inverted.
pub fn to_screen(x: f32, y: f32, domain: &Domain, side: f32) -> (f32, f32) {
    let scale = side / domain.span();
    ((x - domain.x_min) * scale, (domain.y_max - y) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u64, x: f32, y: f32) -> DataPoint {
        DataPoint {
            id,
            name: String::new(),
            x,
            y,
            minutes: None,
        }
    }

    #[test]
    fn empty_input_gives_unit_domain() {
        assert_eq!(compute_square_domain(&[], 0.1), Domain::unit());
    }

    #[test]
    fn single_point_gives_nonzero_square_domain() {
        let domain = compute_square_domain(&[point(1, 5.0, 5.0)], 0.1);
        let x_span = domain.x_max - domain.x_min;
        let y_span = domain.y_max - domain.y_min;
        assert!(x_span > 0.0);
        assert!((x_span - y_span).abs() < 1e-5);
        // Centered on the point with the substituted unit range.
        assert!((domain.x_min + x_span / 2.0 - 5.0).abs() < 1e-5);
    }

    #[test]
    fn domain_is_always_square() {
        let points = vec![
            point(1, 0.0, 0.0),
            point(2, 100.0, 2.0),
            point(3, 40.0, 1.0),
        ];
        let domain = compute_square_domain(&points, 0.1);
        let x_span = domain.x_max - domain.x_min;
        let y_span = domain.y_max - domain.y_min;
        assert!((x_span - y_span).abs() < 1e-4);
        // The wide axis (x, range 100) drives both spans.
        assert!((x_span - 110.0).abs() < 1e-3);
    }

    #[test]
    fn non_finite_points_are_excluded() {
        let points = vec![
            point(1, 0.0, 0.0),
            point(2, f32::NAN, 50.0),
            point(3, f32::INFINITY, 1.0),
            point(4, 10.0, 10.0),
        ];
        let domain = compute_square_domain(&points, 0.0);
        assert_eq!(domain.x_min, 0.0);
        assert_eq!(domain.x_max, 10.0);
    }

    #[test]
    fn to_screen_inverts_y() {
        let domain = Domain {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        assert_eq!(to_screen(0.0, 0.0, &domain, 500.0), (250.0, 250.0));
        assert_eq!(to_screen(0.1, 0.1, &domain, 500.0), (275.0, 225.0));
        // Domain top maps to screen 0.
        assert_eq!(to_screen(-1.0, 1.0, &domain, 500.0), (0.0, 0.0));
    }
}
