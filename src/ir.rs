use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single plotted entity (player or team) in metric space.
///
/// Identity is the numeric `id`; everything else is payload the layout
/// engine passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: u64,
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Season minutes played, when known. Only the quality filter looks
    /// at this; `None` never excludes a point.
    #[serde(default)]
    pub minutes: Option<f32>,
}

impl DataPoint {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A named pair of metrics plotted against each other, plus the points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub x_metric: String,
    pub y_metric: String,
    pub points: Vec<DataPoint>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate point id {0}")]
    DuplicateId(u64),
}

impl Dataset {
    pub fn from_json(input: &str) -> Result<Self, InputError> {
        let dataset: Dataset = serde_json::from_str(input)?;
        let mut seen = BTreeSet::new();
        for point in &dataset.points {
            if !seen.insert(point.id) {
                return Err(InputError::DuplicateId(point.id));
            }
        }
        Ok(dataset)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Points safe to plot: both coordinates finite.
    pub fn finite_points(&self) -> Vec<DataPoint> {
        self.points
            .iter()
            .filter(|p| p.is_finite())
            .cloned()
            .collect()
    }
}

/// Which points the user has asked to annotate: an optional always-labeled
/// focus point plus a toggleable comparison set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    pub focus: Option<u64>,
    pub highlighted: BTreeSet<u64>,
}

impl Selection {
    pub fn with_focus(focus: u64) -> Self {
        Self {
            focus: Some(focus),
            highlighted: BTreeSet::new(),
        }
    }

    /// Toggle a point in or out of the comparison set. The focus point is
    /// labeled regardless and is not toggleable.
    pub fn toggle(&mut self, id: u64) {
        if Some(id) == self.focus {
            return;
        }
        if !self.highlighted.remove(&id) {
            self.highlighted.insert(id);
        }
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }

    pub fn is_labeled(&self, id: u64) -> bool {
        Some(id) == self.focus || self.highlighted.contains(&id)
    }

    pub fn labeled_points<'a>(&self, points: &'a [DataPoint]) -> Vec<&'a DataPoint> {
        points.iter().filter(|p| self.is_labeled(p.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u64) -> DataPoint {
        DataPoint {
            id,
            name: format!("P{id}"),
            x: id as f32,
            y: id as f32,
            minutes: None,
        }
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = Selection::with_focus(1);
        selection.toggle(2);
        assert!(selection.is_labeled(2));
        selection.toggle(2);
        assert!(!selection.is_labeled(2));
    }

    #[test]
    fn focus_is_not_toggleable() {
        let mut selection = Selection::with_focus(1);
        selection.toggle(1);
        assert!(selection.is_labeled(1));
        assert!(selection.highlighted.is_empty());
    }

    #[test]
    fn labeled_points_keeps_dataset_order() {
        let points = vec![point(3), point(1), point(2)];
        let mut selection = Selection::default();
        selection.toggle(2);
        selection.toggle(3);
        let labeled: Vec<u64> = selection
            .labeled_points(&points)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(labeled, vec![3, 2]);
    }

    #[test]
    fn dataset_rejects_duplicate_ids() {
        let json = r#"{"x_metric":"goals","y_metric":"assists",
            "points":[{"id":1,"name":"a","x":0,"y":0},{"id":1,"name":"b","x":1,"y":1}]}"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(InputError::DuplicateId(1))
        ));
    }

    #[test]
    fn finite_points_drops_nan() {
        let mut p = point(1);
        p.x = f32::NAN;
        let dataset = Dataset {
            x_metric: "goals".into(),
            y_metric: "assists".into(),
            points: vec![p, point(2)],
        };
        let finite = dataset.finite_points();
        assert_eq!(finite.len(), 1);
        assert_eq!(finite[0].id, 2);
    }
}
