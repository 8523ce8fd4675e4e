use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Candidate label offsets in priority order: near-above first, then the
/// above diagonals, then farther variants, then below. Values are pixel
/// displacements from the dot to the label anchor.
pub const DEFAULT_CANDIDATES: [(f32, f32); 15] = [
    (0.0, -22.0),
    (-25.0, -22.0),
    (25.0, -22.0),
    (-40.0, -22.0),
    (40.0, -22.0),
    (0.0, -40.0),
    (-25.0, -40.0),
    (25.0, -40.0),
    (-40.0, 0.0),
    (40.0, 0.0),
    (-50.0, -15.0),
    (50.0, -15.0),
    (0.0, 30.0),
    (-25.0, 30.0),
    (25.0, 30.0),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Half the estimated label box width, padding included.
    pub label_half_width: f32,
    /// Half the estimated label box height, padding included.
    pub label_half_height: f32,
    /// Dot radius plus padding used in label-vs-dot collision tests.
    pub dot_radius: f32,
    /// Fixed offsets tried in order before the spiral fallback.
    pub candidates: Vec<(f32, f32)>,
    pub spiral_start_radius: f32,
    pub spiral_max_radius: f32,
    pub spiral_radius_step: f32,
    pub spiral_angle_step_deg: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            label_half_width: 25.0,
            label_half_height: 10.0,
            dot_radius: 10.0,
            candidates: DEFAULT_CANDIDATES.to_vec(),
            spiral_start_radius: 25.0,
            spiral_max_radius: 80.0,
            spiral_radius_step: 15.0,
            spiral_angle_step_deg: 30.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Fractional padding applied to the larger axis range.
    pub pad: f32,
    /// Side length of the square plot area in pixels.
    pub screen_side: f32,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            pad: 0.1,
            screen_side: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Share of the population that defines the quality threshold on each
    /// axis (0.2 keeps values at or above the top-20% cutoff).
    pub top_share: f32,
    pub relaxed_share: f32,
    /// Below this many survivors the relaxed thresholds kick in.
    pub min_population: usize,
    /// Below this many survivors the top-N fallback kicks in.
    pub min_fallback: usize,
    pub top_n: usize,
    pub min_minutes: f32,
    pub relaxed_minutes: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            top_share: 0.2,
            relaxed_share: 0.5,
            min_population: 15,
            min_fallback: 10,
            top_n: 30,
            min_minutes: 180.0,
            relaxed_minutes: 90.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub margin: f32,
    pub focus_radius: f32,
    pub highlight_radius: f32,
    pub base_radius: f32,
    pub leader_dasharray: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            focus_radius: 10.0,
            highlight_radius: 8.0,
            base_radius: 6.0,
            leader_dasharray: "2,2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub domain: DomainConfig,
    pub placement: PlacementConfig,
    pub filter: FilterConfig,
    pub render: RenderConfig,
}

// File-format mirrors: every field optional so a config file only has to
// name what it overrides.

#[derive(Debug, Default, Deserialize)]
struct PlacementConfigFile {
    label_half_width: Option<f32>,
    label_half_height: Option<f32>,
    dot_radius: Option<f32>,
    candidates: Option<Vec<(f32, f32)>>,
    spiral_start_radius: Option<f32>,
    spiral_max_radius: Option<f32>,
    spiral_radius_step: Option<f32>,
    spiral_angle_step_deg: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct DomainConfigFile {
    pad: Option<f32>,
    screen_side: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct FilterConfigFile {
    top_share: Option<f32>,
    relaxed_share: Option<f32>,
    min_population: Option<usize>,
    min_fallback: Option<usize>,
    top_n: Option<usize>,
    min_minutes: Option<f32>,
    relaxed_minutes: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct RenderConfigFile {
    margin: Option<f32>,
    focus_radius: Option<f32>,
    highlight_radius: Option<f32>,
    base_radius: Option<f32>,
    leader_dasharray: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    theme: Option<String>,
    domain: Option<DomainConfigFile>,
    placement: Option<PlacementConfigFile>,
    filter: Option<FilterConfigFile>,
    render: Option<RenderConfigFile>,
}

macro_rules! merge_field {
    ($target:expr, $file:expr, $($field:ident),+ $(,)?) => {
        $(if let Some(v) = $file.$field {
            $target.$field = v;
        })+
    };
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    // json5 so config files may carry comments and trailing commas.
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "midnight" => config.theme = Theme::midnight(),
            "dashboard" | "default" => config.theme = Theme::dashboard(),
            other => anyhow::bail!("unknown theme {other:?}"),
        }
    }
    if let Some(file) = parsed.domain {
        merge_field!(config.domain, file, pad, screen_side);
    }
    if let Some(file) = parsed.placement {
        merge_field!(
            config.placement,
            file,
            label_half_width,
            label_half_height,
            dot_radius,
            candidates,
            spiral_start_radius,
            spiral_max_radius,
            spiral_radius_step,
            spiral_angle_step_deg,
        );
    }
    if let Some(file) = parsed.filter {
        merge_field!(
            config.filter,
            file,
            top_share,
            relaxed_share,
            min_population,
            min_fallback,
            top_n,
            min_minutes,
            relaxed_minutes,
        );
    }
    if let Some(file) = parsed.render {
        merge_field!(
            config.render,
            file,
            margin,
            focus_radius,
            highlight_radius,
            base_radius,
            leader_dasharray,
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_candidates_start_above_center() {
        let config = PlacementConfig::default();
        assert_eq!(config.candidates[0], (0.0, -22.0));
    }

    #[test]
    fn load_config_without_path_is_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.domain.screen_side, 500.0);
        assert_eq!(config.placement.candidates.len(), 15);
    }

    #[test]
    fn partial_file_overrides_named_fields_only() {
        let parsed: ConfigFile =
            json5::from_str("{ domain: { pad: 0.2 }, theme: 'midnight' }").unwrap();
        let mut config = Config::default();
        if let Some(file) = parsed.domain {
            merge_field!(config.domain, file, pad, screen_side);
        }
        assert_eq!(config.domain.pad, 0.2);
        assert_eq!(config.domain.screen_side, 500.0);
        assert_eq!(parsed.theme.as_deref(), Some("midnight"));
    }
}
