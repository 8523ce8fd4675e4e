use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub frame_color: String,
    pub grid_color: String,
    pub focus_color: String,
    pub focus_stroke: String,
    pub highlight_color: String,
    pub highlight_stroke: String,
    pub base_color: String,
    pub base_stroke: String,
}

impl Theme {
    /// The dashboard's light palette: orange focus dot, indigo highlights,
    /// gray for everyone else.
    pub fn dashboard() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            background: "#FFFFFF".to_string(),
            frame_color: "#CBD5E1".to_string(),
            grid_color: "#E2E8F0".to_string(),
            focus_color: "#FF6B35".to_string(),
            focus_stroke: "#000000".to_string(),
            highlight_color: "#4F46E5".to_string(),
            highlight_stroke: "#1E1B4B".to_string(),
            base_color: "#9CA3AF".to_string(),
            base_stroke: "#6B7280".to_string(),
        }
    }

    pub fn midnight() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            background: "#0F172A".to_string(),
            frame_color: "#334155".to_string(),
            grid_color: "#1E293B".to_string(),
            focus_color: "#FB923C".to_string(),
            focus_stroke: "#FFFFFF".to_string(),
            highlight_color: "#818CF8".to_string(),
            highlight_stroke: "#C7D2FE".to_string(),
            base_color: "#475569".to_string(),
            base_stroke: "#64748B".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dashboard()
    }
}
