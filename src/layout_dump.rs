use crate::layout::{Emphasis, ScatterLayout};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Flat, serialization-friendly snapshot of a computed layout, for
/// debugging placement decisions without reading SVG.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub side: f32,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub dots: Vec<DotDump>,
    pub labels: Vec<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct DotDump {
    pub id: u64,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub emphasis: String,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub id: u64,
    pub text: String,
    pub dx: f32,
    pub dy: f32,
    pub anchor: [f32; 2],
}

fn emphasis_name(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Focus => "focus",
        Emphasis::Highlight => "highlight",
        Emphasis::Base => "base",
    }
}

impl LayoutDump {
    pub fn from_layout(layout: &ScatterLayout) -> Self {
        let dots = layout
            .dots
            .iter()
            .map(|dot| DotDump {
                id: dot.id,
                name: dot.name.clone(),
                x: dot.x,
                y: dot.y,
                radius: dot.radius,
                emphasis: emphasis_name(dot.emphasis).to_string(),
            })
            .collect();
        let labels = layout
            .labels
            .iter()
            .map(|label| LabelDump {
                id: label.id,
                text: label.text.clone(),
                dx: label.offset.dx,
                dy: label.offset.dy,
                anchor: [label.anchor_x, label.anchor_y],
            })
            .collect();
        Self {
            side: layout.side,
            x_min: layout.domain.x_min,
            x_max: layout.domain.x_max,
            y_min: layout.domain.y_min,
            y_max: layout.domain.y_max,
            dots,
            labels,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &ScatterLayout) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &dump)?;
    Ok(())
}
