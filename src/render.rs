use crate::config::RenderConfig;
use crate::layout::{Emphasis, ScatterLayout};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Draw a computed scatter layout as a standalone SVG document: plot frame,
/// light grid, dots, dashed leader lines, and centered label text. Axes,
/// ticks, and legends belong to the hosting dashboard, not here.
pub fn render_svg(layout: &ScatterLayout, theme: &Theme, config: &RenderConfig) -> String {
    let margin = config.margin;
    let size = layout.side + margin * 2.0;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    svg.push_str(&format!("<g transform=\"translate({margin},{margin})\">"));

    // Plot frame and a sparse quarter grid.
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{side:.2}\" height=\"{side:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
        theme.frame_color,
        side = layout.side,
    ));
    for i in 1..4 {
        let at = layout.side * i as f32 / 4.0;
        svg.push_str(&format!(
            "<line x1=\"{at:.2}\" y1=\"0\" x2=\"{at:.2}\" y2=\"{side:.2}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid_color,
            side = layout.side,
        ));
        svg.push_str(&format!(
            "<line x1=\"0\" y1=\"{at:.2}\" x2=\"{side:.2}\" y2=\"{at:.2}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid_color,
            side = layout.side,
        ));
    }

    for dot in &layout.dots {
        let (fill, stroke, stroke_width, opacity) = match dot.emphasis {
            Emphasis::Focus => (theme.focus_color.as_str(), theme.focus_stroke.as_str(), 3.0, 1.0),
            Emphasis::Highlight => (
                theme.highlight_color.as_str(),
                theme.highlight_stroke.as_str(),
                2.0,
                0.9,
            ),
            Emphasis::Base => (theme.base_color.as_str(), theme.base_stroke.as_str(), 1.0, 0.6),
        };
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.1}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" opacity=\"{opacity}\"/>",
            dot.x, dot.y, dot.radius,
        ));
    }

    // Leader lines under their label text.
    for label in &layout.labels {
        let color = match label.emphasis {
            Emphasis::Focus => theme.focus_color.as_str(),
            _ => theme.highlight_color.as_str(),
        };
        let stroke_width = if label.emphasis == Emphasis::Focus { 2.0 } else { 1.0 };
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" stroke-dasharray=\"{}\"/>",
            label.dot_x, label.dot_y, label.anchor_x, label.anchor_y, config.leader_dasharray,
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"600\" fill=\"{color}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
            label.anchor_x,
            label.anchor_y,
            theme.font_family,
            theme.font_size,
            escape_xml(&label.text),
        ));
    }

    svg.push_str("</g>");
    svg.push_str("</svg>");
    svg
}

pub fn write_output_svg(svg: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, svg)?,
        None => println!("{svg}"),
    }
    Ok(())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ir::{DataPoint, Selection};
    use crate::layout::compute_scatter_layout;

    #[test]
    fn svg_has_one_circle_per_dot_and_leader_per_label() {
        let points: Vec<DataPoint> = (1..=4)
            .map(|i| DataPoint {
                id: i,
                name: format!("Player & Co {i}"),
                x: i as f32 * 3.0,
                y: i as f32,
                minutes: None,
            })
            .collect();
        let mut selection = Selection::with_focus(1);
        selection.toggle(4);
        let config = Config::default();
        let layout = compute_scatter_layout(&points, &selection, &config);
        let svg = render_svg(&layout, &config.theme, &config.render);

        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("stroke-dasharray=\"2,2\"").count(), 2);
        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains("Player &amp; Co 1"));
    }
}
