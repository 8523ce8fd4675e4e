#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod normalize;
pub mod render;
pub mod theme;

pub use config::{Config, PlacementConfig, load_config};
pub use ir::{DataPoint, Dataset, Selection};
pub use layout::{
    Domain, LabelOffset, ScatterLayout, compute_scatter_layout, compute_square_domain,
    place_labels, to_screen,
};
pub use render::render_svg;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
