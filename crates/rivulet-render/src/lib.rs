#![forbid(unsafe_code)]

//! Layer composition and scene/SVG rendering for headless Sankey charts.
//!
//! Takes a positioned graph plus selection state from `rivulet-core` and
//! produces an ordered renderable scene (and optionally an SVG string). The
//! geometric layout that assigns coordinates to nodes and links is an
//! external collaborator; this crate only consumes its output.

mod color;
mod labels;
mod legends;
mod links;
mod nodes;

pub mod layers;
pub mod options;
pub mod scene;
pub mod svg;

pub use layers::{CustomLayerFn, LayerContext, LayerSpec, compose};
pub use options::{
    BlendMode, ClickFn, LabelOrientation, LabelPosition, Layout, LegendAnchor, LegendConfig,
    LegendDirection, LinkTooltipFn, Margin, NodeColorFn, NodeTooltipFn, SankeyOptions,
    ValueFormatFn,
};
pub use scene::{Group, HitTarget, LinkGradient, Rect, Renderable, Ribbon, Text, TextAnchor};
pub use svg::render_scene_svg;
