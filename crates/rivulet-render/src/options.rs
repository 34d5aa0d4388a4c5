//! Chart configuration.
//!
//! Every option the chart understands lives here as a named field with a
//! documented default; nothing is destructured out of loose maps at render
//! time.

use crate::layers::LayerSpec;
use crate::scene::HitTarget;
use rivulet_core::{SankeyLink, SankeyNode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Orientation of the flow: `Horizontal` runs left-to-right with node bars
/// spanning vertically, `Vertical` runs top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// CSS blend mode applied to link ribbons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
}

impl BlendMode {
    pub fn css_name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Where a legend box is anchored inside the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendAnchor {
    Top,
    TopRight,
    Right,
    #[default]
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendDirection {
    #[default]
    Column,
    Row,
}

/// One legend box. The chart renders one renderable per entry, all sharing
/// the node-derived legend data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub anchor: LegendAnchor,
    pub direction: LegendDirection,
    /// Offset from the anchored position, in px.
    pub translate_x: f64,
    pub translate_y: f64,
    pub item_width: f64,
    pub item_height: f64,
    pub item_spacing: f64,
    pub symbol_size: f64,
    pub item_text_color: String,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            anchor: LegendAnchor::BottomRight,
            direction: LegendDirection::Column,
            translate_x: 0.0,
            translate_y: 0.0,
            item_width: 100.0,
            item_height: 14.0,
            item_spacing: 2.0,
            symbol_size: 14.0,
            item_text_color: "#777777".to_string(),
        }
    }
}

/// Computes a per-node color string (borders, label text).
pub type NodeColorFn = Arc<dyn Fn(&SankeyNode) -> String + Send + Sync>;
/// Formats a node or link weight for tooltips.
pub type ValueFormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;
/// Produces tooltip content for a hovered node.
pub type NodeTooltipFn = Arc<dyn Fn(&SankeyNode) -> String + Send + Sync>;
/// Produces tooltip content for a hovered link.
pub type LinkTooltipFn = Arc<dyn Fn(&SankeyLink) -> String + Send + Sync>;
/// Click handler invoked with the hit element.
pub type ClickFn = Arc<dyn Fn(&HitTarget) + Send + Sync>;

/// All chart options with their defaults.
///
/// The motion fields (`animate`, `motion_damping`, `motion_stiffness`) are
/// threaded through to the host untouched; this core never interpolates
/// geometry.
#[derive(Clone)]
pub struct SankeyOptions {
    /// Flow orientation. Default: `Horizontal`.
    pub layout: Layout,
    /// Inner chart width/height in px, i.e. the area the layout step used.
    /// Defaults: `600.0` / `400.0`.
    pub width: f64,
    pub height: f64,
    /// Margins around the inner area. Default: all zero.
    pub margin: Margin,

    /// Node fill opacity at rest. Default: `0.75`.
    pub node_opacity: f64,
    /// Node fill opacity when highlight-active. Default: `1.0`.
    pub node_hover_opacity: f64,
    /// Node fill opacity when some other element is hovered. Default: `0.15`.
    pub node_hover_others_opacity: f64,
    /// Node border stroke width in px. Default: `1.0`.
    pub node_border_width: f64,
    /// Node border color; `None` uses the node fill. Default: `None`.
    pub node_border_color: Option<NodeColorFn>,

    /// Link ribbon opacity at rest. Default: `0.25`.
    pub link_opacity: f64,
    /// Link ribbon opacity when highlight-active. Default: `0.6`.
    pub link_hover_opacity: f64,
    /// Link ribbon opacity when some other element is hovered. Default: `0.15`.
    pub link_hover_others_opacity: f64,
    /// Shrinks each ribbon by `2 * link_contract` px (never below 1px).
    /// Default: `0.0`.
    pub link_contract: f64,
    /// Blend mode for ribbons. Default: `Normal`.
    pub link_blend_mode: BlendMode,
    /// Paint ribbons with a source-to-target color gradient instead of the
    /// source color. Default: `false`.
    pub enable_link_gradient: bool,

    /// Render the `labels` layer. Default: `true`.
    pub enable_labels: bool,
    /// Label placement relative to the node bar. Default: `Inside`.
    pub label_position: LabelPosition,
    /// Distance between label and node edge in px. Default: `9.0`.
    pub label_padding: f64,
    /// Label text orientation. Default: `Horizontal`.
    pub label_orientation: LabelOrientation,
    /// Label text color; `None` uses black. Default: `None`.
    pub label_text_color: Option<NodeColorFn>,

    /// Host-side motion toggle. Default: `true`.
    pub animate: bool,
    /// Host-side spring damping. Default: `13.0`.
    pub motion_damping: f64,
    /// Host-side spring stiffness. Default: `90.0`.
    pub motion_stiffness: f64,

    /// Legend boxes to render in the `legends` layer. Default: empty.
    pub legends: Vec<LegendConfig>,

    /// When `false`, selection/tooltip setters become no-ops and the composed
    /// scene carries no hit targets at all. Default: `true`.
    pub is_interactive: bool,
    /// Click handler. Default: `None`.
    pub on_click: Option<ClickFn>,
    /// Weight formatter used by the default tooltips. Default: `None`
    /// (plain decimal formatting).
    pub tooltip_format: Option<ValueFormatFn>,
    /// Custom node tooltip content. Default: `None` (label plus weight).
    pub node_tooltip: Option<NodeTooltipFn>,
    /// Custom link tooltip content. Default: `None`
    /// (`source > target: weight`).
    pub link_tooltip: Option<LinkTooltipFn>,

    /// Ordered layer slots. Default: `[links, nodes, labels, legends]`.
    pub layers: Vec<LayerSpec>,
}

impl Default for SankeyOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Horizontal,
            width: 600.0,
            height: 400.0,
            margin: Margin::default(),

            node_opacity: 0.75,
            node_hover_opacity: 1.0,
            node_hover_others_opacity: 0.15,
            node_border_width: 1.0,
            node_border_color: None,

            link_opacity: 0.25,
            link_hover_opacity: 0.6,
            link_hover_others_opacity: 0.15,
            link_contract: 0.0,
            link_blend_mode: BlendMode::Normal,
            enable_link_gradient: false,

            enable_labels: true,
            label_position: LabelPosition::Inside,
            label_padding: 9.0,
            label_orientation: LabelOrientation::Horizontal,
            label_text_color: None,

            animate: true,
            motion_damping: 13.0,
            motion_stiffness: 90.0,

            legends: Vec::new(),

            is_interactive: true,
            on_click: None,
            tooltip_format: None,
            node_tooltip: None,
            link_tooltip: None,

            layers: vec![
                LayerSpec::Links,
                LayerSpec::Nodes,
                LayerSpec::Labels,
                LayerSpec::Legends,
            ],
        }
    }
}

impl SankeyOptions {
    /// Inner width plus horizontal margins.
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    /// Inner height plus vertical margins.
    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    /// Opacity tier for a node: default at rest, hover when active, dimmed
    /// when some other element holds the selection.
    pub(crate) fn node_opacity_for(&self, has_selection: bool, active: bool) -> f64 {
        if !has_selection {
            self.node_opacity
        } else if active {
            self.node_hover_opacity
        } else {
            self.node_hover_others_opacity
        }
    }

    pub(crate) fn link_opacity_for(&self, has_selection: bool, active: bool) -> f64 {
        if !has_selection {
            self.link_opacity
        } else if active {
            self.link_hover_opacity
        } else {
            self.link_hover_others_opacity
        }
    }
}
