//! Renderable scene tree produced by layer composition.
//!
//! The tree is plain data: the host either diffs it between render passes
//! (`PartialEq` is structural) or hands it to [`crate::svg`] for string
//! output. Interactive wiring is carried as [`HitTarget`] values on the
//! shapes; a non-interactive compose attaches none.

use serde::Serialize;

/// What a pointer event over a shape refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HitTarget {
    Node(String),
    Link { source: String, target: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Source-to-target color ramp for a link ribbon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkGradient {
    pub from: String,
    pub to: String,
    /// Ramp runs top-to-bottom instead of left-to-right.
    pub vertical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub class: String,
    pub children: Vec<Renderable>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub opacity: f64,
    pub hit: Option<HitTarget>,
}

/// A stroked bezier ribbon (SVG path data in `d`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ribbon {
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub blend_mode: crate::options::BlendMode,
    pub gradient: Option<LinkGradient>,
    pub hit: Option<HitTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    /// Baseline shift in em (SVG `dy`).
    pub dy_em: f64,
    pub anchor: TextAnchor,
    pub content: String,
    pub color: String,
    pub font_size: f64,
    /// Rotation around `(x, y)` in degrees.
    pub rotate: Option<f64>,
}

/// One renderable slot of the composed output.
///
/// `Empty` stands in for disabled or unrecognized layers so that slot
/// positions stay aligned with the configured layer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Renderable {
    Empty,
    Group(Group),
    Rect(Rect),
    Ribbon(Ribbon),
    Text(Text),
}

impl Renderable {
    pub fn is_empty(&self) -> bool {
        matches!(self, Renderable::Empty)
    }

    pub fn group(class: impl Into<String>, children: Vec<Renderable>) -> Self {
        Renderable::Group(Group {
            class: class.into(),
            children,
        })
    }

    /// Depth-first check for any hit target in the subtree.
    pub fn has_hit_targets(&self) -> bool {
        match self {
            Renderable::Empty | Renderable::Text(_) => false,
            Renderable::Group(g) => g.children.iter().any(|c| c.has_hit_targets()),
            Renderable::Rect(r) => r.hit.is_some(),
            Renderable::Ribbon(r) => r.hit.is_some(),
        }
    }
}
