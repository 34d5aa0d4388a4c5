#![forbid(unsafe_code)]

//! `rivulet` is a headless, interactive Sankey chart core.
//!
//! It takes a positioned flow graph (nodes and links that already carry
//! layout geometry), tracks the mutually-exclusive hover selection, derives
//! highlight state from it, and composes an ordered renderable scene the
//! host environment can diff, draw, or serialize to SVG.
//!
//! The geometric layout step that assigns coordinates and ribbon widths is an
//! external collaborator, as are animation and theming.

pub use rivulet_core::{
    Error, Highlight, InteractionState, PositionedGraph, Result, SankeyLink, SankeyNode,
    Selection, Tooltip,
};
pub use rivulet_render::{
    BlendMode, ClickFn, CustomLayerFn, Group, HitTarget, LabelOrientation, LabelPosition,
    LayerContext, LayerSpec, Layout, LegendAnchor, LegendConfig, LegendDirection, LinkGradient,
    LinkTooltipFn, Margin, NodeColorFn, NodeTooltipFn, Rect, Renderable, Ribbon, SankeyOptions,
    Text, TextAnchor, ValueFormatFn, compose, render_scene_svg,
};

use serde_json::Value;

/// Convenience wrapper bundling a positioned graph, chart options and the
/// interaction state behind one object.
///
/// Hover events reported by the host's hit testing flow through
/// [`hover_node`](SankeyChart::hover_node) / [`hover_link`](SankeyChart::hover_link) /
/// [`pointer_leave`](SankeyChart::pointer_leave); each render pass is then a
/// pure recomputation via [`compose`](SankeyChart::compose). All work is
/// CPU-bound and synchronous.
#[derive(Clone)]
pub struct SankeyChart {
    graph: PositionedGraph,
    options: SankeyOptions,
    state: InteractionState,
}

impl SankeyChart {
    pub fn new(graph: PositionedGraph, options: SankeyOptions) -> Self {
        let state = InteractionState::new(options.is_interactive);
        Self {
            graph,
            options,
            state,
        }
    }

    /// Builds a chart from a layout-step JSON payload.
    pub fn from_json(value: &Value, options: SankeyOptions) -> Result<Self> {
        Ok(Self::new(PositionedGraph::from_json(value)?, options))
    }

    pub fn graph(&self) -> &PositionedGraph {
        &self.graph
    }

    /// Replaces the graph for the next render pass, e.g. after the layout
    /// step reran. A selection referencing ids no longer present simply stops
    /// matching; it is cleared on the next pointer event.
    pub fn set_graph(&mut self, graph: PositionedGraph) {
        self.graph = graph;
    }

    pub fn options(&self) -> &SankeyOptions {
        &self.options
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.state
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.state.tooltip()
    }

    /// Pointer entered a node. Sets the current node (clearing any current
    /// link) and shows its tooltip at the pointer anchor. Unknown ids behave
    /// like a pointer leave.
    pub fn hover_node(&mut self, id: &str, x: f64, y: f64) {
        match self.graph.node(id) {
            Some(node) => {
                let content = match &self.options.node_tooltip {
                    Some(f) => f(node),
                    None => format!("{}: {}", node.label(), self.format_value(node.value)),
                };
                self.state.set_current_node(Some(node));
                self.state.show_tooltip(content, x, y);
            }
            None => self.pointer_leave(),
        }
    }

    /// Pointer entered a link. Mirror of [`hover_node`](Self::hover_node).
    pub fn hover_link(&mut self, source: &str, target: &str, x: f64, y: f64) {
        match self.graph.link(source, target) {
            Some(link) => {
                let content = match &self.options.link_tooltip {
                    Some(f) => f(link),
                    None => format!(
                        "{} > {}: {}",
                        link.source,
                        link.target,
                        self.format_value(link.value)
                    ),
                };
                self.state.set_current_link(Some(link));
                self.state.show_tooltip(content, x, y);
            }
            None => self.pointer_leave(),
        }
    }

    /// Pointer left the chart (or the hovered element): clears the selection
    /// and the tooltip slot.
    pub fn pointer_leave(&mut self) {
        self.state.set_current_node(None);
        self.state.hide_tooltip();
    }

    /// Forwards a click on a hit element to the configured handler, if any.
    pub fn click(&self, target: &HitTarget) {
        if !self.state.is_interactive() {
            return;
        }
        if let Some(handler) = &self.options.on_click {
            handler(target);
        }
    }

    /// Composes the configured layers into an ordered renderable scene.
    pub fn compose(&self) -> Vec<Renderable> {
        compose(&self.graph, &self.options, &self.state)
    }

    /// Composes and serializes the scene to a standalone SVG document.
    pub fn render_svg(&self, diagram_id: Option<&str>) -> String {
        let scene = self.compose();
        render_scene_svg(&scene, &self.options, diagram_id)
    }

    fn format_value(&self, value: f64) -> String {
        match &self.options.tooltip_format {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }
}
