//! Layer registry and composer.
//!
//! The chart output is an ordered sequence of renderables, one per configured
//! layer slot. Built-in slots are rebuilt from current geometry and highlight
//! state on every pass; custom slots are functions over the shared layer
//! context. Order is preserved exactly as configured.

use crate::color::NodePalette;
use crate::options::{Margin, SankeyOptions};
use crate::scene::Renderable;
use crate::{labels, legends, links, nodes};
use rivulet_core::{Highlight, InteractionState, PositionedGraph, SankeyLink, SankeyNode};
use std::fmt;
use std::sync::Arc;

/// Shared geometry/config bundle handed to custom layers.
pub struct LayerContext<'a> {
    pub nodes: &'a [SankeyNode],
    pub links: &'a [SankeyLink],
    pub margin: Margin,
    pub width: f64,
    pub height: f64,
    pub outer_width: f64,
    pub outer_height: f64,
}

/// Renders a custom layer slot from the shared context.
pub type CustomLayerFn = Arc<dyn Fn(&LayerContext<'_>) -> Renderable + Send + Sync>;

/// One slot in the layer order: a built-in layer, a layer referenced by name
/// (unknown names resolve to an empty slot), or a custom render function.
#[derive(Clone)]
pub enum LayerSpec {
    Links,
    Nodes,
    Labels,
    Legends,
    Named(String),
    Custom(CustomLayerFn),
}

impl LayerSpec {
    pub fn custom(f: impl Fn(&LayerContext<'_>) -> Renderable + Send + Sync + 'static) -> Self {
        LayerSpec::Custom(Arc::new(f))
    }

    /// Maps a layer name to its built-in slot; unrecognized names stay as
    /// [`LayerSpec::Named`] and compose to an empty renderable.
    pub fn from_name(name: &str) -> Self {
        match name {
            "links" => LayerSpec::Links,
            "nodes" => LayerSpec::Nodes,
            "labels" => LayerSpec::Labels,
            "legends" => LayerSpec::Legends,
            other => LayerSpec::Named(other.to_string()),
        }
    }
}

impl fmt::Debug for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSpec::Links => f.write_str("Links"),
            LayerSpec::Nodes => f.write_str("Nodes"),
            LayerSpec::Labels => f.write_str("Labels"),
            LayerSpec::Legends => f.write_str("Legends"),
            LayerSpec::Named(name) => f.debug_tuple("Named").field(name).finish(),
            LayerSpec::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Composes the configured layers into an ordered renderable sequence.
///
/// Pure with respect to its inputs: identical graph, options and selection
/// state produce a structurally identical scene, so the host can diff
/// consecutive passes.
pub fn compose(
    graph: &PositionedGraph,
    options: &SankeyOptions,
    state: &InteractionState,
) -> Vec<Renderable> {
    let highlight = Highlight::resolve(state.selection(), &graph.links);
    let palette = NodePalette::assign(&graph.nodes);
    let interactive = state.is_interactive();

    tracing::debug!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        layers = options.layers.len(),
        has_selection = highlight.has_selection(),
        "composing sankey layers"
    );

    let ctx = LayerContext {
        nodes: &graph.nodes,
        links: &graph.links,
        margin: options.margin,
        width: options.width,
        height: options.height,
        outer_width: options.outer_width(),
        outer_height: options.outer_height(),
    };

    options
        .layers
        .iter()
        .map(|spec| render_slot(spec, graph, options, &highlight, &palette, interactive, &ctx))
        .collect()
}

fn render_slot(
    spec: &LayerSpec,
    graph: &PositionedGraph,
    options: &SankeyOptions,
    highlight: &Highlight,
    palette: &NodePalette,
    interactive: bool,
    ctx: &LayerContext<'_>,
) -> Renderable {
    match spec {
        LayerSpec::Links => links::render_links(graph, options, highlight, palette, interactive),
        LayerSpec::Nodes => nodes::render_nodes(graph, options, highlight, palette, interactive),
        LayerSpec::Labels => {
            if options.enable_labels {
                labels::render_labels(graph, options)
            } else {
                Renderable::Empty
            }
        }
        LayerSpec::Legends => legends::render_legends(graph, options, palette),
        LayerSpec::Named(name) => match LayerSpec::from_name(name) {
            // Unknown names resolve to an absent slot rather than failing
            // the render.
            LayerSpec::Named(_) => Renderable::Empty,
            builtin => render_slot(&builtin, graph, options, highlight, palette, interactive, ctx),
        },
        LayerSpec::Custom(f) => f(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{LabelPosition, Layout, LegendConfig};
    use crate::scene::{Text, TextAnchor};
    use serde_json::json;

    fn graph() -> PositionedGraph {
        PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "a", "x0": 0.0, "x1": 10.0, "y0": 0.0, "y1": 40.0 },
                { "id": "b", "x0": 290.0, "x1": 300.0, "y0": 0.0, "y1": 40.0 }
            ],
            "links": [
                { "source": "a", "target": "b", "value": 2.0, "width": 40.0, "y0": 20.0, "y1": 20.0 }
            ]
        }))
        .unwrap()
    }

    fn class_of(r: &Renderable) -> Option<&str> {
        match r {
            Renderable::Group(g) => Some(g.class.as_str()),
            _ => None,
        }
    }

    #[test]
    fn slot_order_follows_configuration_exactly() {
        let mut options = SankeyOptions::default();
        options.layers = vec![
            LayerSpec::Nodes,
            LayerSpec::custom(|ctx| {
                Renderable::group(format!("custom-{}x{}", ctx.outer_width, ctx.outer_height), vec![])
            }),
            LayerSpec::Links,
        ];
        let scene = compose(&graph(), &options, &InteractionState::new(true));
        assert_eq!(scene.len(), 3);
        assert_eq!(class_of(&scene[0]), Some("nodes"));
        assert_eq!(class_of(&scene[1]), Some("custom-600x400"));
        assert_eq!(class_of(&scene[2]), Some("links"));
    }

    #[test]
    fn unknown_layer_names_resolve_to_empty_slots() {
        let mut options = SankeyOptions::default();
        options.layers = vec![
            LayerSpec::from_name("links"),
            LayerSpec::from_name("annotations"),
        ];
        let scene = compose(&graph(), &options, &InteractionState::new(true));
        assert_eq!(class_of(&scene[0]), Some("links"));
        assert!(scene[1].is_empty());
    }

    #[test]
    fn disabling_labels_empties_the_labels_slot_only() {
        let mut options = SankeyOptions::default();
        options.enable_labels = false;
        let scene = compose(&graph(), &options, &InteractionState::new(true));
        assert_eq!(class_of(&scene[0]), Some("links"));
        assert_eq!(class_of(&scene[1]), Some("nodes"));
        assert!(scene[2].is_empty());
        assert_eq!(class_of(&scene[3]), Some("legends"));

        options.enable_labels = true;
        let scene = compose(&graph(), &options, &InteractionState::new(true));
        assert_eq!(class_of(&scene[2]), Some("node-labels"));
    }

    #[test]
    fn identical_inputs_compose_structurally_identical_scenes() {
        let graph = graph();
        let options = SankeyOptions::default();
        let mut state = InteractionState::new(true);
        state.set_current_node(graph.node("a"));

        let first = compose(&graph, &options, &state);
        let second = compose(&graph, &options, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn non_interactive_scenes_carry_no_hit_targets() {
        let scene = compose(
            &graph(),
            &SankeyOptions::default(),
            &InteractionState::new(false),
        );
        assert!(scene.iter().all(|r| !r.has_hit_targets()));

        let scene = compose(
            &graph(),
            &SankeyOptions::default(),
            &InteractionState::new(true),
        );
        assert!(scene.iter().any(|r| r.has_hit_targets()));
    }

    #[test]
    fn hovered_link_dims_other_links_to_the_hover_others_tier() {
        let graph = PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "a", "x0": 0.0, "x1": 10.0, "y0": 0.0, "y1": 40.0 },
                { "id": "b", "x0": 290.0, "x1": 300.0, "y0": 0.0, "y1": 20.0 },
                { "id": "c", "x0": 290.0, "x1": 300.0, "y0": 30.0, "y1": 50.0 }
            ],
            "links": [
                { "source": "a", "target": "b", "value": 1.0, "width": 20.0, "y0": 10.0, "y1": 10.0 },
                { "source": "a", "target": "c", "value": 1.0, "width": 20.0, "y0": 30.0, "y1": 40.0 }
            ]
        }))
        .unwrap();
        let options = SankeyOptions::default();
        let mut state = InteractionState::new(true);
        state.set_current_link(graph.link("a", "b"));

        let scene = compose(&graph, &options, &state);
        let Renderable::Group(links) = &scene[0] else {
            panic!("expected links group");
        };
        let opacities: Vec<f64> = links
            .children
            .iter()
            .map(|r| match r {
                Renderable::Ribbon(ribbon) => ribbon.opacity,
                other => panic!("expected ribbon, got {other:?}"),
            })
            .collect();
        assert_eq!(opacities, vec![options.link_hover_opacity, options.link_hover_others_opacity]);
    }

    fn texts_of(r: &Renderable) -> Vec<&Text> {
        let Renderable::Group(g) = r else {
            panic!("expected group");
        };
        g.children
            .iter()
            .map(|c| match c {
                Renderable::Text(t) => t,
                other => panic!("expected text, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn vertical_layout_runs_ribbons_top_to_bottom() {
        // Top bar feeding a bottom bar; ribbon offsets run along the x axis.
        let graph = PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "a", "x0": 0.0, "x1": 40.0, "y0": 0.0, "y1": 10.0 },
                { "id": "b", "x0": 0.0, "x1": 40.0, "y0": 90.0, "y1": 100.0 }
            ],
            "links": [
                { "source": "a", "target": "b", "value": 1.0, "width": 20.0, "y0": 20.0, "y1": 20.0 }
            ]
        }))
        .unwrap();
        let mut options = SankeyOptions::default();
        options.layout = Layout::Vertical;

        let scene = compose(&graph, &options, &InteractionState::new(true));
        let Renderable::Group(links) = &scene[0] else {
            panic!("expected links group");
        };
        let Renderable::Ribbon(ribbon) = &links.children[0] else {
            panic!("expected ribbon");
        };
        // Curve leaves the source's bottom edge and enters the target's top
        // edge; the first coordinate of each point is the cross-axis offset.
        assert_eq!(ribbon.d, "M20,10C20,50,20,50,20,90");

        options.layout = Layout::Horizontal;
        let scene = compose(&graph, &options, &InteractionState::new(true));
        let Renderable::Group(links) = &scene[0] else {
            panic!("expected links group");
        };
        let Renderable::Ribbon(ribbon) = &links.children[0] else {
            panic!("expected ribbon");
        };
        assert_eq!(ribbon.d, "M40,20C20,20,20,20,0,20");
    }

    #[test]
    fn vertical_layout_centers_labels_below_first_half_nodes() {
        let graph = PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "top", "x0": 0.0, "x1": 40.0, "y0": 0.0, "y1": 10.0 },
                { "id": "bottom", "x0": 0.0, "x1": 40.0, "y0": 390.0, "y1": 400.0 }
            ],
            "links": []
        }))
        .unwrap();
        let mut options = SankeyOptions::default();
        options.layout = Layout::Vertical;

        let scene = compose(&graph, &options, &InteractionState::new(true));
        let labels = texts_of(&scene[2]);
        assert_eq!(labels[0].anchor, TextAnchor::Middle);
        assert_eq!((labels[0].x, labels[0].y), (20.0, 10.0 + options.label_padding));
        assert_eq!(labels[1].anchor, TextAnchor::Middle);
        assert_eq!((labels[1].x, labels[1].y), (20.0, 390.0 - options.label_padding));
    }

    #[test]
    fn label_position_flips_the_anchor_side_at_the_midline() {
        let graph = PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "left", "x0": 0.0, "x1": 10.0, "y0": 0.0, "y1": 40.0 },
                { "id": "right", "x0": 590.0, "x1": 600.0, "y0": 0.0, "y1": 40.0 }
            ],
            "links": []
        }))
        .unwrap();
        let mut options = SankeyOptions::default();
        let padding = options.label_padding;

        // Inside: labels face the link region between the bars.
        options.label_position = LabelPosition::Inside;
        let scene = compose(&graph, &options, &InteractionState::new(true));
        let labels = texts_of(&scene[2]);
        assert_eq!((labels[0].x, labels[0].anchor), (10.0 + padding, TextAnchor::Start));
        assert_eq!((labels[1].x, labels[1].anchor), (590.0 - padding, TextAnchor::End));

        // Outside: labels face away from the chart interior.
        options.label_position = LabelPosition::Outside;
        let scene = compose(&graph, &options, &InteractionState::new(true));
        let labels = texts_of(&scene[2]);
        assert_eq!((labels[0].x, labels[0].anchor), (0.0 - padding, TextAnchor::End));
        assert_eq!((labels[1].x, labels[1].anchor), (600.0 + padding, TextAnchor::Start));
    }

    #[test]
    fn legend_boxes_pack_items_without_a_trailing_gap() {
        let mut options = SankeyOptions::default();
        options.legends = vec![LegendConfig::default()];

        let scene = compose(&graph(), &options, &InteractionState::new(true));
        let Renderable::Group(legends) = &scene[3] else {
            panic!("expected legends group");
        };
        let Renderable::Group(legend) = &legends.children[0] else {
            panic!("expected legend group");
        };

        // Two items, 14px tall with a single 2px gap: the bottom-right box is
        // 30px high, so it starts at 400 - 30 and the second row 16px lower.
        let swatch_ys: Vec<f64> = legend
            .children
            .iter()
            .filter_map(|c| match c {
                Renderable::Rect(rect) => Some(rect.y),
                _ => None,
            })
            .collect();
        assert_eq!(swatch_ys, vec![370.0, 386.0]);
        let Renderable::Rect(first) = &legend.children[0] else {
            panic!("expected rect");
        };
        assert_eq!(first.x, 500.0);
    }
}
