//! Highlight resolution: turns the current selection into per-node and
//! per-link activity predicates.
//!
//! Note the deliberate asymmetry under node selection: hovering a node marks
//! every endpoint of its incident links as node-active (so the far end of a
//! touching link lights up), but only the directly-incident links themselves
//! are link-active. A link between two neighbors that bypasses the hovered
//! node stays inactive.

use crate::graph::{SankeyLink, SankeyNode};
use crate::selection::Selection;
use rustc_hash::FxHashSet;

/// Resolved highlight membership for one render pass.
#[derive(Debug, Clone)]
pub struct Highlight {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    Rest,
    Link {
        source: String,
        target: String,
    },
    Node {
        id: String,
        active_ids: FxHashSet<String>,
    },
}

impl Highlight {
    /// Recomputed on every selection or graph change; scans `links` once.
    pub fn resolve(selection: &Selection, links: &[SankeyLink]) -> Self {
        let mode = match selection {
            Selection::None => Mode::Rest,
            Selection::Link { source, target } => Mode::Link {
                source: source.clone(),
                target: target.clone(),
            },
            Selection::Node(id) => {
                let mut active_ids = FxHashSet::default();
                active_ids.insert(id.clone());
                for link in links.iter().filter(|l| l.touches(id)) {
                    active_ids.insert(link.source.clone());
                    active_ids.insert(link.target.clone());
                }
                Mode::Node {
                    id: id.clone(),
                    active_ids,
                }
            }
        };
        Self { mode }
    }

    /// Whether any selection exists at all. Renderers use this to distinguish
    /// the rest state (everything at default opacity) from "selection
    /// elsewhere" (inactive elements dimmed to the hover-others tier).
    pub fn has_selection(&self) -> bool {
        !matches!(self.mode, Mode::Rest)
    }

    pub fn is_node_active(&self, node: &SankeyNode) -> bool {
        self.is_node_id_active(&node.id)
    }

    pub fn is_node_id_active(&self, id: &str) -> bool {
        match &self.mode {
            Mode::Rest => false,
            Mode::Link { source, target } => id == source || id == target,
            Mode::Node { active_ids, .. } => active_ids.contains(id),
        }
    }

    pub fn is_link_active(&self, link: &SankeyLink) -> bool {
        match &self.mode {
            Mode::Rest => false,
            // Same link only: sharing one endpoint is not enough.
            Mode::Link { source, target } => link.source == *source && link.target == *target,
            Mode::Node { id, .. } => link.touches(id),
        }
    }
}
