//! Current-selection state and tooltip scoping.

use crate::graph::{SankeyLink, SankeyNode};

/// The node or link currently under interactive focus.
///
/// Stored as a single tagged value so that mutual exclusivity between a
/// hovered node and a hovered link is enforced structurally rather than by
/// setter discipline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(String),
    Link {
        source: String,
        target: String,
    },
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// The hovered node id, if a node is selected.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Selection::Node(id) => Some(id),
            _ => None,
        }
    }

    /// The hovered link endpoints, if a link is selected.
    pub fn link_ids(&self) -> Option<(&str, &str)> {
        match self {
            Selection::Link { source, target } => Some((source, target)),
            _ => None,
        }
    }
}

/// A tooltip display slot: content plus the pointer anchor it was shown at.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub content: String,
    pub x: f64,
    pub y: f64,
}

/// Single source of truth for the current selection and the tooltip slot.
///
/// When interactivity is disabled every mutator is a no-op, so primitive
/// renderers built from this state carry no event wiring at all.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    selection: Selection,
    tooltip: Option<Tooltip>,
    interactive: bool,
}

impl InteractionState {
    pub fn new(interactive: bool) -> Self {
        Self {
            selection: Selection::None,
            tooltip: None,
            interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Sets the current node, clearing any current link.
    pub fn set_current_node(&mut self, node: Option<&SankeyNode>) {
        if !self.interactive {
            return;
        }
        self.selection = match node {
            Some(n) => Selection::Node(n.id.clone()),
            None => Selection::None,
        };
        tracing::trace!(selection = ?self.selection, "set current node");
    }

    /// Sets the current link, clearing any current node.
    pub fn set_current_link(&mut self, link: Option<&SankeyLink>) {
        if !self.interactive {
            return;
        }
        self.selection = match link {
            Some(l) => Selection::Link {
                source: l.source.clone(),
                target: l.target.clone(),
            },
            None => Selection::None,
        };
        tracing::trace!(selection = ?self.selection, "set current link");
    }

    /// Shows a tooltip at the given pointer anchor. Last writer wins:
    /// overlapping shows from different primitives simply replace each other.
    pub fn show_tooltip(&mut self, content: impl Into<String>, x: f64, y: f64) {
        if !self.interactive {
            return;
        }
        self.tooltip = Some(Tooltip {
            content: content.into(),
            x,
            y,
        });
    }

    /// Clears the tooltip slot regardless of which primitive showed it.
    pub fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }
}
