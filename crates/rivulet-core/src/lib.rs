#![forbid(unsafe_code)]

//! Core model and interaction state for headless Sankey charts.
//!
//! This crate owns the parts of the pipeline that require state reasoning:
//! the positioned graph handed over by a layout step, the mutually-exclusive
//! current-selection state, and the highlight resolver that turns a selection
//! into per-node / per-link activity predicates. Geometry assignment and the
//! actual drawing live elsewhere (`rivulet-render`).

pub mod graph;
pub mod highlight;
pub mod selection;

mod error;

pub use error::{Error, Result};
pub use graph::{PositionedGraph, SankeyLink, SankeyNode};
pub use highlight::Highlight;
pub use selection::{InteractionState, Selection, Tooltip};
