//! Hand-off model for presentation layers.
//!
//! The core only produces [`RenderModel`] values. Layout and drawing belong to
//! a [`GraphRenderer`] implemented outside this workspace.

use serde::{Deserialize, Serialize};
use srg_core::{SimpleGraph, SrgError};

use crate::builder::GraphicalStructure;

/// Vertex outline drawn by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    /// Round vertex marker.
    Ellipse,
    /// Box-shaped vertex marker.
    Rectangle,
}

/// Visual hints for a vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Marker outline.
    pub shape: NodeShape,
    /// Fill colour name.
    pub fill_color: String,
    /// Stroke colour name.
    pub stroke_color: String,
    /// Opacity percentage in `0..=100`.
    pub opacity: u8,
    /// Marker width in renderer units.
    pub width: f32,
    /// Marker height in renderer units.
    pub height: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            shape: NodeShape::Ellipse,
            fill_color: "red".to_string(),
            stroke_color: "red".to_string(),
            opacity: 100,
            width: 18.0,
            height: 18.0,
        }
    }
}

/// Visual hints for an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Stroke colour name.
    pub stroke_color: String,
    /// Whether an arrow head is drawn at the target end.
    pub end_arrow: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke_color: "black".to_string(),
            end_arrow: false,
        }
    }
}

/// A vertex ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Node label, also used as the vertex caption.
    pub label: String,
    /// Visual hints.
    pub style: NodeStyle,
}

/// An edge ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEdge {
    /// Label of one endpoint.
    pub source: String,
    /// Label of the other endpoint.
    pub target: String,
    /// Caption drawn along the edge; empty by default.
    pub caption: String,
    /// Visual hints.
    pub style: EdgeStyle,
}

/// Complete drawing input derived from a graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Vertices in label order.
    pub nodes: Vec<RenderNode>,
    /// Edges in canonical order.
    pub edges: Vec<RenderEdge>,
}

/// Presentation layer contract. Implementations live with the UI.
pub trait GraphRenderer {
    /// Whatever the renderer produces (a widget, an image, a scene handle).
    type Output;

    /// Draws `model`.
    fn render(&mut self, model: &RenderModel) -> Result<Self::Output, SrgError>;
}

/// Converts `graph` into a [`RenderModel`] using default styles.
pub fn render_model(graph: &dyn SimpleGraph) -> RenderModel {
    render_model_with(graph, &NodeStyle::default(), &EdgeStyle::default())
}

/// Converts `graph` into a [`RenderModel`] using the given styles for every
/// vertex and edge.
pub fn render_model_with(
    graph: &dyn SimpleGraph,
    node_style: &NodeStyle,
    edge_style: &EdgeStyle,
) -> RenderModel {
    let nodes = graph
        .nodes()
        .map(|label| RenderNode {
            label: label.to_string(),
            style: node_style.clone(),
        })
        .collect();
    let edges = graph
        .edges()
        .map(|edge| {
            let (source, target) = edge.endpoints();
            RenderEdge {
                source: source.to_string(),
                target: target.to_string(),
                caption: String::new(),
                style: edge_style.clone(),
            }
        })
        .collect();
    RenderModel { nodes, edges }
}

impl From<&RenderModel> for GraphicalStructure {
    fn from(model: &RenderModel) -> Self {
        GraphicalStructure {
            labels: model.nodes.iter().map(|node| node.label.clone()).collect(),
            edges: model
                .edges
                .iter()
                .map(|edge| (edge.source.clone(), edge.target.clone()))
                .collect(),
        }
    }
}
