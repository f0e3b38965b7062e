use srg_core::{SimpleGraph, SrgError};
use srg_graph::render::{render_model_with, EdgeStyle, NodeShape, NodeStyle};
use srg_graph::{
    build_from_graphical_structure, canonical_hash, cycle_graph, render_model, GraphRenderer,
    GraphicalStructure, RenderModel,
};

struct CountingRenderer;

impl GraphRenderer for CountingRenderer {
    type Output = (usize, usize);

    fn render(&mut self, model: &RenderModel) -> Result<Self::Output, SrgError> {
        Ok((model.nodes.len(), model.edges.len()))
    }
}

#[test]
fn default_styles_match_editor_look() {
    let graph = cycle_graph(4).unwrap();
    let model = render_model(&graph);
    assert_eq!(model.nodes.len(), 4);
    assert_eq!(model.edges.len(), 4);
    let node = &model.nodes[0];
    assert_eq!(node.style.shape, NodeShape::Ellipse);
    assert_eq!(node.style.fill_color, "red");
    assert_eq!((node.style.width, node.style.height), (18.0, 18.0));
    let edge = &model.edges[0];
    assert_eq!(edge.style.stroke_color, "black");
    assert!(!edge.style.end_arrow);
    assert!(edge.caption.is_empty());

    assert_eq!(CountingRenderer.render(&model).unwrap(), (4, 4));
}

#[test]
fn edited_model_rebuilds_the_same_graph() {
    let graph = cycle_graph(5).unwrap();
    let style = NodeStyle {
        shape: NodeShape::Rectangle,
        ..NodeStyle::default()
    };
    let model = render_model_with(&graph, &style, &EdgeStyle::default());
    let structure = GraphicalStructure::from(&model);
    let rebuilt = build_from_graphical_structure(&structure).unwrap();
    assert_eq!(rebuilt.edge_count(), 5);
    assert_eq!(canonical_hash(&rebuilt), canonical_hash(&graph));
}
