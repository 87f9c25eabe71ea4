use osintnet_core::api_types::{ExportEdge, ExportNode, GraphMetrics, GraphPayload};
use osintnet_core::entity::NodeType;
use osintnet_core::error::{OsintError, Result};

use crate::store::GraphAssembler;

/// Display vocabulary for one node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub node_type: NodeType,
    pub color: &'static str,
}

impl NodeStyle {
    pub const fn new(node_type: NodeType, color: &'static str) -> Self {
        Self { node_type, color }
    }
}

pub const NODE_STYLES: &[NodeStyle] = &[
    NodeStyle::new(NodeType::Target, "#FF6B6B"),
    NodeStyle::new(NodeType::Person, "#FFA07A"),
    NodeStyle::new(NodeType::Platform, "#4ECDC4"),
    NodeStyle::new(NodeType::News, "#2ecc71"),
    NodeStyle::new(NodeType::Account, "#95a5a6"),
    NodeStyle::new(NodeType::Group, "#95a5a6"),
];

/// Check that [`NODE_STYLES`] covers every node type exactly once.
pub fn validate_style_table() -> Result<()> {
    validate_styles(NODE_STYLES)
}

/// Build the renderer payload. Fails if a node's type has no style entry.
pub fn export_payload(graph: &GraphAssembler, metrics: GraphMetrics) -> Result<GraphPayload> {
    export_with_styles(graph, metrics, NODE_STYLES)
}

fn validate_styles(styles: &[NodeStyle]) -> Result<()> {
    for node_type in NodeType::ALL {
        let entries = styles.iter().filter(|s| s.node_type == node_type).count();
        if entries != 1 {
            return Err(OsintError::Configuration(format!(
                "style table has {entries} entries for node type `{node_type}`, expected 1"
            )));
        }
    }
    Ok(())
}

fn export_with_styles(
    graph: &GraphAssembler,
    metrics: GraphMetrics,
    styles: &[NodeStyle],
) -> Result<GraphPayload> {
    let nodes = graph
        .nodes()
        .map(|node| {
            let style = styles
                .iter()
                .find(|s| s.node_type == node.attrs.node_type)
                .ok_or_else(|| OsintError::Export {
                    label: node.label.clone(),
                    message: format!("no style entry for node type `{}`", node.attrs.node_type),
                })?;
            Ok(ExportNode {
                id: node.label.clone(),
                label: node.label.clone(),
                node_type: node.attrs.node_type,
                color: style.color.to_string(),
                size: node.attrs.size,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let edges = graph
        .edges()
        .map(|(source, target)| ExportEdge {
            source: source.to_string(),
            target: target.to_string(),
        })
        .collect();

    Ok(GraphPayload {
        nodes,
        edges,
        metrics,
    })
}
