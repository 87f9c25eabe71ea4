use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::NodeType;

// ── Metrics ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetrics {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Only types with at least one node appear here.
    pub node_type_counts: BTreeMap<NodeType, usize>,
}

// ── Export payload ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub color: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub source: String,
    pub target: String,
}

/// Everything a renderer gets to see of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
    pub metrics: GraphMetrics,
}
