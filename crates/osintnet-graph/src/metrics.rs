use std::collections::BTreeMap;

use osintnet_core::api_types::GraphMetrics;

use crate::store::GraphAssembler;

/// Node/edge totals and per-type node counts. Types with no nodes are absent.
pub fn compute_metrics(graph: &GraphAssembler) -> GraphMetrics {
    let mut node_type_counts = BTreeMap::new();
    for node in graph.nodes() {
        *node_type_counts.entry(node.attrs.node_type).or_insert(0) += 1;
    }

    GraphMetrics {
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        node_type_counts,
    }
}
