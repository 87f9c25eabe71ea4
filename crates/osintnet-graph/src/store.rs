use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use osintnet_core::entity::{Discovery, NodeAttrs, NodeType};

/// A node as held by the assembler: its label (the key) and first-seen attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub label: String,
    pub attrs: NodeAttrs,
}

/// Owns the relationship graph of one analysis run.
///
/// Undirected, no multi-edges, no self-loops. Labels are unique keys and the
/// first insertion of a label fixes its attributes. Nodes and edges iterate in
/// insertion order.
#[derive(Debug, Default)]
pub struct GraphAssembler {
    graph: UnGraph<GraphNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl GraphAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every node and edge.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.index.clear();
    }

    /// Insert `label` unless it exists. Returns whether a node was created;
    /// an existing node keeps its attributes untouched.
    pub fn add_node(&mut self, label: &str, attrs: NodeAttrs) -> bool {
        if let Some(&existing) = self.index.get(label) {
            let kept = &self.graph[existing].attrs;
            if kept.node_type != attrs.node_type {
                tracing::debug!(
                    label,
                    kept = %kept.node_type,
                    ignored = %attrs.node_type,
                    "Node already present with another type"
                );
            }
            return false;
        }

        let idx = self.graph.add_node(GraphNode {
            label: label.to_string(),
            attrs,
        });
        self.index.insert(label.to_string(), idx);
        true
    }

    /// Connect `a` and `b`. Missing endpoints are created as groups. Returns
    /// whether an edge was created; self-loops and repeats are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }

        let ia = self.endpoint(a);
        let ib = self.endpoint(b);
        if self.graph.find_edge(ia, ib).is_some() {
            return false;
        }
        self.graph.add_edge(ia, ib, ());
        true
    }

    /// Make sure the subject is present as the `target` node.
    pub fn ensure_subject(&mut self, label: &str) {
        if !self.add_node(label, NodeAttrs::new(NodeType::Target)) {
            let kept = self.graph[self.index[label]].attrs.node_type;
            if kept != NodeType::Target {
                tracing::warn!(
                    label,
                    kept = %kept,
                    "Subject label already taken by another node type"
                );
            }
        }
    }

    /// Insert a discovered node, then its edge to the anchor.
    pub fn apply(&mut self, discovery: &Discovery) {
        self.add_node(&discovery.label, discovery.attrs.clone());
        self.add_edge(&discovery.anchor, &discovery.label);
    }

    pub fn node(&self, label: &str) -> Option<&GraphNode> {
        self.index.get(label).map(|&idx| &self.graph[idx])
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_weights()
    }

    /// Edges in insertion order, as label pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].label.as_str(),
                self.graph[edge.target()].label.as_str(),
            )
        })
    }

    fn endpoint(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        tracing::warn!(label, "Edge endpoint missing, inserting it as a group");
        self.add_node(label, NodeAttrs::new(NodeType::Group));
        self.index[label]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(node_type: NodeType) -> NodeAttrs {
        NodeAttrs::new(node_type)
    }

    #[test]
    fn first_insert_wins() {
        let mut graph = GraphAssembler::new();
        assert!(graph.add_node("@alice", attrs(NodeType::Account).with_platform("Twitter")));
        assert!(!graph.add_node("@alice", attrs(NodeType::Group).with_platform("Facebook")));

        let node = graph.node("@alice").unwrap();
        assert_eq!(node.attrs.node_type, NodeType::Account);
        assert_eq!(node.attrs.platform.as_deref(), Some("Twitter"));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn edges_are_undirected_and_unique() {
        let mut graph = GraphAssembler::new();
        graph.add_node("a", attrs(NodeType::Target));
        graph.add_node("b", attrs(NodeType::Person));

        assert!(graph.add_edge("a", "b"));
        assert!(!graph.add_edge("a", "b"));
        assert!(!graph.add_edge("b", "a"));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge("b", "a"));
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut graph = GraphAssembler::new();
        graph.add_node("x", attrs(NodeType::Target));
        assert!(!graph.add_edge("x", "x"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn self_loop_on_unknown_label_creates_nothing() {
        let mut graph = GraphAssembler::new();
        assert!(!graph.add_edge("ghost", "ghost"));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn missing_endpoints_become_groups() {
        let mut graph = GraphAssembler::new();
        graph.add_node("a", attrs(NodeType::Target));
        assert!(graph.add_edge("a", "orphan"));

        let orphan = graph.node("orphan").unwrap();
        assert_eq!(orphan.attrs.node_type, NodeType::Group);
        assert_eq!(orphan.attrs.size, 15);
    }

    #[test]
    fn every_edge_endpoint_is_a_node() {
        let mut graph = GraphAssembler::new();
        graph.add_edge("p", "q");
        graph.add_edge("q", "r");
        for (a, b) in graph.edges() {
            assert!(graph.contains_node(a));
            assert!(graph.contains_node(b));
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut graph = GraphAssembler::new();
        graph.ensure_subject("Jane Doe");
        graph.add_edge("Jane Doe", "Twitter");
        graph.reset();

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node("Jane Doe").is_none());

        // indices are reused after a reset without stale lookups
        graph.ensure_subject("John Roe");
        assert_eq!(graph.node("John Roe").unwrap().attrs.node_type, NodeType::Target);
    }

    #[test]
    fn ensure_subject_is_idempotent() {
        let mut graph = GraphAssembler::new();
        graph.ensure_subject("Jane Doe");
        graph.ensure_subject("Jane Doe");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("Jane Doe").unwrap().attrs.size, 30);
    }

    #[test]
    fn apply_inserts_node_then_edge() {
        let mut graph = GraphAssembler::new();
        graph.ensure_subject("S");
        graph.apply(&Discovery::new("Twitter", attrs(NodeType::Platform), "S"));

        assert_eq!(graph.node("Twitter").unwrap().attrs.node_type, NodeType::Platform);
        assert!(graph.contains_edge("S", "Twitter"));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut graph = GraphAssembler::new();
        graph.ensure_subject("S");
        graph.apply(&Discovery::new("b", attrs(NodeType::Person), "S"));
        graph.apply(&Discovery::new("a", attrs(NodeType::Person), "S"));

        let labels: Vec<&str> = graph.nodes().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["S", "b", "a"]);
        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("S", "b"), ("S", "a")]);
    }
}
