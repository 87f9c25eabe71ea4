pub mod export;
pub mod metrics;
pub mod store;

pub use export::{export_payload, validate_style_table, NodeStyle, NODE_STYLES};
pub use metrics::compute_metrics;
pub use store::{GraphAssembler, GraphNode};
