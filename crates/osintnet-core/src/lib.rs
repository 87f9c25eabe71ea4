pub mod api_types;
pub mod bundle;
pub mod collector;
pub mod config;
pub mod entity;
pub mod error;

pub use api_types::{ExportEdge, ExportNode, GraphMetrics, GraphPayload};
pub use bundle::{RawBundles, SourceKind};
pub use collector::{Collector, CollectorReport};
pub use config::{AnalyzerConfig, ExcerptLimits};
pub use entity::{Discovery, NodeAttrs, NodeType};
pub use error::{OsintError, Result};
