use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::bundle::SourceKind;
use crate::error::Result;

/// Outcome of one collector during a collection round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorReport {
    pub name: String,
    pub kind: SourceKind,
    pub ok: bool,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// A site-specific source of raw text about a subject.
///
/// Implementations own their network I/O; the analysis core only ever sees
/// the JSON bundle they return.
#[async_trait]
pub trait Collector: Send + Sync {
    fn name(&self) -> &str;
    fn kind(&self) -> SourceKind;
    async fn collect(&self, subject: &str) -> Result<serde_json::Value>;
}
