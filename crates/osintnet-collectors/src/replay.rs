use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::debug;

use osintnet_core::bundle::SourceKind;
use osintnet_core::collector::Collector;
use osintnet_core::error::Result;

/// Replays a previously captured bundle instead of going to the network.
///
/// Returns the same value for every subject; useful for offline re-analysis
/// of saved collector output.
pub struct StaticCollector {
    name: String,
    kind: SourceKind,
    bundle: serde_json::Value,
    served: AtomicU64,
}

impl StaticCollector {
    pub fn new(name: impl Into<String>, kind: SourceKind, bundle: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            kind,
            bundle,
            served: AtomicU64::new(0),
        }
    }

    /// Parse a captured bundle from its JSON text.
    pub fn from_json(name: impl Into<String>, kind: SourceKind, raw: &str) -> Result<Self> {
        Ok(Self::new(name, kind, serde_json::from_str(raw)?))
    }

    /// How many times this collector has been asked for its bundle.
    pub fn served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Collector for StaticCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn collect(&self, subject: &str) -> Result<serde_json::Value> {
        self.served.fetch_add(1, Ordering::Relaxed);
        debug!(collector = %self.name, kind = %self.kind, subject, "Replaying captured bundle");
        Ok(self.bundle.clone())
    }
}
