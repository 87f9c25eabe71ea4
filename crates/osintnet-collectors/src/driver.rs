use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use osintnet_core::bundle::{RawBundles, SourceKind};
use osintnet_core::collector::{Collector, CollectorReport};

use crate::CollectorSet;

/// All three bundles for one subject, ready for analysis.
#[derive(Debug, Clone, Serialize)]
pub struct CollectedBundles {
    pub subject: String,
    pub bundles: RawBundles,
    pub reports: Vec<CollectorReport>,
    pub collected_at: DateTime<Utc>,
}

impl CollectedBundles {
    pub fn failed(&self) -> impl Iterator<Item = &CollectorReport> {
        self.reports.iter().filter(|r| !r.ok)
    }
}

/// Run the three collectors concurrently, each under `timeout`.
///
/// Never fails as a whole: a collector that errors or runs out of time
/// contributes an empty bundle and a failed report.
pub async fn collect_all(
    collectors: &CollectorSet,
    subject: &str,
    timeout: Duration,
) -> CollectedBundles {
    info!(subject, collectors = ?collectors.names(), "Starting collection round");

    let (search, social, news) = tokio::join!(
        run_one(&collectors.search, SourceKind::Search, subject, timeout),
        run_one(&collectors.social, SourceKind::Social, subject, timeout),
        run_one(&collectors.news, SourceKind::News, subject, timeout),
    );

    let mut bundles = RawBundles::default();
    let mut reports = Vec::with_capacity(3);
    for (kind, (bundle, report)) in [
        (SourceKind::Search, search),
        (SourceKind::Social, social),
        (SourceKind::News, news),
    ] {
        bundles.set(kind, bundle);
        reports.push(report);
    }

    let failed = reports.iter().filter(|r| !r.ok).count();
    if failed > 0 {
        warn!(subject, failed, "Collection round finished with failures");
    } else {
        info!(subject, "Collection round finished");
    }

    CollectedBundles {
        subject: subject.to_string(),
        bundles,
        reports,
        collected_at: Utc::now(),
    }
}

async fn run_one(
    collector: &Arc<dyn Collector>,
    slot: SourceKind,
    subject: &str,
    timeout: Duration,
) -> (serde_json::Value, CollectorReport) {
    if collector.kind() != slot {
        warn!(
            collector = collector.name(),
            declared = %collector.kind(),
            slot = %slot,
            "Collector kind does not match its slot"
        );
    }

    let started = Instant::now();
    let outcome = tokio::time::timeout(timeout, collector.collect(subject)).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let (bundle, error) = match outcome {
        Ok(Ok(bundle)) => (bundle, None),
        Ok(Err(e)) => {
            warn!(collector = collector.name(), error = %e, "Collector failed");
            (empty_bundle(), Some(e.to_string()))
        }
        Err(_) => {
            warn!(
                collector = collector.name(),
                timeout_secs = timeout.as_secs_f64(),
                "Collector timed out"
            );
            (
                empty_bundle(),
                Some(format!("timed out after {:.1}s", timeout.as_secs_f64())),
            )
        }
    };

    let report = CollectorReport {
        name: collector.name().to_string(),
        kind: slot,
        ok: error.is_none(),
        error,
        elapsed_ms,
    };
    (bundle, report)
}

fn empty_bundle() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCollector;
    use async_trait::async_trait;
    use osintnet_core::error::{OsintError, Result};
    use serde_json::json;

    struct FailingCollector;

    #[async_trait]
    impl Collector for FailingCollector {
        fn name(&self) -> &str {
            "failing"
        }
        fn kind(&self) -> SourceKind {
            SourceKind::Social
        }
        async fn collect(&self, _subject: &str) -> Result<serde_json::Value> {
            Err(OsintError::Collector {
                collector: "failing".into(),
                message: "site unreachable".into(),
            })
        }
    }

    struct SlowCollector;

    #[async_trait]
    impl Collector for SlowCollector {
        fn name(&self) -> &str {
            "slow"
        }
        fn kind(&self) -> SourceKind {
            SourceKind::News
        }
        async fn collect(&self, _subject: &str) -> Result<serde_json::Value> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(json!({ "articles": [{ "content": "late", "url": "https://bbc.com/x" }] }))
        }
    }

    fn search() -> Arc<dyn Collector> {
        Arc::new(StaticCollector::new(
            "search",
            SourceKind::Search,
            json!({ "articles": [{ "content": "Green Party", "url": "https://a.com/1" }] }),
        ))
    }

    #[tokio::test]
    async fn failures_become_empty_bundles() {
        let set = CollectorSet::new(search(), Arc::new(FailingCollector), Arc::new(SlowCollector));
        let collected = collect_all(&set, "Jane Doe", Duration::from_millis(50)).await;

        assert_eq!(collected.subject, "Jane Doe");
        assert_eq!(collected.bundles.search["articles"][0]["content"], "Green Party");
        assert_eq!(collected.bundles.social, json!({}));
        assert_eq!(collected.bundles.news, json!({}));

        let failed: Vec<&str> = collected.failed().map(|r| r.name.as_str()).collect();
        assert_eq!(failed, vec!["failing", "slow"]);
        assert!(collected.reports[1].error.as_deref().unwrap().contains("site unreachable"));
        assert!(collected.reports[2].error.as_deref().unwrap().starts_with("timed out"));
    }

    #[tokio::test]
    async fn reports_follow_processing_order() {
        let set = CollectorSet::new(
            search(),
            Arc::new(StaticCollector::new(
                "social",
                SourceKind::Social,
                json!({ "platform_data": {} }),
            )),
            Arc::new(StaticCollector::new("news", SourceKind::News, json!({ "articles": [] }))),
        );
        let collected = collect_all(&set, "S", Duration::from_secs(5)).await;

        let kinds: Vec<SourceKind> = collected.reports.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, SourceKind::PROCESSING_ORDER.to_vec());
        assert_eq!(collected.failed().count(), 0);
    }
}
