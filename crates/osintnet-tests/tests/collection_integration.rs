use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use osintnet_analysis::NetworkAnalyzer;
use osintnet_collectors::{collect_all, CollectorSet, StaticCollector};
use osintnet_core::bundle::SourceKind;
use osintnet_core::collector::Collector;
use osintnet_core::config::AnalyzerConfig;
use osintnet_core::entity::NodeType;
use osintnet_core::error::Result;
use osintnet_tests::{init_tracing, mixed_bundles};

fn replay_set() -> (CollectorSet, [Arc<StaticCollector>; 3]) {
    let bundles = mixed_bundles();
    let search = Arc::new(StaticCollector::new("saved-search", SourceKind::Search, bundles.search));
    let social = Arc::new(StaticCollector::new("saved-social", SourceKind::Social, bundles.social));
    let news = Arc::new(StaticCollector::new("saved-news", SourceKind::News, bundles.news));
    let set = CollectorSet::new(search.clone(), social.clone(), news.clone());
    (set, [search, social, news])
}

#[tokio::test]
async fn collected_bundles_feed_the_analyzer() {
    init_tracing();
    let (set, replays) = replay_set();

    let config = AnalyzerConfig::default();

    let collected = collect_all(&set, "Jane Doe", config.collector_timeout()).await;
    assert_eq!(collected.failed().count(), 0);
    assert!(replays.iter().all(|c| c.served() == 1));

    let mut analyzer = NetworkAnalyzer::new(config).unwrap();
    let analysis = analyzer.analyze(&collected.subject, &collected.bundles).unwrap();

    assert_eq!(analysis.payload.metrics.total_nodes, 11);
    assert_eq!(analysis.payload.metrics.node_type_counts.get(&NodeType::Target), Some(&1));
}

#[tokio::test]
async fn excerpt_is_built_from_collected_bundles() {
    init_tracing();
    let (set, _) = replay_set();
    let config = AnalyzerConfig::default();
    let collected = collect_all(&set, "Jane Doe", config.collector_timeout()).await;

    let analyzer = NetworkAnalyzer::new(config).unwrap();
    let excerpt = analyzer.excerpt(&collected.bundles);

    assert!(excerpt.starts_with("SEARCH FINDINGS:\n• She founded the Open Data Movement"));
    assert!(excerpt.contains("\nINSTAGRAM\n• Photos with @alice"));
    assert!(excerpt.contains(
        "\nTWITTER\n• Thanks @alice and the Riverside Cyclists Group\n• Retweeting @bob"
    ));
    assert!(excerpt.find("\nTWITTER\n") < excerpt.find("\nINSTAGRAM\n"));
    assert!(excerpt.ends_with("• Ada Lovelace commented."));
}

#[tokio::test]
async fn collection_report_serializes_with_timestamp() {
    let (set, _) = replay_set();
    let timeout = AnalyzerConfig::default().collector_timeout();
    let collected = collect_all(&set, "Jane Doe", timeout).await;

    let value = serde_json::to_value(&collected).unwrap();
    assert_eq!(value["reports"][0]["name"], "saved-search");
    assert_eq!(value["reports"][1]["kind"], "social");
    assert!(value["collected_at"].is_string());
}

struct StalledCollector;

#[async_trait]
impl Collector for StalledCollector {
    fn name(&self) -> &str {
        "stalled-news"
    }
    fn kind(&self) -> SourceKind {
        SourceKind::News
    }
    async fn collect(&self, _subject: &str) -> Result<serde_json::Value> {
        tokio::time::sleep(Duration::from_secs(120)).await;
        Ok(serde_json::json!({ "articles": [] }))
    }
}

#[tokio::test]
async fn configured_timeout_bounds_each_collector() {
    init_tracing();
    let (set, _) = replay_set();
    let set = CollectorSet::new(set.search, set.social, Arc::new(StalledCollector));
    let config = AnalyzerConfig {
        collector_timeout_secs: 1,
        ..AnalyzerConfig::default()
    };

    let collected = collect_all(&set, "Jane Doe", config.collector_timeout()).await;

    let failed: Vec<&str> = collected.failed().map(|r| r.name.as_str()).collect();
    assert_eq!(failed, vec!["stalled-news"]);
    assert_eq!(collected.reports[2].error.as_deref(), Some("timed out after 1.0s"));
    assert_eq!(collected.bundles.news, serde_json::json!({}));

    let mut analyzer = NetworkAnalyzer::new(config).unwrap();
    let analysis = analyzer.analyze(&collected.subject, &collected.bundles).unwrap();
    assert_eq!(analysis.payload.metrics.node_type_counts.get(&NodeType::News), None);
}
