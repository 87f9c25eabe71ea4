use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use osintnet_core::api_types::GraphPayload;
use osintnet_core::bundle::RawBundles;
use osintnet_core::config::AnalyzerConfig;
use osintnet_core::error::Result;
use osintnet_extraction::{normalize, prepare_excerpt, RuleExtractionPipeline, SkippedRecord};
use osintnet_graph::{compute_metrics, export_payload, validate_style_table, GraphAssembler};

/// Result of one successful `analyze` call.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub subject: String,
    pub payload: GraphPayload,
    /// Records that could not be used, in processing order.
    pub skipped: Vec<SkippedRecord>,
}

// ── NetworkAnalyzer ───────────────────────────────────────────────────────

/// Builds a subject-centred relationship graph from collector bundles.
///
/// Each call to [`NetworkAnalyzer::analyze`] starts from an empty graph; the
/// `&mut self` receiver keeps concurrent runs on one instance out. Use one
/// analyzer per concurrent request.
pub struct NetworkAnalyzer {
    config: AnalyzerConfig,
    extractor: RuleExtractionPipeline,
    graph: GraphAssembler,
}

impl NetworkAnalyzer {
    /// Fails if the node style table does not cover every node type.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        validate_style_table()?;
        Ok(Self {
            extractor: RuleExtractionPipeline::new(&config),
            config,
            graph: GraphAssembler::new(),
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Read-only view of the graph built by the last successful run.
    pub fn graph(&self) -> &GraphAssembler {
        &self.graph
    }

    // ── Full pipeline: normalize -> extract -> assemble -> metrics -> export ──

    #[instrument(skip_all, fields(subject = %subject))]
    pub fn analyze(&mut self, subject: &str, bundles: &RawBundles) -> Result<Analysis> {
        info!("Starting network analysis");

        self.graph.reset();
        self.graph.ensure_subject(subject);

        let outcomes = normalize(bundles);
        let extraction = self.extractor.extract_all(subject, &outcomes);
        debug!(
            records = outcomes.len(),
            discoveries = extraction.discoveries.len(),
            "Extraction finished"
        );

        for discovery in &extraction.discoveries {
            self.graph.apply(discovery);
        }

        let metrics = compute_metrics(&self.graph);
        let payload = match export_payload(&self.graph, metrics) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Export failed, discarding graph");
                self.graph.reset();
                return Err(e);
            }
        };

        if !extraction.skipped.is_empty() {
            warn!(skipped = extraction.skipped.len(), "Some records were skipped");
        }
        info!(
            nodes = payload.metrics.total_nodes,
            edges = payload.metrics.total_edges,
            "Network analysis complete"
        );

        Ok(Analysis {
            subject: subject.to_string(),
            payload,
            skipped: extraction.skipped,
        })
    }

    /// Excerpt of the same bundles for the language-model summarizer.
    pub fn excerpt(&self, bundles: &RawBundles) -> String {
        prepare_excerpt(bundles, &self.config.excerpt)
    }
}
