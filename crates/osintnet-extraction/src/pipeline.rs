use std::collections::HashSet;

use osintnet_core::bundle::SourceKind;
use osintnet_core::config::AnalyzerConfig;
use osintnet_core::entity::{Discovery, NodeAttrs, NodeType};

use crate::matchers::{self, TextMatcher};
use crate::normalize::{NormalizedRecord, RecordOutcome, SkippedRecord};

/// Everything one pass over the normalized records produced.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub discoveries: Vec<Discovery>,
    pub skipped: Vec<SkippedRecord>,
}

/// Deterministic, pattern-rule entity and relationship extraction.
pub struct RuleExtractionPipeline {
    config: AnalyzerConfig,
}

// ── Implementation ─────────────────────────────────────────────────────────

impl RuleExtractionPipeline {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Walk every outcome in order. A platform node is emitted the first time
    /// one of its posts shows up, ahead of anything found in that post, even
    /// if the post itself is skipped.
    pub fn extract_all(&self, subject: &str, outcomes: &[RecordOutcome]) -> Extraction {
        let mut extraction = Extraction::default();
        let mut announced: HashSet<&str> = HashSet::new();

        for outcome in outcomes {
            let platform = match outcome {
                Ok(record) => record.platform.as_deref(),
                Err(skipped) => skipped.platform.as_deref(),
            };
            if let Some(platform) = platform {
                if announced.insert(platform) {
                    extraction.discoveries.push(Discovery::new(
                        platform,
                        NodeAttrs::new(NodeType::Platform),
                        subject,
                    ));
                }
            }

            match outcome {
                Ok(record) => {
                    let found = self.extract_record(subject, record);
                    tracing::debug!(
                        kind = %record.kind,
                        index = record.index,
                        discoveries = found.len(),
                        "Extracted record"
                    );
                    extraction.discoveries.extend(found);
                }
                Err(skipped) => {
                    tracing::warn!(
                        kind = %skipped.kind,
                        index = skipped.index,
                        platform = ?skipped.platform,
                        reason = %skipped.reason,
                        "Skipping malformed record"
                    );
                    extraction.skipped.push(skipped.clone());
                }
            }
        }

        extraction
    }

    /// Discoveries for a single record, in rule order.
    pub fn extract_record(&self, subject: &str, record: &NormalizedRecord) -> Vec<Discovery> {
        match record.kind {
            SourceKind::Search => Self::apply(matchers::SEARCH_MATCHERS, &record.text)
                .map(|c| Discovery::new(c.label, NodeAttrs::new(c.node_type), subject))
                .collect(),
            SourceKind::Social => {
                // normalizer always attaches the platform to social records
                let Some(platform) = record.platform.as_deref() else {
                    return Vec::new();
                };
                Self::apply(matchers::SOCIAL_MATCHERS, &record.text)
                    .map(|c| {
                        let attrs = NodeAttrs::new(c.node_type).with_platform(platform);
                        Discovery::new(c.label, attrs, platform)
                    })
                    .collect()
            }
            SourceKind::News => self.extract_news(subject, record),
        }
    }

    fn extract_news(&self, subject: &str, record: &NormalizedRecord) -> Vec<Discovery> {
        let mut discoveries = Vec::new();
        let host = record.url.as_deref().and_then(matchers::url_host);

        match host {
            Some(host) if self.config.is_news_host(host) => {
                discoveries.push(Discovery::new(host, NodeAttrs::new(NodeType::News), subject));
            }
            Some(_) => {}
            None => tracing::debug!(
                index = record.index,
                url = ?record.url,
                "News URL has no host, skipping domain rule"
            ),
        }

        discoveries.extend(
            Self::apply(matchers::NEWS_MATCHERS, &record.text)
                .filter(|c| matchers::is_plausible_person(&c.label, subject))
                .map(|c| {
                    let attrs = NodeAttrs::new(c.node_type).with_source(host.map(str::to_string));
                    Discovery::new(c.label, attrs, subject)
                }),
        );

        discoveries
    }

    fn apply<'a>(
        rules: &'a [TextMatcher],
        text: &'a str,
    ) -> impl Iterator<Item = matchers::Candidate> + 'a {
        rules.iter().flat_map(move |rule| rule(text))
    }
}
