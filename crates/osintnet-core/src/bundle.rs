use serde::{Deserialize, Serialize};

/// Which collector produced a bundle or a record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Search,
    Social,
    News,
}

impl SourceKind {
    /// Fixed bundle processing order of an analysis run.
    pub const PROCESSING_ORDER: [SourceKind; 3] =
        [SourceKind::Search, SourceKind::Social, SourceKind::News];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Search => "search",
            SourceKind::Social => "social",
            SourceKind::News => "news",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three collector outputs, exactly as the collectors returned them.
///
/// Bundles stay untyped JSON: a collector may omit `articles` or
/// `platform_data` entirely, and individual records may be malformed. The
/// normalizer decides what is usable; nothing here is ever mutated.
///
/// Expected shapes:
/// - search: `{ "articles": [ { "content": str, "url": str } ] }`
/// - social: `{ "platform_data": { "<platform>": [ { "description": str } ] } }`
/// - news:   `{ "articles": [ { "content": str, "url": str } ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBundles {
    #[serde(default)]
    pub search: serde_json::Value,
    #[serde(default)]
    pub social: serde_json::Value,
    #[serde(default)]
    pub news: serde_json::Value,
}

impl RawBundles {
    pub fn new(
        search: serde_json::Value,
        social: serde_json::Value,
        news: serde_json::Value,
    ) -> Self {
        Self {
            search,
            social,
            news,
        }
    }

    pub fn get(&self, kind: SourceKind) -> &serde_json::Value {
        match kind {
            SourceKind::Search => &self.search,
            SourceKind::Social => &self.social,
            SourceKind::News => &self.news,
        }
    }

    pub fn set(&mut self, kind: SourceKind, bundle: serde_json::Value) {
        match kind {
            SourceKind::Search => self.search = bundle,
            SourceKind::Social => self.social = bundle,
            SourceKind::News => self.news = bundle,
        }
    }
}
