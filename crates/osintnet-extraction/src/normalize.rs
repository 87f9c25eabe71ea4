//! Flattens the three collector bundles into one ordered record sequence.
//!
//! Absent substructure (no `articles`, no `platform_data`, empty lists) is
//! normal and yields nothing. Individual records that lack their text field
//! come out as [`SkippedRecord`]s so the caller can report them.

use serde::Serialize;
use serde_json::Value;

use osintnet_core::bundle::{RawBundles, SourceKind};

/// One usable record, detached from the bundle shape it came in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub kind: SourceKind,
    /// Position inside its list (per platform for social posts).
    pub index: usize,
    pub text: String,
    pub url: Option<String>,
    /// Display form of the platform, social records only.
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "field", rename_all = "snake_case")]
pub enum SkipReason {
    NotAnObject,
    MissingField(&'static str),
    WrongFieldType(&'static str),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "record is not a JSON object"),
            SkipReason::MissingField(field) => write!(f, "missing field `{field}`"),
            SkipReason::WrongFieldType(field) => write!(f, "field `{field}` is not a string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub kind: SourceKind,
    pub index: usize,
    pub platform: Option<String>,
    pub reason: SkipReason,
}

pub type RecordOutcome = std::result::Result<NormalizedRecord, SkippedRecord>;

/// Normalize all bundles in processing order: search, social, news.
pub fn normalize(bundles: &RawBundles) -> Vec<RecordOutcome> {
    let mut outcomes = Vec::new();
    for kind in SourceKind::PROCESSING_ORDER {
        let bundle = bundles.get(kind);
        match kind {
            SourceKind::Search => normalize_search(bundle, &mut outcomes),
            SourceKind::Social => normalize_social(bundle, &mut outcomes),
            SourceKind::News => normalize_news(bundle, &mut outcomes),
        }
    }
    outcomes
}

/// Python-style capitalization: first character upper, the rest lower.
pub fn display_platform(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn articles(bundle: &Value) -> &[Value] {
    bundle
        .get("articles")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

enum Field<'a> {
    Absent,
    Text(&'a str),
    NotText,
}

fn field<'a>(record: &'a serde_json::Map<String, Value>, name: &str) -> Field<'a> {
    match record.get(name) {
        None => Field::Absent,
        Some(Value::String(s)) => Field::Text(s),
        Some(_) => Field::NotText,
    }
}

fn optional_text(
    record: &serde_json::Map<String, Value>,
    name: &'static str,
) -> std::result::Result<Option<String>, SkipReason> {
    match field(record, name) {
        Field::Absent => Ok(None),
        Field::Text(s) => Ok(Some(s.to_string())),
        Field::NotText => Err(SkipReason::WrongFieldType(name)),
    }
}

fn required_text(
    record: &serde_json::Map<String, Value>,
    name: &'static str,
) -> std::result::Result<String, SkipReason> {
    optional_text(record, name)?.ok_or(SkipReason::MissingField(name))
}

fn normalize_search(bundle: &Value, out: &mut Vec<RecordOutcome>) {
    for (index, item) in articles(bundle).iter().enumerate() {
        let parsed = item
            .as_object()
            .ok_or(SkipReason::NotAnObject)
            .and_then(|record| {
                let text = required_text(record, "content")?;
                // the url of a search hit is informational; a bad one is dropped
                let url = optional_text(record, "url").unwrap_or(None);
                Ok((text, url))
            });
        out.push(match parsed {
            Ok((text, url)) => Ok(NormalizedRecord {
                kind: SourceKind::Search,
                index,
                text,
                url,
                platform: None,
            }),
            Err(reason) => Err(SkippedRecord {
                kind: SourceKind::Search,
                index,
                platform: None,
                reason,
            }),
        });
    }
}

fn normalize_social(bundle: &Value, out: &mut Vec<RecordOutcome>) {
    let Some(platform_data) = bundle.get("platform_data").and_then(Value::as_object) else {
        return;
    };

    for (key, posts) in platform_data {
        let Some(posts) = posts.as_array().filter(|p| !p.is_empty()) else {
            continue;
        };
        let platform = display_platform(key);
        if platform.is_empty() {
            tracing::warn!(
                posts = posts.len(),
                "Ignoring social posts under an empty platform key"
            );
            continue;
        }

        for (index, post) in posts.iter().enumerate() {
            let parsed = post
                .as_object()
                .ok_or(SkipReason::NotAnObject)
                .and_then(|record| required_text(record, "description"));
            out.push(match parsed {
                Ok(text) => Ok(NormalizedRecord {
                    kind: SourceKind::Social,
                    index,
                    text,
                    url: None,
                    platform: Some(platform.clone()),
                }),
                Err(reason) => Err(SkippedRecord {
                    kind: SourceKind::Social,
                    index,
                    platform: Some(platform.clone()),
                    reason,
                }),
            });
        }
    }
}

fn normalize_news(bundle: &Value, out: &mut Vec<RecordOutcome>) {
    for (index, item) in articles(bundle).iter().enumerate() {
        let parsed = item
            .as_object()
            .ok_or(SkipReason::NotAnObject)
            .and_then(|record| {
                let url = required_text(record, "url")?;
                let text = optional_text(record, "content")?.unwrap_or_default();
                Ok((text, url))
            });
        out.push(match parsed {
            Ok((text, url)) => Ok(NormalizedRecord {
                kind: SourceKind::News,
                index,
                text,
                url: Some(url),
                platform: None,
            }),
            Err(reason) => Err(SkippedRecord {
                kind: SourceKind::News,
                index,
                platform: None,
                reason,
            }),
        });
    }
}
