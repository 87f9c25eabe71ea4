//! Lexical matchers. Each one is a pure function of the text it is given and
//! knows nothing about graphs, anchors or subjects.

use std::sync::LazyLock;

use regex::Regex;

use osintnet_core::entity::NodeType;

// ── Regex Patterns ────────────────────────────────────────────────────────

static RE_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)").unwrap());

static RE_SOCIAL_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w\s]+Group|[\w\s]+Page|[\w\s]+Community)").unwrap()
});

static RE_ORGANIZATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w\s]+(?:Party|Group|Organization|Movement))").unwrap()
});

// Two or three capitalized tokens. Lowercase letters include the Turkish
// extended alphabet (and its capitals, which occur mid-token in practice).
static RE_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[A-ZÇĞİÖŞÜ][a-zıİğĞüÜşŞöÖçÇ]+(?:\s+[A-ZÇĞİÖŞÜ][a-zıİğĞüÜşŞöÖçÇ]+){1,2}",
    )
    .unwrap()
});

/// Names at or below this many characters are not kept as people.
pub const MIN_PERSON_NAME_CHARS: usize = 5;

// ── Candidates ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub node_type: NodeType,
}

impl Candidate {
    fn new(label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            label: label.into(),
            node_type,
        }
    }
}

pub type TextMatcher = fn(&str) -> Vec<Candidate>;

/// Applied to social post descriptions, in this order.
pub const SOCIAL_MATCHERS: &[TextMatcher] = &[account_mentions, group_mentions];

/// Applied to search result content.
pub const SEARCH_MATCHERS: &[TextMatcher] = &[organization_mentions];

/// Applied to news article content.
pub const NEWS_MATCHERS: &[TextMatcher] = &[person_names];

// ── Matchers ──────────────────────────────────────────────────────────────

/// `@handle` mentions, labelled with the leading `@`.
pub fn account_mentions(text: &str) -> Vec<Candidate> {
    RE_ACCOUNT
        .captures_iter(text)
        .map(|cap| Candidate::new(format!("@{}", &cap[1]), NodeType::Account))
        .collect()
}

/// Word runs ending in `Group`, `Page` or `Community`.
pub fn group_mentions(text: &str) -> Vec<Candidate> {
    RE_SOCIAL_GROUP
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|label| !label.is_empty())
        .map(|label| Candidate::new(label, NodeType::Group))
        .collect()
}

/// Word runs ending in `Party`, `Group`, `Organization` or `Movement`.
pub fn organization_mentions(text: &str) -> Vec<Candidate> {
    RE_ORGANIZATION
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|label| !label.is_empty())
        .map(|label| Candidate::new(label, NodeType::Group))
        .collect()
}

/// Every two- or three-token capitalized run, unfiltered.
pub fn person_names(text: &str) -> Vec<Candidate> {
    RE_PERSON
        .find_iter(text)
        .map(|m| Candidate::new(m.as_str().trim(), NodeType::Person))
        .collect()
}

/// Whether a person-name match is kept for `subject`.
///
/// Coarse on purpose: drops the subject itself and anything of five
/// characters or fewer, which also loses some genuine short names.
pub fn is_plausible_person(name: &str, subject: &str) -> bool {
    name != subject && name.chars().count() > MIN_PERSON_NAME_CHARS
}

/// Host part of a URL: the third `/`-separated segment with a leading
/// `www.` removed. `None` when there are fewer than three segments or the
/// host is empty.
pub fn url_host(url: &str) -> Option<&str> {
    let host = url.split('/').nth(2)?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then_some(host)
}
