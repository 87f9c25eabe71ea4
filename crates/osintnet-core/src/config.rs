use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Hosts treated as news sources when no override is configured.
pub const DEFAULT_NEWS_DOMAINS: &[&str] = &[
    "reuters.com",
    "bbc.com",
    "hurriyet.com.tr",
    "milliyet.com.tr",
    "sozcu.com.tr",
    "cnn.com",
    "dw.com",
    "aa.com.tr",
];

/// How many records of each bundle make it into the language-model excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptLimits {
    pub search_articles: usize,
    pub posts_per_platform: usize,
    pub news_articles: usize,
}

impl Default for ExcerptLimits {
    fn default() -> Self {
        Self {
            search_articles: 3,
            posts_per_platform: 2,
            news_articles: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub news_domains: Vec<String>,
    pub collector_timeout_secs: u64,
    #[serde(default)]
    pub excerpt: ExcerptLimits,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            news_domains: DEFAULT_NEWS_DOMAINS.iter().map(|d| d.to_string()).collect(),
            collector_timeout_secs: 30,
            excerpt: ExcerptLimits::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            news_domains: std::env::var("OSINTNET_NEWS_DOMAINS")
                .ok()
                .map(|raw| parse_domain_list(&raw))
                .filter(|domains| !domains.is_empty())
                .unwrap_or(defaults.news_domains),
            collector_timeout_secs: env_number("OSINTNET_COLLECTOR_TIMEOUT_SECS")
                .unwrap_or(defaults.collector_timeout_secs),
            excerpt: ExcerptLimits {
                search_articles: env_number("OSINTNET_EXCERPT_SEARCH")
                    .unwrap_or(defaults.excerpt.search_articles),
                posts_per_platform: env_number("OSINTNET_EXCERPT_POSTS")
                    .unwrap_or(defaults.excerpt.posts_per_platform),
                news_articles: env_number("OSINTNET_EXCERPT_NEWS")
                    .unwrap_or(defaults.excerpt.news_articles),
            },
        }
    }

    /// Per-collector budget for one collection round.
    pub fn collector_timeout(&self) -> Duration {
        Duration::from_secs(self.collector_timeout_secs)
    }

    /// True when `host` is an allow-listed news domain or one of its subdomains.
    ///
    /// Deliberately stricter than a substring test: `bbc.com.tr` is not a
    /// `bbc.com` host.
    pub fn is_news_host(&self, host: &str) -> bool {
        self.news_domains.iter().any(|domain| {
            host == domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}
