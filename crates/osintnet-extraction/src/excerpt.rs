//! Text excerpt handed to the language-model summarizer.
//!
//! Works on the raw bundles, never on the graph.

use serde_json::Value;

use osintnet_core::bundle::RawBundles;
use osintnet_core::config::ExcerptLimits;

pub fn prepare_excerpt(bundles: &RawBundles, limits: &ExcerptLimits) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(articles) = bundles.search.get("articles").and_then(Value::as_array) {
        parts.push("SEARCH FINDINGS:".to_string());
        parts.extend(bullets(articles, "content", limits.search_articles));
    }

    if let Some(platform_data) = bundles.social.get("platform_data").and_then(Value::as_object) {
        parts.push("\nSOCIAL MEDIA ACTIVITY:".to_string());
        for (platform, posts) in platform_data {
            let Some(posts) = posts.as_array().filter(|p| !p.is_empty()) else {
                continue;
            };
            parts.push(format!("\n{}", platform.to_uppercase()));
            parts.extend(
                posts
                    .iter()
                    .take(limits.posts_per_platform)
                    .map(|post| format!("• {}", text_field(post, "description").unwrap_or(""))),
            );
        }
    }

    if let Some(articles) = bundles.news.get("articles").and_then(Value::as_array) {
        parts.push("\nNEWS ANALYSIS:".to_string());
        parts.extend(bullets(articles, "content", limits.news_articles));
    }

    parts.join("\n")
}

fn text_field<'a>(record: &'a Value, name: &str) -> Option<&'a str> {
    record.get(name).and_then(Value::as_str)
}

fn bullets<'a>(
    records: &'a [Value],
    name: &'a str,
    limit: usize,
) -> impl Iterator<Item = String> + 'a {
    records
        .iter()
        .take(limit)
        .filter_map(move |record| text_field(record, name))
        .map(|text| format!("• {text}"))
}
