//! Shared fixtures for the cross-crate integration tests.

use std::sync::Once;

use osintnet_core::bundle::RawBundles;
use serde_json::{json, Value};

static TRACING: Once = Once::new();

/// Install an env-filtered subscriber once per test binary (`RUST_LOG=osintnet=debug`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn social_only(platform_data: Value) -> RawBundles {
    RawBundles::new(Value::Null, json!({ "platform_data": platform_data }), Value::Null)
}

pub fn news_only(articles: Value) -> RawBundles {
    RawBundles::new(Value::Null, Value::Null, json!({ "articles": articles }))
}

pub fn search_only(articles: Value) -> RawBundles {
    RawBundles::new(json!({ "articles": articles }), Value::Null, Value::Null)
}

/// A run touching every rule once.
pub fn mixed_bundles() -> RawBundles {
    RawBundles::new(
        json!({ "articles": [
            {
                "content": "She founded the Open Data Movement in 2019",
                "url": "https://example.org/a"
            }
        ] }),
        json!({ "platform_data": {
            "twitter": [
                { "description": "Thanks @alice and the Riverside Cyclists Group" },
                { "description": "Retweeting @bob" }
            ],
            "instagram": [
                { "description": "Photos with @alice" }
            ]
        } }),
        json!({ "articles": [
            { "content": "John Michael Smith met officials.", "url": "https://www.bbc.com/news/1" },
            { "content": "Ada Lovelace commented.", "url": "https://www.reuters.com/world/2" }
        ] }),
    )
}
