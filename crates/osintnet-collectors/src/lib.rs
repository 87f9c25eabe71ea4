use std::sync::Arc;

use osintnet_core::Collector;

mod driver;
mod replay;

pub use driver::{collect_all, CollectedBundles};
pub use replay::StaticCollector;

/// The three collectors feeding one analysis, one per bundle kind.
#[derive(Clone)]
pub struct CollectorSet {
    pub search: Arc<dyn Collector>,
    pub social: Arc<dyn Collector>,
    pub news: Arc<dyn Collector>,
}

impl CollectorSet {
    pub fn new(
        search: Arc<dyn Collector>,
        social: Arc<dyn Collector>,
        news: Arc<dyn Collector>,
    ) -> Self {
        Self {
            search,
            social,
            news,
        }
    }

    pub fn names(&self) -> [&str; 3] {
        [self.search.name(), self.social.name(), self.news.name()]
    }
}
