pub mod excerpt;
pub mod matchers;
pub mod normalize;
pub mod pipeline;

pub use excerpt::prepare_excerpt;
pub use normalize::{normalize, NormalizedRecord, RecordOutcome, SkipReason, SkippedRecord};
pub use pipeline::{Extraction, RuleExtractionPipeline};
