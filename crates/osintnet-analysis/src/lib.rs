mod engine;

pub use engine::{Analysis, NetworkAnalyzer};
