// Pipeline modules organized by functionality
pub mod feature_extraction_pipeline;
pub mod utils;

pub use feature_extraction_pipeline::*;
