//! Feature-extraction pipeline producing per-token hidden states for a string.
//!
//! ## Main Types
//!
//! - [`FeatureExtractor`] - The capability consumed by [`TextEmbedder`](crate::TextEmbedder)
//! - [`FeatureExtractionPipeline`] - Candle implementation backed by a pretrained encoder
//! - [`FeatureExtractionPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`FeatureExtractionOptions`] - Options forwarded to the builder
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use transformer_lang::pipelines::feature_extraction_pipeline::*;
//! use transformer_lang::pipelines::utils::DeviceSelectable;
//!
//! let pipeline = FeatureExtractionPipelineBuilder::new("sentence-transformers/all-MiniLM-L6-v2")
//!     .cpu()
//!     .build()?;
//!
//! // One row per token, special tokens included
//! let features = pipeline.extract_features("today is a nice day")?;
//! let mask = pipeline.special_tokens_mask("today is a nice day")?;
//! assert_eq!(features.dims2()?.0, mask.len());
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod feature_extractor;
pub mod options;
pub mod pipeline;

pub use builder::FeatureExtractionPipelineBuilder;
pub use feature_extractor::FeatureExtractor;
pub use options::FeatureExtractionOptions;
pub use pipeline::FeatureExtractionPipeline;
