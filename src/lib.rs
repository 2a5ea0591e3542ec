//! Turn strings into embeddings with pretrained transformer encoders, powered by Candle.
//!
//! A [`TextEmbedder`] loads a model from the Hugging Face Hub or a local directory
//! and embeds each string as the sum of the hidden states of its non-special
//! tokens.
//!
//! ```rust,no_run
//! use transformer_lang::pipelines::utils::DeviceSelectable;
//! use transformer_lang::{FeatureExtractionPipelineBuilder, TextEmbedder};
//!
//! let pipeline = FeatureExtractionPipelineBuilder::new("bert-base-cased")
//!     .cpu()
//!     .build()?;
//! let embedder = TextEmbedder::from(pipeline);
//!
//! let set = embedder.embed_many(["day and night", "today the sky is clear"])?;
//! println!("{:?}", set.names());
//! # anyhow::Ok(())
//! ```

pub mod core;
mod loaders;
pub mod embedder;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use crate::core::{EmbedderError, Embedding, EmbeddingSet, Result};

pub use embedder::{Lookup, Query, TextEmbedder};

pub use loaders::{ModelSource, WeightsFormat};

pub use pipelines::feature_extraction_pipeline::{
    FeatureExtractionOptions, FeatureExtractionPipeline, FeatureExtractionPipelineBuilder,
    FeatureExtractor,
};
pub use pipelines::utils::{DeviceRequest, WeightDType};
