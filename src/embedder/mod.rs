//! String-to-vector lookups on top of a feature extractor.
//!
//! Each string is embedded as the element-wise sum of the hidden states of its
//! non-special tokens. Sequences of strings are embedded one by one, in order.
//!
//! ```rust,no_run
//! use transformer_lang::{FeatureExtractionOptions, TextEmbedder};
//!
//! let embedder = TextEmbedder::new("bert-base-cased", FeatureExtractionOptions::default())?;
//! let day = embedder.embed_one("today is a nice day")?;
//! let set = embedder.embed_many(["day and night", "it is as clear as day"])?;
//! assert_eq!(set.len(), 2);
//! println!("{} has {} dimensions", day, day.ndim());
//! # anyhow::Ok(())
//! ```

pub mod pooling;
pub mod query;

pub use query::{Lookup, Query};

use tracing::debug;

use crate::core::{EmbedderError, Embedding, EmbeddingSet, Result};
use crate::pipelines::feature_extraction_pipeline::{
    FeatureExtractionOptions, FeatureExtractionPipeline, FeatureExtractionPipelineBuilder,
    FeatureExtractor,
};

/// Embeds strings with a pretrained transformer.
pub struct TextEmbedder<E = FeatureExtractionPipeline> {
    extractor: E,
}

impl TextEmbedder<FeatureExtractionPipeline> {
    /// Load `model_identifier` (a Hub model id or local directory) and build an embedder.
    pub fn new(model_identifier: &str, options: FeatureExtractionOptions) -> Result<Self> {
        FeatureExtractionPipelineBuilder::new(model_identifier)
            .options(options)
            .build()
            .map(Self::from_extractor)
    }
}

impl<E: FeatureExtractor> TextEmbedder<E> {
    pub fn from_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn into_extractor(self) -> E {
        self.extractor
    }

    /// Length of every vector this embedder produces.
    pub fn hidden_size(&self) -> usize {
        self.extractor.hidden_size()
    }

    /// Embed one string or many, depending on the query variant.
    pub fn embed<'a>(&self, query: impl Into<Query<'a>>) -> Result<Lookup> {
        match query.into() {
            Query::Single(text) => self.embed_one(text).map(Lookup::Single),
            Query::Many(texts) => self.embed_many(texts).map(Lookup::Set),
        }
    }

    /// Embed a single string.
    pub fn embed_one(&self, text: &str) -> Result<Embedding> {
        let features = self.extractor.extract_features(text)?;
        let special_tokens_mask = self.extractor.special_tokens_mask(text)?;

        let (feature_rows, _) = features.dims2().map_err(anyhow::Error::from)?;
        if feature_rows != special_tokens_mask.len() {
            return Err(EmbedderError::TokenizationMismatch {
                input: text.to_string(),
                feature_rows,
                mask_len: special_tokens_mask.len(),
            });
        }

        let vector = pooling::sum_non_special(&features, &special_tokens_mask)?;
        debug!(
            tokens = feature_rows,
            special = special_tokens_mask.iter().filter(|&&s| s).count(),
            "pooled embedding"
        );
        Ok(Embedding::new(text, vector))
    }

    /// Embed each string independently, preserving input order.
    ///
    /// The first failure aborts the lookup; no partial set is returned.
    pub fn embed_many<I, S>(&self, texts: I) -> Result<EmbeddingSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.embed_one(text.as_ref()))
            .collect()
    }
}

impl From<FeatureExtractionPipeline> for TextEmbedder<FeatureExtractionPipeline> {
    fn from(pipeline: FeatureExtractionPipeline) -> Self {
        Self::from_extractor(pipeline)
    }
}
