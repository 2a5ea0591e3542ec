use thiserror::Error;

/// Errors returned by [`TextEmbedder`](crate::TextEmbedder) and the pipeline builder.
#[derive(Debug, Error)]
pub enum EmbedderError {
    /// The model identifier could not be turned into a working model/tokenizer
    /// pair, or no usable compute device was available.
    #[error("failed to load model `{model}`: {source:#}")]
    ModelLoad {
        model: String,
        #[source]
        source: anyhow::Error,
    },

    /// The feature tensor and the special-token mask were produced by two
    /// tokenizations of the same input that did not agree on the token count.
    #[error(
        "tokenization mismatch for {input:?}: {feature_rows} feature rows but {mask_len} special-token mask entries"
    )]
    TokenizationMismatch {
        input: String,
        feature_rows: usize,
        mask_len: usize,
    },

    /// A failure raised by the feature extractor, passed through unchanged.
    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),
}

impl EmbedderError {
    pub(crate) fn model_load(model: &str, source: anyhow::Error) -> Self {
        EmbedderError::ModelLoad {
            model: model.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmbedderError>;
