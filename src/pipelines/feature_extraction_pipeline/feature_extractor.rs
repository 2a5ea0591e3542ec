use candle_core::Tensor;

/// A model that turns a string into one feature vector per token.
///
/// The two methods are invoked independently for the same text and are expected
/// to tokenize it identically.
pub trait FeatureExtractor {
    /// Hidden states of shape `(tokens, hidden_size)`, special tokens included.
    fn extract_features(&self, text: &str) -> anyhow::Result<Tensor>;

    /// One entry per token, `true` where the token is a special token.
    fn special_tokens_mask(&self, text: &str) -> anyhow::Result<Vec<bool>>;

    fn hidden_size(&self) -> usize;
}

impl<T: FeatureExtractor + ?Sized> FeatureExtractor for &T {
    fn extract_features(&self, text: &str) -> anyhow::Result<Tensor> {
        (**self).extract_features(text)
    }

    fn special_tokens_mask(&self, text: &str) -> anyhow::Result<Vec<bool>> {
        (**self).special_tokens_mask(text)
    }

    fn hidden_size(&self) -> usize {
        (**self).hidden_size()
    }
}

impl<T: FeatureExtractor + ?Sized> FeatureExtractor for Box<T> {
    fn extract_features(&self, text: &str) -> anyhow::Result<Tensor> {
        (**self).extract_features(text)
    }

    fn special_tokens_mask(&self, text: &str) -> anyhow::Result<Vec<bool>> {
        (**self).special_tokens_mask(text)
    }

    fn hidden_size(&self) -> usize {
        (**self).hidden_size()
    }
}
