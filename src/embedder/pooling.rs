//! Reduction of per-token features to a single vector.

use candle_core::{DType, Tensor};

/// Sum the rows of `features` whose entry in `special_tokens_mask` is `false`.
///
/// `features` must have shape `(tokens, hidden)` with `tokens ==
/// special_tokens_mask.len()`. When every token is special, or there are no
/// tokens, the result is a zero vector of length `hidden`.
///
/// [`TextEmbedder::embed_one`](super::TextEmbedder::embed_one) reports a
/// length disagreement as `TokenizationMismatch` before calling this.
pub fn sum_non_special(features: &Tensor, special_tokens_mask: &[bool]) -> anyhow::Result<Vec<f32>> {
    let (tokens, hidden) = features.dims2()?;
    anyhow::ensure!(
        tokens == special_tokens_mask.len(),
        "{tokens} feature rows but {} mask entries",
        special_tokens_mask.len()
    );

    let keep: Vec<u32> = special_tokens_mask
        .iter()
        .enumerate()
        .filter(|(_, special)| !**special)
        .map(|(i, _)| i as u32)
        .collect();
    if keep.is_empty() {
        return Ok(vec![0.0; hidden]);
    }

    let keep = Tensor::new(keep.as_slice(), features.device())?;
    let summed = features
        .index_select(&keep, 0)?
        .to_dtype(DType::F32)?
        .sum(0)?;
    Ok(summed.to_vec1::<f32>()?)
}
