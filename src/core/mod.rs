pub mod embedding;
pub mod error;

pub use embedding::{Embedding, EmbeddingSet};
pub use error::{EmbedderError, Result};
