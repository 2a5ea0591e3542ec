//! Encoder models that produce per-token hidden states.
//!
//! The architecture is read from the checkpoint's `config.json` and dispatched
//! to the matching Candle implementation.

pub mod config;
pub mod encoder;

pub use config::{Architecture, ModelConfig};
pub use encoder::Encoder;
