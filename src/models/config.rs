use serde::Deserialize;
use std::path::Path;

/// Encoder families that can be loaded for feature extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    Bert,
    DistilBert,
    ModernBert,
    /// RoBERTa, XLM-RoBERTa and CamemBERT share one layout.
    XlmRoberta,
}

const SUPPORTED: &str = "bert, distilbert, modernbert, roberta, xlm-roberta, camembert";

impl Architecture {
    fn from_model_type(model_type: &str) -> Option<Self> {
        match model_type.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "bert" => Some(Architecture::Bert),
            "distilbert" => Some(Architecture::DistilBert),
            "modernbert" => Some(Architecture::ModernBert),
            "roberta" | "xlmroberta" | "camembert" => Some(Architecture::XlmRoberta),
            _ => None,
        }
    }

    fn from_class_name(class_name: &str) -> Option<Self> {
        const PREFIXES: [(&str, Architecture); 6] = [
            ("ModernBert", Architecture::ModernBert),
            ("DistilBert", Architecture::DistilBert),
            ("XLMRoberta", Architecture::XlmRoberta),
            ("Roberta", Architecture::XlmRoberta),
            ("Camembert", Architecture::XlmRoberta),
            ("Bert", Architecture::Bert),
        ];
        PREFIXES
            .iter()
            .find(|(prefix, _)| class_name.starts_with(prefix))
            .map(|(_, arch)| *arch)
    }

    /// Whether the encoder can run with f16/bf16 weights. The other encoders
    /// build their attention masks in f32.
    pub fn supports_half_precision(&self) -> bool {
        matches!(self, Architecture::Bert)
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Architecture::Bert => "bert",
            Architecture::DistilBert => "distilbert",
            Architecture::ModernBert => "modernbert",
            Architecture::XlmRoberta => "xlm-roberta",
        };
        write!(f, "{name}")
    }
}

// Only the fields needed to pick an architecture; the rest is parsed by the
// architecture's own config type.
#[derive(Deserialize)]
struct ConfigHeader {
    model_type: Option<String>,
    #[serde(default)]
    architectures: Vec<String>,
    hidden_size: Option<usize>,
    // DistilBERT's name for the hidden size
    dim: Option<usize>,
}

/// A parsed `config.json`.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    architecture: Architecture,
    hidden_size: usize,
    raw: String,
}

impl ModelConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let header: ConfigHeader = serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("failed to parse model config: {e}"))?;

        let architecture = header
            .model_type
            .as_deref()
            .and_then(Architecture::from_model_type)
            .or_else(|| {
                header
                    .architectures
                    .iter()
                    .find_map(|name| Architecture::from_class_name(name))
            })
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unsupported architecture (model_type: {}, architectures: {:?}); supported: {SUPPORTED}",
                    header.model_type.as_deref().unwrap_or("<missing>"),
                    header.architectures
                )
            })?;

        let hidden_size = header
            .hidden_size
            .or(header.dim)
            .ok_or_else(|| anyhow::anyhow!("model config has no `hidden_size`"))?;

        Ok(Self {
            architecture,
            hidden_size,
            raw: raw.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {path:?}: {e}"))?;
        Self::from_json(&raw)
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Parse the full config into an architecture-specific type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        serde_json::from_str(&self.raw).map_err(|e| {
            anyhow::anyhow!("failed to parse {} model config: {e}", self.architecture)
        })
    }
}
