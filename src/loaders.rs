//! Model file resolution for local directories and the Hugging Face Hub.
//!
//! A model identifier is either a directory on disk or a Hub repository id.
//! [`ModelSource::resolve`] decides which, and [`HfLoader`] fetches individual
//! files (`config.json`, weights, `tokenizer.json`) from either kind of source.
//!
//! ## Main Types
//!
//! - [`ModelSource`] - Where the model files live
//! - [`HubSettings`] - Cache directory and token used for Hub downloads
//! - [`HfLoader`] - Resolves single files, retrying Hub lock failures
//! - [`TokenizerLoader`] - Loads `tokenizer.json` into a [`Tokenizer`]
//! - [`WeightsLoader`] - Locates safetensors or PyTorch weights

use hf_hub::api::sync::{ApiBuilder, ApiRepo};
use hf_hub::{Repo, RepoType};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokenizers::Tokenizer;
use tracing::{debug, info};

const SAFETENSORS_WEIGHTS: &str = "model.safetensors";
const PYTORCH_WEIGHTS: &str = "pytorch_model.bin";
const MAX_HUB_RETRIES: u32 = 3;

/// Where a model's files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A directory on the local filesystem.
    Local(PathBuf),
    /// A Hugging Face Hub model repository, optionally pinned to a revision.
    Hub {
        repo_id: String,
        revision: Option<String>,
    },
}

impl ModelSource {
    /// Decide whether `identifier` names a local directory or a Hub repository.
    ///
    /// Identifiers that look like filesystem paths but do not exist are rejected
    /// here so that a typo never turns into a network lookup.
    pub fn resolve(identifier: &str, revision: Option<&str>) -> anyhow::Result<Self> {
        let identifier = identifier.trim();
        anyhow::ensure!(!identifier.is_empty(), "model identifier is empty");

        let path = Path::new(identifier);
        if path.is_dir() {
            return Ok(ModelSource::Local(path.to_path_buf()));
        }
        if path.exists() {
            anyhow::bail!("`{identifier}` is a file, expected a model directory");
        }
        if looks_like_path(identifier) {
            anyhow::bail!("local model directory `{identifier}` does not exist");
        }

        Ok(ModelSource::Hub {
            repo_id: identifier.to_string(),
            revision: revision.map(str::to_string),
        })
    }
}

fn looks_like_path(identifier: &str) -> bool {
    identifier.starts_with(['.', '/', '~'])
        || identifier.contains('\\')
        || Path::new(identifier).is_absolute()
}

/// Settings forwarded to the Hub client.
#[derive(Debug, Clone, Default)]
pub struct HubSettings {
    pub cache_dir: Option<PathBuf>,
    pub token: Option<String>,
}

/// Resolves individual files of a model to paths on disk.
pub struct HfLoader {
    source: ModelSource,
    repo: Option<ApiRepo>,
}

impl HfLoader {
    pub fn new(source: ModelSource, settings: &HubSettings) -> anyhow::Result<Self> {
        let repo = match &source {
            ModelSource::Local(_) => None,
            ModelSource::Hub { repo_id, revision } => {
                let mut builder = ApiBuilder::new().with_progress(false);
                if let Some(dir) = &settings.cache_dir {
                    builder = builder.with_cache_dir(dir.clone());
                }
                if settings.token.is_some() {
                    builder = builder.with_token(settings.token.clone());
                }
                let api = builder.build()?;
                let repo = match revision {
                    Some(rev) => Repo::with_revision(repo_id.clone(), RepoType::Model, rev.clone()),
                    None => Repo::new(repo_id.clone(), RepoType::Model),
                };
                Some(api.repo(repo))
            }
        };

        Ok(Self { source, repo })
    }

    /// Resolve `filename` to a local path, downloading it from the Hub if needed.
    pub fn load(&self, filename: &str) -> anyhow::Result<PathBuf> {
        match (&self.source, &self.repo) {
            (ModelSource::Local(dir), _) => {
                let path = dir.join(filename);
                anyhow::ensure!(
                    path.is_file(),
                    "`{filename}` not found in {}",
                    dir.display()
                );
                Ok(path)
            }
            (ModelSource::Hub { repo_id, .. }, Some(repo)) => {
                debug!(repo = %repo_id, file = filename, "fetching from hub");
                get_with_retry(repo, filename)
            }
            (ModelSource::Hub { repo_id, .. }, None) => {
                anyhow::bail!("no hub client configured for `{repo_id}`")
            }
        }
    }
}

// Concurrent downloads of the same repo can fail to take the cache lock.
fn get_with_retry(repo: &ApiRepo, filename: &str) -> anyhow::Result<PathBuf> {
    let mut attempt = 0;
    loop {
        match repo.get(filename) {
            Ok(path) => return Ok(path),
            Err(e) => {
                let retryable = e.to_string().contains("Lock acquisition failed");
                if retryable && attempt + 1 < MAX_HUB_RETRIES {
                    std::thread::sleep(Duration::from_millis(100 * (1 << attempt)));
                    attempt += 1;
                    continue;
                }
                return Err(anyhow::Error::new(e).context(format!("failed to fetch `{filename}`")));
            }
        }
    }
}

pub struct TokenizerLoader<'a> {
    file_loader: &'a HfLoader,
}

impl<'a> TokenizerLoader<'a> {
    pub fn new(file_loader: &'a HfLoader) -> Self {
        Self { file_loader }
    }

    pub fn load(&self) -> anyhow::Result<Tokenizer> {
        let tokenizer_file_path = self.file_loader.load("tokenizer.json")?;

        let tokenizer = Tokenizer::from_file(&tokenizer_file_path).map_err(anyhow::Error::msg)?;
        info!(path = %tokenizer_file_path.display(), "loaded tokenizer");

        Ok(tokenizer)
    }
}

/// On-disk weight formats understood by the encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightsFormat {
    Safetensors,
    PyTorch,
}

pub struct WeightsLoader<'a> {
    file_loader: &'a HfLoader,
}

impl<'a> WeightsLoader<'a> {
    pub fn new(file_loader: &'a HfLoader) -> Self {
        Self { file_loader }
    }

    /// Locate the weights, preferring safetensors over `pytorch_model.bin`.
    pub fn load(&self) -> anyhow::Result<(PathBuf, WeightsFormat)> {
        match self.file_loader.load(SAFETENSORS_WEIGHTS) {
            Ok(path) => Ok((path, WeightsFormat::Safetensors)),
            Err(safetensors_err) => match self.file_loader.load(PYTORCH_WEIGHTS) {
                Ok(path) => Ok((path, WeightsFormat::PyTorch)),
                Err(e) => anyhow::bail!(
                    "model weights not found. Expected `{SAFETENSORS_WEIGHTS}` ({safetensors_err}) or `{PYTORCH_WEIGHTS}` ({e})"
                ),
            },
        }
    }
}
