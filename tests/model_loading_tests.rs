mod common;

use common::{tiny_bert, write_model_dir, BERT_CONFIG_JSON, HIDDEN_SIZE, TOKENIZER_JSON};
use transformer_lang::*;

fn cpu_options() -> FeatureExtractionOptions {
    FeatureExtractionOptions {
        device: DeviceRequest::Cpu,
        ..Default::default()
    }
}

fn assert_model_load(result: Result<TextEmbedder>, needle: &str) {
    match result {
        Err(EmbedderError::ModelLoad { source, .. }) => {
            let message = format!("{source:#}");
            assert!(message.contains(needle), "`{message}` does not mention `{needle}`");
        }
        Err(other) => panic!("expected a model load error, got {other}"),
        Ok(_) => panic!("expected a model load error"),
    }
}

#[test]
fn empty_identifier_fails_to_load() {
    assert_model_load(TextEmbedder::new("", cpu_options()), "empty");
}

#[test]
fn missing_local_directory_fails_to_load() {
    assert_model_load(
        TextEmbedder::new("./no/such/model/dir", cpu_options()),
        "does not exist",
    );
}

#[test]
fn directory_without_config_fails_to_load() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    assert_model_load(
        TextEmbedder::new(&dir.path().to_string_lossy(), cpu_options()),
        "config.json",
    );
    Ok(())
}

#[test]
fn unsupported_architecture_fails_to_load() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"model_type": "gpt2", "hidden_size": 768}"#,
    )?;
    assert_model_load(
        TextEmbedder::new(&dir.path().to_string_lossy(), cpu_options()),
        "unsupported architecture",
    );
    Ok(())
}

#[test]
fn missing_weights_fail_to_load() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("config.json"), BERT_CONFIG_JSON)?;
    std::fs::write(dir.path().join("tokenizer.json"), TOKENIZER_JSON)?;
    assert_model_load(
        TextEmbedder::new(&dir.path().to_string_lossy(), cpu_options()),
        "model weights not found",
    );
    Ok(())
}

#[test]
#[cfg(not(feature = "cuda"))]
fn unavailable_cuda_device_fails_to_load() -> anyhow::Result<()> {
    let (weights, _pipeline) = tiny_bert(None)?;
    let dir = tempfile::tempdir()?;
    write_model_dir(dir.path(), &weights)?;

    let options = FeatureExtractionOptions {
        device: DeviceRequest::Cuda(0),
        ..Default::default()
    };
    assert_model_load(
        TextEmbedder::new(&dir.path().to_string_lossy(), options),
        "CUDA device 0 unavailable",
    );
    Ok(())
}

#[test]
fn tokenizer_can_come_from_another_directory() -> anyhow::Result<()> {
    let (weights, _pipeline) = tiny_bert(None)?;
    let model_dir = tempfile::tempdir()?;
    write_model_dir(model_dir.path(), &weights)?;
    std::fs::remove_file(model_dir.path().join("tokenizer.json"))?;

    let tokenizer_dir = tempfile::tempdir()?;
    std::fs::write(tokenizer_dir.path().join("tokenizer.json"), TOKENIZER_JSON)?;

    let options = FeatureExtractionOptions {
        tokenizer: Some(tokenizer_dir.path().to_string_lossy().into_owned()),
        ..cpu_options()
    };
    let embedder = TextEmbedder::new(&model_dir.path().to_string_lossy(), options)?;
    assert_eq!(embedder.embed_one("today")?.ndim(), HIDDEN_SIZE);
    Ok(())
}

#[test]
fn options_deserialize_from_json() -> anyhow::Result<()> {
    let (weights, _pipeline) = tiny_bert(None)?;
    let dir = tempfile::tempdir()?;
    write_model_dir(dir.path(), &weights)?;

    let options: FeatureExtractionOptions =
        serde_json::from_str(r#"{"device": "cpu", "max_length": 3}"#)?;
    let embedder = TextEmbedder::new(&dir.path().to_string_lossy(), options)?;
    assert_eq!(embedder.extractor().special_tokens_mask("today is a nice day")?.len(), 3);
    Ok(())
}

#[test]
#[ignore = "downloads model weights from the Hugging Face Hub"]
fn hub_model_embeds_text() -> anyhow::Result<()> {
    let embedder = TextEmbedder::new("sentence-transformers/all-MiniLM-L6-v2", cpu_options())?;
    let set = embedder
        .embed(["day and night", "it is as clear as day"])?
        .into_set()
        .expect("set lookup");
    assert_eq!(set.len(), 2);
    assert!(set.iter().all(|emb| emb.ndim() == 384));
    Ok(())
}
