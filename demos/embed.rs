use transformer_lang::{FeatureExtractionOptions, TextEmbedder};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let model = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bert-base-cased".to_string());
    let embedder = TextEmbedder::new(&model, FeatureExtractionOptions::default())?;

    let anchor = embedder.embed_one("today is a nice day")?;
    let others = embedder.embed_many([
        "day and night",
        "it is as clear as day",
        "today the sky is clear",
        "I like firetrucks",
    ])?;

    // Rank by cosine similarity to the anchor
    let mut ranked: Vec<_> = others
        .iter()
        .map(|emb| (emb.name(), anchor.cosine_similarity(emb)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("{} ({} dimensions)", anchor, anchor.ndim());
    for (name, similarity) in ranked {
        println!("  {similarity:.4}  {name}");
    }

    Ok(())
}
