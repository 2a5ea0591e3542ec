use std::ops::Index;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
/// A string paired with its pooled vector representation.
pub struct Embedding {
    name: String,
    vector: Vec<f32>,
}

impl Embedding {
    /// Create a new embedding.
    pub fn new(name: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            vector,
        }
    }

    /// The string this embedding represents.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pooled vector.
    pub fn vector(&self) -> &[f32] {
        &self.vector
    }

    /// Number of dimensions of the vector.
    pub fn ndim(&self) -> usize {
        self.vector.len()
    }

    /// Euclidean norm of the vector.
    pub fn norm(&self) -> f32 {
        self.vector.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Cosine similarity with another embedding.
    ///
    /// Returns `0.0` when either vector has zero norm or the dimensions differ.
    pub fn cosine_similarity(&self, other: &Embedding) -> f32 {
        if self.ndim() != other.ndim() {
            return 0.0;
        }
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        let dot: f32 = self
            .vector
            .iter()
            .zip(other.vector.iter())
            .map(|(a, b)| a * b)
            .sum();
        dot / denom
    }

    /// Split into name and vector.
    pub fn into_parts(self) -> (String, Vec<f32>) {
        (self.name, self.vector)
    }
}

impl std::fmt::Display for Embedding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Emb[{}]", self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// An ordered collection of embeddings, one per looked-up string.
///
/// Input order is preserved and repeated names are kept as separate entries.
pub struct EmbeddingSet {
    embeddings: Vec<Embedding>,
}

impl EmbeddingSet {
    pub fn new(embeddings: Vec<Embedding>) -> Self {
        Self { embeddings }
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Embedding> {
        self.embeddings.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.embeddings.iter().map(Embedding::name).collect()
    }

    /// First embedding whose name equals `name`.
    pub fn get(&self, name: &str) -> Option<&Embedding> {
        self.embeddings.iter().find(|e| e.name() == name)
    }

    pub fn as_slice(&self) -> &[Embedding] {
        &self.embeddings
    }

    pub fn into_vec(self) -> Vec<Embedding> {
        self.embeddings
    }
}

impl Index<usize> for EmbeddingSet {
    type Output = Embedding;

    fn index(&self, index: usize) -> &Self::Output {
        &self.embeddings[index]
    }
}

impl FromIterator<Embedding> for EmbeddingSet {
    fn from_iter<I: IntoIterator<Item = Embedding>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for EmbeddingSet {
    type Item = Embedding;
    type IntoIter = std::vec::IntoIter<Embedding>;

    fn into_iter(self) -> Self::IntoIter {
        self.embeddings.into_iter()
    }
}

impl<'a> IntoIterator for &'a EmbeddingSet {
    type Item = &'a Embedding;
    type IntoIter = std::slice::Iter<'a, Embedding>;

    fn into_iter(self) -> Self::IntoIter {
        self.embeddings.iter()
    }
}
