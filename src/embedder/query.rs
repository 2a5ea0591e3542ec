use crate::core::{Embedding, EmbeddingSet};

/// Input to [`TextEmbedder::embed`](super::TextEmbedder::embed): one string or many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<'a> {
    Single(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(text: &'a str) -> Self {
        Query::Single(text)
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(text: &'a String) -> Self {
        Query::Single(text.as_str())
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for Query<'a> {
    fn from(texts: &'a [&'b str]) -> Self {
        Query::Many(texts.to_vec())
    }
}

impl<'a, 'b: 'a, const N: usize> From<&'a [&'b str; N]> for Query<'a> {
    fn from(texts: &'a [&'b str; N]) -> Self {
        Query::Many(texts.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Query<'a> {
    fn from(texts: [&'a str; N]) -> Self {
        Query::Many(texts.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for Query<'a> {
    fn from(texts: Vec<&'a str>) -> Self {
        Query::Many(texts)
    }
}

impl<'a> From<&'a [String]> for Query<'a> {
    fn from(texts: &'a [String]) -> Self {
        Query::Many(texts.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for Query<'a> {
    fn from(texts: &'a Vec<String>) -> Self {
        Query::from(texts.as_slice())
    }
}

/// Result of [`TextEmbedder::embed`](super::TextEmbedder::embed), mirroring the [`Query`] variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Single(Embedding),
    Set(EmbeddingSet),
}

impl Lookup {
    pub fn into_embedding(self) -> Option<Embedding> {
        match self {
            Lookup::Single(embedding) => Some(embedding),
            Lookup::Set(_) => None,
        }
    }

    pub fn into_set(self) -> Option<EmbeddingSet> {
        match self {
            Lookup::Single(_) => None,
            Lookup::Set(set) => Some(set),
        }
    }
}
