//! Feature names for bag-of-words inputs
//!
//! Renderers only need the ordered list of feature names. [`Vocabulary`]
//! produces such a list from a corpus, together with the binary vectors the
//! explainer consumes.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

/// Words of two or more word characters
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid token regex"));

/// Ordered feature names, positionally aligned with feature vectors
pub trait FeatureNames {
    fn feature_names(&self) -> &[String];
}

impl FeatureNames for [String] {
    fn feature_names(&self) -> &[String] {
        self
    }
}

impl FeatureNames for Vec<String> {
    fn feature_names(&self) -> &[String] {
        self
    }
}

/// Lowercase tokens of `text`, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sorted vocabulary learned from a corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collect every distinct token of the documents, sorted
    pub fn fit<I, D>(documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let names: BTreeSet<String> = documents
            .into_iter()
            .flat_map(|doc| tokenize(doc.as_ref()))
            .collect();
        Self::from_names(names.into_iter().collect())
    }

    /// Use `names` as-is, in the given order
    pub fn from_names(names: Vec<String>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Vocabulary { names, index }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Binary presence vector of `document` over this vocabulary
    ///
    /// Tokens missing from the vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.names.len()];
        for token in tokenize(document) {
            if let Some(i) = self.index_of(&token) {
                vector[i] = 1.0;
            }
        }
        vector
    }
}

impl FeatureNames for Vocabulary {
    fn feature_names(&self) -> &[String] {
        &self.names
    }
}
