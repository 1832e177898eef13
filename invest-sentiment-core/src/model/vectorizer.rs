use {
    std::collections::{BTreeMap, HashMap},
    once_cell::sync::Lazy,
    regex::Regex,
    serde::Deserialize,
};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("static pattern"));

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Frozen TF-IDF transform exported from the training run.
#[derive(Deserialize, Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default = "default_norm")]
    norm: Option<Norm>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
}

/// Sparse feature vector, entries sorted by feature index.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self {
            vocabulary,
            idf,
            sublinear_tf: false,
            norm: default_norm(),
            ngram_range: default_ngram_range(),
        }
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    pub fn with_norm(mut self, norm: Option<Norm>) -> Self {
        self.norm = norm;
        self
    }

    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
        self.ngram_range = (min, max);
        self
    }

    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn validate(&self) -> Result<(), String> {
        let (min, max) = self.ngram_range;
        if min == 0 || min > max {
            return Err(format!("invalid ngram range ({}, {})", min, max));
        }

        if let Some((term, index)) = self.vocabulary.iter().find(|(_, index)| **index >= self.idf.len()) {
            return Err(format!("term {:?} has index {} outside of {} idf weights", term, index, self.idf.len()));
        }

        Ok(())
    }

    pub fn transform(&self, text: &str) -> FeatureVector {
        let tokens: Vec<&str> = TOKEN.find_iter(text).map(|m| m.as_str()).collect();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in ngrams(&tokens, self.ngram_range) {
            if let Some(index) = self.vocabulary.get(&term) {
                *counts.entry(*index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts.into_iter()
            .map(|(index, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (index, tf * self.idf[index])
            })
            .collect();

        if let Some(norm) = self.norm {
            let length = match norm {
                Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
                Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            };
            if length > 0.0 {
                for (_, value) in entries.iter_mut() {
                    *value /= length;
                }
            }
        }

        FeatureVector {
            dimension: self.dimension(),
            entries,
        }
    }
}

impl FeatureVector {
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries.iter()
            .filter_map(|(index, value)| weights.get(*index).map(|w| w * value))
            .sum()
    }
}

fn ngrams(tokens: &[&str], (min, max): (usize, usize)) -> Vec<String> {
    let mut terms = Vec::new();
    for n in min..=max {
        if n == 0 || n > tokens.len() {
            continue;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}
