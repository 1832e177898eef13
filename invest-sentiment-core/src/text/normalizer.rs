use {
    std::fmt::Display,
    once_cell::sync::Lazy,
    regex::Regex,
    crate::{
        config::TextConfig,
        error::Result,
        text::{Stemmer, StopwordFilter},
    },
};

static NON_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("static pattern"));

/// Turns a raw review into the text the vectorizer was trained on.
///
/// Step order is part of the model contract: case folding, stripping everything that
/// is not an ASCII letter or whitespace, stopword removal and stemming.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stopwords: StopwordFilter,
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordFilter, stemmer: Stemmer) -> Self {
        Self {
            stopwords,
            stemmer,
        }
    }

    pub fn from_config(config: &TextConfig) -> Result<Self> {
        let stemmer = match config.root_words_path() {
            Some(path) => Stemmer::new().with_dictionary_file(path)?,
            None => Stemmer::new(),
        };

        Ok(Self::new(StopwordFilter::indonesian(), stemmer))
    }

    pub fn normalize(&self, text: impl Display) -> String {
        let text = text.to_string().to_lowercase();
        let text = NON_LETTERS.replace_all(&text, "");
        let text = self.stopwords.remove(&text);
        self.stemmer.stem_text(&text)
    }
}
