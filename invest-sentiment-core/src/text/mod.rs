pub mod normalizer;
pub mod stemmer;
pub mod stopwords;

pub use {
    normalizer::TextNormalizer,
    stemmer::Stemmer,
    stopwords::StopwordFilter,
};
