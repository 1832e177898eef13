pub mod classifier;
pub mod labels;
pub mod vectorizer;

use {
    std::{fs::read_to_string, path::Path, time::Instant},
    once_cell::sync::OnceCell,
    serde::de::DeserializeOwned,
    tracing::info,
    crate::{
        config::ModelConfig,
        error::{Error, Result},
    },
};

pub use {
    classifier::LinearClassifier,
    labels::{LabelMapping, LabelMappingEntry, SentimentLabel},
    vectorizer::{FeatureVector, Norm, TfidfVectorizer},
};

/// Vectorizer and classifier pair. Both come from the same training run and are
/// only valid together.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
    labels: LabelMapping,
}

type Loader = Box<dyn Fn() -> Result<SentimentModel> + Send + Sync>;

/// Loads the model on first use and keeps it for the rest of the process.
///
/// Concurrent first callers wait for the same load. A failed load is not cached, the
/// next caller tries again.
pub struct ModelHandle {
    loader: Loader,
    model: OnceCell<SentimentModel>,
}

impl SentimentModel {
    pub fn new(vectorizer: TfidfVectorizer, classifier: LinearClassifier, labels: LabelMapping) -> Result<Self> {
        vectorizer.validate().map_err(|reason| Error::InvalidArtifact { artifact: "vectorizer", reason })?;
        classifier.validate().map_err(|reason| Error::InvalidArtifact { artifact: "classifier", reason })?;

        if classifier.n_features() != vectorizer.dimension() {
            return Err(Error::ArtifactMismatch {
                classifier_features: classifier.n_features(),
                vectorizer_features: vectorizer.dimension(),
            });
        }
        labels.validate_classes(classifier.classes())?;

        Ok(Self {
            vectorizer,
            classifier,
            labels,
        })
    }

    pub fn load(config: &ModelConfig) -> Result<Self> {
        let started_at = Instant::now();

        let vectorizer: TfidfVectorizer = read_artifact(&config.vectorizer_path())?;
        let classifier: LinearClassifier = read_artifact(&config.classifier_path())?;

        let labels = LabelMapping::new(&config.labels())?;
        let model = Self::new(vectorizer, classifier, labels)?;

        info!(
            "loaded sentiment model with {} features and {} classes in {:.2}s",
            model.vectorizer.dimension(),
            model.classifier.classes().len(),
            started_at.elapsed().as_secs_f32(),
        );

        Ok(model)
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &LinearClassifier {
        &self.classifier
    }

    /// Labels already normalized text.
    pub fn classify(&self, normalized: &str) -> SentimentLabel {
        let features = self.vectorizer.transform(normalized);
        let code = self.classifier.predict(&features);
        self.labels.resolve(code)
    }
}

impl ModelHandle {
    pub fn new(config: ModelConfig) -> Self {
        Self::with_loader(move || SentimentModel::load(&config))
    }

    pub fn with_loader(loader: impl Fn() -> Result<SentimentModel> + Send + Sync + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            model: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<&SentimentModel> {
        self.model.get_or_try_init(|| (self.loader)())
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_to_string(path).map_err(|err| Error::artifact_missing(path, err))?;
    serde_json::from_str(&contents).map_err(|err| Error::artifact_missing(path, err))
}
