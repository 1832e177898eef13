use {
    std::path::PathBuf,
    thiserror::Error,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("model artifact {path} could not be loaded: {reason}")]
    ArtifactMissing {
        path: PathBuf,
        reason: String,
    },

    #[error("{artifact} artifact is malformed: {reason}")]
    InvalidArtifact {
        artifact: &'static str,
        reason: String,
    },

    #[error("classifier expects {classifier_features} features but vectorizer produces {vectorizer_features}")]
    ArtifactMismatch {
        classifier_features: usize,
        vectorizer_features: usize,
    },

    #[error("invalid label mapping: {0}")]
    LabelMapping(String),

    #[error("failed to fetch {package_id}: {reason}")]
    Fetch {
        package_id: String,
        reason: String,
    },

    #[error("dataset file not found: {0}")]
    DatasetMissing(PathBuf),

    #[error("dataset has no `{column}` column")]
    SchemaMismatch {
        column: String,
    },

    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn artifact_missing(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ArtifactMissing {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn fetch(package_id: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            package_id: package_id.to_owned(),
            reason: reason.to_string(),
        }
    }
}
