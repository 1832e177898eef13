use {
    std::{fs::read_to_string, path::PathBuf},
    tracing::warn,
    serde::Deserialize,
    crate::{
        catalog::AppEntry,
        model::{LabelMappingEntry, SentimentLabel},
    },
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ModelConfig {
    classifier_path: Option<PathBuf>,
    vectorizer_path: Option<PathBuf>,
    labels: Option<Vec<LabelMappingEntry>>,
}

/// The built-in stemmer dictionary only covers common review vocabulary. Point
/// `root_words_path` at a full Indonesian root word list (one word per line) to stem
/// text the same way the training data was stemmed.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct TextConfig {
    root_words_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatasetConfig {
    path: Option<PathBuf>,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default = "default_top_tokens")]
    pub top_tokens: usize,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct CatalogConfig {
    endpoint: Option<String>,
    language: Option<String>,
    country: Option<String>,
    apps: Option<Vec<AppEntry>>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            preview_rows: default_preview_rows(),
            top_tokens: default_top_tokens(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::from_toml(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn from_toml(source: &str) -> Result<Self, String> {
        toml::from_str(source).map_err(|err| err.to_string())
    }

    pub fn catalog(&self) -> CatalogConfig {
        self.catalog.as_ref().cloned().unwrap_or_default()
    }
}

impl ModelConfig {
    pub fn classifier_path(&self) -> PathBuf {
        self.classifier_path.clone().unwrap_or_else(|| PathBuf::from("model_svm.json"))
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.vectorizer_path.clone().unwrap_or_else(|| PathBuf::from("vectorizer.json"))
    }

    pub fn labels(&self) -> Vec<LabelMappingEntry> {
        self.labels.clone().unwrap_or_else(default_labels)
    }
}

impl TextConfig {
    pub fn root_words_path(&self) -> Option<&PathBuf> {
        self.root_words_path.as_ref()
    }

    pub fn uses_builtin_dictionary_only(&self) -> bool {
        self.root_words_path.is_none()
    }
}

impl DatasetConfig {
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("Data ulasan Ranking 1.csv"))
    }
}

impl CatalogConfig {
    pub fn endpoint(&self) -> String {
        self.endpoint.as_ref().cloned().unwrap_or("https://play.google.com/store/apps/details".to_owned())
    }

    pub fn language(&self) -> String {
        self.language.as_ref().cloned().unwrap_or("id".to_owned())
    }

    pub fn country(&self) -> String {
        self.country.as_ref().cloned().unwrap_or("id".to_owned())
    }

    pub fn apps(&self) -> Vec<AppEntry> {
        self.apps.as_ref().cloned().unwrap_or_else(default_apps)
    }
}

fn default_preview_rows() -> usize {
    5
}

fn default_top_tokens() -> usize {
    10
}

// must match the encoding the classifier was trained with
fn default_labels() -> Vec<LabelMappingEntry> {
    vec![
        LabelMappingEntry::new(0, SentimentLabel::Negative),
        LabelMappingEntry::new(1, SentimentLabel::Neutral),
        LabelMappingEntry::new(2, SentimentLabel::Positive),
    ]
}

fn default_apps() -> Vec<AppEntry> {
    [
        ("Ajaib", "ajaib.co.id"),
        ("Bibit", "com.bibit.bibitid"),
        ("Bareksa", "com.bareksa.app"),
        ("IPOT (IndoPremier)", "com.indopremier.ipot"),
        ("Stockbit", "com.stockbit.android"),
        ("Pluang", "com.EmasDigi"),
        ("MOST (Mandiri Sekuritas)", "com.mandirisekuritas.most"),
        ("BIONS (BNI Sekuritas)", "id.zaisan.android"),
        ("RHB Tradesmart ID", "com.rhbsyariah.tradesmart"),
        ("POEMS ID (Phillip Sekuritas)", "com.phillip.prima"),
        ("Mirae HOTS Mobile", "id.co.miraeassetdaewoo"),
        ("Trima (Trimegah Sekuritas)", "com.trimegah.trima"),
        ("MotionTrade (MNC Sekuritas)", "com.mncsecurities.mnctrade"),
        ("CGS-CIMB iTrade", "id.co.cimbniaga.mobile.android"),
        ("Sinarmas Sekuritas", "com.simas.siminvest"),
        ("IDX Mobile", "id.co.idx.idxmobile"),
        ("Nanovest", "com.nanovest.prod"),
        ("Hero Investment", "kr.co.daou.kiwoomherosg"),
        ("InvestASIK (Danareksa)", "com.danareksa.investasik"),
        ("BEST Mobile (BCA Sekuritas)", "com.bcasekuritas.mybest"),
    ]
        .into_iter()
        .map(|(name, package_id)| AppEntry::new(name, package_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.model.classifier_path(), PathBuf::from("model_svm.json"));
        assert_eq!(config.model.vectorizer_path(), PathBuf::from("vectorizer.json"));
        assert_eq!(config.model.labels().len(), 3);
        assert_eq!(config.dataset.path(), PathBuf::from("Data ulasan Ranking 1.csv"));
        assert_eq!(config.dataset.preview_rows, 5);
        assert_eq!(config.catalog().apps().len(), 20);
        assert_eq!(config.catalog().language(), "id");
        assert_eq!(config.catalog().country(), "id");
        assert!(config.text.root_words_path().is_none());
        assert!(config.text.uses_builtin_dictionary_only());
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml(r#"
[model]
classifier_path = "artifacts/svm.json"
labels = [
    { code = 2, label = "negative" },
    { code = 0, label = "positive" },
]

[dataset]
path = "ulasan.csv"
preview_rows = 3

[catalog]
country = "sg"
apps = [ { name = "Bibit", package_id = "com.bibit.bibitid" } ]
"#).unwrap();

        assert_eq!(config.model.classifier_path(), PathBuf::from("artifacts/svm.json"));
        assert_eq!(config.model.vectorizer_path(), PathBuf::from("vectorizer.json"));
        assert_eq!(config.model.labels()[0], LabelMappingEntry::new(2, SentimentLabel::Negative));
        assert_eq!(config.dataset.path(), PathBuf::from("ulasan.csv"));
        assert_eq!(config.dataset.preview_rows, 3);
        assert_eq!(config.dataset.top_tokens, 10);

        let catalog = config.catalog();
        assert_eq!(catalog.country(), "sg");
        assert_eq!(catalog.language(), "id");
        assert_eq!(catalog.apps(), vec![AppEntry::new("Bibit", "com.bibit.bibitid")]);
    }

    #[test]
    fn root_words_file_extends_builtin_dictionary() {
        let config = Config::from_toml("[text]\nroot_words_path = \"kata-dasar.txt\"\n").unwrap();

        assert_eq!(config.text.root_words_path(), Some(&PathBuf::from("kata-dasar.txt")));
        assert!(!config.text.uses_builtin_dictionary_only());
    }

    #[test]
    fn omitted_sections_match_default_config() {
        let config = Config::from_toml("[dataset]\npreview_rows = 2\n").unwrap();

        assert_eq!(config.model.classifier_path(), ModelConfig::default().classifier_path());
        assert_eq!(config.catalog().endpoint(), CatalogConfig::default().endpoint());
        assert_eq!(CatalogConfig::default().apps().len(), 20);
    }

    #[test]
    fn malformed_config_is_reported() {
        assert!(Config::from_toml("[model\nclassifier_path = 1").is_err());
    }
}
