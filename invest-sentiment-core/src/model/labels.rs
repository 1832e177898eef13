use {
    std::{collections::HashMap, fmt},
    serde::{Serialize, Deserialize},
    tracing::warn,
    crate::error::{Error, Result},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LabelMappingEntry {
    pub code: i64,
    pub label: SentimentLabel,
}

/// Maps the classifier's numeric output space onto sentiment labels.
#[derive(Debug, Clone)]
pub struct LabelMapping {
    labels: HashMap<i64, SentimentLabel>,
}

impl SentimentLabel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Negative => "Negatif",
            Self::Neutral => "Netral",
            Self::Positive => "Positif",
            Self::Unknown => "Tidak diketahui",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Negative => "Negatif 👎",
            Self::Neutral => "Netral 😐",
            Self::Positive => "Positif 👍",
            Self::Unknown => "Tidak diketahui",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl LabelMappingEntry {
    pub fn new(code: i64, label: SentimentLabel) -> Self {
        Self {
            code,
            label,
        }
    }
}

impl LabelMapping {
    pub fn new(entries: &[LabelMappingEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::LabelMapping("no labels configured".to_owned()));
        }

        let mut labels = HashMap::new();
        for entry in entries {
            if !entry.label.is_known() {
                return Err(Error::LabelMapping(format!("code {} is mapped to the unknown label", entry.code)));
            }
            if labels.values().any(|label| *label == entry.label) {
                return Err(Error::LabelMapping(format!("label {:?} is mapped more than once", entry.label)));
            }
            if labels.insert(entry.code, entry.label).is_some() {
                return Err(Error::LabelMapping(format!("code {} is mapped more than once", entry.code)));
            }
        }

        Ok(Self {
            labels,
        })
    }

    /// Every class the classifier can emit must have a label.
    pub fn validate_classes(&self, classes: &[i64]) -> Result<()> {
        let missing: Vec<String> = classes.iter()
            .filter(|code| !self.labels.contains_key(code))
            .map(|code| code.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::LabelMapping(format!("classifier classes without a label: {}", missing.join(", "))));
        }

        for code in self.labels.keys() {
            if !classes.contains(code) {
                warn!("label mapping has code {} which the classifier never emits", code);
            }
        }

        Ok(())
    }

    pub fn resolve(&self, code: i64) -> SentimentLabel {
        match self.labels.get(&code) {
            Some(label) => *label,
            None => {
                warn!("classifier returned unmapped class code {}", code);
                SentimentLabel::Unknown
            }
        }
    }
}
