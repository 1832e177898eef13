use {
    tracing::{info, error},
    invest_sentiment_core::{
        config::TextConfig,
        model::ModelHandle,
        pipeline::{AnalysisOutcome, ReviewAnalysisPipeline},
        text::TextNormalizer,
    },
    crate::render::{self, Severity},
};

pub const DEFAULT_INPUT: &str = "aplikasi yang dipakai lancar";

pub fn sentiment_panel(model: &ModelHandle, text_config: &TextConfig, input: &str) -> String {
    let mut out = render::header("Hasil Analisis");

    let normalizer = match TextNormalizer::from_config(text_config) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to prepare text normalizer: {}", err);
            out.push_str(&render::notice(Severity::Error, &format!("Kamus kata dasar tidak dapat dimuat: {}", err)));
            return out;
        }
    };

    let model = match model.get() {
        Ok(v) => v,
        Err(err) => {
            error!("failed to load sentiment model: {}", err);
            out.push_str(&render::notice(Severity::Error, &format!("Model tidak dapat dimuat: {}", err)));
            return out;
        }
    };

    let analysis = match ReviewAnalysisPipeline::new(&normalizer, model).analyze(input) {
        AnalysisOutcome::Analyzed(v) => v,
        AnalysisOutcome::NoValidInput => {
            out.push_str(&render::notice(Severity::Warning, "Mohon masukkan teks terlebih dahulu."));
            return out;
        }
    };

    info!("sentiment summary: {}", analysis.counts.summary());

    for comment in &analysis.comments {
        out.push_str(&render::notice(
            Severity::for_label(comment.label),
            &format!("Sentimen: {} ({})", comment.label, comment.comment),
        ));
        out.push_str(&format!("    Teks yang diproses model: {}\n", comment.normalized));
    }

    if analysis.comments.len() > 1 {
        out.push_str(&format!("\nRingkasan: {}\n", analysis.counts.summary()));
    }

    out
}

#[cfg(test)]
mod tests {
    use {
        invest_sentiment_core::{
            config::Config,
            error::Error,
            model::{LabelMapping, LabelMappingEntry, LinearClassifier, SentimentLabel, SentimentModel, TfidfVectorizer},
        },
        super::*,
    };

    fn model() -> SentimentModel {
        let vocabulary = [("lambat", 0), ("lancar", 1)]
            .into_iter()
            .map(|(term, index)| (term.to_owned(), index))
            .collect();
        let labels = LabelMapping::new(&[
            LabelMappingEntry::new(0, SentimentLabel::Negative),
            LabelMappingEntry::new(1, SentimentLabel::Neutral),
            LabelMappingEntry::new(2, SentimentLabel::Positive),
        ]).unwrap();

        SentimentModel::new(
            TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]),
            LinearClassifier::new(vec![0, 1, 2], vec![vec![1.0, -1.0], vec![0.0, 0.0], vec![-1.0, 1.0]], vec![0.0, 0.1, 0.0]),
            labels,
        ).unwrap()
    }

    #[test]
    fn renders_label_and_processed_text() {
        let handle = ModelHandle::with_loader(|| Ok(model()));

        let out = sentiment_panel(&handle, &TextConfig::default(), DEFAULT_INPUT);

        assert!(out.contains("[ok] Sentimen: Positif 👍 (aplikasi yang dipakai lancar)"));
        assert!(out.contains("Teks yang diproses model: aplikasi pakai lancar"));
        assert!(!out.contains("Ringkasan"));
    }

    #[test]
    fn summarizes_multiple_comments() {
        let handle = ModelHandle::with_loader(|| Ok(model()));

        let out = sentiment_panel(&handle, &TextConfig::default(), "lancar\nlambat sekali\nlancar jaya");

        assert!(out.contains("[x] Sentimen: Negatif 👎 (lambat sekali)"));
        assert!(out.contains("Ringkasan: 2 Positif, 1 Negatif"));
    }

    #[test]
    fn blank_input_is_a_warning() {
        let handle = ModelHandle::with_loader(|| Ok(model()));

        let out = sentiment_panel(&handle, &TextConfig::default(), " \n\n");

        assert!(out.contains("[!] Mohon masukkan teks terlebih dahulu."));
    }

    #[test]
    fn missing_model_is_a_notice() {
        let handle = ModelHandle::with_loader(|| Err(Error::artifact_missing("model_svm.json", "No such file or directory")));

        let out = sentiment_panel(&handle, &TextConfig::default(), DEFAULT_INPUT);

        assert!(out.contains("[x] Model tidak dapat dimuat"));
        assert!(out.contains("model_svm.json"));
    }

    #[test]
    fn missing_root_words_file_is_a_notice() {
        let config = Config::from_toml("[text]\nroot_words_path = \"/nonexistent/kata-dasar.txt\"\n").unwrap();
        let handle = ModelHandle::with_loader(|| Ok(model()));

        let out = sentiment_panel(&handle, &config.text, DEFAULT_INPUT);

        assert!(out.contains("[x] Kamus kata dasar tidak dapat dimuat"));
    }
}
