use {
    std::collections::BTreeMap,
    tracing::{info, debug},
    crate::{
        model::{SentimentLabel, SentimentModel},
        text::TextNormalizer,
    },
};

pub struct ReviewAnalysisPipeline<'a> {
    normalizer: &'a TextNormalizer,
    model: &'a SentimentModel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    NoValidInput,
    Analyzed(ReviewAnalysis),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAnalysis {
    pub comments: Vec<LabeledComment>,
    pub counts: LabelCounts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledComment {
    pub comment: String,
    pub normalized: String,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts {
    counts: BTreeMap<SentimentLabel, usize>,
}

impl<'a> ReviewAnalysisPipeline<'a> {
    pub fn new(normalizer: &'a TextNormalizer, model: &'a SentimentModel) -> Self {
        Self {
            normalizer,
            model,
        }
    }

    pub fn analyze(&self, raw_input: &str) -> AnalysisOutcome {
        let comments = split_comments(raw_input);
        if comments.is_empty() {
            return AnalysisOutcome::NoValidInput;
        }

        info!("analyzing {} comments", comments.len());

        let comments: Vec<LabeledComment> = comments.into_iter()
            .map(|comment| self.label_comment(comment))
            .collect();
        let counts = comments.iter().map(|comment| comment.label).collect();

        AnalysisOutcome::Analyzed(ReviewAnalysis {
            comments,
            counts,
        })
    }

    fn label_comment(&self, comment: &str) -> LabeledComment {
        let normalized = self.normalizer.normalize(comment);
        let label = self.model.classify(&normalized);
        debug!("{:?} -> {:?} -> {:?}", comment, normalized, label);

        LabeledComment {
            comment: comment.to_owned(),
            normalized,
            label,
        }
    }
}

/// Non-blank, trimmed lines of the user input. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_comments(raw_input: &str) -> Vec<&str> {
    raw_input.split(['\n', '\r'])
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect()
}

impl LabelCounts {
    pub fn get(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Labels with their counts, most frequent first.
    pub fn ranked(&self) -> Vec<(SentimentLabel, usize)> {
        let mut counts: Vec<_> = self.counts.iter().map(|(label, count)| (*label, *count)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    pub fn summary(&self) -> String {
        self.ranked()
            .into_iter()
            .map(|(label, count)| format!("{} {}", count, label.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<SentimentLabel> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for label in iter {
            *counts.entry(label).or_insert(0) += 1;
        }
        Self {
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::model::tests::test_model,
    };

    fn analyze(input: &str) -> AnalysisOutcome {
        let normalizer = TextNormalizer::default();
        let model = test_model();
        ReviewAnalysisPipeline::new(&normalizer, &model).analyze(input)
    }

    #[test]
    fn one_label_per_non_blank_line() {
        let input = "Aplikasinya bagus dan lancar!\n\n   \nJelek, lambat sekali\r\nbiasa saja\n";

        let analysis = match analyze(input) {
            AnalysisOutcome::Analyzed(analysis) => analysis,
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert_eq!(analysis.comments.len(), 3);
        assert_eq!(analysis.counts.total(), 3);

        assert_eq!(analysis.comments[0].comment, "Aplikasinya bagus dan lancar!");
        assert_eq!(analysis.comments[0].normalized, "aplikasi bagus lancar");
        assert_eq!(analysis.comments[0].label, SentimentLabel::Positive);
        assert_eq!(analysis.comments[1].label, SentimentLabel::Negative);
        assert_eq!(analysis.comments[2].comment, "biasa saja");
        assert_eq!(analysis.comments[2].label, SentimentLabel::Neutral);

        assert_eq!(analysis.counts.get(SentimentLabel::Positive), 1);
        assert_eq!(analysis.counts.get(SentimentLabel::Negative), 1);
        assert_eq!(analysis.counts.get(SentimentLabel::Neutral), 1);
        assert_eq!(analysis.counts.get(SentimentLabel::Unknown), 0);
    }

    #[test]
    fn blank_input_has_no_valid_comments() {
        assert_eq!(analyze("\n\n   \n"), AnalysisOutcome::NoValidInput);
        assert_eq!(analyze(""), AnalysisOutcome::NoValidInput);
    }

    #[test]
    fn comments_that_normalize_to_nothing_are_still_labeled() {
        match analyze("123 !!!\n😀") {
            AnalysisOutcome::Analyzed(analysis) => {
                assert_eq!(analysis.comments.len(), 2);
                assert!(analysis.comments.iter().all(|c| c.normalized.is_empty()));
                assert!(analysis.comments.iter().all(|c| c.label.is_known()));
            },
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn summary_lists_most_frequent_first() {
        let counts: LabelCounts = [
            SentimentLabel::Negative,
            SentimentLabel::Positive,
            SentimentLabel::Positive,
        ].into_iter().collect();

        assert_eq!(counts.summary(), "2 Positif, 1 Negatif");
        assert_eq!(counts.total(), 3);
        assert_eq!(LabelCounts::default().summary(), "");
    }

    #[test]
    fn split_trims_lines() {
        assert_eq!(split_comments("  satu \n\ndua\r\n \t \n"), vec!["satu", "dua"]);
        assert_eq!(split_comments("satu\rdua\r\rtiga"), vec!["satu", "dua", "tiga"]);
    }
}
