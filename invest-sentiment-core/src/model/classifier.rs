use {
    serde::Deserialize,
    crate::model::vectorizer::FeatureVector,
};

/// Linear decision function exported from a trained SVM.
///
/// Multiclass models carry one coefficient row per class (one-vs-rest) and predict the
/// class with the highest score. Binary models carry a single row whose sign selects
/// between `classes[1]` (positive) and `classes[0]`.
#[derive(Deserialize, Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<i64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    pub fn new(classes: Vec<i64>, coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Self {
        Self {
            classes,
            coef,
            intercept,
        }
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.coef.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.len() < 2 {
            return Err(format!("expected at least 2 classes, got {}", self.classes.len()));
        }

        let expected_rows = if self.classes.len() == 2 { 1 } else { self.classes.len() };
        if self.coef.len() != expected_rows {
            return Err(format!("expected {} coefficient rows for {} classes, got {}", expected_rows, self.classes.len(), self.coef.len()));
        }
        if self.intercept.len() != expected_rows {
            return Err(format!("expected {} intercepts, got {}", expected_rows, self.intercept.len()));
        }

        let width = self.n_features();
        if self.coef.iter().any(|row| row.len() != width) {
            return Err("coefficient rows have different lengths".to_owned());
        }

        Ok(())
    }

    pub fn decision_function(&self, features: &FeatureVector) -> Vec<f64> {
        self.coef.iter()
            .zip(self.intercept.iter())
            .map(|(row, intercept)| features.dot(row) + intercept)
            .collect()
    }

    pub fn predict(&self, features: &FeatureVector) -> i64 {
        let scores = self.decision_function(features);

        if scores.len() == 1 {
            return if scores[0] > 0.0 { self.classes[1] } else { self.classes[0] };
        }

        // first class wins ties
        let mut best = 0;
        for (index, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = index;
            }
        }
        self.classes[best]
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::model::vectorizer::TfidfVectorizer,
    };

    fn vectorizer() -> TfidfVectorizer {
        let vocabulary = [("jelek", 0), ("biasa", 1), ("bagus", 2)]
            .into_iter()
            .map(|(term, index)| (term.to_owned(), index))
            .collect();
        TfidfVectorizer::new(vocabulary, vec![1.0, 1.0, 1.0])
    }

    fn three_class() -> LinearClassifier {
        LinearClassifier::new(
            vec![0, 1, 2],
            vec![
                vec![2.0, -1.0, -1.0],
                vec![-1.0, 2.0, -1.0],
                vec![-1.0, -1.0, 2.0],
            ],
            vec![0.0, 0.0, 0.0],
        )
    }

    #[test]
    fn picks_highest_scoring_class() {
        let classifier = three_class();
        let vectorizer = vectorizer();

        assert_eq!(classifier.predict(&vectorizer.transform("jelek")), 0);
        assert_eq!(classifier.predict(&vectorizer.transform("biasa")), 1);
        assert_eq!(classifier.predict(&vectorizer.transform("bagus bagus jelek")), 2);
    }

    #[test]
    fn empty_features_fall_back_to_intercepts() {
        let classifier = LinearClassifier::new(vec![0, 1, 2], three_class().coef, vec![-0.5, 0.3, 0.1]);

        assert_eq!(classifier.predict(&vectorizer().transform("")), 1);
        assert_eq!(classifier.decision_function(&vectorizer().transform("")), vec![-0.5, 0.3, 0.1]);
    }

    #[test]
    fn binary_model_uses_sign() {
        let classifier = LinearClassifier::new(vec![0, 2], vec![vec![-1.0, 0.0, 1.0]], vec![0.0]);

        assert!(classifier.validate().is_ok());
        assert_eq!(classifier.predict(&vectorizer().transform("bagus")), 2);
        assert_eq!(classifier.predict(&vectorizer().transform("jelek")), 0);
    }

    #[test]
    fn validate_checks_shapes() {
        assert!(three_class().validate().is_ok());
        assert_eq!(three_class().n_features(), 3);

        let missing_row = LinearClassifier::new(vec![0, 1, 2], vec![vec![1.0], vec![1.0]], vec![0.0, 0.0]);
        let ragged = LinearClassifier::new(vec![0, 1, 2], vec![vec![1.0], vec![1.0, 2.0], vec![1.0]], vec![0.0; 3]);
        let single_class = LinearClassifier::new(vec![0], vec![vec![1.0]], vec![0.0]);

        assert!(missing_row.validate().is_err());
        assert!(ragged.validate().is_err());
        assert!(single_class.validate().is_err());
    }
}
