use crate::classifiers::Classifier;
use crate::core::label::Label;
use crate::error::{ClassifierError, Result};
use crate::evaluation::report::{ClassSummary, EvaluationReport};
use log::warn;
use std::str::FromStr;

/// Accumulates hold-out predictions into a confusion matrix.
#[derive(Clone, Debug, Default)]
pub struct BasicClassificationEvaluator {
    confusion: [[u64; Label::COUNT]; Label::COUNT],
    skipped: u64,
}

impl BasicClassificationEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, actual: Label, predicted: Label) {
        self.confusion[actual.index()][predicted.index()] += 1;
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn instances_seen(&self) -> u64 {
        self.confusion.iter().flatten().sum()
    }

    pub fn correct(&self) -> u64 {
        (0..Label::COUNT).map(|k| self.confusion[k][k]).sum()
    }

    /// NaN until something has been seen.
    pub fn accuracy(&self) -> f64 {
        self.correct() as f64 / self.instances_seen() as f64
    }

    pub fn report(&self) -> EvaluationReport {
        let classes = Label::ALL
            .iter()
            .map(|&label| {
                let k = label.index();
                let support: u64 = self.confusion[k].iter().sum();
                let predicted: u64 = self.confusion.iter().map(|row| row[k]).sum();
                let correct = self.confusion[k][k];
                ClassSummary {
                    label,
                    support,
                    predicted,
                    correct,
                    precision: correct as f64 / predicted as f64,
                    recall: correct as f64 / support as f64,
                }
            })
            .collect();

        EvaluationReport {
            instances_seen: self.instances_seen(),
            correct: self.correct(),
            skipped: self.skipped,
            accuracy: self.accuracy(),
            classes,
            confusion: self.confusion,
        }
    }
}

/// Predicts every row of a hold-out set and scores it against `labels`.
///
/// Rows whose label is not a known class are counted as skipped. The first
/// prediction error aborts the evaluation, and so does a label count that
/// differs from the number of states.
pub fn evaluate<S: AsRef<str>>(
    classifier: &dyn Classifier,
    states: &[Vec<f64>],
    labels: &[S],
) -> Result<EvaluationReport> {
    if states.len() != labels.len() {
        return Err(ClassifierError::LengthMismatch {
            observations: states.len(),
            labels: labels.len(),
        });
    }

    let mut evaluator = BasicClassificationEvaluator::new();
    for (i, (state, raw)) in states.iter().zip(labels).enumerate() {
        let Ok(actual) = Label::from_str(raw.as_ref()) else {
            warn!("test row {i}: unrecognized label {:?} skipped", raw.as_ref());
            evaluator.add_skipped();
            continue;
        };
        let predicted = classifier.predict_observation(state)?;
        evaluator.add_result(actual, predicted);
    }
    Ok(evaluator.report())
}
