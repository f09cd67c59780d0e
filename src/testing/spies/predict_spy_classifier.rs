use crate::classifiers::Classifier;
use crate::core::label::Label;
use crate::error::Result;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct PredictSpyHandle(Arc<AtomicU64>);
impl PredictSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Always votes for one label and counts how often it was asked.
pub struct PredictSpyClassifier {
    count: Arc<AtomicU64>,
    label: Label,
}

impl PredictSpyClassifier {
    pub fn new(label: Label) -> (Self, PredictSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                count: counter.clone(),
                label,
            },
            PredictSpyHandle(counter),
        )
    }
}

impl Classifier for PredictSpyClassifier {
    fn get_votes_for_observation(&self, _observation: &[f64]) -> Result<Vec<f64>> {
        self.count.fetch_add(1, Ordering::Relaxed);
        let mut v = vec![0.0; Label::COUNT];
        v[self.label.index()] = 1.0;
        Ok(v)
    }

    fn train_on_dataset(&mut self, _data: &[Vec<f64>], _labels: &[Label]) -> Result<()> {
        Ok(())
    }
}
