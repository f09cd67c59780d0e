use crate::classifiers::Classifier;
use crate::core::label::Label;
use crate::error::Result;

pub struct ConstantClassifier {
    label: Label,
}

impl ConstantClassifier {
    pub fn new(label: Label) -> Self {
        Self { label }
    }
}

impl Classifier for ConstantClassifier {
    fn get_votes_for_observation(&self, _observation: &[f64]) -> Result<Vec<f64>> {
        let mut v = vec![0.0; Label::COUNT];
        v[self.label.index()] = 1.0;
        Ok(v)
    }

    fn train_on_dataset(&mut self, _data: &[Vec<f64>], labels: &[Label]) -> Result<()> {
        if let Some(first) = labels.first() {
            self.label = *first;
        }
        Ok(())
    }
}
