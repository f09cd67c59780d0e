use crate::classifiers::Classifier;
use crate::core::label::Label;
use crate::error::Result;

/// Returns no votes at all, so every prediction is an invalid classification.
#[derive(Default)]
pub struct ClassifierNoneVotes;

impl Classifier for ClassifierNoneVotes {
    fn train_on_dataset(&mut self, _data: &[Vec<f64>], _labels: &[Label]) -> Result<()> {
        Ok(())
    }

    fn get_votes_for_observation(&self, _observation: &[f64]) -> Result<Vec<f64>> {
        Ok(Vec::new())
    }
}
