use crate::core::label::Label;
use crate::error::{ClassifierError, Result};

pub trait Classifier {
    fn train_on_dataset(&mut self, data: &[Vec<f64>], labels: &[Label]) -> Result<()>;

    /// One vote per class, in `Label` order.
    fn get_votes_for_observation(&self, observation: &[f64]) -> Result<Vec<f64>>;

    fn predict_observation(&self, observation: &[f64]) -> Result<Label> {
        let votes = self.get_votes_for_observation(observation)?;
        label_for_votes(&votes)
    }
}

/// Index of the first largest vote.
///
/// The running best is only replaced by a strictly greater vote, so ties go
/// to the earlier class and a NaN in front keeps its position. An empty
/// slice yields `0`, one past its end.
pub fn argmax(votes: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in votes.iter().enumerate().skip(1) {
        if votes[best] < v {
            best = i;
        }
    }
    best
}

pub fn label_for_votes(votes: &[f64]) -> Result<Label> {
    let index = argmax(votes);
    if index >= votes.len() {
        return Err(ClassifierError::InvalidClassification(index));
    }
    Label::from_index(index).ok_or(ClassifierError::InvalidClassification(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[0.1, 0.2, 0.7]), 2);
    }

    #[test]
    fn argmax_ties_go_to_first() {
        assert_eq!(argmax(&[0.5, 0.5, 0.0]), 0);
        assert_eq!(argmax(&[0.0, 0.5, 0.5]), 1);
        assert_eq!(argmax(&[1.0, 1.0, 1.0]), 0);
    }

    #[test]
    fn argmax_with_nan_first_keeps_first() {
        assert_eq!(argmax(&[f64::NAN, 0.9, 0.1]), 0);
        assert_eq!(argmax(&[0.2, f64::NAN, 0.1]), 0);
    }

    #[test]
    fn label_for_votes_maps_indices() {
        assert_eq!(label_for_votes(&[0.2, 0.3, 0.5]).unwrap(), Label::Right);
        assert_eq!(label_for_votes(&[0.2, 0.5, 0.3]).unwrap(), Label::Keep);
        assert_eq!(label_for_votes(&[0.5, 0.2, 0.3]).unwrap(), Label::Left);
    }

    #[test]
    fn label_for_votes_rejects_out_of_range_index() {
        assert_eq!(
            label_for_votes(&[0.1, 0.1, 0.1, 0.7]),
            Err(ClassifierError::InvalidClassification(3))
        );
        assert_eq!(
            label_for_votes(&[]),
            Err(ClassifierError::InvalidClassification(0))
        );
    }
}
