use crate::classifiers::classifier::label_for_votes;
use crate::core::estimators::GaussianEstimator;
use crate::core::label::Label;
use crate::error::Result;
use serde::ser::{Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Per-feature Gaussians for one class.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassStatistics {
    count: usize,
    features: Vec<GaussianEstimator>,
}

impl ClassStatistics {
    /// Fits every feature over the rows of `data` listed in `indices`.
    ///
    /// Every index must be in bounds and every selected row must hold at
    /// least `num_features` values; training validates both beforehand.
    pub(crate) fn fit<O: AsRef<[f64]>>(data: &[O], indices: &[usize], num_features: usize) -> Self {
        let features = (0..num_features)
            .map(|f| GaussianEstimator::fit(indices.iter().map(|&i| data[i].as_ref()[f])))
            .collect();
        Self {
            count: indices.len(),
            features,
        }
    }

    pub fn from_estimators(count: usize, features: Vec<GaussianEstimator>) -> Self {
        Self { count, features }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn features(&self) -> &[GaussianEstimator] {
        &self.features
    }

    pub fn means(&self) -> Vec<f64> {
        self.features.iter().map(GaussianEstimator::mean).collect()
    }

    pub fn variances(&self) -> Vec<f64> {
        self.features.iter().map(GaussianEstimator::variance).collect()
    }

    pub fn is_degenerate(&self) -> bool {
        self.count == 0 || self.features.iter().any(GaussianEstimator::is_degenerate)
    }

    /// Product of the per-feature densities (naive independence).
    ///
    /// Point-mass features are kept out of the product: an exact hit is
    /// counted, a miss zeroes the density.
    pub fn likelihood(&self, observation: &[f64]) -> Likelihood {
        let mut likelihood = Likelihood {
            point_masses: 0,
            density: 1.0,
        };
        for (g, &x) in self.features.iter().zip(observation) {
            if !g.is_point_mass() {
                likelihood.density *= g.probability_density(x);
            } else if x == g.mean() {
                likelihood.point_masses += 1;
            } else {
                likelihood.density *= 0.0;
            }
        }
        likelihood
    }
}

/// Class likelihood with infinite point-mass densities counted separately.
///
/// A likelihood with more point-mass hits outranks any finite density, so
/// `density` only decides between classes with the same hit count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Likelihood {
    pub point_masses: usize,
    pub density: f64,
}

/// Parameters learned by one call to `train`.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedModel {
    num_features: usize,
    priors: [f64; Label::COUNT],
    classes: [ClassStatistics; Label::COUNT],
}

impl FittedModel {
    pub fn new(
        num_features: usize,
        priors: [f64; Label::COUNT],
        classes: [ClassStatistics; Label::COUNT],
    ) -> Self {
        Self {
            num_features,
            priors,
            classes,
        }
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn priors(&self) -> &[f64; Label::COUNT] {
        &self.priors
    }

    pub fn prior(&self, label: Label) -> f64 {
        self.priors[label.index()]
    }

    pub fn class(&self, label: Label) -> &ClassStatistics {
        &self.classes[label.index()]
    }

    /// Classes whose statistics are NaN because they had no observations.
    pub fn degenerate_classes(&self) -> Vec<Label> {
        Label::ALL
            .into_iter()
            .filter(|l| self.class(*l).is_degenerate())
            .collect()
    }

    /// Unnormalized `prior * likelihood` per class.
    ///
    /// Only classes with the most point-mass hits among the nonzero
    /// likelihoods keep their score; the rest are multiplied by zero, which
    /// leaves NaN in place.
    pub fn joint_scores(&self, observation: &[f64]) -> [f64; Label::COUNT] {
        let likelihoods = Label::ALL.map(|l| self.class(l).likelihood(observation));
        let most_hits = likelihoods
            .iter()
            .filter(|lk| lk.density != 0.0)
            .map(|lk| lk.point_masses)
            .max()
            .unwrap_or(0);
        Label::ALL.map(|l| {
            let lk = likelihoods[l.index()];
            let weight = if lk.point_masses == most_hits { 1.0 } else { 0.0 };
            self.prior(l) * lk.density * weight
        })
    }

    /// Caller guarantees `observation.len() == self.num_features()`.
    pub fn posterior(&self, observation: &[f64]) -> Posterior {
        Posterior::from_scores(self.joint_scores(observation))
    }
}

/// Class probabilities for one observation, in `Label` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posterior {
    probabilities: [f64; Label::COUNT],
}

impl Posterior {
    /// Divides every score by their sum. A zero or NaN sum yields NaN
    /// everywhere, which still resolves to the first class.
    pub fn from_scores(scores: [f64; Label::COUNT]) -> Self {
        let normalization: f64 = scores.iter().sum();
        Self {
            probabilities: scores.map(|s| s / normalization),
        }
    }

    pub fn get(&self, label: Label) -> f64 {
        self.probabilities[label.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn is_finite(&self) -> bool {
        self.probabilities.iter().all(|p| p.is_finite())
    }

    pub fn argmax(&self) -> Result<Label> {
        label_for_votes(&self.probabilities)
    }
}

impl Display for Posterior {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, label) in Label::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let p = self.get(*label);
            if p.is_nan() {
                write!(f, "{label}=NaN")?;
            } else {
                write!(f, "{label}={p:.6}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Posterior {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(Label::ALL.iter().map(|l| (l, self.get(*l))))
    }
}
