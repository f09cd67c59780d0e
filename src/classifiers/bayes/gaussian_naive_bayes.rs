use crate::classifiers::bayes::fitted_model::{ClassStatistics, FittedModel, Posterior};
use crate::classifiers::bayes::params::{DegenerateClassPolicy, GaussianNbParams};
use crate::classifiers::classifier::Classifier;
use crate::core::label::Label;
use crate::error::{ClassifierError, Result};
use log::{debug, warn};
use std::str::FromStr;

/// Gaussian Naive Bayes over the three lane-change intents.
///
/// Starts untrained; a successful [`train`](Self::train) installs a
/// [`FittedModel`] that stays untouched until the next successful `train`.
/// A failed `train` leaves the previous state as it was.
#[derive(Clone, Debug, Default)]
pub struct GaussianNaiveBayes {
    params: GaussianNbParams,
    model: Option<FittedModel>,
}

impl GaussianNaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: GaussianNbParams) -> Self {
        Self {
            params,
            model: None,
        }
    }

    pub fn params(&self) -> &GaussianNbParams {
        &self.params
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&FittedModel> {
        self.model.as_ref()
    }

    /// Fits the model from observations and their label strings.
    ///
    /// Labels other than `left`, `keep` and `right` are left out of every
    /// class but still count towards the total used for the priors.
    pub fn train<O, S>(&mut self, data: &[O], labels: &[S]) -> Result<()>
    where
        O: AsRef<[f64]>,
        S: AsRef<str>,
    {
        let parsed: Vec<Option<Label>> = labels
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let raw = raw.as_ref();
                let label = Label::from_str(raw).ok();
                if label.is_none() {
                    warn!("row {i}: unrecognized label {raw:?} excluded from class statistics");
                }
                label
            })
            .collect();
        self.install(data, &parsed)
    }

    pub fn train_labeled<O: AsRef<[f64]>>(&mut self, data: &[O], labels: &[Label]) -> Result<()> {
        let parsed: Vec<Option<Label>> = labels.iter().copied().map(Some).collect();
        self.install(data, &parsed)
    }

    pub fn predict(&self, observation: &[f64]) -> Result<Label> {
        self.predict_proba(observation)?.argmax()
    }

    pub fn predict_proba(&self, observation: &[f64]) -> Result<Posterior> {
        let model = self.model.as_ref().ok_or(ClassifierError::NotTrained)?;
        if observation.len() != model.num_features() {
            return Err(ClassifierError::ObservationLength {
                expected: model.num_features(),
                found: observation.len(),
            });
        }
        Ok(model.posterior(observation))
    }

    fn install<O: AsRef<[f64]>>(&mut self, data: &[O], labels: &[Option<Label>]) -> Result<()> {
        let model = fit(data, labels, &self.params)?;
        self.model = Some(model);
        Ok(())
    }
}

fn validate<O: AsRef<[f64]>>(data: &[O], num_labels: usize) -> Result<usize> {
    let first = data.first().ok_or(ClassifierError::EmptyTrainingSet)?;
    if data.len() != num_labels {
        return Err(ClassifierError::LengthMismatch {
            observations: data.len(),
            labels: num_labels,
        });
    }

    let num_features = first.as_ref().len();
    if num_features == 0 {
        return Err(ClassifierError::NoFeatures);
    }
    if let Some((index, row)) = data
        .iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != num_features)
    {
        return Err(ClassifierError::FeatureCountMismatch {
            index,
            expected: num_features,
            found: row.as_ref().len(),
        });
    }
    Ok(num_features)
}

fn fit<O: AsRef<[f64]>>(
    data: &[O],
    labels: &[Option<Label>],
    params: &GaussianNbParams,
) -> Result<FittedModel> {
    let num_features = validate(data, labels.len())?;
    let n = labels.len() as f64;

    let mut members: [Vec<usize>; Label::COUNT] = Default::default();
    for (i, label) in labels.iter().enumerate() {
        if let Some(label) = label {
            members[label.index()].push(i);
        }
    }

    let priors = Label::ALL.map(|l| members[l.index()].len() as f64 / n);
    let classes =
        Label::ALL.map(|l| ClassStatistics::fit(data, &members[l.index()], num_features));

    let model = FittedModel::new(num_features, priors, classes);

    for label in model.degenerate_classes() {
        if params.degenerate_classes == DegenerateClassPolicy::Reject {
            return Err(ClassifierError::DegenerateClass(label));
        }
        warn!("class `{label}` has no training observations; its posterior will be NaN");
    }

    debug!(
        "fitted {} observations with {} features, priors left={:.4} keep={:.4} right={:.4}",
        labels.len(),
        num_features,
        priors[0],
        priors[1],
        priors[2]
    );
    Ok(model)
}

impl Classifier for GaussianNaiveBayes {
    fn train_on_dataset(&mut self, data: &[Vec<f64>], labels: &[Label]) -> Result<()> {
        self.train_labeled(data, labels)
    }

    fn get_votes_for_observation(&self, observation: &[f64]) -> Result<Vec<f64>> {
        Ok(self.predict_proba(observation)?.as_slice().to_vec())
    }

    fn predict_observation(&self, observation: &[f64]) -> Result<Label> {
        self.predict(observation)
    }
}
