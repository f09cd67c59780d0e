mod fitted_model;
mod gaussian_naive_bayes;
mod params;

pub use fitted_model::{ClassStatistics, FittedModel, Likelihood, Posterior};
pub use gaussian_naive_bayes::GaussianNaiveBayes;
pub use params::{DegenerateClassPolicy, GaussianNbParams};
