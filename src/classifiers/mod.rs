pub mod bayes;
pub mod classifier;

pub use bayes::GaussianNaiveBayes;
pub use classifier::Classifier;
