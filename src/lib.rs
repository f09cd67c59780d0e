//! Gaussian Naive Bayes classifier for lane-change intent.
//!
//! A tracked vehicle's Frenet state (`s`, `d`, `s_dot`, `d_dot`) is
//! classified as `left`, `keep` or `right`. [`classifiers::GaussianNaiveBayes`]
//! is the model; the `streams`, `evaluation` and `ui` modules load data,
//! score hold-out sets and drive the `lane-intent` binary.

pub mod classifiers;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod streams;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::classifiers::{Classifier, GaussianNaiveBayes};
pub use crate::core::{FrenetState, Label};
pub use crate::error::{ClassifierError, Result};
