use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::classifiers::bayes::{DegenerateClassPolicy, GaussianNbParams};
use crate::streams::dataset::parse_state_line;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Train and run the Gaussian Naive Bayes lane-change intent classifier"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train on one dataset and report accuracy on another
    Evaluate(EvaluateArgs),
    /// Train on a dataset and classify a single observation
    Predict(PredictArgs),
    /// Train and evaluate on generated data
    Demo(DemoArgs),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct TrainingArgs {
    /// Training observations, one comma separated `s,d,s_dot,d_dot` per line
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub train_states: PathBuf,

    /// Training labels, one per line
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub train_labels: PathBuf,

    /// Fail training when a class has no observations
    #[arg(long)]
    pub reject_degenerate: bool,
}

impl TrainingArgs {
    pub fn params(&self) -> GaussianNbParams {
        let policy = if self.reject_degenerate {
            DegenerateClassPolicy::Reject
        } else {
            DegenerateClassPolicy::Propagate
        };
        GaussianNbParams::default().with_degenerate_classes(policy)
    }
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Hold-out observations
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub test_states: PathBuf,

    /// Hold-out labels
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub test_labels: PathBuf,

    /// Report format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Observation to classify, e.g. "3.5,0.1,8.5,-0.2"
    #[arg(long, value_name = "S,D,S_DOT,D_DOT", allow_hyphen_values = true)]
    pub observation: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}

impl PredictArgs {
    pub fn observation(&self) -> Result<Vec<f64>> {
        parse_state_line(&self.observation, 1)
            .with_context(|| format!("invalid --observation {:?}", self.observation))
    }
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Number of generated training rows
    #[arg(
        long,
        default_value_t = 750,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub samples: u64,

    /// Number of generated hold-out rows
    #[arg(
        long,
        default_value_t = 250,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub test_samples: u64,

    /// Seed for the generator
    #[arg(long, default_value_t = 42, value_name = "SEED")]
    pub seed: u64,

    /// Report format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}
