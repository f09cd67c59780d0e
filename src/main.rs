use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use lane_intent::classifiers::GaussianNaiveBayes;
use lane_intent::classifiers::bayes::Posterior;
use lane_intent::core::Label;
use lane_intent::evaluation::{EvaluationReport, evaluate};
use lane_intent::streams::{Dataset, LaneChangeGenerator};
use lane_intent::ui::cli::args::{
    Cli, Command, DemoArgs, EvaluateArgs, OutputFormat, PredictArgs, TrainingArgs,
};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_GREY: &str = "\x1b[90m";

#[derive(Serialize)]
struct PredictionOutput {
    label: Label,
    posterior: Posterior,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Predict(args) => run_predict(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn train_from_files(args: &TrainingArgs) -> Result<GaussianNaiveBayes> {
    let dataset = Dataset::load(&args.train_states, &args.train_labels).with_context(|| {
        format!(
            "failed to load training data from {} and {}",
            args.train_states.display(),
            args.train_labels.display()
        )
    })?;

    let mut classifier = GaussianNaiveBayes::with_params(args.params());
    classifier
        .train(&dataset.states, &dataset.labels)
        .context("failed to train classifier")?;
    Ok(classifier)
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let classifier = train_from_files(&args.training)?;
    let test = Dataset::load(&args.test_states, &args.test_labels).with_context(|| {
        format!(
            "failed to load test data from {} and {}",
            args.test_states.display(),
            args.test_labels.display()
        )
    })?;

    let report =
        evaluate(&classifier, &test.states, &test.labels).context("failed to evaluate")?;
    emit_report("Hold-out Evaluation", &report, args.format)
}

fn run_predict(args: PredictArgs) -> Result<()> {
    let observation = args.observation()?;
    let classifier = train_from_files(&args.training)?;

    let posterior = classifier
        .predict_proba(&observation)
        .context("failed to classify observation")?;
    let label = posterior.argmax().context("failed to classify observation")?;

    match args.format {
        OutputFormat::Json => {
            let out = PredictionOutput { label, posterior };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            print_header("Prediction", &format!("observation={observation:?}"));
            println!("{FG_GREEN}{BOLD}{label}{RESET}  {DIM}{posterior}{RESET}");
            if !posterior.is_finite() {
                println!("{FG_YELLOW}posterior is not finite; a class may have no training data{RESET}");
            }
        }
    }
    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<()> {
    let mut generator = LaneChangeGenerator::new(args.seed);
    let (train_states, train_labels) = generator.generate(args.samples as usize);
    let (test_states, test_labels) = generator.generate(args.test_samples as usize);

    let mut classifier = GaussianNaiveBayes::new();
    classifier
        .train_labeled(&train_states, &train_labels)
        .context("failed to train classifier on generated data")?;

    let report =
        evaluate(&classifier, &test_states, &test_labels).context("failed to evaluate")?;
    emit_report(
        &format!(
            "Synthetic Demo {DIM}seed={} train={} test={}{RESET}",
            args.seed, args.samples, args.test_samples
        ),
        &report,
        args.format,
    )
}

fn emit_report(title: &str, report: &EvaluationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            print_header(title, "");
            println!("{report}");
        }
    }
    Ok(())
}

fn print_header(title: &str, detail: &str) {
    println!("{BOLD}{FG_CYAN}▶ {title}{RESET}  {DIM}{detail}{RESET}  {}", timestamp_now());
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
