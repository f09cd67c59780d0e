mod evaluator;
mod report;

pub use evaluator::{BasicClassificationEvaluator, evaluate};
pub use report::{ClassSummary, EvaluationReport};
