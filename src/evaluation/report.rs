use crate::core::label::Label;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassSummary {
    pub label: Label,
    /// Test rows whose true label is this class.
    pub support: u64,
    /// Test rows predicted as this class.
    pub predicted: u64,
    pub correct: u64,
    pub precision: f64,
    pub recall: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub instances_seen: u64,
    pub correct: u64,
    pub skipped: u64,
    pub accuracy: f64,
    pub classes: Vec<ClassSummary>,
    /// `confusion[actual][predicted]`, both in `Label` order.
    pub confusion: [[u64; Label::COUNT]; Label::COUNT],
}

impl EvaluationReport {
    #[inline]
    fn fmtv(v: f64) -> String {
        if v.is_nan() {
            "NaN".into()
        } else {
            format!("{:.6}", v)
        }
    }
}

impl Display for EvaluationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "seen={}, correct={}, acc={}",
            self.instances_seen,
            self.correct,
            Self::fmtv(self.accuracy)
        )?;
        if self.skipped > 0 {
            write!(f, ", skipped={}", self.skipped)?;
        }
        for c in &self.classes {
            write!(
                f,
                "\n  {:<5} support={} predicted={} precision={} recall={}",
                c.label,
                c.support,
                c.predicted,
                Self::fmtv(c.precision),
                Self::fmtv(c.recall)
            )?;
        }
        Ok(())
    }
}
