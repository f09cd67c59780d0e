use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// What `train` does with a class that received no observations.
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
pub enum DegenerateClassPolicy {
    /// Keep the NaN statistics; they surface as NaN posteriors at inference.
    #[default]
    Propagate,
    /// Fail training with `ClassifierError::DegenerateClass`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GaussianNbParams {
    pub degenerate_classes: DegenerateClassPolicy,
}

impl GaussianNbParams {
    pub fn with_degenerate_classes(mut self, policy: DegenerateClassPolicy) -> Self {
        self.degenerate_classes = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_to_propagate() {
        assert_eq!(
            GaussianNbParams::default().degenerate_classes,
            DegenerateClassPolicy::Propagate
        );
    }

    #[test]
    fn deserializes_kebab_case_and_fills_defaults() {
        let p: GaussianNbParams =
            serde_json::from_str(r#"{ "degenerate-classes": "reject" }"#).unwrap();
        assert_eq!(p.degenerate_classes, DegenerateClassPolicy::Reject);

        let empty: GaussianNbParams = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GaussianNbParams::default());
    }

    #[test]
    fn policy_parses_from_cli_strings() {
        assert_eq!(
            DegenerateClassPolicy::from_str("propagate").unwrap(),
            DegenerateClassPolicy::Propagate
        );
        assert_eq!(
            DegenerateClassPolicy::from_str("reject").unwrap(),
            DegenerateClassPolicy::Reject
        );
        assert!(DegenerateClassPolicy::from_str("ignore").is_err());
    }
}
