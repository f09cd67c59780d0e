use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: field {field} is not a number ({value:?}): {source}")]
    InvalidNumber {
        line: usize,
        field: usize,
        value: String,
        source: ParseFloatError,
    },

    #[error("line {line}: expected {expected} features, found {found}")]
    FeatureCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{states} states but {labels} labels")]
    LengthMismatch { states: usize, labels: usize },
}

pub(super) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('#')
}

/// Splits one comma separated line into floats. `line_no` is 1-based and
/// only used for error reporting.
pub fn parse_state_line(line: &str, line_no: usize) -> Result<Vec<f64>, DatasetError> {
    line.split(',')
        .enumerate()
        .map(|(field, raw)| {
            let value = raw.trim();
            value
                .parse::<f64>()
                .map_err(|source| DatasetError::InvalidNumber {
                    line: line_no,
                    field,
                    value: value.to_string(),
                    source,
                })
        })
        .collect()
}

pub(super) fn parse_label_line(line: &str) -> String {
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_and_blank_lines_are_skipped() {
        assert!(is_comment_or_empty(""));
        assert!(is_comment_or_empty("   \t"));
        assert!(is_comment_or_empty("# s,d,s_dot,d_dot"));
        assert!(!is_comment_or_empty("1,2,3,4"));
    }

    #[test]
    fn parses_fields_ignoring_whitespace() {
        let v = parse_state_line(" 3.5, 0.1 ,5.9,-0.02 ", 1).unwrap();
        assert_eq!(v, vec![3.5, 0.1, 5.9, -0.02]);
    }

    #[test]
    fn reports_line_and_field_of_bad_number() {
        let err = parse_state_line("1.0,abc,3.0", 7).unwrap_err();
        match err {
            DatasetError::InvalidNumber {
                line, field, value, ..
            } => {
                assert_eq!(line, 7);
                assert_eq!(field, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_field_is_invalid() {
        assert!(matches!(
            parse_state_line("1.0,,3.0", 2),
            Err(DatasetError::InvalidNumber { field: 1, .. })
        ));
    }

    #[test]
    fn label_line_is_trimmed() {
        assert_eq!(parse_label_line("  keep\r"), "keep");
    }
}
