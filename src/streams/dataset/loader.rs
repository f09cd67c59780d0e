use crate::streams::dataset::parser::{
    DatasetError, is_comment_or_empty, parse_label_line, parse_state_line,
};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Observations and their raw label strings, index aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub states: Vec<Vec<f64>>,
    pub labels: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Loads a states file and a labels file and checks they line up.
    pub fn load(states: &Path, labels: &Path) -> Result<Self, DatasetError> {
        let states = load_states(states)?;
        let labels = load_labels(labels)?;
        if states.len() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                states: states.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { states, labels })
    }
}

/// One observation per line. Every row must have as many fields as the
/// first one.
pub fn load_states(path: &Path) -> Result<Vec<Vec<f64>>, DatasetError> {
    let reader = BufReader::new(File::open(path)?);
    let mut states: Vec<Vec<f64>> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if is_comment_or_empty(&line) {
            continue;
        }
        let row = parse_state_line(&line, i + 1)?;
        if let Some(first) = states.first()
            && first.len() != row.len()
        {
            return Err(DatasetError::FeatureCount {
                line: i + 1,
                expected: first.len(),
                found: row.len(),
            });
        }
        states.push(row);
    }

    debug!("loaded {} states from {}", states.len(), path.display());
    Ok(states)
}

pub fn load_labels(path: &Path) -> Result<Vec<String>, DatasetError> {
    let reader = BufReader::new(File::open(path)?);
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_comment_or_empty(&line) {
            continue;
        }
        labels.push(parse_label_line(&line));
    }
    debug!("loaded {} labels from {}", labels.len(), path.display());
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_states_skipping_comments_and_blanks() {
        let f = write_temp("# s,d,s_dot,d_dot\n3.5,0.1,5.9,-0.02\n\n8.0,-0.3,3.0,2.2\n");
        let states = load_states(f.path()).unwrap();
        assert_eq!(
            states,
            vec![vec![3.5, 0.1, 5.9, -0.02], vec![8.0, -0.3, 3.0, 2.2]]
        );
    }

    #[test]
    fn ragged_rows_report_physical_line() {
        let f = write_temp("1,2,3,4\n# note\n1,2,3\n");
        match load_states(f.path()).unwrap_err() {
            DatasetError::FeatureCount {
                line,
                expected,
                found,
            } => {
                assert_eq!((line, expected, found), (3, 4, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_number_reports_line() {
        let f = write_temp("1,2,3,4\n1,2,x,4\n");
        assert!(matches!(
            load_states(f.path()),
            Err(DatasetError::InvalidNumber { line: 2, field: 2, .. })
        ));
    }

    #[test]
    fn labels_are_kept_verbatim_after_trim() {
        let f = write_temp("left\n keep \nright\nstraight\n\n");
        assert_eq!(
            load_labels(f.path()).unwrap(),
            vec!["left", "keep", "right", "straight"]
        );
    }

    #[test]
    fn dataset_requires_matching_lengths() {
        let s = write_temp("1,2,3,4\n5,6,7,8\n");
        let l = write_temp("left\n");
        assert!(matches!(
            Dataset::load(s.path(), l.path()),
            Err(DatasetError::LengthMismatch {
                states: 2,
                labels: 1
            })
        ));

        let l2 = write_temp("left\nright\n");
        let ds = Dataset::load(s.path(), l2.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_labels(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
