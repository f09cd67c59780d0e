use serde::{Deserialize, Serialize};

/// Number of features in a Frenet observation.
pub const FRENET_FEATURES: usize = 4;

/// Kinematic state of a vehicle in lane-relative coordinates.
///
/// `s` runs along the lane, `d` is the lateral offset from the reference
/// line. Converting to a feature vector keeps the order `s, d, s_dot, d_dot`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrenetState {
    pub s: f64,
    pub d: f64,
    pub s_dot: f64,
    pub d_dot: f64,
}

impl FrenetState {
    pub fn new(s: f64, d: f64, s_dot: f64, d_dot: f64) -> Self {
        Self { s, d, s_dot, d_dot }
    }

    pub fn to_features(&self) -> [f64; FRENET_FEATURES] {
        [self.s, self.d, self.s_dot, self.d_dot]
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.to_features().to_vec()
    }

    /// Returns `None` unless `values` holds exactly four features.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [s, d, s_dot, d_dot] => Some(Self::new(*s, *d, *s_dot, *d_dot)),
            _ => None,
        }
    }
}

impl From<[f64; FRENET_FEATURES]> for FrenetState {
    fn from(v: [f64; FRENET_FEATURES]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<FrenetState> for Vec<f64> {
    fn from(state: FrenetState) -> Self {
        state.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_keep_s_d_sdot_ddot_order() {
        let st = FrenetState::new(12.5, 2.0, 9.8, -0.3);
        assert_eq!(st.to_features(), [12.5, 2.0, 9.8, -0.3]);
        assert_eq!(Vec::from(st), vec![12.5, 2.0, 9.8, -0.3]);
    }

    #[test]
    fn from_slice_requires_four_values() {
        assert_eq!(
            FrenetState::from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Some(FrenetState::from([1.0, 2.0, 3.0, 4.0]))
        );
        assert_eq!(FrenetState::from_slice(&[1.0, 2.0, 3.0]), None);
        assert_eq!(FrenetState::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]), None);
    }
}
