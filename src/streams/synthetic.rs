use crate::core::frenet::FrenetState;
use crate::core::label::Label;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of labeled lane-change states on a three lane road.
///
/// Lanes are `lane_width` wide and `d` grows to the right, so a vehicle
/// heading left has negative lateral velocity. Noise is uniform.
#[derive(Debug, Clone)]
pub struct LaneChangeGenerator {
    rng: StdRng,
    lane_width: f64,
    road_length: f64,
}

impl LaneChangeGenerator {
    pub const LANES: usize = 3;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            lane_width: 4.0,
            road_length: 100.0,
        }
    }

    pub fn with_lane_width(mut self, lane_width: f64) -> Self {
        self.lane_width = lane_width;
        self
    }

    pub fn next_label(&mut self) -> Label {
        Label::ALL[self.rng.random_range(0..Label::COUNT)]
    }

    pub fn sample(&mut self, label: Label) -> FrenetState {
        // no lane to the left of lane 0 or to the right of the last lane
        let lane = match label {
            Label::Left => self.rng.random_range(1..Self::LANES),
            Label::Keep => self.rng.random_range(0..Self::LANES),
            Label::Right => self.rng.random_range(0..Self::LANES - 1),
        };
        let d_dot_center = match label {
            Label::Left => -1.0,
            Label::Keep => 0.0,
            Label::Right => 1.0,
        };

        let center = (lane as f64 + 0.5) * self.lane_width;
        let s = self.rng.random_range(0.0..self.road_length);
        let d = center + self.rng.random_range(-0.5..0.5);
        let s_dot = 10.0 + self.rng.random_range(-1.5..1.5);
        let d_dot = d_dot_center + self.rng.random_range(-0.3..0.3);
        FrenetState::new(s, d, s_dot, d_dot)
    }

    /// `n` random labels and a sampled state for each.
    pub fn generate(&mut self, n: usize) -> (Vec<Vec<f64>>, Vec<Label>) {
        let mut states = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);
        for _ in 0..n {
            let label = self.next_label();
            states.push(self.sample(label).to_vec());
            labels.push(label);
        }
        (states, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_data() {
        let a = LaneChangeGenerator::new(7).generate(50);
        let b = LaneChangeGenerator::new(7).generate(50);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = LaneChangeGenerator::new(1).generate(20);
        let b = LaneChangeGenerator::new(2).generate(20);
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn lateral_velocity_sign_follows_intent() {
        let mut g = LaneChangeGenerator::new(3);
        for _ in 0..200 {
            assert!(g.sample(Label::Left).d_dot < 0.0);
            assert!(g.sample(Label::Right).d_dot > 0.0);
            assert!(g.sample(Label::Keep).d_dot.abs() <= 0.3);
        }
    }

    #[test]
    fn states_stay_on_the_road() {
        let mut g = LaneChangeGenerator::new(11).with_lane_width(3.5);
        let (states, labels) = g.generate(300);
        assert_eq!(states.len(), labels.len());
        for st in &states {
            assert_eq!(st.len(), 4);
            assert!(st[1] > 0.0 && st[1] < 3.0 * 3.5);
        }
    }
}
