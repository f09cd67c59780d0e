use std::f64::consts::PI;

/// Normal distribution fitted to one feature of one class.
///
/// Mean and variance use the population estimator (divide by `n`, no Bessel
/// correction). Fitting zero values leaves both at NaN, which then flows
/// through [`GaussianEstimator::probability_density`] unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianEstimator {
    count: usize,
    mean: f64,
    variance: f64,
}

impl Default for GaussianEstimator {
    fn default() -> Self {
        Self::fit(std::iter::empty())
    }
}

impl GaussianEstimator {
    /// Two passes over `values`: one for the mean, one for the squared
    /// deviations from it.
    pub fn fit<I>(values: I) -> Self
    where
        I: Iterator<Item = f64> + Clone,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        for v in values.clone() {
            count += 1;
            sum += v;
        }

        let n = count as f64;
        let mean = sum / n;
        let variance = values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        Self {
            count,
            mean,
            variance,
        }
    }

    pub fn from_parts(count: usize, mean: f64, variance: f64) -> Self {
        Self {
            count,
            mean,
            variance,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// True when the statistics are not finite, i.e. nothing was fitted.
    pub fn is_degenerate(&self) -> bool {
        !self.mean.is_finite() || !self.variance.is_finite()
    }

    /// Every fitted value was identical, so the distribution is a point mass
    /// at the mean.
    pub fn is_point_mass(&self) -> bool {
        self.variance == 0.0
    }

    /// Density of `value` under `N(mean, variance)`.
    ///
    /// A point mass has infinite density on the mean and `0.0` elsewhere.
    /// NaN statistics are not special-cased.
    pub fn probability_density(&self, value: f64) -> f64 {
        if self.is_point_mass() {
            return if value == self.mean { f64::INFINITY } else { 0.0 };
        }
        let diff = value - self.mean;
        (1.0 / (2.0 * PI * self.variance).sqrt())
            * (-(diff * diff) / (2.0 * self.variance)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::GaussianEstimator;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn fit(values: &[f64]) -> GaussianEstimator {
        GaussianEstimator::fit(values.iter().copied())
    }

    #[test]
    fn starts_empty_and_degenerate() {
        let g = GaussianEstimator::default();
        assert_eq!(g.count(), 0);
        assert!(g.mean().is_nan());
        assert!(g.variance().is_nan());
        assert!(g.is_degenerate());
        assert!(g.probability_density(0.0).is_nan());
    }

    #[test]
    fn single_observation_zero_variance() {
        let g = fit(&[5.0]);

        assert_eq!(g.count(), 1);
        assert!(approx_eq(g.mean(), 5.0, EPS));
        assert_eq!(g.variance(), 0.0);
        assert!(!g.is_degenerate());
        assert!(g.is_point_mass());

        assert_eq!(g.probability_density(5.0), f64::INFINITY);
        assert_eq!(g.probability_density(4.999999), 0.0);
    }

    #[test]
    fn repeated_value_has_exact_mean_and_zero_variance() {
        let g = fit(&[2.25; 7]);
        assert_eq!(g.mean(), 2.25);
        assert_eq!(g.variance(), 0.0);
    }

    #[test]
    fn two_observations_population_variance() {
        let g = fit(&[0.0, 2.0]);

        assert!(approx_eq(g.mean(), 1.0, EPS));
        assert!(approx_eq(g.variance(), 1.0, 1e-12));
        assert!(approx_eq(g.std_dev(), 1.0, 1e-12));
        assert!(!g.is_point_mass());
    }

    #[test]
    fn three_observations_variance_known() {
        let g = fit(&[-1.0, 0.0, 1.0]);

        assert!(approx_eq(g.mean(), 0.0, EPS));
        assert!(approx_eq(g.variance(), 2.0 / 3.0, 1e-12));

        let var: f64 = 2.0 / 3.0;
        let expected = 1.0 / (2.0 * std::f64::consts::PI * var).sqrt();
        assert!(approx_eq(g.probability_density(0.0), expected, 1e-12));
    }

    #[test]
    fn density_matches_standard_normal() {
        let g = GaussianEstimator::from_parts(10, 0.0, 1.0);
        let at_zero = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert!(approx_eq(g.probability_density(0.0), at_zero, 1e-12));
        assert!(approx_eq(
            g.probability_density(1.0),
            at_zero * (-0.5f64).exp(),
            1e-12
        ));
        assert!(approx_eq(
            g.probability_density(-1.0),
            g.probability_density(1.0),
            1e-15
        ));
    }

    #[test]
    fn nan_statistics_propagate_into_density() {
        let g = GaussianEstimator::from_parts(0, f64::NAN, f64::NAN);
        assert!(!g.is_point_mass());
        assert!(g.probability_density(1.0).is_nan());
        assert!(g.probability_density(f64::NAN).is_nan());
    }
}
