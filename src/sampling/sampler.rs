use super::RandomSource;
use crate::error::{Result, SimulationError};
use crate::model::constants::DISTRIBUTION_EPSILON;

/// Inverse-CDF sampler over a discrete probability vector.
///
/// The cumulative bins are built once from the probabilities and never
/// change. A draw `x` in `[0, 1)` maps to the smallest index `i` such that
/// `x < bins[i]`, so outcome `i` is picked with probability `p[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSampler {
    bins: Vec<f64>,
}

impl WeightedSampler {
    pub fn new(probabilities: &[f64]) -> Result<Self> {
        if probabilities.is_empty() {
            return Err(SimulationError::InvalidDistribution(
                "probability vector is empty".to_string(),
            ));
        }
        if let Some((index, p)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(SimulationError::InvalidDistribution(format!(
                "probability {p} at index {index} is not a non-negative number"
            )));
        }

        let mut cumulative = 0.0;
        let mut bins: Vec<f64> = probabilities
            .iter()
            .map(|p| {
                cumulative += p;
                cumulative.min(1.0)
            })
            .collect();

        if (cumulative - 1.0).abs() > DISTRIBUTION_EPSILON {
            return Err(SimulationError::InvalidDistribution(format!(
                "probabilities sum to {cumulative}, expected 1"
            )));
        }

        // Pin the tail to exactly 1.0 so rounding never leaves a gap below
        // 1 or lets a trailing zero-probability outcome be drawn.
        let last_possible = probabilities
            .iter()
            .rposition(|p| *p > 0.0)
            .unwrap_or(probabilities.len() - 1);
        for bin in &mut bins[last_possible..] {
            *bin = 1.0;
        }

        Ok(WeightedSampler { bins })
    }

    /// Sampler with a single outcome of probability one.
    pub fn certain() -> Self {
        WeightedSampler { bins: vec![1.0] }
    }

    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Number of outcomes
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn sample(&self, draw: f64) -> Result<usize> {
        if !(0.0..1.0).contains(&draw) {
            return Err(SimulationError::InvalidDraw(draw));
        }
        // bins are sorted, so this is the first bin strictly above the draw
        let index = self.bins.partition_point(|&bin| bin <= draw);
        Ok(index.min(self.bins.len() - 1))
    }

    pub fn draw<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<usize> {
        self.sample(source.next_unit()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bins_are_cumulative() {
        let sampler = WeightedSampler::new(&[0.25, 0.25, 0.5]).unwrap();
        assert_eq!(sampler.bins(), &[0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_sample_picks_first_bin_above_draw() {
        let sampler = WeightedSampler::new(&[0.25, 0.25, 0.5]).unwrap();
        assert_eq!(sampler.sample(0.0).unwrap(), 0);
        assert_eq!(sampler.sample(0.2499).unwrap(), 0);
        assert_eq!(sampler.sample(0.25).unwrap(), 1);
        assert_eq!(sampler.sample(0.5).unwrap(), 2);
        assert_eq!(sampler.sample(0.9999).unwrap(), 2);
    }

    #[test]
    fn test_zero_probability_outcomes_are_skipped() {
        let sampler = WeightedSampler::new(&[0.0, 0.0, 0.5, 0.5, 0.0]).unwrap();
        assert_eq!(sampler.sample(0.0).unwrap(), 2);
        assert_eq!(sampler.sample(0.75).unwrap(), 3);
        assert_eq!(sampler.sample(0.999_999_999_9).unwrap(), 3);
    }

    #[test]
    fn test_rounding_drift_is_pinned() {
        let sampler = WeightedSampler::new(&[0.1; 10]).unwrap();
        assert_eq!(*sampler.bins().last().unwrap(), 1.0);
        assert_eq!(sampler.sample(0.999_999_999_999).unwrap(), 9);
    }

    #[test]
    fn test_partial_sum_above_one_is_clamped() {
        let sampler = WeightedSampler::new(&[0.5, 0.5 + 5e-10, 1e-12]).unwrap();
        let bins = sampler.bins();

        assert!(bins.windows(2).all(|pair| pair[0] <= pair[1]), "{bins:?}");
        assert!(bins.iter().all(|bin| *bin <= 1.0), "{bins:?}");
        assert_eq!(sampler.sample(0.75).unwrap(), 1);
    }

    #[test]
    fn test_invalid_distributions() {
        assert!(WeightedSampler::new(&[]).is_err());
        assert!(WeightedSampler::new(&[0.5, 0.4]).is_err());
        assert!(WeightedSampler::new(&[1.5, -0.5]).is_err());
        assert!(WeightedSampler::new(&[f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_draw_outside_unit_interval() {
        let sampler = WeightedSampler::new(&[1.0]).unwrap();
        assert_eq!(sampler.sample(1.0), Err(SimulationError::InvalidDraw(1.0)));
        assert_eq!(
            sampler.sample(-0.1),
            Err(SimulationError::InvalidDraw(-0.1))
        );
    }
}
