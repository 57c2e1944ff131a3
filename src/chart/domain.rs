//! Reynolds-number sampling
//!
//! Every curve of the chart is cut from one log-spaced sample sequence, so
//! neighbouring curves share their Reynolds abscissae. Cutting may inject the
//! exact limit of a regime (e.g. `Re = 2300` at the end of the laminar curve)
//! when the sampling does not already contain it.

use nalgebra::DVector;

/// Relative distance under which a sample is taken to be a regime limit
const LIMIT_TOLERANCE: f64 = 1e-9;

fn near(sample: f64, limit: f64) -> bool {
    (sample - limit).abs() <= LIMIT_TOLERANCE * limit.abs()
}

/// Strictly increasing, log-spaced Reynolds samples
#[derive(Debug, Clone, PartialEq)]
pub struct ReynoldsDomain {
    samples: Vec<f64>,
}

impl ReynoldsDomain {
    /// `count` samples evenly spaced in `log10(Re)` over `[min, max]`
    ///
    /// The endpoints are exactly `min` and `max`.
    pub fn log_spaced(min: f64, max: f64, count: usize) -> Result<Self, String> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 {
            return Err(format!("Reynolds domain must be finite and positive, got [{min}, {max}]"));
        }
        if min >= max {
            return Err(format!("Reynolds domain is empty: [{min}, {max}]"));
        }
        if count < 2 {
            return Err(format!("Reynolds domain needs at least 2 samples, got {count}"));
        }

        let log_min = min.log10();
        let step = (max.log10() - log_min) / (count - 1) as f64;

        let mut samples: Vec<f64> = (0..count)
            .map(|i| 10f64.powf(log_min + step * i as f64))
            .collect();
        samples[0] = min;
        samples[count - 1] = max;

        if !samples.windows(2).all(|w| w[0] < w[1]) {
            return Err(format!(
                "{count} samples over [{min}, {max}] are not strictly increasing"
            ));
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.samples[0]
    }

    pub fn max(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn contains(&self, reynolds: f64) -> bool {
        reynolds >= self.min() && reynolds <= self.max()
    }

    /// Samples inside `[low, high]`
    pub fn segment(&self, low: f64, high: f64) -> Vec<f64> {
        self.samples
            .iter()
            .copied()
            .filter(|&re| re >= low && re <= high)
            .collect()
    }

    /// Samples inside `[low, high]`, completed with the limits themselves
    ///
    /// Both limits are first clipped to the domain. A sample lying within a
    /// relative `1e-9` of a limit is replaced by the exact limit; otherwise
    /// the limit is injected. The result stays strictly increasing with no
    /// near-duplicate points. Empty when the clipped interval is empty.
    pub fn closed_segment(&self, low: f64, high: f64) -> Vec<f64> {
        let low = low.max(self.min());
        let high = high.min(self.max());
        if low > high {
            return Vec::new();
        }

        let mut segment = self.segment(low, high);
        match segment.first_mut() {
            Some(first) if near(*first, low) => *first = low,
            _ => segment.insert(0, low),
        }
        match segment.last_mut() {
            Some(last) if near(*last, high) => *last = high,
            _ => segment.push(high),
        }
        segment.dedup();
        segment
    }
}

/// Copy a segment into the vector type the friction solvers take
pub fn to_dvector(reynolds: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(reynolds)
}

// =================================================================================================
// Tests
// =================================================================================================
