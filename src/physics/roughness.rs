//! Relative roughness table
//!
//! Each [`RoughnessSpec`] produces one turbulent Colebrook curve. The onset
//! multiplier truncates a curve from below: very smooth pipes only depart from
//! the smooth-pipe curve at high Reynolds numbers, and drawing them over the
//! whole turbulent range would just stack lines on top of each other.

use serde::{Deserialize, Serialize};

/// One constant-roughness curve of the chart
///
/// `onset: None` means "no restriction": the curve starts at the turbulent
/// limit. `Some(m)` starts it at `turbulent_min · m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoughnessSpec {
    /// Roughness height over pipe diameter (ε/D); 0 is the smooth pipe
    pub relative_roughness: f64,

    /// Onset multiplier applied to the turbulent limit
    #[serde(default)]
    pub onset: Option<f64>,
}

impl RoughnessSpec {
    /// Build an entry the way the chart tables write it: a multiplier of
    /// exactly 1 stands for "no restriction"
    pub fn new(relative_roughness: f64, onset_multiplier: f64) -> Self {
        let onset = if onset_multiplier == 1.0 {
            None
        } else {
            Some(onset_multiplier)
        };
        Self { relative_roughness, onset }
    }

    /// Entry drawn over the whole turbulent range
    pub fn unrestricted(relative_roughness: f64) -> Self {
        Self { relative_roughness, onset: None }
    }

    pub fn is_smooth(&self) -> bool {
        self.relative_roughness == 0.0
    }

    /// Lowest Reynolds number this curve may start at
    pub fn minimum_reynolds(&self, turbulent_min: f64) -> f64 {
        match self.onset {
            Some(multiplier) => turbulent_min * multiplier,
            None => turbulent_min,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.relative_roughness.is_finite() || self.relative_roughness < 0.0 {
            return Err(format!(
                "Relative roughness must be finite and non-negative, got {}",
                self.relative_roughness
            ));
        }
        if let Some(multiplier) = self.onset
            && (!multiplier.is_finite() || multiplier <= 0.0)
        {
            return Err(format!(
                "Onset multiplier for rr={} must be finite and positive, got {}",
                self.relative_roughness, multiplier
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Table
// =================================================================================================

/// Ordered list of roughness curves
///
/// The default table spans the smooth pipe through `rr = 0.15`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoughnessTable {
    entries: Vec<RoughnessSpec>,
}

/// `(relative roughness, onset multiplier)` of the standard chart
const STANDARD_TABLE: [(f64, f64); 27] = [
    (0.0, 1.0),
    (1e-6, 2e3),
    (5e-6, 0.7e3),
    (1e-5, 1.5e2),
    (5e-5, 6e1),
    (1e-4, 3e1),
    (2e-4, 1.0),
    (4e-4, 1.0),
    (6e-4, 1.0),
    (8e-4, 1.0),
    (1e-3, 1.0),
    (2e-3, 1.0),
    (4e-3, 1.0),
    (6e-3, 1.0),
    (8e-3, 1.0),
    (1e-2, 1.0),
    (1.5e-2, 1.0),
    (2e-2, 1.0),
    (3e-2, 1.0),
    (4e-2, 1.0),
    (5e-2, 1.0),
    (6e-2, 1.0),
    (7e-2, 1.0),
    (8e-2, 1.0),
    (1e-1, 1.0),
    (1.2e-1, 1.0),
    (1.5e-1, 1.0),
];

impl Default for RoughnessTable {
    fn default() -> Self {
        STANDARD_TABLE
            .iter()
            .map(|&(rr, onset)| RoughnessSpec::new(rr, onset))
            .collect()
    }
}

impl FromIterator<RoughnessSpec> for RoughnessTable {
    fn from_iter<I: IntoIterator<Item = RoughnessSpec>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl RoughnessTable {
    pub fn new(entries: Vec<RoughnessSpec>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoughnessSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        self.entries.iter().try_for_each(RoughnessSpec::validate)
    }
}

impl<'a> IntoIterator for &'a RoughnessTable {
    type Item = &'a RoughnessSpec;
    type IntoIter = std::slice::Iter<'a, RoughnessSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
