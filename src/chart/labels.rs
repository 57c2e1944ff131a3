//! Chart texts: localized labels and roughness notation
//!
//! # Roughness notation
//!
//! A relative roughness is written in scientific notation with Unicode
//! superscripts. Exponent `e = floor(log10(rr))`, significand `s = rr / 10^e`
//! printed with six significant digits and trailing zeros removed:
//!
//! | rr | Label |
//! |----|-------|
//! | 1e-3 | `10⁻³` |
//! | 6e-4 | `6×10⁻⁴` |
//! | 1.5e-2 | `1.5×10⁻²` |

use std::fmt;

use super::config::Locale;

// =================================================================================================
// Localized labels
// =================================================================================================

/// Every text of the chart that depends on the language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub reynolds_axis: &'static str,
    pub friction_axis: &'static str,
    pub roughness_axis: &'static str,
    pub laminar: &'static str,
    pub critical: &'static str,
    pub turbulent: &'static str,
    pub complete_turbulence: &'static str,
}

impl Labels {
    pub const ENGLISH: Labels = Labels {
        reynolds_axis: "Reynolds number (Re)",
        friction_axis: "Friction coefficient (f)",
        roughness_axis: "Relative roughness (ε_rel = ε/D)",
        laminar: "Laminar",
        critical: "Critical",
        turbulent: "Turbulent",
        complete_turbulence: "Complete turbulence",
    };

    pub const SPANISH: Labels = Labels {
        reynolds_axis: "Número de Reynolds (Re)",
        friction_axis: "Coeficiente de fricción (f)",
        roughness_axis: "Rugosidad relativa (ε_rel = ε/D)",
        laminar: "Laminar",
        critical: "Crítico",
        turbulent: "Turbulento",
        complete_turbulence: "Turbulencia completa",
    };

    /// Labels of a locale; unrecognized locales get English
    pub fn for_locale(locale: &Locale) -> Self {
        match locale {
            Locale::Es => Self::SPANISH,
            Locale::En | Locale::Unrecognized(_) => Self::ENGLISH,
        }
    }
}

// =================================================================================================
// Powers of ten
// =================================================================================================

fn superscript(exponent: i32) -> String {
    exponent
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

/// `10^k` with a superscript exponent, e.g. `10⁻²`
pub fn power_of_ten(exponent: i32) -> String {
    format!("10{}", superscript(exponent))
}

/// Shortest decimal text of `value` with six significant digits, for values
/// in `[1, 10)`
fn significand_text(value: f64) -> String {
    let text = format!("{value:.5}");
    let text = text.trim_end_matches('0');
    text.trim_end_matches('.').to_string()
}

// =================================================================================================
// Roughness notation
// =================================================================================================

/// Scientific notation of a positive relative roughness
#[derive(Debug, Clone, PartialEq)]
pub struct RoughnessNotation {
    /// Value in `[1, 10)`
    pub significand: f64,
    pub exponent: i32,
}

impl RoughnessNotation {
    /// `None` for zero, negative or non-finite values
    pub fn new(relative_roughness: f64) -> Option<Self> {
        if !relative_roughness.is_finite() || relative_roughness <= 0.0 {
            return None;
        }

        let mut exponent = relative_roughness.log10().floor() as i32;
        let mut significand = relative_roughness / 10f64.powi(exponent);

        // log10 can land a hair off an integer
        if significand < 1.0 {
            exponent -= 1;
            significand = relative_roughness / 10f64.powi(exponent);
        }
        if significand_text(significand) == "10" {
            exponent += 1;
            significand = relative_roughness / 10f64.powi(exponent);
        }

        Some(Self { significand, exponent })
    }

    /// Significand as printed; `"1"` for exact powers of ten
    pub fn significand_text(&self) -> String {
        significand_text(self.significand)
    }

    pub fn is_power_of_ten(&self) -> bool {
        self.significand_text() == "1"
    }
}

impl fmt::Display for RoughnessNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_power_of_ten() {
            write!(f, "{}", power_of_ten(self.exponent))
        } else {
            write!(f, "{}×{}", self.significand_text(), power_of_ten(self.exponent))
        }
    }
}

/// Roughness text drawn right of the plot area, level with its curve
#[derive(Debug, Clone, PartialEq)]
pub struct RoughnessLabel {
    pub relative_roughness: f64,
    pub text: String,

    /// Anchor `(Re, f)` in data coordinates
    pub position: (f64, f64),
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_labels_per_locale() {
        assert_eq!(Labels::for_locale(&Locale::En).critical, "Critical");
        assert_eq!(Labels::for_locale(&Locale::Es).critical, "Crítico");
        assert_eq!(Labels::for_locale(&Locale::Es).complete_turbulence, "Turbulencia completa");
        assert_eq!(
            Labels::for_locale(&Locale::Unrecognized("de".to_string())),
            Labels::ENGLISH
        );
    }

    #[test]
    fn test_power_of_ten() {
        assert_eq!(power_of_ten(-3), "10⁻³");
        assert_eq!(power_of_ten(8), "10⁸");
        assert_eq!(power_of_ten(0), "10⁰");
        assert_eq!(power_of_ten(-12), "10⁻¹²");
    }

    #[test]
    fn test_notation_of_power_of_ten() {
        let notation = RoughnessNotation::new(1e-3).unwrap();
        assert_eq!(notation.exponent, -3);
        assert!(notation.is_power_of_ten());
        assert_eq!(notation.to_string(), "10⁻³");
    }

    #[test]
    fn test_notation_with_significand() {
        let notation = RoughnessNotation::new(6e-4).unwrap();
        assert_eq!(notation.exponent, -4);
        assert_relative_eq!(notation.significand, 6.0, max_relative = 1e-12);
        assert_eq!(notation.to_string(), "6×10⁻⁴");
    }

    #[test]
    fn test_notation_with_fractional_significand() {
        assert_eq!(RoughnessNotation::new(1.5e-2).unwrap().to_string(), "1.5×10⁻²");
        assert_eq!(RoughnessNotation::new(0.12).unwrap().to_string(), "1.2×10⁻¹");
    }

    #[test]
    fn test_notation_of_standard_table() {
        for rr in [1e-6, 1e-5, 1e-4, 1e-2, 1e-1] {
            let notation = RoughnessNotation::new(rr).unwrap();
            assert!(notation.is_power_of_ten(), "rr={rr} gave {notation}");
        }
        for rr in [5e-6, 2e-4, 8e-3, 7e-2] {
            assert!(!RoughnessNotation::new(rr).unwrap().is_power_of_ten());
        }
    }

    #[test]
    fn test_no_notation_for_smooth_pipe() {
        assert_eq!(RoughnessNotation::new(0.0), None);
        assert_eq!(RoughnessNotation::new(-1e-3), None);
    }
}
