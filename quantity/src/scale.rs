/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Affine map between a local numeral and the standard numeral of a
/// dimension: `standard = local * factor + base`.
///
/// A zero factor is not rejected; `map` then divides by zero and the
/// result follows IEEE-754.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Scale {
    factor: f64,
    base: f64,
}

impl Scale {
    pub const IDENTITY: Self = Self::new(1.0, 0.0);

    pub const fn new(factor: f64, base: f64) -> Self {
        Self { factor, base }
    }

    pub const fn factor(&self) -> f64 {
        self.factor
    }

    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Standard numeral to local numeral.
    #[inline]
    pub const fn map(&self, standard: f64) -> f64 {
        (standard - self.base) / self.factor
    }

    /// Local numeral to standard numeral.
    #[inline]
    pub const fn unmap(&self, local: f64) -> f64 {
        local * self.factor + self.base
    }

    pub const fn with_factor(self, factor: f64) -> Self {
        Self::new(factor, self.base)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.base == 0.0 {
            true => write!(f, "x * {}", self.factor),
            false => write!(f, "x * {} + {}", self.factor, self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scale;

    #[test]
    fn identity_is_noop() {
        assert_eq!(Scale::IDENTITY.map(42.5), 42.5);
        assert_eq!(Scale::IDENTITY.unmap(-3.0), -3.0);
    }

    #[test]
    fn affine_inverse() {
        let scale = Scale::new(5.0 / 9.0, 255.0);
        let x = 98.6;
        assert!((scale.map(scale.unmap(x)) - x).abs() < 1e-12);
        assert_eq!(scale.unmap(0.0), 255.0);
    }

    #[test]
    fn zero_factor_propagates() {
        let scale = Scale::new(0.0, 0.0);
        assert!(scale.map(1.0).is_infinite());
        assert!(scale.map(0.0).is_nan());
    }

    #[test]
    fn display() {
        assert_eq!(Scale::new(1000.0, 0.0).to_string(), "x * 1000");
        assert_eq!(Scale::new(1.0, 273.15).to_string(), "x * 1 + 273.15");
    }
}
