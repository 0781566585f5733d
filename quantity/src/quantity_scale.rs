/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Div, Mul};

use crate::{Dimension, Quantity, Scale};

/// One unit of measurement for dimension `U`: an affine [`Scale`]
/// between numerals written in this unit and the standard numeral of
/// `U`.
///
/// Derived scales only ever touch the factor. For offset scales such
/// as Celsius, `times` and `div` therefore rescale the numeral around
/// the same base.
pub struct QuantityScale<U: Dimension> {
    scale: Scale,
    dimension: PhantomData<U>,
}

impl<U: Dimension> QuantityScale<U> {
    pub const STANDARD: Self = Self::from_scale(Scale::IDENTITY);

    pub const fn new(factor: f64, base: f64) -> Self {
        Self::from_scale(Scale::new(factor, base))
    }

    pub const fn from_scale(scale: Scale) -> Self {
        Self {
            scale,
            dimension: PhantomData,
        }
    }

    pub const fn scale(&self) -> Scale {
        self.scale
    }

    pub const fn factor(&self) -> f64 {
        self.scale.factor()
    }

    pub const fn base(&self) -> f64 {
        self.scale.base()
    }

    /// Standard numeral to a numeral in this scale.
    #[inline]
    pub const fn map(&self, standard: f64) -> f64 {
        self.scale.map(standard)
    }

    /// Numeral in this scale to the standard numeral.
    #[inline]
    pub const fn unmap(&self, local: f64) -> f64 {
        self.scale.unmap(local)
    }

    /// Scale in which the same amount is written with a numeral `k`
    /// times larger (`factor / k`).
    pub const fn times(self, k: f64) -> Self {
        Self::from_scale(self.scale.with_factor(self.scale.factor() / k))
    }

    /// Inverse of [`times`](Self::times) (`factor * k`): one numeral of
    /// the result covers `k` numerals of `self`.
    pub const fn div(self, k: f64) -> Self {
        Self::from_scale(self.scale.with_factor(self.scale.factor() * k))
    }

    /// One prefix step down, `times(1000)` (grams from kilograms).
    pub const fn milli(self) -> Self {
        self.times(1000.0)
    }

    /// One prefix step up, `div(1000)` (kilograms from grams).
    pub const fn kilo(self) -> Self {
        self.div(1000.0)
    }

    pub const fn is_standard(&self) -> bool {
        self.scale.factor() == 1.0 && self.scale.base() == 0.0
    }

    /// Quantity for a numeral written in this scale.
    #[inline]
    pub const fn quantity(self, numeral: f64) -> Quantity<U> {
        Quantity::with_scale(numeral, self)
    }
}

impl<U: Dimension> Clone for QuantityScale<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Dimension> Copy for QuantityScale<U> {}

impl<U: Dimension> PartialEq for QuantityScale<U> {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale
    }
}

impl<U: Dimension> Default for QuantityScale<U> {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<U: Dimension> Debug for QuantityScale<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("QuantityScale")
            .field("dimension", &U::KIND)
            .field("factor", &self.factor())
            .field("base", &self.base())
            .finish()
    }
}

impl<U: Dimension> Display for QuantityScale<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", U::KIND, self.scale)
    }
}

impl<U: Dimension> Mul<f64> for QuantityScale<U> {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.times(k)
    }
}

impl<U: Dimension> Div<f64> for QuantityScale<U> {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        QuantityScale::div(self, k)
    }
}

/// Catalogue entry: a scale with its printable symbol and long name.
pub struct NamedScale<U: Dimension> {
    pub symbol: &'static str,
    pub name: &'static str,
    pub scale: QuantityScale<U>,
    /// Whether [`Quantity::autoscale`] may pick this entry.
    pub autoscale: bool,
}

impl<U: Dimension> NamedScale<U> {
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        scale: QuantityScale<U>,
    ) -> Self {
        Self {
            symbol,
            name,
            scale,
            autoscale: false,
        }
    }

    /// Same entry, taking part in autoscaling.
    pub const fn ladder(self) -> Self {
        Self {
            autoscale: true,
            ..self
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.symbol == input || self.name.eq_ignore_ascii_case(input)
    }
}

impl<U: Dimension> Debug for NamedScale<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("NamedScale")
            .field("symbol", &self.symbol)
            .field("name", &self.name)
            .field("scale", &self.scale)
            .field("autoscale", &self.autoscale)
            .finish()
    }
}

impl<U: Dimension> Display for NamedScale<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use crate::units::{Energy, Mass, Temperature};
    use crate::QuantityScale;

    #[test]
    fn prefix_steps() {
        let joules = QuantityScale::<Energy>::STANDARD;
        assert_eq!(joules.milli().factor(), 1.0 / 1000.0);
        assert_eq!(joules.kilo().factor(), 1000.0);
        assert_eq!(joules.milli().kilo().factor(), joules.factor());
        assert_eq!(joules.kilo().kilo().factor(), 1.0e6);
    }

    #[test]
    fn operators_match_methods() {
        let grams = QuantityScale::<Mass>::new(0.001, 0.0);
        assert_eq!(grams * 10.0, grams.times(10.0));
        assert_eq!(grams / 10.0, grams.div(10.0));
    }

    #[test]
    fn derivation_keeps_base() {
        let celsius = QuantityScale::<Temperature>::new(1.0, 273.15);
        let derived = celsius.times(2.0).div(8.0);
        assert_eq!(derived.base(), 273.15);
        assert_eq!(derived.factor(), 4.0);
        assert_eq!(celsius.factor(), 1.0);
    }

    #[test]
    fn standard() {
        assert!(QuantityScale::<Mass>::STANDARD.is_standard());
        assert!(!QuantityScale::<Mass>::STANDARD.milli().is_standard());
        assert_eq!(QuantityScale::<Mass>::default().factor(), 1.0);
    }
}
