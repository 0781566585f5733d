/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parser::parse_quantity;
use crate::reading::Reading;
use crate::{Dimension, NamedScale, QuantityScale, UnitError};

/// A physical quantity of dimension `U`.
///
/// The value is always stored in the standard scale of `U`, so
/// arithmetic between quantities works directly on the stored number.
/// Use [`Quantity::with_scale`] and [`Quantity::to`] to go from and to
/// other scales, and `!q` or [`Quantity::value`] to get the standard
/// numeral back.
pub struct Quantity<U: Dimension>(f64, PhantomData<U>);

impl<U: Dimension> Quantity<U> {
    pub const ZERO: Self = Self::new(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Quantity for a numeral written in `scale`.
    #[inline]
    pub const fn with_scale(numeral: f64, scale: QuantityScale<U>) -> Self {
        Self::new(scale.unmap(numeral))
    }

    pub fn parse(input: &str) -> Result<Self, UnitError> {
        parse_quantity(input)
    }

    /// The standard numeral.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Numeral of this quantity written in `scale`.
    #[inline]
    pub const fn to(&self, scale: &QuantityScale<U>) -> f64 {
        scale.map(self.0)
    }

    pub fn reading(&self, scale: &'static NamedScale<U>) -> Reading<U> {
        Reading::new(self.to(&scale.scale), scale)
    }

    /// Reading in the largest autoscaling unit of `U` in which the
    /// magnitude is at least one.
    pub fn autoscale(&self) -> Reading<U> {
        if self.0 == 0.0 || !self.0.is_finite() {
            return self.reading(U::standard());
        }
        let mut ladder = U::SCALES
            .iter()
            .filter(|named| named.autoscale && named.scale.base() == 0.0)
            .collect::<Vec<_>>();
        ladder.sort_by(|a, b| a.scale.factor().total_cmp(&b.scale.factor()));
        let magnitude = self.0.abs();
        match ladder
            .iter()
            .rev()
            .find(|named| named.scale.map(magnitude) >= 1.0)
            .or_else(|| ladder.first())
        {
            Some(named) => self.reading(*named),
            None => self.reading(U::standard()),
        }
    }

    /// Identity; stands in for unary plus.
    #[inline]
    pub const fn pos(self) -> Self {
        self
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// IEEE total order on the standard numerals.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    pub fn total_cmp_value(&self, other: f64) -> Ordering {
        self.0.total_cmp(&other)
    }

    /// Reinterpret the standard numeral as a quantity of another
    /// dimension. Nothing is checked: the caller vouches for the
    /// dimensional identity being expressed.
    #[inline]
    pub const fn reparam_unchecked<V: Dimension>(self) -> Quantity<V> {
        Quantity::new(self.0)
    }

    /// Like [`reparam_unchecked`](Self::reparam_unchecked), multiplying
    /// the numeral by `factor` first.
    #[inline]
    pub const fn reparam_scaled_unchecked<V: Dimension>(
        self,
        factor: f64,
    ) -> Quantity<V> {
        Quantity::new(self.0 * factor)
    }
}

pub fn min<U: Dimension>(a: Quantity<U>, b: Quantity<U>) -> Quantity<U> {
    match a.0.partial_cmp(&b.0) {
        Some(Ordering::Greater) => b,
        Some(_) => a,
        None => Quantity::new(f64::NAN),
    }
}

pub fn max<U: Dimension>(a: Quantity<U>, b: Quantity<U>) -> Quantity<U> {
    match a.0.partial_cmp(&b.0) {
        Some(Ordering::Less) => b,
        Some(_) => a,
        None => Quantity::new(f64::NAN),
    }
}

pub fn abs<U: Dimension>(q: Quantity<U>) -> Quantity<U> {
    q.abs()
}

impl<U: Dimension> Clone for Quantity<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Dimension> Copy for Quantity<U> {}

impl<U: Dimension> Default for Quantity<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Dimension> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Dimension> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<U: Dimension> PartialEq<f64> for Quantity<U> {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<U: Dimension> PartialOrd<f64> for Quantity<U> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl<U: Dimension> Debug for Quantity<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "Quantity<{:?}>({:?})", U::KIND, self.0)
    }
}

impl<U: Dimension> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.0, U::standard().symbol)
    }
}

impl<U: Dimension> FromStr for Quantity<U> {
    type Err = UnitError;
    fn from_str(input: &str) -> Result<Self, UnitError> {
        parse_quantity(input)
    }
}

/* Canonical numeral in and out. */

impl<U: Dimension> Not for Quantity<U> {
    type Output = f64;
    #[inline]
    fn not(self) -> f64 {
        self.0
    }
}

impl<U: Dimension> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Dimension> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Dimension> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Dimension> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Dimension> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Dimension> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Dimension> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        rhs * self
    }
}

impl<U: Dimension> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<U: Dimension> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Dimension> DivAssign<f64> for Quantity<U> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

/* Same dimension on both sides: the tag cancels. */
impl<U: Dimension> Div for Quantity<U> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<U: Dimension> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl<'a, U: Dimension> Sum<&'a Quantity<U>> for Quantity<U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + *q)
    }
}

/* Serialized as the standard numeral. See `quantity_as_object` for a
 * self-describing format. */

impl<U: Dimension> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, U: Dimension> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Ok(Self::new(f64::deserialize(deserializer)?))
    }
}

#[cfg(feature = "schemars")]
impl<U: Dimension> schemars::JsonSchema for Quantity<U> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        format!("Quantity_{}", U::KIND.name())
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        <f64 as schemars::JsonSchema>::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{abs, max, min};
    use crate::units::{
        Distance, Mass, Time, GRAMS, KILOGRAMS, KILOMETERS, METERS,
    };
    use crate::Quantity;

    #[test]
    fn canonical_arithmetic() {
        let a = Quantity::<Mass>::new(2.0);
        let b = Quantity::<Mass>::new(0.5);
        assert_eq!(!(a + b), 2.5);
        assert_eq!(!(a - b), 1.5);
        assert_eq!(!(a * 4.0), 8.0);
        assert_eq!(!(4.0 * a), 8.0);
        assert_eq!(!(a / 4.0), 0.5);
        assert_eq!(a / b, 4.0);
        assert_eq!(!(-a), -2.0);
        assert_eq!(a.pos(), a);
    }

    #[test]
    fn assign_operators() {
        let mut q = Quantity::<Time>::new(10.0);
        q += Quantity::new(5.0);
        q -= Quantity::new(3.0);
        q *= 2.0;
        q /= 4.0;
        assert_eq!(q.value(), 6.0);
    }

    #[test]
    fn scale_construction() {
        let q = Quantity::with_scale(3.0, KILOMETERS);
        assert_eq!(q.value(), 3000.0);
        assert_eq!(q.to(&METERS), 3000.0);
        assert_eq!(KILOMETERS.quantity(3.0), q);
    }

    #[test]
    fn zero() {
        assert!(Quantity::<Mass>::ZERO.is_zero());
        assert!(Quantity::<Mass>::new(-0.0).is_zero());
        assert!(!Quantity::<Mass>::new(1e-300).is_zero());
        assert_eq!(Quantity::<Mass>::default(), Quantity::ZERO);
    }

    #[test]
    fn ordering() {
        let a = Quantity::with_scale(900.0, GRAMS);
        let b = Quantity::with_scale(1.0, KILOGRAMS);
        assert!(a < b);
        assert!(b > 0.5);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp_value(1.0), Ordering::Equal);
        assert_eq!(min(a, b), a);
        assert_eq!(max(a, b), b);
        assert_eq!(abs(-a), a);
    }

    #[test]
    fn min_max_propagate_nan() {
        let nan = Quantity::<Distance>::new(f64::NAN);
        let one = Quantity::<Distance>::new(1.0);
        assert!(min(nan, one).value().is_nan());
        assert!(max(one, nan).value().is_nan());
    }

    #[test]
    fn reparam() {
        let d = Quantity::<Distance>::new(12.0);
        let m: Quantity<Mass> = d.reparam_unchecked();
        assert_eq!(m.value(), 12.0);
        let t: Quantity<Time> = d.reparam_scaled_unchecked(0.5);
        assert_eq!(t.value(), 6.0);
    }

    #[test]
    fn sum() {
        let parts = [1.0, 2.0, 3.5].map(Quantity::<Mass>::new);
        assert_eq!(parts.iter().sum::<Quantity<Mass>>().value(), 6.5);
        assert_eq!(parts.into_iter().sum::<Quantity<Mass>>().value(), 6.5);
    }

    #[test]
    fn display() {
        assert_eq!(Quantity::<Mass>::new(5.0).to_string(), "5 kg");
        assert_eq!(
            format!("{:?}", Quantity::<Mass>::new(5.0)),
            "Quantity<Mass>(5.0)"
        );
    }

    #[test]
    fn serde_as_number() {
        let q = Quantity::<Mass>::new(2.5);
        assert_eq!(serde_json::to_string(&q).unwrap(), "2.5");
        let back: Quantity<Mass> = serde_json::from_str("2.5").unwrap();
        assert_eq!(back, q);
    }
}
