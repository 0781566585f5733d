/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::{Dimension, NamedScale, Quantity};

/// A numeral written in one catalogued scale, as shown to a user.
pub struct Reading<U: Dimension> {
    pub numeral: f64,
    pub unit: &'static NamedScale<U>,
}

impl<U: Dimension> Reading<U> {
    pub fn new(numeral: f64, unit: &'static NamedScale<U>) -> Self {
        Self { numeral, unit }
    }

    pub fn quantity(&self) -> Quantity<U> {
        Quantity::with_scale(self.numeral, self.unit.scale)
    }
}

impl<U: Dimension> Clone for Reading<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Dimension> Copy for Reading<U> {}

impl<U: Dimension> PartialEq for Reading<U> {
    fn eq(&self, other: &Self) -> bool {
        self.numeral == other.numeral && self.unit.symbol == other.unit.symbol
    }
}

impl<U: Dimension> Debug for Reading<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "Reading({:?} {})", self.numeral, self.unit.symbol)
    }
}

impl<U: Dimension> Display for Reading<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.numeral, self.unit.symbol)
    }
}

impl<U: Dimension> Serialize for Reading<U> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reading", 2)?;
        state.serialize_field("value", &self.numeral)?;
        state.serialize_field("unit", self.unit.symbol)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::units::{Distance, Mass, Radioactivity, Temperature, GRAMS};
    use crate::{Dimension, Quantity};

    #[test]
    fn autoscale_picks_largest_fitting_unit() {
        let r = Quantity::<Mass>::new(0.25).autoscale();
        assert_eq!(r.unit.symbol, "g");
        assert_relative_eq!(r.numeral, 250.0, max_relative = 1e-12);

        let r = Quantity::<Distance>::new(12_500.0).autoscale();
        assert_eq!(r.unit.symbol, "km");
        assert_relative_eq!(r.numeral, 12.5, max_relative = 1e-12);

        let r = Quantity::<Radioactivity>::new(-3.0e9).autoscale();
        assert_eq!(r.unit.symbol, "GBq");
        assert_relative_eq!(r.numeral, -3.0, max_relative = 1e-12);
    }

    #[test]
    fn autoscale_tiny_values_use_smallest_unit() {
        let r = Quantity::<Mass>::new(1e-15).autoscale();
        assert_eq!(r.unit.symbol, "µg");
    }

    #[test]
    fn autoscale_zero_and_offsets() {
        assert_eq!(Quantity::<Mass>::ZERO.autoscale().unit.symbol, "kg");
        let r = Quantity::<Temperature>::new(300.0).autoscale();
        assert_eq!(r.unit.symbol, Temperature::standard().symbol);
        assert_eq!(r.numeral, 300.0);
    }

    #[test]
    fn reading_round_trip() {
        let q = Quantity::with_scale(42.0, GRAMS);
        let r = q.autoscale();
        assert_eq!(r.to_string(), format!("{} g", r.numeral));
        assert_relative_eq!(
            r.quantity().value(),
            q.value(),
            max_relative = 1e-12
        );
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            serde_json::json!({ "value": r.numeral, "unit": "g" })
        );
    }
}
