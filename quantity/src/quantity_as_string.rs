/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Serde helper writing a quantity as a display string (`"5 kg"`) and
//! reading it back with the quantity parser, so any catalogued unit is
//! accepted on input.

use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, DisplayFromStr, SerializeAs};

use crate::{Dimension, Quantity};

pub fn serialize<U: Dimension, S: Serializer>(
    quantity: &Quantity<U>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    DisplayFromStr::serialize_as(quantity, serializer)
}

pub fn deserialize<'de, U: Dimension, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Quantity<U>, D::Error> {
    DisplayFromStr::deserialize_as(deserializer)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use crate::units::Pressure;
    use crate::Quantity;

    #[derive(Serialize, Deserialize, Debug)]
    struct Gauge {
        #[serde(with = "crate::quantity_as_string")]
        pressure: Quantity<Pressure>,
    }

    #[test]
    fn as_string() {
        let gauge = Gauge {
            pressure: Quantity::new(101325.0),
        };
        assert_eq!(
            serde_json::to_value(&gauge).unwrap(),
            json!({ "pressure": "101325 Pa" })
        );
        let gauge: Gauge =
            serde_json::from_value(json!({ "pressure": "1 atm" })).unwrap();
        assert_eq!(gauge.pressure.value(), 101325.0);
        assert!(serde_json::from_value::<Gauge>(json!({ "pressure": "1 kg" }))
            .is_err());
    }
}
