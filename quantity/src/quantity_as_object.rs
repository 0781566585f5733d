/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Serde helper writing a quantity as `{"value": .., "unit": ..}`.
//!
//! ```
//! use quantity::units::Mass;
//! use quantity::Quantity;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Payload {
//!     #[serde(with = "quantity::quantity_as_object")]
//!     mass: Quantity<Mass>,
//! }
//!
//! let json = r#"{"mass": {"value": 1500, "unit": "g"}}"#;
//! let p: Payload = serde_json::from_str(json).unwrap();
//! assert_eq!(p.mass.value(), 1.5);
//! ```

use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::{Dimension, Quantity};

#[derive(Serialize, Deserialize)]
struct QuantityObject {
    value: f64,
    unit: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityEnum {
    Number(f64),
    Object(QuantityObject),
}

impl<U: Dimension> From<Quantity<U>> for QuantityObject {
    fn from(val: Quantity<U>) -> Self {
        QuantityObject {
            value: val.value(),
            unit: U::standard().symbol.to_string(),
        }
    }
}

pub fn serialize<U: Dimension, S: Serializer>(
    quantity: &Quantity<U>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let object: QuantityObject = (*quantity).into();
    object.serialize(serializer)
}

pub fn deserialize<'de, U: Dimension, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Quantity<U>, D::Error> {
    match QuantityEnum::deserialize(deserializer)? {
        QuantityEnum::Number(v) => Ok(Quantity::new(v)),
        QuantityEnum::Object(QuantityObject { value, unit }) => {
            match U::find_scale(&unit) {
                Some(named) => Ok(Quantity::with_scale(value, named.scale)),
                None => Err(D::Error::custom(format!(
                    "unknown {} unit: {}",
                    U::KIND,
                    unit
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use crate::units::{Radioactivity, Temperature};
    use crate::Quantity;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Source {
        #[serde(with = "crate::quantity_as_object")]
        activity: Quantity<Radioactivity>,
        #[serde(with = "crate::quantity_as_object")]
        temperature: Quantity<Temperature>,
    }

    #[test]
    fn serialize_standard() {
        let source = Source {
            activity: Quantity::new(3.7e10),
            temperature: Quantity::new(300.0),
        };
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({
                "activity": { "value": 3.7e10, "unit": "Bq" },
                "temperature": { "value": 300.0, "unit": "K" },
            })
        );
    }

    #[test]
    fn deserialize_any_catalogued_unit() {
        let source: Source = serde_json::from_value(json!({
            "activity": { "value": 1.0, "unit": "Ci" },
            "temperature": { "value": 0.0, "unit": "°C" },
        }))
        .unwrap();
        assert_eq!(source.activity.value(), 3.7e10);
        assert_eq!(source.temperature.value(), 273.15);

        let source: Source = serde_json::from_value(json!({
            "activity": 5.0,
            "temperature": 10.0,
        }))
        .unwrap();
        assert_eq!(source.activity.value(), 5.0);
    }

    #[test]
    fn deserialize_unknown_unit() {
        let err = serde_json::from_value::<Source>(json!({
            "activity": { "value": 1.0, "unit": "kg" },
            "temperature": 10.0,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown radioactivity unit: kg"));
    }
}
