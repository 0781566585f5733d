/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Physical quantities tagged with their dimension at the type level.
//!
//! A [`Quantity<U>`] always stores its value in the standard scale of
//! dimension `U`. Catalogued [`QuantityScale`]s convert numerals in
//! other units to and from that canonical value.
//!
//! ```
//! use quantity::units::{Mass, GRAMS, KILOGRAMS};
//! use quantity::Quantity;
//!
//! let m: Quantity<Mass> = KILOGRAMS.quantity(5.0);
//! assert_eq!(!m, 5.0);
//! assert_eq!(m.to(&GRAMS), 5000.0);
//! ```

pub mod dimension;
pub mod error;
pub mod parser;
pub mod quantity;
pub mod quantity_scale;
pub mod reading;
pub mod scale;
pub mod thermal;
pub mod units;

pub mod quantity_as_object;
#[cfg(feature = "serialize_as_string")]
pub mod quantity_as_string;

pub use dimension::{Dimension, DimensionKind, DIMENSIONS};
pub use error::UnitError;
pub use quantity::{abs, max, min, Quantity};
pub use quantity_scale::{NamedScale, QuantityScale};
pub use reading::Reading;
pub use scale::Scale;
