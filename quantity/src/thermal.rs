/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Offsets of the everyday temperature scales against absolute zero.

/// Kelvin value of 0 °C.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Rankine value of 0 °F.
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Kelvin per degree Fahrenheit (or Rankine).
pub const FAHRENHEIT_DEGREE: f64 = 5.0 / 9.0;
