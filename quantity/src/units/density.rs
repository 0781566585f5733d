/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::dimension;
use crate::{NamedScale, QuantityScale};

pub const KILOGRAMS_PER_SQUARE_METER: QuantityScale<ArealDensity> =
    QuantityScale::STANDARD;
pub const GRAMS_PER_SQUARE_METER: QuantityScale<ArealDensity> =
    KILOGRAMS_PER_SQUARE_METER.milli();
pub const GRAMS_PER_SQUARE_CENTIMETER: QuantityScale<ArealDensity> =
    KILOGRAMS_PER_SQUARE_METER.div(10.0);
pub const MILLIGRAMS_PER_SQUARE_CENTIMETER: QuantityScale<ArealDensity> =
    GRAMS_PER_SQUARE_CENTIMETER.milli();

dimension!(
    /// Mass per area (shielding thickness), stored in kg/m².
    ArealDensity,
    [
        NamedScale::new(
            "kg/m²",
            "kilograms per square meter",
            KILOGRAMS_PER_SQUARE_METER
        ),
        NamedScale::new(
            "g/m²",
            "grams per square meter",
            GRAMS_PER_SQUARE_METER
        ),
        NamedScale::new(
            "g/cm²",
            "grams per square centimeter",
            GRAMS_PER_SQUARE_CENTIMETER
        ),
        NamedScale::new(
            "mg/cm²",
            "milligrams per square centimeter",
            MILLIGRAMS_PER_SQUARE_CENTIMETER
        ),
    ]
);

pub const SQUARE_METERS_PER_KILOGRAM: QuantityScale<ReciprocalArealDensity> =
    QuantityScale::STANDARD;
pub const SQUARE_CENTIMETERS_PER_GRAM: QuantityScale<ReciprocalArealDensity> =
    SQUARE_METERS_PER_KILOGRAM.times(10.0);

dimension!(
    /// Area per mass (mass attenuation coefficients), stored in m²/kg.
    ReciprocalArealDensity,
    [
        NamedScale::new(
            "m²/kg",
            "square meters per kilogram",
            SQUARE_METERS_PER_KILOGRAM
        ),
        NamedScale::new(
            "cm²/g",
            "square centimeters per gram",
            SQUARE_CENTIMETERS_PER_GRAM
        ),
    ]
);

pub const KILOGRAMS_PER_CUBIC_METER: QuantityScale<Density> =
    QuantityScale::STANDARD;
pub const GRAMS_PER_CUBIC_CENTIMETER: QuantityScale<Density> =
    KILOGRAMS_PER_CUBIC_METER.kilo();
pub const GRAMS_PER_LITER: QuantityScale<Density> = KILOGRAMS_PER_CUBIC_METER;
pub const MILLIGRAMS_PER_LITER: QuantityScale<Density> =
    GRAMS_PER_LITER.milli();

dimension!(
    /// Density, stored in kg/m³.
    Density,
    [
        NamedScale::new(
            "kg/m³",
            "kilograms per cubic meter",
            KILOGRAMS_PER_CUBIC_METER
        ),
        NamedScale::new(
            "g/cm³",
            "grams per cubic centimeter",
            GRAMS_PER_CUBIC_CENTIMETER
        ),
        NamedScale::new("g/L", "grams per liter", GRAMS_PER_LITER),
        NamedScale::new("mg/L", "milligrams per liter", MILLIGRAMS_PER_LITER),
    ]
);
