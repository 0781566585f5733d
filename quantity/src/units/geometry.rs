/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::dimension;
use crate::{NamedScale, QuantityScale};

pub const SQUARE_METERS: QuantityScale<Area> = QuantityScale::STANDARD;
pub const SQUARE_CENTIMETERS: QuantityScale<Area> = SQUARE_METERS.times(1e4);
pub const SQUARE_MILLIMETERS: QuantityScale<Area> = SQUARE_METERS.times(1e6);
pub const SQUARE_KILOMETERS: QuantityScale<Area> = SQUARE_METERS.div(1e6);
pub const HECTARES: QuantityScale<Area> = SQUARE_METERS.div(1e4);
/// Nuclear cross sections, 1 b = 10⁻²⁸ m².
pub const BARNS: QuantityScale<Area> = SQUARE_METERS.times(1e28);

dimension!(
    /// Area, stored in square meters.
    Area,
    [
        NamedScale::new("m²", "square meters", SQUARE_METERS).ladder(),
        NamedScale::new("cm²", "square centimeters", SQUARE_CENTIMETERS)
            .ladder(),
        NamedScale::new("mm²", "square millimeters", SQUARE_MILLIMETERS)
            .ladder(),
        NamedScale::new("km²", "square kilometers", SQUARE_KILOMETERS)
            .ladder(),
        NamedScale::new("ha", "hectares", HECTARES),
        NamedScale::new("b", "barns", BARNS),
    ]
);

pub const CUBIC_METERS: QuantityScale<Volume> = QuantityScale::STANDARD;
pub const LITERS: QuantityScale<Volume> = CUBIC_METERS.milli();
pub const MILLILITERS: QuantityScale<Volume> = LITERS.milli();
pub const CUBIC_CENTIMETERS: QuantityScale<Volume> = CUBIC_METERS.times(1e6);
/// US liquid gallon.
pub const GALLONS: QuantityScale<Volume> = LITERS.div(3.785_411_784);

dimension!(
    /// Volume, stored in cubic meters.
    Volume,
    [
        NamedScale::new("m³", "cubic meters", CUBIC_METERS).ladder(),
        NamedScale::new("L", "liters", LITERS).ladder(),
        NamedScale::new("mL", "milliliters", MILLILITERS).ladder(),
        NamedScale::new("cm³", "cubic centimeters", CUBIC_CENTIMETERS),
        NamedScale::new("gal", "gallons", GALLONS),
    ]
);

pub const PER_METER: QuantityScale<ReciprocalDistance> =
    QuantityScale::STANDARD;
pub const PER_CENTIMETER: QuantityScale<ReciprocalDistance> =
    PER_METER.div(100.0);
pub const PER_MILLIMETER: QuantityScale<ReciprocalDistance> = PER_METER.kilo();
pub const PER_KILOMETER: QuantityScale<ReciprocalDistance> = PER_METER.milli();

dimension!(
    /// Reciprocal distance (attenuation coefficients, wave numbers),
    /// stored per meter.
    ReciprocalDistance,
    [
        NamedScale::new("m⁻¹", "per meter", PER_METER).ladder(),
        NamedScale::new("cm⁻¹", "per centimeter", PER_CENTIMETER),
        NamedScale::new("mm⁻¹", "per millimeter", PER_MILLIMETER).ladder(),
        NamedScale::new("km⁻¹", "per kilometer", PER_KILOMETER).ladder(),
    ]
);
