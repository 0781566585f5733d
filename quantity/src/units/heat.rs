/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::dimension;
use crate::thermal::{CELSIUS_OFFSET, FAHRENHEIT_DEGREE, FAHRENHEIT_OFFSET};
use crate::{NamedScale, QuantityScale};

pub const KELVIN: QuantityScale<Temperature> = QuantityScale::STANDARD;
pub const MILLIKELVIN: QuantityScale<Temperature> = KELVIN.milli();
pub const CELSIUS: QuantityScale<Temperature> =
    QuantityScale::new(1.0, CELSIUS_OFFSET);
pub const FAHRENHEIT: QuantityScale<Temperature> = QuantityScale::new(
    FAHRENHEIT_DEGREE,
    FAHRENHEIT_OFFSET * FAHRENHEIT_DEGREE,
);
pub const RANKINE: QuantityScale<Temperature> = KELVIN.div(FAHRENHEIT_DEGREE);

dimension!(
    /// Thermodynamic temperature, stored in kelvin.
    Temperature,
    [
        NamedScale::new("K", "kelvin", KELVIN).ladder(),
        NamedScale::new("mK", "millikelvin", MILLIKELVIN).ladder(),
        NamedScale::new("°C", "celsius", CELSIUS),
        NamedScale::new("°F", "fahrenheit", FAHRENHEIT),
        NamedScale::new("°R", "rankine", RANKINE),
    ]
);

pub const JOULES_PER_KILOGRAM_KELVIN: QuantityScale<SpecificHeatCapacity> =
    QuantityScale::STANDARD;
pub const KILOJOULES_PER_KILOGRAM_KELVIN: QuantityScale<SpecificHeatCapacity> =
    JOULES_PER_KILOGRAM_KELVIN.kilo();
pub const JOULES_PER_GRAM_KELVIN: QuantityScale<SpecificHeatCapacity> =
    JOULES_PER_KILOGRAM_KELVIN.kilo();
pub const CALORIES_PER_GRAM_KELVIN: QuantityScale<SpecificHeatCapacity> =
    JOULES_PER_GRAM_KELVIN.div(4.184);

dimension!(
    /// Specific heat capacity, stored in J/(kg·K).
    SpecificHeatCapacity,
    [
        NamedScale::new(
            "J/(kg·K)",
            "joules per kilogram kelvin",
            JOULES_PER_KILOGRAM_KELVIN
        ),
        NamedScale::new(
            "kJ/(kg·K)",
            "kilojoules per kilogram kelvin",
            KILOJOULES_PER_KILOGRAM_KELVIN
        ),
        NamedScale::new(
            "J/(g·K)",
            "joules per gram kelvin",
            JOULES_PER_GRAM_KELVIN
        ),
        NamedScale::new(
            "cal/(g·K)",
            "calories per gram kelvin",
            CALORIES_PER_GRAM_KELVIN
        ),
    ]
);

pub const JOULES_PER_KELVIN: QuantityScale<HeatCapacity> =
    QuantityScale::STANDARD;
pub const KILOJOULES_PER_KELVIN: QuantityScale<HeatCapacity> =
    JOULES_PER_KELVIN.kilo();
pub const MEGAJOULES_PER_KELVIN: QuantityScale<HeatCapacity> =
    KILOJOULES_PER_KELVIN.kilo();
pub const CALORIES_PER_KELVIN: QuantityScale<HeatCapacity> =
    JOULES_PER_KELVIN.div(4.184);

dimension!(
    /// Heat capacity, stored in J/K.
    HeatCapacity,
    [
        NamedScale::new("J/K", "joules per kelvin", JOULES_PER_KELVIN).ladder(),
        NamedScale::new("kJ/K", "kilojoules per kelvin", KILOJOULES_PER_KELVIN)
            .ladder(),
        NamedScale::new("MJ/K", "megajoules per kelvin", MEGAJOULES_PER_KELVIN)
            .ladder(),
        NamedScale::new("cal/K", "calories per kelvin", CALORIES_PER_KELVIN),
    ]
);

pub const WATTS_PER_METER_KELVIN: QuantityScale<ThermalConductivity> =
    QuantityScale::STANDARD;
pub const MILLIWATTS_PER_METER_KELVIN: QuantityScale<ThermalConductivity> =
    WATTS_PER_METER_KELVIN.milli();
pub const WATTS_PER_CENTIMETER_KELVIN: QuantityScale<ThermalConductivity> =
    WATTS_PER_METER_KELVIN.div(100.0);
/// International table BTU per hour, foot and degree Fahrenheit.
pub const BTU_PER_HOUR_FOOT_FAHRENHEIT: QuantityScale<ThermalConductivity> =
    WATTS_PER_METER_KELVIN
        .div(1_055.055_852_62 / (3600.0 * 0.3048 * FAHRENHEIT_DEGREE));

dimension!(
    /// Thermal conductivity, stored in W/(m·K).
    ThermalConductivity,
    [
        NamedScale::new(
            "W/(m·K)",
            "watts per meter kelvin",
            WATTS_PER_METER_KELVIN
        ),
        NamedScale::new(
            "mW/(m·K)",
            "milliwatts per meter kelvin",
            MILLIWATTS_PER_METER_KELVIN
        ),
        NamedScale::new(
            "W/(cm·K)",
            "watts per centimeter kelvin",
            WATTS_PER_CENTIMETER_KELVIN
        ),
        NamedScale::new(
            "BTU/(h·ft·°F)",
            "btu per hour foot fahrenheit",
            BTU_PER_HOUR_FOOT_FAHRENHEIT
        ),
    ]
);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Quantity;

    #[test]
    fn celsius_to_kelvin() {
        assert_eq!(Quantity::with_scale(0.0, CELSIUS).to(&KELVIN), 273.15);
        assert_eq!(Quantity::<Temperature>::new(273.15).to(&CELSIUS), 0.0);
    }

    #[test]
    fn fahrenheit() {
        let freezing = Quantity::with_scale(32.0, FAHRENHEIT);
        assert_relative_eq!(freezing.to(&CELSIUS), 0.0, epsilon = 1e-9);
        let boiling = Quantity::with_scale(100.0, CELSIUS);
        assert_relative_eq!(boiling.to(&FAHRENHEIT), 212.0, epsilon = 1e-9);
        assert_relative_eq!(
            Quantity::with_scale(0.0, FAHRENHEIT).to(&RANKINE),
            FAHRENHEIT_OFFSET,
            max_relative = 1e-12
        );
    }

    #[test]
    fn water_specific_heat() {
        let c = Quantity::with_scale(1.0, CALORIES_PER_GRAM_KELVIN);
        assert_relative_eq!(c.value(), 4184.0, max_relative = 1e-12);
        assert_relative_eq!(
            c.to(&KILOJOULES_PER_KILOGRAM_KELVIN),
            4.184,
            max_relative = 1e-12
        );
    }
}
