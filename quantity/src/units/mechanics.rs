/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::dimension;
use crate::{NamedScale, QuantityScale};

/* Mass. */

pub const KILOGRAMS: QuantityScale<Mass> = QuantityScale::STANDARD;
pub const GRAMS: QuantityScale<Mass> = KILOGRAMS.milli();
pub const MILLIGRAMS: QuantityScale<Mass> = GRAMS.milli();
pub const MICROGRAMS: QuantityScale<Mass> = MILLIGRAMS.milli();
pub const TONNES: QuantityScale<Mass> = KILOGRAMS.kilo();
/// International avoirdupois pound, exactly 0.45359237 kg.
pub const POUNDS: QuantityScale<Mass> = KILOGRAMS.div(0.45359237);
pub const OUNCES: QuantityScale<Mass> = POUNDS.times(16.0);
/// Unified atomic mass unit (CODATA 2018).
pub const ATOMIC_MASS_UNITS: QuantityScale<Mass> =
    KILOGRAMS.div(1.660_539_066_60e-27);

dimension!(
    /// Mass, stored in kilograms.
    Mass,
    [
        NamedScale::new("kg", "kilograms", KILOGRAMS).ladder(),
        NamedScale::new("g", "grams", GRAMS).ladder(),
        NamedScale::new("mg", "milligrams", MILLIGRAMS).ladder(),
        NamedScale::new("µg", "micrograms", MICROGRAMS).ladder(),
        NamedScale::new("t", "tonnes", TONNES).ladder(),
        NamedScale::new("lb", "pounds", POUNDS),
        NamedScale::new("oz", "ounces", OUNCES),
        NamedScale::new("u", "atomic mass units", ATOMIC_MASS_UNITS),
    ]
);

/* Time. */

pub const SECONDS: QuantityScale<Time> = QuantityScale::STANDARD;
pub const MILLISECONDS: QuantityScale<Time> = SECONDS.milli();
pub const MICROSECONDS: QuantityScale<Time> = MILLISECONDS.milli();
pub const NANOSECONDS: QuantityScale<Time> = MICROSECONDS.milli();
pub const MINUTES: QuantityScale<Time> = SECONDS.div(60.0);
pub const HOURS: QuantityScale<Time> = MINUTES.div(60.0);
pub const DAYS: QuantityScale<Time> = HOURS.div(24.0);
pub const WEEKS: QuantityScale<Time> = DAYS.div(7.0);
/// Julian year of 365.25 days.
pub const YEARS: QuantityScale<Time> = DAYS.div(365.25);

dimension!(
    /// Time, stored in seconds.
    Time,
    [
        NamedScale::new("s", "seconds", SECONDS).ladder(),
        NamedScale::new("ms", "milliseconds", MILLISECONDS).ladder(),
        NamedScale::new("µs", "microseconds", MICROSECONDS).ladder(),
        NamedScale::new("ns", "nanoseconds", NANOSECONDS).ladder(),
        NamedScale::new("min", "minutes", MINUTES).ladder(),
        NamedScale::new("h", "hours", HOURS).ladder(),
        NamedScale::new("d", "days", DAYS).ladder(),
        NamedScale::new("wk", "weeks", WEEKS),
        NamedScale::new("a", "years", YEARS),
    ]
);

/* Distance. */

pub const METERS: QuantityScale<Distance> = QuantityScale::STANDARD;
pub const KILOMETERS: QuantityScale<Distance> = METERS.kilo();
pub const CENTIMETERS: QuantityScale<Distance> = METERS.times(100.0);
pub const MILLIMETERS: QuantityScale<Distance> = METERS.milli();
pub const MICROMETERS: QuantityScale<Distance> = MILLIMETERS.milli();
pub const NANOMETERS: QuantityScale<Distance> = MICROMETERS.milli();
pub const ANGSTROMS: QuantityScale<Distance> = NANOMETERS.times(10.0);
pub const INCHES: QuantityScale<Distance> = CENTIMETERS.div(2.54);
pub const FEET: QuantityScale<Distance> = INCHES.div(12.0);
pub const MILES: QuantityScale<Distance> = FEET.div(5280.0);
pub const NAUTICAL_MILES: QuantityScale<Distance> = METERS.div(1852.0);
pub const ASTRONOMICAL_UNITS: QuantityScale<Distance> =
    METERS.div(149_597_870_700.0);
pub const LIGHT_YEARS: QuantityScale<Distance> =
    METERS.div(9_460_730_472_580_800.0);
pub const PARSECS: QuantityScale<Distance> =
    ASTRONOMICAL_UNITS.div(648_000.0 / std::f64::consts::PI);

dimension!(
    /// Distance, stored in meters.
    Distance,
    [
        NamedScale::new("m", "meters", METERS).ladder(),
        NamedScale::new("km", "kilometers", KILOMETERS).ladder(),
        NamedScale::new("cm", "centimeters", CENTIMETERS),
        NamedScale::new("mm", "millimeters", MILLIMETERS).ladder(),
        NamedScale::new("µm", "micrometers", MICROMETERS).ladder(),
        NamedScale::new("nm", "nanometers", NANOMETERS).ladder(),
        NamedScale::new("Å", "angstroms", ANGSTROMS),
        NamedScale::new("in", "inches", INCHES),
        NamedScale::new("ft", "feet", FEET),
        NamedScale::new("mi", "miles", MILES),
        NamedScale::new("nmi", "nautical miles", NAUTICAL_MILES),
        NamedScale::new("au", "astronomical units", ASTRONOMICAL_UNITS),
        NamedScale::new("ly", "light years", LIGHT_YEARS),
        NamedScale::new("pc", "parsecs", PARSECS),
    ]
);

/* Velocity. */

pub const METERS_PER_SECOND: QuantityScale<Velocity> = QuantityScale::STANDARD;
pub const KILOMETERS_PER_SECOND: QuantityScale<Velocity> =
    METERS_PER_SECOND.kilo();
pub const KILOMETERS_PER_HOUR: QuantityScale<Velocity> =
    METERS_PER_SECOND.div(1000.0 / 3600.0);
pub const MILES_PER_HOUR: QuantityScale<Velocity> =
    METERS_PER_SECOND.div(0.44704);
pub const KNOTS: QuantityScale<Velocity> =
    METERS_PER_SECOND.div(1852.0 / 3600.0);
pub const SPEED_OF_LIGHT: QuantityScale<Velocity> =
    METERS_PER_SECOND.div(299_792_458.0);

dimension!(
    /// Velocity, stored in meters per second.
    Velocity,
    [
        NamedScale::new("m/s", "meters per second", METERS_PER_SECOND)
            .ladder(),
        NamedScale::new("km/s", "kilometers per second", KILOMETERS_PER_SECOND)
            .ladder(),
        NamedScale::new("km/h", "kilometers per hour", KILOMETERS_PER_HOUR),
        NamedScale::new("mph", "miles per hour", MILES_PER_HOUR),
        NamedScale::new("kn", "knots", KNOTS),
        NamedScale::new("c", "speed of light", SPEED_OF_LIGHT),
    ]
);

/* Energy. */

pub const JOULES: QuantityScale<Energy> = QuantityScale::STANDARD;
pub const MILLIJOULES: QuantityScale<Energy> = JOULES.milli();
pub const KILOJOULES: QuantityScale<Energy> = JOULES.kilo();
pub const MEGAJOULES: QuantityScale<Energy> = KILOJOULES.kilo();
pub const GIGAJOULES: QuantityScale<Energy> = MEGAJOULES.kilo();
/// Exact since the 2019 SI redefinition.
pub const ELECTRONVOLTS: QuantityScale<Energy> = JOULES.div(1.602_176_634e-19);
pub const KILOELECTRONVOLTS: QuantityScale<Energy> = ELECTRONVOLTS.kilo();
pub const MEGAELECTRONVOLTS: QuantityScale<Energy> = KILOELECTRONVOLTS.kilo();
pub const GIGAELECTRONVOLTS: QuantityScale<Energy> = MEGAELECTRONVOLTS.kilo();
/// Thermochemical calorie.
pub const CALORIES: QuantityScale<Energy> = JOULES.div(4.184);
pub const KILOCALORIES: QuantityScale<Energy> = CALORIES.kilo();
pub const WATT_HOURS: QuantityScale<Energy> = JOULES.div(3600.0);
pub const KILOWATT_HOURS: QuantityScale<Energy> = WATT_HOURS.kilo();
pub const ERGS: QuantityScale<Energy> = JOULES.times(1e7);

dimension!(
    /// Energy, stored in joules.
    Energy,
    [
        NamedScale::new("J", "joules", JOULES).ladder(),
        NamedScale::new("mJ", "millijoules", MILLIJOULES).ladder(),
        NamedScale::new("kJ", "kilojoules", KILOJOULES).ladder(),
        NamedScale::new("MJ", "megajoules", MEGAJOULES).ladder(),
        NamedScale::new("GJ", "gigajoules", GIGAJOULES).ladder(),
        NamedScale::new("eV", "electronvolts", ELECTRONVOLTS),
        NamedScale::new("keV", "kiloelectronvolts", KILOELECTRONVOLTS),
        NamedScale::new("MeV", "megaelectronvolts", MEGAELECTRONVOLTS),
        NamedScale::new("GeV", "gigaelectronvolts", GIGAELECTRONVOLTS),
        NamedScale::new("cal", "calories", CALORIES),
        NamedScale::new("kcal", "kilocalories", KILOCALORIES),
        NamedScale::new("Wh", "watt hours", WATT_HOURS),
        NamedScale::new("kWh", "kilowatt hours", KILOWATT_HOURS),
        NamedScale::new("erg", "ergs", ERGS),
    ]
);

/* Pressure. */

pub const PASCALS: QuantityScale<Pressure> = QuantityScale::STANDARD;
pub const HECTOPASCALS: QuantityScale<Pressure> = PASCALS.div(100.0);
pub const KILOPASCALS: QuantityScale<Pressure> = PASCALS.kilo();
pub const MEGAPASCALS: QuantityScale<Pressure> = KILOPASCALS.kilo();
pub const GIGAPASCALS: QuantityScale<Pressure> = MEGAPASCALS.kilo();
pub const BARS: QuantityScale<Pressure> = PASCALS.div(1e5);
pub const MILLIBARS: QuantityScale<Pressure> = BARS.milli();
/// Standard atmosphere as defined by the 10th CGPM (1954): exactly
/// 101325 Pa, rather than the rounded `1 / 9.86923e-6` Pa.
pub const ATMOSPHERES: QuantityScale<Pressure> = PASCALS.div(101_325.0);
pub const TORR: QuantityScale<Pressure> = ATMOSPHERES.times(760.0);
pub const MILLIMETERS_OF_MERCURY: QuantityScale<Pressure> =
    PASCALS.div(133.322_387_415);
pub const PSI: QuantityScale<Pressure> = PASCALS.div(6_894.757_293_168_361);

dimension!(
    /// Pressure, stored in pascals.
    Pressure,
    [
        NamedScale::new("Pa", "pascals", PASCALS).ladder(),
        NamedScale::new("hPa", "hectopascals", HECTOPASCALS),
        NamedScale::new("kPa", "kilopascals", KILOPASCALS).ladder(),
        NamedScale::new("MPa", "megapascals", MEGAPASCALS).ladder(),
        NamedScale::new("GPa", "gigapascals", GIGAPASCALS).ladder(),
        NamedScale::new("bar", "bars", BARS),
        NamedScale::new("mbar", "millibars", MILLIBARS),
        NamedScale::new("atm", "atmospheres", ATMOSPHERES),
        NamedScale::new("Torr", "torr", TORR),
        NamedScale::new(
            "mmHg",
            "millimeters of mercury",
            MILLIMETERS_OF_MERCURY
        ),
        NamedScale::new("psi", "pounds per square inch", PSI),
    ]
);
