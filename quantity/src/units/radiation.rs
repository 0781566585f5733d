/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::dimension;
use crate::{NamedScale, QuantityScale};

pub const BECQUERELS: QuantityScale<Radioactivity> = QuantityScale::STANDARD;
pub const KILOBECQUERELS: QuantityScale<Radioactivity> = BECQUERELS.kilo();
pub const MEGABECQUERELS: QuantityScale<Radioactivity> = KILOBECQUERELS.kilo();
pub const GIGABECQUERELS: QuantityScale<Radioactivity> = MEGABECQUERELS.kilo();
pub const TERABECQUERELS: QuantityScale<Radioactivity> = GIGABECQUERELS.kilo();
/// 1 Ci = 37 GBq, exactly.
pub const CURIES: QuantityScale<Radioactivity> = GIGABECQUERELS.div(37.0);
pub const MILLICURIES: QuantityScale<Radioactivity> = CURIES.milli();
pub const MICROCURIES: QuantityScale<Radioactivity> = MILLICURIES.milli();

dimension!(
    /// Activity of a radioactive source, stored in becquerels.
    Radioactivity,
    [
        NamedScale::new("Bq", "becquerels", BECQUERELS).ladder(),
        NamedScale::new("kBq", "kilobecquerels", KILOBECQUERELS).ladder(),
        NamedScale::new("MBq", "megabecquerels", MEGABECQUERELS).ladder(),
        NamedScale::new("GBq", "gigabecquerels", GIGABECQUERELS).ladder(),
        NamedScale::new("TBq", "terabecquerels", TERABECQUERELS).ladder(),
        NamedScale::new("Ci", "curies", CURIES),
        NamedScale::new("mCi", "millicuries", MILLICURIES),
        NamedScale::new("µCi", "microcuries", MICROCURIES),
    ]
);

pub const GRAYS: QuantityScale<RadiationAbsorbedDose> = QuantityScale::STANDARD;
pub const MILLIGRAYS: QuantityScale<RadiationAbsorbedDose> = GRAYS.milli();
pub const MICROGRAYS: QuantityScale<RadiationAbsorbedDose> = MILLIGRAYS.milli();
/// 1 rad = 0.01 Gy.
pub const RADS: QuantityScale<RadiationAbsorbedDose> = GRAYS.times(100.0);
pub const MILLIRADS: QuantityScale<RadiationAbsorbedDose> = RADS.milli();

dimension!(
    /// Absorbed dose, stored in grays.
    RadiationAbsorbedDose,
    [
        NamedScale::new("Gy", "grays", GRAYS).ladder(),
        NamedScale::new("mGy", "milligrays", MILLIGRAYS).ladder(),
        NamedScale::new("µGy", "micrograys", MICROGRAYS).ladder(),
        NamedScale::new("rad", "rads", RADS),
        NamedScale::new("mrad", "millirads", MILLIRADS),
    ]
);

pub const SIEVERTS: QuantityScale<RadiationDoseEquivalent> =
    QuantityScale::STANDARD;
pub const MILLISIEVERTS: QuantityScale<RadiationDoseEquivalent> =
    SIEVERTS.milli();
pub const MICROSIEVERTS: QuantityScale<RadiationDoseEquivalent> =
    MILLISIEVERTS.milli();
/// 1 rem = 0.01 Sv.
pub const REMS: QuantityScale<RadiationDoseEquivalent> = SIEVERTS.times(100.0);
pub const MILLIREMS: QuantityScale<RadiationDoseEquivalent> = REMS.milli();

dimension!(
    /// Equivalent dose, stored in sieverts.
    RadiationDoseEquivalent,
    [
        NamedScale::new("Sv", "sieverts", SIEVERTS).ladder(),
        NamedScale::new("mSv", "millisieverts", MILLISIEVERTS).ladder(),
        NamedScale::new("µSv", "microsieverts", MICROSIEVERTS).ladder(),
        NamedScale::new("rem", "rems", REMS),
        NamedScale::new("mrem", "millirems", MILLIREMS),
    ]
);

pub const COULOMBS_PER_KILOGRAM: QuantityScale<RadiationExposure> =
    QuantityScale::STANDARD;
pub const MILLICOULOMBS_PER_KILOGRAM: QuantityScale<RadiationExposure> =
    COULOMBS_PER_KILOGRAM.milli();
/// 1 R = 2.58 × 10⁻⁴ C/kg.
pub const ROENTGENS: QuantityScale<RadiationExposure> =
    COULOMBS_PER_KILOGRAM.div(2.58e-4);
pub const MILLIROENTGENS: QuantityScale<RadiationExposure> = ROENTGENS.milli();
pub const MICROROENTGENS: QuantityScale<RadiationExposure> =
    MILLIROENTGENS.milli();

dimension!(
    /// Ionising exposure, stored in coulombs per kilogram.
    RadiationExposure,
    [
        NamedScale::new("C/kg", "coulombs per kilogram", COULOMBS_PER_KILOGRAM)
            .ladder(),
        NamedScale::new(
            "mC/kg",
            "millicoulombs per kilogram",
            MILLICOULOMBS_PER_KILOGRAM
        )
        .ladder(),
        NamedScale::new("R", "roentgens", ROENTGENS),
        NamedScale::new("mR", "milliroentgens", MILLIROENTGENS),
        NamedScale::new("µR", "microroentgens", MICROROENTGENS),
    ]
);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Quantity;

    #[test]
    fn curie() {
        assert_eq!(CURIES.factor(), GIGABECQUERELS.factor() * 37.0);
        assert_eq!(Quantity::with_scale(1.0, CURIES).to(&BECQUERELS), 3.7e10);
        assert_relative_eq!(
            Quantity::with_scale(1.0, MICROCURIES).to(&KILOBECQUERELS),
            37.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn legacy_dose_units() {
        assert_relative_eq!(
            Quantity::with_scale(1.0, GRAYS).to(&RADS),
            100.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            Quantity::with_scale(500.0, MILLIREMS).to(&MILLISIEVERTS),
            5.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            Quantity::with_scale(1.0, ROENTGENS).value(),
            2.58e-4,
            max_relative = 1e-12
        );
    }
}
