/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::dimension;
use crate::{NamedScale, QuantityScale};

pub const MOLES: QuantityScale<Substance> = QuantityScale::STANDARD;
pub const KILOMOLES: QuantityScale<Substance> = MOLES.kilo();
pub const MILLIMOLES: QuantityScale<Substance> = MOLES.milli();
pub const MICROMOLES: QuantityScale<Substance> = MILLIMOLES.milli();
pub const NANOMOLES: QuantityScale<Substance> = MICROMOLES.milli();

dimension!(
    /// Amount of substance, stored in moles.
    Substance,
    [
        NamedScale::new("mol", "moles", MOLES).ladder(),
        NamedScale::new("kmol", "kilomoles", KILOMOLES).ladder(),
        NamedScale::new("mmol", "millimoles", MILLIMOLES).ladder(),
        NamedScale::new("µmol", "micromoles", MICROMOLES).ladder(),
        NamedScale::new("nmol", "nanomoles", NANOMOLES).ladder(),
    ]
);

pub const MOLES_PER_CUBIC_METER: QuantityScale<MolarConcentration> =
    QuantityScale::STANDARD;
/// Moles per liter.
pub const MOLAR: QuantityScale<MolarConcentration> =
    MOLES_PER_CUBIC_METER.kilo();
pub const MILLIMOLAR: QuantityScale<MolarConcentration> = MOLAR.milli();
pub const MICROMOLAR: QuantityScale<MolarConcentration> = MILLIMOLAR.milli();

dimension!(
    /// Molar concentration, stored in mol/m³.
    MolarConcentration,
    [
        NamedScale::new(
            "mol/m³",
            "moles per cubic meter",
            MOLES_PER_CUBIC_METER
        ),
        NamedScale::new("M", "molar", MOLAR).ladder(),
        NamedScale::new("mM", "millimolar", MILLIMOLAR).ladder(),
        NamedScale::new("µM", "micromolar", MICROMOLAR).ladder(),
    ]
);

pub const KILOGRAMS_PER_MOLE: QuantityScale<MolecularWeight> =
    QuantityScale::STANDARD;
pub const GRAMS_PER_MOLE: QuantityScale<MolecularWeight> =
    KILOGRAMS_PER_MOLE.milli();
/// Numerically equal to grams per mole.
pub const DALTONS: QuantityScale<MolecularWeight> = GRAMS_PER_MOLE;
pub const KILODALTONS: QuantityScale<MolecularWeight> = DALTONS.kilo();

dimension!(
    /// Molar mass, stored in kg/mol.
    MolecularWeight,
    [
        NamedScale::new("kg/mol", "kilograms per mole", KILOGRAMS_PER_MOLE),
        NamedScale::new("g/mol", "grams per mole", GRAMS_PER_MOLE),
        NamedScale::new("Da", "daltons", DALTONS),
        NamedScale::new("kDa", "kilodaltons", KILODALTONS),
    ]
);
