/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{NamedScale, UnitError};

/// A physical dimension, implemented by uninhabited marker types that
/// are only ever used as type arguments (`Quantity<Mass>`).
pub trait Dimension: Sized + 'static {
    const KIND: DimensionKind;

    /// Scale catalogue. The first entry is the standard scale.
    const SCALES: &'static [NamedScale<Self>];

    fn standard() -> &'static NamedScale<Self> {
        &Self::SCALES[0]
    }

    /// Look up a scale by symbol, then by long name.
    fn find_scale(input: &str) -> Option<&'static NamedScale<Self>> {
        Self::SCALES
            .iter()
            .find(|named| named.symbol == input)
            .or_else(|| Self::SCALES.iter().find(|named| named.matches(input)))
    }
}

/// Runtime counterpart of the dimension markers, for places where the
/// dimension is only known at run time.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    /* Mechanics. */
    Mass,
    Time,
    Distance,
    Velocity,
    Energy,
    Pressure,

    /* Geometry. */
    Area,
    Volume,
    ReciprocalDistance,

    /* Densities. */
    ArealDensity,
    ReciprocalArealDensity,
    Density,

    /* Radiation. */
    Radioactivity,
    RadiationAbsorbedDose,
    RadiationDoseEquivalent,
    RadiationExposure,

    /* Chemistry. */
    Substance,
    MolarConcentration,
    MolecularWeight,

    /* Thermal. */
    Temperature,
    SpecificHeatCapacity,
    HeatCapacity,
    ThermalConductivity,
}

pub static DIMENSIONS: [DimensionKind; 23] = [
    DimensionKind::Mass,
    DimensionKind::Time,
    DimensionKind::Distance,
    DimensionKind::Velocity,
    DimensionKind::Energy,
    DimensionKind::Pressure,
    DimensionKind::Area,
    DimensionKind::Volume,
    DimensionKind::ReciprocalDistance,
    DimensionKind::ArealDensity,
    DimensionKind::ReciprocalArealDensity,
    DimensionKind::Density,
    DimensionKind::Radioactivity,
    DimensionKind::RadiationAbsorbedDose,
    DimensionKind::RadiationDoseEquivalent,
    DimensionKind::RadiationExposure,
    DimensionKind::Substance,
    DimensionKind::MolarConcentration,
    DimensionKind::MolecularWeight,
    DimensionKind::Temperature,
    DimensionKind::SpecificHeatCapacity,
    DimensionKind::HeatCapacity,
    DimensionKind::ThermalConductivity,
];

impl DimensionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Distance => "distance",
            Self::Velocity => "velocity",
            Self::Energy => "energy",
            Self::Pressure => "pressure",
            Self::Area => "area",
            Self::Volume => "volume",
            Self::ReciprocalDistance => "reciprocal_distance",
            Self::ArealDensity => "areal_density",
            Self::ReciprocalArealDensity => "reciprocal_areal_density",
            Self::Density => "density",
            Self::Radioactivity => "radioactivity",
            Self::RadiationAbsorbedDose => "radiation_absorbed_dose",
            Self::RadiationDoseEquivalent => "radiation_dose_equivalent",
            Self::RadiationExposure => "radiation_exposure",
            Self::Substance => "substance",
            Self::MolarConcentration => "molar_concentration",
            Self::MolecularWeight => "molecular_weight",
            Self::Temperature => "temperature",
            Self::SpecificHeatCapacity => "specific_heat_capacity",
            Self::HeatCapacity => "heat_capacity",
            Self::ThermalConductivity => "thermal_conductivity",
        }
    }

    /// Symbol of the standard scale.
    pub fn standard_symbol(&self) -> &'static str {
        crate::with_dimension!(*self, D => D::standard().symbol)
    }
}

impl Display for DimensionKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DimensionKind {
    type Err = UnitError;
    fn from_str(input: &str) -> Result<Self, UnitError> {
        let wanted = input.trim().replace(['-', ' '], "_");
        DIMENSIONS
            .iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(&wanted)
                    || format!("{:?}", kind).eq_ignore_ascii_case(&wanted)
            })
            .copied()
            .ok_or_else(|| UnitError::UnknownDimension(input.to_string()))
    }
}

/// Run `$body` with `$dim` bound to the marker type for a runtime
/// [`DimensionKind`].
///
/// ```
/// use quantity::{with_dimension, Dimension, DimensionKind};
/// let symbol =
///     with_dimension!(DimensionKind::Mass, D => D::standard().symbol);
/// assert_eq!(symbol, "kg");
/// ```
#[macro_export]
macro_rules! with_dimension {
    ($kind:expr, $dim:ident => $body:expr) => {
        match $kind {
            $crate::DimensionKind::Mass => {
                type $dim = $crate::units::Mass;
                $body
            }
            $crate::DimensionKind::Time => {
                type $dim = $crate::units::Time;
                $body
            }
            $crate::DimensionKind::Distance => {
                type $dim = $crate::units::Distance;
                $body
            }
            $crate::DimensionKind::Velocity => {
                type $dim = $crate::units::Velocity;
                $body
            }
            $crate::DimensionKind::Energy => {
                type $dim = $crate::units::Energy;
                $body
            }
            $crate::DimensionKind::Pressure => {
                type $dim = $crate::units::Pressure;
                $body
            }
            $crate::DimensionKind::Area => {
                type $dim = $crate::units::Area;
                $body
            }
            $crate::DimensionKind::Volume => {
                type $dim = $crate::units::Volume;
                $body
            }
            $crate::DimensionKind::ReciprocalDistance => {
                type $dim = $crate::units::ReciprocalDistance;
                $body
            }
            $crate::DimensionKind::ArealDensity => {
                type $dim = $crate::units::ArealDensity;
                $body
            }
            $crate::DimensionKind::ReciprocalArealDensity => {
                type $dim = $crate::units::ReciprocalArealDensity;
                $body
            }
            $crate::DimensionKind::Density => {
                type $dim = $crate::units::Density;
                $body
            }
            $crate::DimensionKind::Radioactivity => {
                type $dim = $crate::units::Radioactivity;
                $body
            }
            $crate::DimensionKind::RadiationAbsorbedDose => {
                type $dim = $crate::units::RadiationAbsorbedDose;
                $body
            }
            $crate::DimensionKind::RadiationDoseEquivalent => {
                type $dim = $crate::units::RadiationDoseEquivalent;
                $body
            }
            $crate::DimensionKind::RadiationExposure => {
                type $dim = $crate::units::RadiationExposure;
                $body
            }
            $crate::DimensionKind::Substance => {
                type $dim = $crate::units::Substance;
                $body
            }
            $crate::DimensionKind::MolarConcentration => {
                type $dim = $crate::units::MolarConcentration;
                $body
            }
            $crate::DimensionKind::MolecularWeight => {
                type $dim = $crate::units::MolecularWeight;
                $body
            }
            $crate::DimensionKind::Temperature => {
                type $dim = $crate::units::Temperature;
                $body
            }
            $crate::DimensionKind::SpecificHeatCapacity => {
                type $dim = $crate::units::SpecificHeatCapacity;
                $body
            }
            $crate::DimensionKind::HeatCapacity => {
                type $dim = $crate::units::HeatCapacity;
                $body
            }
            $crate::DimensionKind::ThermalConductivity => {
                type $dim = $crate::units::ThermalConductivity;
                $body
            }
        }
    };
}

/// Declare a dimension marker and its scale catalogue. The first
/// catalogue entry must be the standard scale.
macro_rules! dimension {
    ($(#[$meta:meta])* $name:ident, [ $($scale:expr),+ $(,)? ]) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
        pub enum $name {}

        impl $crate::Dimension for $name {
            const KIND: $crate::DimensionKind = $crate::DimensionKind::$name;
            const SCALES: &'static [$crate::NamedScale<Self>] = &[$($scale),+];
        }
    };
}

pub(crate) use dimension;

#[cfg(test)]
mod tests {
    use super::{DimensionKind, DIMENSIONS};
    use crate::{with_dimension, Dimension};

    #[test]
    fn parse_names() {
        assert_eq!(
            "mass".parse::<DimensionKind>().unwrap(),
            DimensionKind::Mass
        );
        assert_eq!(
            "RadiationDoseEquivalent".parse::<DimensionKind>().unwrap(),
            DimensionKind::RadiationDoseEquivalent
        );
        assert_eq!(
            "molar-concentration".parse::<DimensionKind>().unwrap(),
            DimensionKind::MolarConcentration
        );
        assert!("charm".parse::<DimensionKind>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for kind in DIMENSIONS {
            assert_eq!(kind.name().parse::<DimensionKind>().unwrap(), kind);
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::json!(kind.name())
            );
        }
    }

    #[test]
    fn markers_match_kinds() {
        for kind in DIMENSIONS {
            assert_eq!(with_dimension!(kind, D => D::KIND), kind);
        }
    }

    #[test]
    fn catalogues_start_with_standard() {
        for kind in DIMENSIONS {
            let (factor, base) = with_dimension!(kind, D => (
                D::standard().scale.factor(),
                D::standard().scale.base()
            ));
            assert_eq!((factor, base), (1.0, 0.0), "{}", kind);
            assert!(!kind.standard_symbol().is_empty());
        }
    }
}
