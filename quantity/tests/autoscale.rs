/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use quantity::units::{Energy, Mass, Pressure, Time};
use quantity::Quantity;

fn autoscaled<U: quantity::Dimension>(input: &str) -> (f64, &'static str) {
    let reading = Quantity::<U>::parse(input).unwrap().autoscale();
    (reading.numeral, reading.unit.symbol)
}

#[test]
fn autoscale_time() {
    assert_eq!(autoscaled::<Time>("1800s"), (30.0, "min"));
    assert_eq!(autoscaled::<Time>("3600s"), (1.0, "h"));
    assert_eq!(autoscaled::<Time>(".001s"), (1.0, "ms"));
    assert_eq!(autoscaled::<Time>("0h"), (0.0, "s"));

    let (numeral, symbol) = autoscaled::<Time>("123456789s");
    assert_eq!(symbol, "d");
    assert_relative_eq!(numeral, 123456789.0 / 86400.0, max_relative = 1e-12);
}

#[test]
fn autoscale_mass() {
    assert_eq!(autoscaled::<Mass>("5 kg"), (5.0, "kg"));
    assert_eq!(autoscaled::<Mass>("2500 kg"), (2.5, "t"));
    let (numeral, symbol) = autoscaled::<Mass>("0.5 g");
    assert_eq!(symbol, "mg");
    assert_relative_eq!(numeral, 500.0, max_relative = 1e-12);
}

#[test]
fn autoscale_skips_non_ladder_units() {
    /* 1 atm stays in the pascal ladder. */
    let (numeral, symbol) = autoscaled::<Pressure>("1 atm");
    assert_eq!(symbol, "kPa");
    assert_relative_eq!(numeral, 101.325, max_relative = 1e-12);

    /* Electronvolts are catalogued but never chosen. */
    let (_, symbol) = autoscaled::<Energy>("1 eV");
    assert_ne!(symbol, "eV");
}

#[test]
fn autoscale_keeps_sign() {
    let (numeral, symbol) = autoscaled::<Energy>("-3 MJ");
    assert_eq!(symbol, "MJ");
    assert_relative_eq!(numeral, -3.0, max_relative = 1e-12);
}

#[test]
fn autoscale_non_finite() {
    let reading = Quantity::<Mass>::new(f64::INFINITY).autoscale();
    assert_eq!(reading.unit.symbol, "kg");
    assert!(Quantity::<Mass>::new(f64::NAN).autoscale().numeral.is_nan());
}
