/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of, space0},
    combinator::{map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, tuple},
    IResult,
};

use crate::{Dimension, NamedScale, Quantity, UnitError};

/// Parse a string such as `"5 kg"`, `"-12.5mSv"` or `"3e10 Bq"` to a
/// quantity of dimension `U`. Without a unit the number is taken to
/// be in the standard scale.
pub fn parse_quantity<U: Dimension>(
    input: &str,
) -> Result<Quantity<U>, UnitError> {
    match quantity(input.trim()) {
        Ok(("", (num, None))) => Ok(Quantity::new(num)),
        Ok(("", (num, Some(symbol)))) => {
            let named = lookup::<U>(symbol)?;
            log::trace!("parsed {num} {} as {}", named.symbol, U::KIND);
            Ok(Quantity::with_scale(num, named.scale))
        }
        Ok((r, _)) => {
            Err(UnitError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(UnitError::ParseError(format!("{}", err))),
    }
}

/// Look up a catalogued scale of dimension `U` by symbol or name.
pub fn parse_scale<U: Dimension>(
    input: &str,
) -> Result<&'static NamedScale<U>, UnitError> {
    lookup::<U>(input.trim())
}

fn lookup<U: Dimension>(
    symbol: &str,
) -> Result<&'static NamedScale<U>, UnitError> {
    U::find_scale(symbol).ok_or_else(|| {
        log::debug!("no {} scale named {:?}", U::KIND, symbol);
        UnitError::UnknownScale(U::KIND, symbol.to_string())
    })
}

/// Parser for quantities (number and optional unit).
pub fn quantity(input: &str) -> IResult<&str, (f64, Option<&str>)> {
    tuple((number, opt(delimited(space0, unit, space0))))(input)
}

/// Decimal number with optional exponent. An `e` not followed by
/// digits is left for the unit, so "5eV" reads as 5 electronvolts.
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Unit symbols and long names: words separated by single spaces
/// ("kg", "J/(kg·K)", "nautical miles").
pub fn unit(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(
        char(' '),
        take_while1(|c: char| !c.is_whitespace()),
    ))(input)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{parse_quantity, parse_scale};
    use crate::units::{
        Distance, Energy, Mass, Pressure, Temperature, ELECTRONVOLTS, ERGS,
        NAUTICAL_MILES,
    };
    use crate::{DimensionKind, Quantity, UnitError};

    #[test]
    fn numbers_and_symbols() {
        let q: Quantity<Mass> = parse_quantity("5 kg").unwrap();
        assert_eq!(q.value(), 5.0);
        let q: Quantity<Mass> = parse_quantity("250g").unwrap();
        assert_relative_eq!(q.value(), 0.25, max_relative = 1e-12);
        let q: Quantity<Energy> = parse_quantity(" 1.5e3 kJ ").unwrap();
        assert_relative_eq!(q.value(), 1.5e6, max_relative = 1e-12);
        let q: Quantity<Temperature> = parse_quantity("-273.15 °C").unwrap();
        assert_eq!(q.value(), 0.0);
    }

    #[test]
    fn symbols_starting_with_e() {
        let q: Quantity<Energy> = parse_quantity("5eV").unwrap();
        assert_eq!(q, Quantity::with_scale(5.0, ELECTRONVOLTS));
        let q: Quantity<Energy> = parse_quantity("3erg").unwrap();
        assert_eq!(q, Quantity::with_scale(3.0, ERGS));
        let q: Quantity<Energy> = parse_quantity("2electronvolts").unwrap();
        assert_eq!(q, Quantity::with_scale(2.0, ELECTRONVOLTS));
        let q: Quantity<Energy> = parse_quantity("1e3eV").unwrap();
        assert_eq!(q, Quantity::with_scale(1e3, ELECTRONVOLTS));
        let q: Quantity<Energy> = parse_quantity("1.5E-3 J").unwrap();
        assert_eq!(q.value(), 1.5e-3);
    }

    #[test]
    fn bare_number_is_standard() {
        let q: Quantity<Pressure> = parse_quantity("101325").unwrap();
        assert_eq!(q.value(), 101325.0);
    }

    #[test]
    fn long_names() {
        let q: Quantity<Distance> = parse_quantity("2 nautical miles").unwrap();
        assert_eq!(q, Quantity::with_scale(2.0, NAUTICAL_MILES));
        let q: Quantity<Mass> = parse_quantity("3 Kilograms").unwrap();
        assert_eq!(q.value(), 3.0);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse_quantity::<Mass>("5 parsecs"),
            Err(UnitError::UnknownScale(
                DimensionKind::Mass,
                "parsecs".to_string()
            ))
        );
        assert!(matches!(
            parse_quantity::<Mass>("five kg"),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity::<Mass>("5 kg  extra"),
            Err(UnitError::ParseError(_))
        ));
    }

    #[test]
    fn scales() {
        assert_eq!(parse_scale::<Energy>("eV").unwrap().name, "electronvolts");
        assert_eq!(parse_scale::<Energy>("joules").unwrap().symbol, "J");
        assert!(parse_scale::<Energy>("kg").is_err());
    }
}
