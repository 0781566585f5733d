/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use serde::Serialize;
use std::{env, process};

use quantity::{
    parser::{parse_quantity, parse_scale},
    with_dimension, Dimension, DimensionKind, Quantity, Reading, Scale,
    UnitError,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Quantity Converter
///
/// Parses quantities of a single dimension and prints them in another
/// unit of that dimension.
struct Args {
    #[clap(long, short)]
    /// The dimension of the quantities (e.g. "mass", "radioactivity").
    dimension: DimensionKind,
    #[clap(long, short)]
    /// Unit to convert to. Without it, a fitting unit is chosen.
    to: Option<String>,
    #[clap(long)]
    /// Output JSON instead of text.
    json: bool,
    #[clap(long)]
    /// List the units known for the dimension.
    list: bool,
    /// Increase verbosity. Every additional v increases the verbosity by
    /// one stage.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// The quantities to convert ("5 kg", "12mSv", ...).
    quantity: Vec<String>,
}

#[derive(Serialize)]
#[serde(bound = "")]
struct Conversion<U: Dimension> {
    input: String,
    #[serde(with = "quantity::quantity_as_object")]
    standard: Quantity<U>,
    reading: Reading<U>,
}

#[derive(Serialize)]
struct CatalogueEntry {
    symbol: &'static str,
    name: &'static str,
    scale: Scale,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Info,
                2 => simplelog::LevelFilter::Debug,
                3.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    let result = match args.list {
        true => with_dimension!(args.dimension, D => list::<D>(&args)),
        false => with_dimension!(args.dimension, D => convert::<D>(&args)),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1)
    }
}

fn list<U: Dimension>(args: &Args) -> Result<(), UnitError> {
    log::info!("listing {} {} units", U::SCALES.len(), U::KIND);
    match args.json {
        true => {
            let entries = U::SCALES
                .iter()
                .map(|named| CatalogueEntry {
                    symbol: named.symbol,
                    name: named.name,
                    scale: named.scale.scale(),
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string(&entries)?);
        }
        false => {
            for named in U::SCALES {
                println!("{}\t{}\t{}", named.symbol, named.name, named.scale);
            }
        }
    }
    Ok(())
}

fn convert<U: Dimension>(args: &Args) -> Result<(), UnitError> {
    let target = args.to.as_deref().map(parse_scale::<U>).transpose()?;

    let conversions = args
        .quantity
        .iter()
        .map(|input| -> Result<Conversion<U>, UnitError> {
            let standard = parse_quantity::<U>(input)?;
            let reading = match target {
                Some(named) => standard.reading(named),
                None => standard.autoscale(),
            };
            log::debug!("{} -> {} ({})", input, reading, standard);
            Ok(Conversion {
                input: input.to_string(),
                standard,
                reading,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match args.json {
        true => println!("{}", serde_json::to_string(&conversions)?),
        false => {
            for conversion in conversions {
                println!("{}", conversion.reading);
            }
        }
    }
    Ok(())
}
