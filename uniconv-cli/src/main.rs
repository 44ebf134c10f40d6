//! Command line front end for the conversion engine
//!
//! This is the "presentation layer" the engine was built for: it lists
//! families and units, resolves selections against the catalog, and renders
//! `ConversionResult.formatted` (or JSON). All engine errors surface as
//! messages on stderr with a nonzero exit code; nothing here panics on
//! user input.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use uniconv::{convert, ConversionRequest, UnitFamily, CATALOG};

#[derive(Parser)]
#[command(name = "uniconv", version, about = "Convert values across nine measurement families")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the supported families, or the units of one family
    List {
        /// Family name (e.g. "distance"); omit to list all families
        family: Option<String>,
    },
    /// Convert a value between two units of the same family
    Convert {
        /// Family name (e.g. "temperature")
        family: String,
        /// Value to convert
        value: f64,
        /// Source unit; defaults to the family's first unit
        #[arg(long)]
        from: Option<String>,
        /// Target unit; defaults to the family's second unit
        #[arg(long)]
        to: Option<String>,
        /// Emit the result as JSON instead of the formatted string
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List { family: None } => {
            for family in UnitFamily::ALL {
                println!("{family}");
            }
        }
        Command::List {
            family: Some(name),
        } => {
            let family = UnitFamily::from_name(&name)?;
            for unit in CATALOG.units_for(family) {
                println!("{} ({})", unit.display_name, unit.name);
            }
        }
        Command::Convert {
            family,
            value,
            from,
            to,
            json,
        } => {
            let family = UnitFamily::from_name(&family)?;
            let (default_source, default_target) = CATALOG.default_pair(family)?;
            let source = match &from {
                Some(name) => CATALOG.find(family, name)?,
                None => default_source,
            };
            let target = match &to {
                Some(name) => CATALOG.find(family, name)?,
                None => default_target,
            };
            tracing::debug!(%family, source = %source.name, target = %target.name, "resolved units");

            let request = ConversionRequest {
                family,
                source: source.clone(),
                target: target.clone(),
                value,
            };
            let result = convert(&request)?;
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", result.formatted);
            }
        }
    }
    Ok(())
}
