//! opal command-line interface.
//!
//! Query the refractive index of built-in or user-defined materials:
//! ```sh
//! opal materials
//! opal query BK7 0.5876
//! opal sweep water --min 0.3 --max 1.0 --points 50
//! opal custom sf11.toml 0.6328
//! ```
//!
//! Out-of-range requests are not errors: the lookup proceeds and an
//! advisory is logged (set `RUST_LOG=warn` to see it).

mod config;
mod runner;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use opal_core::{Length, LengthUnit, Wavelengths};
use opal_materials::{catalog, Material, RefractiveIndex};

#[derive(Parser)]
#[command(name = "opal")]
#[command(about = "Refractive index of optical materials")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the built-in materials and their wavelength ranges.
    Materials,
    /// Evaluate n + ik at a single wavelength.
    Query {
        /// Built-in material identifier (see `opal materials`).
        material: String,
        /// Wavelength magnitude.
        wavelength: f64,
        /// Unit the wavelength is expressed in.
        #[arg(short, long, default_value = "um")]
        unit: String,
    },
    /// Print a refractive index spectrum as CSV on stdout.
    Sweep {
        /// Built-in material identifier.
        material: String,
        /// Sweep start; omit both ends to sweep the declared range.
        #[arg(long)]
        min: Option<f64>,
        /// Sweep end.
        #[arg(long)]
        max: Option<f64>,
        /// Number of samples.
        #[arg(long, default_value_t = opal_materials::DEFAULT_SWEEP_POINTS)]
        points: usize,
        /// Unit of --min and --max.
        #[arg(short, long, default_value = "um")]
        unit: String,
    },
    /// Evaluate a user-defined material from a TOML definition file.
    Custom {
        /// Path to the material definition file.
        definition: PathBuf,
        /// Wavelength magnitude; omit for a full-range sweep.
        wavelength: Option<f64>,
        /// Unit the wavelength is expressed in.
        #[arg(short, long, default_value = "um")]
        unit: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Materials => {
            println!("Available materials:");
            println!();
            for name in catalog::names() {
                let material = catalog::builtin(name)?;
                match material.wavelength_bound() {
                    Some(bound) => println!(
                        "  {:<14} {} – {}",
                        name,
                        bound.min().to_compact(),
                        bound.max().to_compact()
                    ),
                    None => println!("  {:<14} (no declared range)", name),
                }
            }
            Ok(())
        }
        Commands::Query {
            material,
            wavelength,
            unit,
        } => {
            let unit: LengthUnit = unit.parse()?;
            let material = catalog::builtin(&material)?;
            runner::print_index(material.as_ref(), Length::new(wavelength, unit))
        }
        Commands::Sweep {
            material,
            min,
            max,
            points,
            unit,
        } => {
            let unit: LengthUnit = unit.parse()?;
            let material = catalog::builtin(&material)?;
            let spectrum = match (min, max) {
                (Some(lo), Some(hi)) => {
                    let grid = Wavelengths::linspace(lo, hi, points, unit);
                    material.sample(Some(grid.into()))?
                }
                (None, None) => material.sample(None)?,
                _ => bail!("--min and --max must be given together"),
            };
            runner::print_spectrum(
                &mut std::io::stdout().lock(),
                material.filename(),
                &spectrum,
            )
        }
        Commands::Custom {
            definition,
            wavelength,
            unit,
        } => {
            let unit: LengthUnit = unit.parse()?;
            let file = config::load_material(&definition)?;
            let material = runner::build_material(&file.material)?;
            match wavelength {
                Some(magnitude) => {
                    runner::print_index(material.as_ref(), Length::new(magnitude, unit))
                }
                None => {
                    let spectrum = material.sample(None)?;
                    runner::print_spectrum(
                        &mut std::io::stdout().lock(),
                        material.filename(),
                        &spectrum,
                    )
                }
            }
        }
    }
}
