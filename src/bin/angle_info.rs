//! Angle Information Tool
//!
//! This binary takes a single angle, given in degrees or radians, and prints
//! its representations together with its normalized form and trigonometric
//! values.
//!
//! Usage:
//!   cargo run --bin angle_info -- --degrees 30
//!   cargo run --bin angle_info -- --radians -1.5708

use clap::{ArgGroup, Parser};
use planar_angle::Angle;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Angle Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints the representations and trigonometric values of an angle",
    long_about = None
)]
#[command(group(ArgGroup::new("input").required(true).args(["degrees", "radians"])))]
struct Args {
    /// Angle in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    degrees: Option<f64>,

    /// Angle in radians
    #[arg(short, long, allow_negative_numbers = true)]
    radians: Option<f64>,

    /// Digits after the decimal point (shortest round-trip form if omitted)
    #[arg(short, long)]
    precision: Option<usize>,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print a named float, honoring the requested precision
fn print_named_value(name: &str, value: f64, precision: Option<usize>) {
    match precision {
        Some(p) => println!("{}: {:.*}", name, p, value),
        None => println!("{}: {}", name, value),
    }
}

/// Builds the angle from whichever argument was given
fn angle_from_args(args: &Args) -> Result<Angle> {
    let angle = match (args.degrees, args.radians) {
        (Some(degrees), _) => Angle::try_from_degrees(degrees)?,
        (None, Some(radians)) => Angle::try_from_radians(radians)?,
        (None, None) => return Err("either --degrees or --radians is required".into()),
    };
    Ok(angle)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let angle = angle_from_args(&args)?;
    let normalized = angle.normalize();

    print_section_header("Angle");
    match args.precision {
        Some(p) => println!("Display: {:.*}", p, angle),
        None => println!("Display: {}", angle),
    }
    print_named_value("Radians", angle.radians(), args.precision);
    print_named_value("Degrees", angle.degrees(), args.precision);

    print_section_header("Normalized [0, 2π)");
    print_named_value("Radians", normalized.radians(), args.precision);
    print_named_value("Degrees", normalized.degrees(), args.precision);

    print_section_header("Trigonometry");
    print_named_value("sin", angle.sin(), args.precision);
    print_named_value("cos", angle.cos(), args.precision);
    print_named_value("tan", angle.tan(), args.precision);
    print_named_value("haversine", angle.haversine(), args.precision);

    Ok(())
}
