//! Compute command handler
//!
//! Reads coordinates from a file or stdin and prints their centers.

use crate::center::{available_kinds, CenterKind, Report};
use crate::config::Config;
use crate::coord::parse::parse_coordinates;
use crate::error::{Error, Result};
use crate::format::url::UrlFormatter;
use crate::format::{available_formats, get_formatter, OutputFormatter};
use clap::Args;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// Compute command arguments
#[derive(Args)]
pub struct ComputeArgs {
    /// File with one coordinate per line (reads stdin when omitted or "-")
    pub input: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Center to use for the url format
    #[arg(long, short = 'c')]
    pub center: Option<String>,

    /// URL provider for the url format
    #[arg(long)]
    pub provider: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available center kinds
    #[arg(short = 'C', long = "list-centers")]
    pub list_centers: bool,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the compute command
pub fn run(args: ComputeArgs) -> Result<()> {
    if args.list_centers {
        list_centers();
        return Ok(());
    }

    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let text = read_input(args.input.as_deref())?;
    let points = parse_coordinates(&text)?;
    debug!(points = points.len(), "read coordinates");

    let report = Report::new(points, &config.solver_settings());

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = select_formatter(&format, args.center.as_deref(), args.provider)?;
    let output = formatter.format(&report, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output.trim_end());
    }

    Ok(())
}

/// Pick the formatter, applying url overrides when requested
fn select_formatter(
    format: &str,
    center: Option<&str>,
    provider: Option<String>,
) -> Result<Box<dyn OutputFormatter>> {
    let center = center
        .map(CenterKind::from_str)
        .transpose()
        .map_err(Error::Config)?;

    if format.eq_ignore_ascii_case("url") {
        return Ok(Box::new(UrlFormatter::with_options(center, provider)));
    }

    get_formatter(format).ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))
}

/// Read the whole input from a file path, or stdin for `None`/`-`
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Print available center kinds
fn list_centers() {
    println!("Available centers:");
    for kind in available_kinds() {
        println!("  {:9} - {}", kind.to_string(), kind.description());
    }
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
