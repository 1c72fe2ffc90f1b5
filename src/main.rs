//! Command-line interface for color_census
//!
//! Takes exactly one image path, classifies every pixel, and prints
//! one line per color bucket occupying more than 10% of the image.
//! Failures are reported as plain text on standard output and the
//! process always exits with status 0.

use color_census::{analyze_image, CensusError, Result};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(err) = run(&args) {
        println!("{}", err.user_message());
    }
}

fn run(args: &[String]) -> Result<()> {
    let mut json_output = false;
    let mut image_path: Option<PathBuf> = None;

    for arg in args {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            arg if !arg.starts_with("--") && image_path.is_none() => {
                image_path = Some(PathBuf::from(arg));
            }
            _ => return Err(CensusError::Usage),
        }
    }

    let path = image_path.ok_or(CensusError::Usage)?;
    print_census(&path, json_output)
}

fn print_census(path: &Path, json_output: bool) -> Result<()> {
    let report = analyze_image(path)?;

    if json_output {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("Failed to serialize report: {e}"),
        }
    } else {
        for line in report.summary_lines() {
            println!("{line}");
        }
    }

    Ok(())
}

fn print_help() {
    println!("color-census - report the dominant color buckets of an image");
    println!();
    println!("Usage: color-census <IMAGE> [--json]");
    println!();
    println!("Arguments:");
    println!("  <IMAGE>  Path to the image file (JPEG, PNG, GIF, WebP, TIFF, BMP, ...)");
    println!();
    println!("Options:");
    println!("  --json   Emit the full report as JSON instead of summary lines");
    println!("  --help   Show this help text");
}
