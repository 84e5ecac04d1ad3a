//! Generate command implementation.

use std::fs;
use std::time::Instant;

use serde::Serialize;

use tacline::{count_points, generate_points, Point};

use super::common::{load_input, OutputFormat};
use super::svg::points_to_svg;

/// JSON output: the counted size and the generated points.
#[derive(Serialize)]
struct JsonOutput<'a> {
    family: &'a str,
    count: i32,
    points: &'a [Point],
}

/// Execute the generate command.
pub fn cmd_generate(input: &str, format: OutputFormat, output: Option<&str>) -> Result<(), String> {
    let (config, anchors) = load_input(input)?;

    let start = Instant::now();
    let count = count_points(&config, &anchors);
    let points = generate_points(&config, &anchors, count.max(0) as usize);
    tracing::info!(
        family = %config.family,
        count,
        generated = points.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "generated"
    );

    let text = match format {
        OutputFormat::Json => {
            let doc = JsonOutput {
                family: config.family.name(),
                count,
                points: &points,
            };
            serde_json::to_string_pretty(&doc).map_err(|e| format!("Failed to encode JSON: {e}"))?
        }
        OutputFormat::Svg => points_to_svg(&points, config.line_thickness)?,
    };

    match output {
        Some(path) => {
            fs::write(path, &text).map_err(|e| format!("Failed to write {path}: {e}"))?;
            eprintln!("Wrote {} points to {path}", points.len());
        }
        None => println!("{text}"),
    }
    Ok(())
}
