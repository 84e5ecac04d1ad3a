//! Count command implementation.

use tacline::count_points;

use super::common::load_input;

/// Execute the count command: print the exact buffer size.
///
/// Prints `-1` for no anchors and `0` for any other invalid input, like
/// the library facade.
pub fn cmd_count(input: &str) -> Result<(), String> {
    let (config, anchors) = load_input(input)?;
    println!("{}", count_points(&config, &anchors));
    Ok(())
}
