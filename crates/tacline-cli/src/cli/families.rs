//! Families command implementation.

use tacline::SymbolFamily;

/// Execute the families command: one family per line.
pub fn cmd_families() {
    println!("{:<14} {:<15} {:>4}  channel", "family", "class", "min");
    for family in SymbolFamily::all() {
        println!(
            "{:<14} {:<15} {:>4}  {}",
            family.name(),
            family.class().name(),
            family.min_points(),
            if family.is_channel() { "yes" } else { "no" }
        );
    }
}
