//! Terminal output utilities.
//!
//! Provides formatting helpers and plain printers for terminal output.

use itertools::Itertools;
use std::net::Ipv4Addr;

use crate::models::{AddressRange, Ipv4};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print CIDR blocks on one comma-separated line.
pub fn print_blocks(blocks: &[Ipv4]) {
    println!("{}", blocks.iter().format(", "));
}

/// Print CIDR blocks as a JSON array of `"addr/len"` strings.
pub fn print_blocks_json(blocks: &[Ipv4]) {
    let json = serde_json::to_string_pretty(blocks).expect("Error serializing blocks to JSON");
    println!("{json}");
}

/// Print the two ends of an address range.
pub fn print_range(range: &AddressRange) {
    println!("{} - {}", range.start, range.end);
}

/// Print addresses one per line.
pub fn print_addresses(addresses: &[Ipv4Addr]) {
    for addr in addresses {
        println!("{addr}");
    }
}
