//! CSV output formatting for summarized CIDR blocks.

use colored::Colorize;

use crate::error::RangeError;
use crate::models::{num_addresses, Ipv4};

use super::terminal::format_field;

/// Print CIDR blocks as a CSV table to stdout.
///
/// One row per block with its network, broadcast, and total address count.
pub fn print_blocks_csv(blocks: &[Ipv4]) -> Result<(), RangeError> {
    log::info!("#Start print_blocks_csv() block count = {}", blocks.len());

    // Print CSV header
    println!(r#" "cnt",              "cidr",         "network",       "broadcast",  "addresses""#);

    let mut total: u64 = 0;
    for (i, block) in blocks.iter().enumerate() {
        total += num_addresses(block.mask)?;
        print_csv_row(i + 1, block)?;
    }

    println!(
        "#{}# {} block(s) covering {} address(es)",
        "NOTE".on_red(),
        blocks.len(),
        total
    );

    Ok(())
}

/// Print a single CSV row.
fn print_csv_row(cnt: usize, block: &Ipv4) -> Result<(), RangeError> {
    println!(
        r#"{cnt},{cidr},{network},{broadcast},{addresses}"#,
        cnt = format_field(cnt, 6),
        cidr = format_field(block, 20),
        network = format_field(block.lo(), 17),
        broadcast = format_field(block.hi(), 17),
        addresses = format_field(num_addresses(block.mask)?, 12),
    );
    Ok(())
}
