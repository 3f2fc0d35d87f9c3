//! Output formatting for terminal and CSV.

mod csv;
mod terminal;

// Re-export public functions
pub use csv::print_blocks_csv;
pub use terminal::{format_field, print_addresses, print_blocks, print_blocks_json, print_range};
