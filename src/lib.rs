// cargo watch -x 'fmt' -x 'test'  // 'run -- 10.0.0.0 10.0.0.255'

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::RangeError;
pub use models::{ip_to_number, number_to_ip, AddressRange, Ipv4};
pub use processing::{
    cidr_to_address_list, cidr_to_range, enumerate, expand, summarize_range, summarize_range_u32,
};

use std::net::Ipv4Addr;

/// Summarize a dotted-decimal address range into CIDR block strings.
pub fn range_to_cidr_blocks(start_ip: &str, end_ip: &str) -> Result<Vec<String>, RangeError> {
    let start = Ipv4Addr::from(ip_to_number(start_ip)?);
    let end = Ipv4Addr::from(ip_to_number(end_ip)?);
    let blocks = summarize_range(start, end)?;
    Ok(blocks.iter().map(|b| b.to_string()).collect())
}
