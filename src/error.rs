//! Error types for this library

use std::net::Ipv4Addr;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),
    #[error("Invalid CIDR notation: {0}")]
    InvalidCidr(String),
    #[error("Invalid prefix length: {0}. Must be between 0 and 32")]
    InvalidPrefixLength(u8),
    #[error("Range start {start} is greater than end {end}")]
    RangeOrder { start: Ipv4Addr, end: Ipv4Addr },
}
