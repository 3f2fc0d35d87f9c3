//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing CIDR blocks (address plus prefix
//! length), along with the dotted-decimal/integer codec and subnet
//! calculation helpers.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::RangeError;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-decimal IPv4 address string into its u32 encoding.
///
/// Octets are packed most-significant first, so `"1.2.3.4"` becomes
/// `0x01020304`.
///
/// # Examples
/// ```
/// use ip_range_summary::models::ip_to_number;
/// assert_eq!(ip_to_number("192.168.0.1").unwrap(), 0xC0A80001);
/// ```
pub fn ip_to_number(address: &str) -> Result<u32, RangeError> {
    let addr = Ipv4Addr::from_str(address.trim())
        .map_err(|_| RangeError::InvalidAddress(address.to_string()))?;
    Ok(u32::from(addr))
}

/// Format a u32 back to its dotted-decimal string.
pub fn number_to_ip(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_range_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, RangeError> {
    if len > MAX_LENGTH {
        Err(RangeError::InvalidPrefixLength(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, RangeError> {
    if len > MAX_LENGTH {
        Err(RangeError::InvalidPrefixLength(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, RangeError> {
    let mask = get_cidr_mask(len)?;
    let addr_bits = u32::from(addr);
    let broadcast_bits = addr_bits | !mask;
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Total number of addresses in a block of the given prefix length.
pub fn num_addresses(len: u8) -> Result<u64, RangeError> {
    if len > MAX_LENGTH {
        Err(RangeError::InvalidPrefixLength(len))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Calculate the minimum mask for a block starting at `ip`, based on trailing
/// zeros.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let ip_u32 = u32::from(ip);
    let trailing_zeros = ip_u32.trailing_zeros() as u8;
    assert!(trailing_zeros <= 32, "Trailing zeros exceed 32 bits");
    32 - trailing_zeros
}

/// Calculate the minimum mask for a block ending at `ip`, based on trailing
/// ones.
pub fn hi_mask(ip: Ipv4Addr) -> u8 {
    let ip_u32 = u32::from(ip);
    let trailing_ones = ip_u32.trailing_ones() as u8;
    assert!(trailing_ones <= 32, "Trailing ones exceed 32 bits");
    32 - trailing_ones
}

/// IPv4 CIDR block: an address with a prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, RangeError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(RangeError::InvalidCidr(addr_cidr.to_string()));
        }
        let addr = Ipv4Addr::from(ip_to_number(parts[0])?);
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| RangeError::InvalidCidr(addr_cidr.to_string()))?;
        if mask > MAX_LENGTH {
            return Err(RangeError::InvalidPrefixLength(mask));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {}: {}", self, e))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
