//! Inclusive IPv4 address range model.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::error::RangeError;

/// An inclusive range of IPv4 addresses.
#[derive(Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressRange {
    /// First address in the range.
    pub start: Ipv4Addr,
    /// Last address in the range.
    pub end: Ipv4Addr,
}

impl AddressRange {
    /// Create a new range, validating that `start` does not exceed `end`.
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Result<AddressRange, RangeError> {
        if start > end {
            return Err(RangeError::RangeOrder { start, end });
        }
        Ok(AddressRange { start, end })
    }

    /// Check whether `ip` falls inside the range.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.start <= ip && ip <= self.end
    }

    /// Number of addresses in the range.
    pub fn len(&self) -> u64 {
        u32::from(self.end) as u64 - u32::from(self.start) as u64 + 1
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
