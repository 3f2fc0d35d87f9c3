//! Enumeration of every address inside a CIDR block.

use std::net::Ipv4Addr;

use crate::error::RangeError;
use crate::models::Ipv4;
use crate::processing::expand;

/// Prefixes shorter than this produce more than 65536 addresses.
const WIDE_BLOCK_MASK: u8 = 16;

/// List every address in a CIDR block, ascending.
///
/// Output size is `2^(32-mask)`; the caller owns that bound, nothing is
/// validated here.
pub fn enumerate(block: Ipv4) -> Result<Vec<Ipv4Addr>, RangeError> {
    let range = expand(block)?;
    if block.mask < WIDE_BLOCK_MASK {
        log::warn!(
            "Enumerating {} materializes {} addresses",
            block,
            range.len()
        );
    }

    // u64 cursor so a range ending at 255.255.255.255 terminates
    let end = u32::from(range.end) as u64;
    let mut addresses = Vec::with_capacity(range.len() as usize);
    let mut cursor = u32::from(range.start) as u64;
    while cursor <= end {
        addresses.push(Ipv4Addr::from(cursor as u32));
        cursor += 1;
    }
    Ok(addresses)
}

/// List every address in a CIDR string, dotted-decimal, ascending.
pub fn cidr_to_address_list(cidr: &str) -> Result<Vec<String>, RangeError> {
    let addresses = enumerate(Ipv4::new(cidr)?)?;
    Ok(addresses.iter().map(|a| a.to_string()).collect())
}
