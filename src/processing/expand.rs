//! CIDR block expansion to an inclusive address range.

use crate::error::RangeError;
use crate::models::{broadcast_addr, AddressRange, Ipv4};

/// Expand a CIDR block to the inclusive range it covers.
///
/// The base address is honored literally as the range start; the end is the
/// broadcast address of the enclosing network. For network-aligned bases the
/// two conventions agree.
pub fn expand(block: Ipv4) -> Result<AddressRange, RangeError> {
    let end = broadcast_addr(block.addr, block.mask)?;
    AddressRange::new(block.addr, end)
}

/// Expand a CIDR string to its `(start, end)` dotted-decimal pair.
pub fn cidr_to_range(cidr: &str) -> Result<(String, String), RangeError> {
    let range = expand(Ipv4::new(cidr)?)?;
    Ok((range.start.to_string(), range.end.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_expand_octet_block() {
        let range = expand(Ipv4::new("192.168.0.0/24").unwrap()).unwrap();
        assert_eq!(range.start, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(range.end, Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(range.len(), 256);
    }

    #[test]
    fn test_expand_host_block() {
        let range = expand(Ipv4::new("10.1.2.3/32").unwrap()).unwrap();
        assert_eq!(range.start, range.end);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_expand_whole_space_does_not_overflow() {
        let range = expand(Ipv4::new("10.0.0.0/0").unwrap()).unwrap();
        assert_eq!(range.start, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(range.end, Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_expand_unaligned_base() {
        // the base is not re-aligned down to the network address
        let range = expand(Ipv4::new("192.168.0.7/24").unwrap()).unwrap();
        assert_eq!(range.start, Ipv4Addr::new(192, 168, 0, 7));
        assert_eq!(range.end, Ipv4Addr::new(192, 168, 0, 255));
    }

    #[test]
    fn test_cidr_to_range() {
        assert_eq!(
            cidr_to_range("192.168.0.0/24").unwrap(),
            ("192.168.0.0".to_string(), "192.168.0.255".to_string())
        );
        assert_eq!(
            cidr_to_range("10.0.0.0/0").unwrap(),
            ("10.0.0.0".to_string(), "255.255.255.255".to_string())
        );
    }

    #[test]
    fn test_cidr_to_range_errors() {
        assert_eq!(
            cidr_to_range("1.1.1.1/33").unwrap_err(),
            RangeError::InvalidPrefixLength(33)
        );
        assert_eq!(
            cidr_to_range("1.1.1.1").unwrap_err(),
            RangeError::InvalidCidr("1.1.1.1".to_string())
        );
        assert_eq!(
            cidr_to_range("999.1.1.1/8").unwrap_err(),
            RangeError::InvalidAddress("999.1.1.1".to_string())
        );
    }
}
