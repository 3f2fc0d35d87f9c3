//! Range summarization into CIDR blocks.
//!
//! Decomposes an arbitrary inclusive address range into power-of-two-aligned
//! CIDR blocks of a single uniform size, picked from the tightest alignment
//! constraint of the two range edges.

use std::net::Ipv4Addr;

use crate::error::RangeError;
use crate::models::{hi_mask, lo_mask, Ipv4, MAX_LENGTH};

/// Summarize an inclusive address range as a list of CIDR blocks.
///
/// Block bases are always network-aligned and emitted in ascending order.
/// Ranges whose start ends in `.1` or whose end ends in `.254` are first
/// widened to the adjacent `.0`/`.255` boundary, so the output can cover one
/// extra address at each edge. Callers that need strict range fidelity must
/// not rely on those two edge values.
pub fn summarize_range(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<Ipv4>, RangeError> {
    summarize_range_u32(u32::from(start), u32::from(end))
}

/// Integer-typed entry point for [`summarize_range`].
pub fn summarize_range_u32(start: u32, end: u32) -> Result<Vec<Ipv4>, RangeError> {
    if start > end {
        return Err(RangeError::RangeOrder {
            start: Ipv4Addr::from(start),
            end: Ipv4Addr::from(end),
        });
    }
    if start == end {
        return Ok(vec![Ipv4 {
            addr: Ipv4Addr::from(start),
            mask: MAX_LENGTH,
        }]);
    }

    let start = widen_start(start);
    let end = widen_end(end);

    // The tighter-aligned edge dictates one uniform block size for the whole
    // range.
    let mask = lo_mask(Ipv4Addr::from(start)).max(hi_mask(Ipv4Addr::from(end)));

    if mask >= MAX_LENGTH {
        // Neither edge is even-aligned, nothing wider than a single address
        // fits. One /32 per address, O(n) in the range length.
        log::debug!(
            "No shared alignment for {}-{}, emitting single addresses",
            Ipv4Addr::from(start),
            Ipv4Addr::from(end)
        );
        let mut blocks = Vec::new();
        for addr in start..=end {
            blocks.push(Ipv4 {
                addr: Ipv4Addr::from(addr),
                mask: MAX_LENGTH,
            });
        }
        return Ok(blocks);
    }

    // Shift amounts can reach 32 when the range spans the whole address
    // space, so the walk runs in u64.
    let cnt = u32::from(MAX_LENGTH - mask);
    let periods = ((end as u64) >> cnt) - ((start as u64) >> cnt) + 1;
    let step = 1u64 << cnt;

    log::debug!(
        "Summarizing {}-{} as {} block(s) of /{}",
        Ipv4Addr::from(start),
        Ipv4Addr::from(end),
        periods,
        mask
    );

    let mut blocks = Vec::with_capacity(periods as usize);
    let mut cursor = start as u64;
    for _ in 0..periods {
        blocks.push(Ipv4 {
            addr: Ipv4Addr::from(cursor as u32),
            mask,
        });
        cursor += step;
    }
    Ok(blocks)
}

/// Pull a `.1` start down to the `.0` boundary.
fn widen_start(start: u32) -> u32 {
    if start & 0xFF == 1 {
        start - 1
    } else {
        start
    }
}

/// Push a `.254` end up to the `.255` boundary.
fn widen_end(end: u32) -> u32 {
    if end & 0xFF == 254 {
        end + 1
    } else {
        end
    }
}
