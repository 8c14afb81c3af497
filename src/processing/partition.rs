//! Subnet partitioning.
//!
//! Splits a base network into a requested number of equally-sized subnets
//! using a fixed power-of-two size lookup.

use crate::error::{RangeError, SubnetError};
use crate::models::{to_ipv4_string, Subnet, SubnetPartition};

/// One step of the power-of-two sizing ladder.
#[derive(Debug, Copy, Clone)]
struct SubnetSize {
    /// Number of subnets at this step.
    subnet_count: u16,
    /// Total addresses per subnet (network and broadcast included).
    hosts_per_subnet: u16,
    /// Resulting CIDR prefix length.
    prefix: u8,
}

/// The subnetting table: 1 subnet guarantees 256 total hosts with a /24,
/// down to 256 subnets of 1 host each at /32.
const SUBNET_SIZE_TABLE: [SubnetSize; 9] = [
    SubnetSize { subnet_count: 1, hosts_per_subnet: 256, prefix: 24 },
    SubnetSize { subnet_count: 2, hosts_per_subnet: 128, prefix: 25 },
    SubnetSize { subnet_count: 4, hosts_per_subnet: 64, prefix: 26 },
    SubnetSize { subnet_count: 8, hosts_per_subnet: 32, prefix: 27 },
    SubnetSize { subnet_count: 16, hosts_per_subnet: 16, prefix: 28 },
    SubnetSize { subnet_count: 32, hosts_per_subnet: 8, prefix: 29 },
    SubnetSize { subnet_count: 64, hosts_per_subnet: 4, prefix: 30 },
    SubnetSize { subnet_count: 128, hosts_per_subnet: 2, prefix: 31 },
    SubnetSize { subnet_count: 256, hosts_per_subnet: 1, prefix: 32 },
];

/// Partition a base network into `num_subnets` contiguous, equally-sized
/// subnets.
///
/// Internal sizing rounds the count up to the next power of two, but exactly
/// `num_subnets` rows are emitted, in ascending address order starting from
/// the parsed base address. The count must be in 1..=256; partition
/// arithmetic that would run past 255.255.255.255 fails instead of wrapping.
pub fn get_subnet_table(
    network_cidr: &str,
    num_subnets: u16,
) -> Result<Vec<SubnetPartition>, SubnetError> {
    if !(1..=256).contains(&num_subnets) {
        return Err(RangeError::SubnetCount(num_subnets).into());
    }

    // Round up to the nearest power-of-two table step.
    let mut nearest_index = 0;
    while SUBNET_SIZE_TABLE[nearest_index].subnet_count < num_subnets {
        nearest_index += 1;
    }
    let size = SUBNET_SIZE_TABLE[nearest_index];
    log::debug!(
        "get_subnet_table: {} subnets requested, sized for {} of {} addresses each (/{})",
        num_subnets,
        size.subnet_count,
        size.hosts_per_subnet,
        size.prefix
    );

    let base = Subnet::new(network_cidr).map_err(SubnetError::Parse)?;
    let block_size = size.hosts_per_subnet as u32;
    let usable_hosts = size.hosts_per_subnet.saturating_sub(2);

    let mut rows = Vec::with_capacity(num_subnets as usize);
    let mut current = base.addr;
    for i in 0..num_subnets {
        let broadcast = current
            .checked_add(block_size - 1)
            .ok_or(RangeError::AddressOverflow)?;

        // A /31 or /32 block has no room for hosts once network and
        // broadcast are excluded; the range is empty, clamped to the
        // network ID.
        let (range_start, range_end) = if usable_hosts == 0 {
            (current, current)
        } else {
            (current + 1, broadcast - 1)
        };

        rows.push(SubnetPartition {
            network_id: to_ipv4_string(current),
            host_range_start: to_ipv4_string(range_start),
            host_range_end: to_ipv4_string(range_end),
            broadcast_id: to_ipv4_string(broadcast),
            subnet_mask_cidr: format!("/{}", size.prefix),
            usable_host_count: usable_hosts,
        });

        // Only advance between rows: a table ending exactly at
        // 255.255.255.255 is valid.
        if i + 1 < num_subnets {
            current = broadcast.checked_add(1).ok_or(RangeError::AddressOverflow)?;
        }
    }

    Ok(rows)
}
