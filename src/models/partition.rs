//! Partition table row model.

use serde::Serialize;

/// One row of a subnet partition table, with addresses pre-formatted as
/// dotted quads for direct consumption by external presenters.
///
/// When the partition's block holds two or fewer addresses (/31, /32) there
/// are no usable hosts: `usable_host_count` is 0 and both host-range
/// endpoints are clamped to `network_id`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPartition {
    /// Network ID of this partition.
    pub network_id: String,
    /// First usable host address.
    pub host_range_start: String,
    /// Last usable host address.
    pub host_range_end: String,
    /// Broadcast address of this partition.
    pub broadcast_id: String,
    /// New subnet mask, formatted as "/<prefix>".
    pub subnet_mask_cidr: String,
    /// Number of usable host addresses (block size minus network and
    /// broadcast, floored at 0).
    pub usable_host_count: u16,
}
