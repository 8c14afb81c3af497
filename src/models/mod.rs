//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Subnet`] - IPv4 subnet with CIDR notation support
//! - [`AddressClass`] and [`ClassifiedAddress`] - classful address classification
//! - [`SubnetPartition`] - one row of a computed partition table

mod ipv4;
mod partition;
mod subnet;

// Re-export public types
pub use ipv4::{
    classify_ip, get_cidr_mask, to_ipv4_string, AddressClass, ClassifiedAddress, MAX_LENGTH,
};
pub use partition::SubnetPartition;
pub use subnet::{Subnet, MAX_PREFIX, MIN_PREFIX};
