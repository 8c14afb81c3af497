//! Subnet computation logic.
//!
//! This module contains the calculations over parsed subnets:
//! - [`range`] - usable host ranges and counts
//! - [`partition`] - splitting a network into equally-sized subnets

mod partition;
mod range;

// Re-export public functions
pub use partition::get_subnet_table;
pub use range::{addresses_in_subnet, assignable_range, compute_assignable_addresses};
