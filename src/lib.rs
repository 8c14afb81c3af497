//! IPv4 subnet partition calculator.
//!
//! A pure computation library: parses CIDR notation into [`models::Subnet`]
//! values, classifies addresses, computes usable host ranges, and partitions
//! a base network into a requested number of equally-sized subnets.
//!
//! There is no I/O and no shared mutable state; every operation is a value
//! computation that either succeeds or returns a typed error. Presentation
//! (tables, UIs) is left to external callers consuming the returned rows.
//!
//! ```
//! use subnet_calculator::get_subnet_table;
//!
//! let rows = get_subnet_table("192.168.1.0/24", 4).unwrap();
//! assert_eq!(rows[2].network_id, "192.168.1.128");
//! assert_eq!(rows[2].subnet_mask_cidr, "/26");
//! ```

pub mod error;
pub mod models;
pub mod processing;

pub use error::{ParseError, RangeError, SubnetError};
pub use models::{classify_ip, to_ipv4_string, AddressClass, ClassifiedAddress, Subnet};
pub use processing::{
    addresses_in_subnet, assignable_range, compute_assignable_addresses, get_subnet_table,
};

/// Parse a CIDR string into a [`Subnet`].
///
/// Convenience alias for [`Subnet::new`]; the supported prefix window is
/// /24 through /32.
pub fn create_subnet(addr_cidr: &str) -> Result<Subnet, ParseError> {
    Subnet::new(addr_cidr)
}
