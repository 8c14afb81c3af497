//! Usable host range calculations.
//!
//! Computes the assignable (non-network, non-broadcast) address range and
//! host counts for a subnet.

use crate::error::{ParseError, RangeError, SubnetError};
use crate::models::{ClassifiedAddress, Subnet, MAX_LENGTH};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// First and last usable host address of a subnet, each classified.
///
/// Returns `None` for /31 and /32 subnets: the block has no addresses left
/// once network and broadcast are excluded, and the range is defined to be
/// empty rather than wrapping.
pub fn assignable_range(subnet: &Subnet) -> Option<(ClassifiedAddress, ClassifiedAddress)> {
    if subnet.prefix_len >= MAX_LENGTH - 1 {
        log::debug!("assignable_range: /{} has no usable hosts", subnet.prefix_len);
        return None;
    }

    let start = ClassifiedAddress::new(subnet.network() + 1);
    let end = ClassifiedAddress::new(subnet.broadcast() - 1);
    Some((start, end))
}

/// Count the usable host addresses for a CIDR string.
///
/// The prefix domain here is 0..=31, wider than [`Subnet::new`]'s
/// partitioning window, since the count `2^(32-prefix) - 2` is meaningful
/// for any network size. A /32 (or longer) prefix is a [`RangeError`], not
/// a zero count.
///
/// # Examples
/// ```
/// use subnet_calculator::processing::compute_assignable_addresses;
/// assert_eq!(compute_assignable_addresses("10.0.0.0/24").unwrap(), 254);
/// ```
pub fn compute_assignable_addresses(addr_cidr: &str) -> Result<u64, SubnetError> {
    let addr_cidr = addr_cidr.trim();
    let parts: Vec<&str> = addr_cidr.split('/').collect();
    if parts.len() != 2 {
        return Err(ParseError::InvalidCidr(addr_cidr.to_string()).into());
    }
    Ipv4Addr::from_str(parts[0]).map_err(|_| ParseError::InvalidAddress(parts[0].to_string()))?;
    let prefix_len: u8 = parts[1]
        .parse()
        .map_err(|_| ParseError::InvalidPrefix(parts[1].to_string()))?;
    if prefix_len >= MAX_LENGTH {
        return Err(RangeError::HostPrefix(prefix_len).into());
    }

    // Exact integer arithmetic; prefix 0 needs the full 2^32 in a u64.
    let num_hosts = (1u64 << (MAX_LENGTH - prefix_len)) - 2;
    Ok(num_hosts)
}

/// Every address in the subnet's aligned block, network through broadcast
/// inclusive, in ascending order.
///
/// Bounded by the /24 minimum prefix, so at most 256 entries.
pub fn addresses_in_subnet(subnet: &Subnet) -> Vec<u32> {
    (subnet.network()..=subnet.broadcast()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{to_ipv4_string, AddressClass};

    #[test]
    fn test_assignable_range() {
        let subnet = Subnet::new("192.168.1.0/24").unwrap();
        let (start, end) = assignable_range(&subnet).unwrap();
        assert_eq!(to_ipv4_string(start.addr), "192.168.1.1");
        assert_eq!(to_ipv4_string(end.addr), "192.168.1.254");
        assert_eq!(start.class, AddressClass::C);
        assert_eq!(end.class, AddressClass::C);
    }

    #[test]
    fn test_assignable_range_unaligned_host_address() {
        let subnet = Subnet::new("10.0.0.42/28").unwrap();
        let (start, end) = assignable_range(&subnet).unwrap();
        assert_eq!(to_ipv4_string(start.addr), "10.0.0.33");
        assert_eq!(to_ipv4_string(end.addr), "10.0.0.46");
    }

    #[test]
    fn test_assignable_range_empty() {
        assert!(assignable_range(&Subnet::new("10.0.0.0/31").unwrap()).is_none());
        assert!(assignable_range(&Subnet::new("10.0.0.0/32").unwrap()).is_none());
    }

    #[test]
    fn test_compute_assignable_addresses() {
        assert_eq!(compute_assignable_addresses("10.0.0.0/24").unwrap(), 254);
        assert_eq!(compute_assignable_addresses("10.0.0.0/30").unwrap(), 2);
        assert_eq!(compute_assignable_addresses("10.0.0.0/31").unwrap(), 0);
        assert_eq!(
            compute_assignable_addresses("10.0.0.0/0").unwrap(),
            4_294_967_294
        );
    }

    #[test]
    fn test_compute_assignable_addresses_errors() {
        assert_eq!(
            compute_assignable_addresses("10.0.0.0/32").unwrap_err(),
            SubnetError::Range(RangeError::HostPrefix(32))
        );
        assert_eq!(
            compute_assignable_addresses("10.0.0.0").unwrap_err(),
            SubnetError::Parse(ParseError::InvalidCidr("10.0.0.0".to_string()))
        );
        assert_eq!(
            compute_assignable_addresses("999.0.0.0/24").unwrap_err(),
            SubnetError::Parse(ParseError::InvalidAddress("999.0.0.0".to_string()))
        );
    }

    #[test]
    fn test_addresses_in_subnet() {
        let subnet = Subnet::new("192.168.1.0/30").unwrap();
        let addrs = addresses_in_subnet(&subnet);
        assert_eq!(addrs.len(), 4);
        assert_eq!(to_ipv4_string(addrs[0]), "192.168.1.0");
        assert_eq!(to_ipv4_string(addrs[3]), "192.168.1.3");

        let subnet = Subnet::new("10.1.2.3/32").unwrap();
        assert_eq!(addresses_in_subnet(&subnet), vec![0x0A010203]);

        // Top of the address space must not wrap.
        let subnet = Subnet::new("255.255.255.252/30").unwrap();
        assert_eq!(addresses_in_subnet(&subnet).len(), 4);
    }
}
