//! IPv4 address classification and bit-level utilities.
//!
//! Provides [`AddressClass`] / [`ClassifiedAddress`] for classful address
//! classification, along with mask and dotted-quad formatting helpers used
//! by the subnet calculations.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Classful IPv4 address class, derived from the high-order bits only.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letter = match self {
            AddressClass::A => 'A',
            AddressClass::B => 'B',
            AddressClass::C => 'C',
            AddressClass::D => 'D',
            AddressClass::E => 'E',
        };
        write!(f, "{}", letter)
    }
}

/// An address paired with its [`AddressClass`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClassifiedAddress {
    /// The 32-bit address value.
    pub addr: u32,
    /// Class derived from the leading bits of `addr`.
    pub class: AddressClass,
}

impl ClassifiedAddress {
    /// Classify a 32-bit address.
    pub fn new(addr: u32) -> ClassifiedAddress {
        ClassifiedAddress {
            addr,
            class: classify_ip(addr),
        }
    }
}

impl std::fmt::Display for ClassifiedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (class {})", to_ipv4_string(self.addr), self.class)
    }
}

/// Classify a 32-bit address by its leading bits.
///
/// Total over the full address space: every value maps to exactly one class.
///
/// # Examples
/// ```
/// use subnet_calculator::models::{classify_ip, AddressClass};
/// assert_eq!(classify_ip(0xC0A80101), AddressClass::C); // 192.168.1.1
/// ```
pub fn classify_ip(addr: u32) -> AddressClass {
    if addr & 0x8000_0000 == 0 {
        AddressClass::A
    } else if addr & 0xC000_0000 == 0x8000_0000 {
        AddressClass::B
    } else if addr & 0xE000_0000 == 0xC000_0000 {
        AddressClass::C
    } else if addr & 0xF000_0000 == 0xE000_0000 {
        AddressClass::D
    } else {
        AddressClass::E
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Format a 32-bit address as its canonical big-endian dotted quad.
pub fn to_ipv4_string(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_none());
    }

    #[test]
    fn test_classify_ip_boundaries() {
        assert_eq!(classify_ip(u32::from(Ipv4Addr::new(0, 0, 0, 0))), AddressClass::A);
        assert_eq!(
            classify_ip(u32::from(Ipv4Addr::new(127, 255, 255, 255))),
            AddressClass::A
        );
        assert_eq!(classify_ip(u32::from(Ipv4Addr::new(128, 0, 0, 0))), AddressClass::B);
        assert_eq!(
            classify_ip(u32::from(Ipv4Addr::new(191, 255, 255, 255))),
            AddressClass::B
        );
        assert_eq!(classify_ip(u32::from(Ipv4Addr::new(192, 0, 0, 0))), AddressClass::C);
        assert_eq!(
            classify_ip(u32::from(Ipv4Addr::new(223, 255, 255, 255))),
            AddressClass::C
        );
        assert_eq!(classify_ip(u32::from(Ipv4Addr::new(224, 0, 0, 0))), AddressClass::D);
        assert_eq!(
            classify_ip(u32::from(Ipv4Addr::new(239, 255, 255, 255))),
            AddressClass::D
        );
        assert_eq!(classify_ip(u32::from(Ipv4Addr::new(240, 0, 0, 0))), AddressClass::E);
        assert_eq!(
            classify_ip(u32::from(Ipv4Addr::new(255, 255, 255, 255))),
            AddressClass::E
        );
    }

    #[test]
    fn test_to_ipv4_string() {
        assert_eq!(to_ipv4_string(0), "0.0.0.0");
        assert_eq!(to_ipv4_string(0xC0A80101), "192.168.1.1");
        assert_eq!(to_ipv4_string(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_classified_address_display() {
        let classified = ClassifiedAddress::new(0x0A000001);
        assert_eq!(classified.class, AddressClass::A);
        assert_eq!(classified.to_string(), "10.0.0.1 (class A)");
    }
}
