//! Subnet value type and CIDR notation parsing.

use super::{get_cidr_mask, to_ipv4_string};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Smallest supported prefix length. The calculator only subnets within a
/// single Class-C-sized or smaller block; widening this window is a policy
/// change, not a parsing fix.
pub const MIN_PREFIX: u8 = 24;

/// Largest supported prefix length.
pub const MAX_PREFIX: u8 = 32;

/// An IPv4 subnet: a 32-bit address plus its mask.
///
/// `addr` is kept exactly as parsed and may be a host address inside the
/// network rather than the mask-aligned network ID; [`Subnet::network`] and
/// [`Subnet::broadcast`] expose the aligned bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    /// The 32-bit address, host byte order.
    pub addr: u32,
    /// The 32-bit subnet mask; always `prefix_len` leading one-bits.
    pub mask: u32,
    /// The CIDR prefix length (24-32).
    pub prefix_len: u8,
}

impl Subnet {
    /// Create a new [`Subnet`] from a CIDR string (e.g., "192.168.1.0/24").
    pub fn new(addr_cidr: &str) -> Result<Subnet, ParseError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(ParseError::InvalidCidr(addr_cidr.to_string()));
        }
        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| ParseError::InvalidAddress(parts[0].to_string()))?;
        let prefix_len: u8 = parts[1]
            .parse()
            .map_err(|_| ParseError::InvalidPrefix(parts[1].to_string()))?;
        if !(MIN_PREFIX..=MAX_PREFIX).contains(&prefix_len) {
            return Err(ParseError::UnsupportedPrefix(prefix_len));
        }
        let mask = get_cidr_mask(prefix_len).ok_or(ParseError::UnsupportedPrefix(prefix_len))?;

        Ok(Subnet {
            addr: u32::from(addr),
            mask,
            prefix_len,
        })
    }

    /// The mask-aligned network ID (lowest address in the block).
    pub fn network(&self) -> u32 {
        self.addr & self.mask
    }

    /// The broadcast address (highest address in the block).
    pub fn broadcast(&self) -> u32 {
        self.addr | !self.mask
    }
}

impl FromStr for Subnet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Subnet, ParseError> {
        Subnet::new(s)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", to_ipv4_string(self.addr), self.prefix_len)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", to_ipv4_string(self.addr), self.prefix_len);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::new(&s).map_err(de::Error::custom)
    }
}
