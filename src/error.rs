//! Error types for subnet parsing and partitioning.
//!
//! Every fallible operation returns one of these instead of terminating the
//! process or returning empty/zero sentinels. [`ParseError`] covers malformed
//! CIDR input, [`RangeError`] covers out-of-range counts and prefixes, and
//! [`SubnetError`] combines both for operations that can fail either way.

use thiserror::Error;

/// Failure to turn a CIDR string into a [`crate::models::Subnet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was not exactly `<ip>/<prefix>`.
    #[error("invalid CIDR format: {0}")]
    InvalidCidr(String),

    /// The IP part was not a valid dotted-quad IPv4 address.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// The prefix part was not an unsigned integer.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),

    /// The prefix parsed but falls outside the supported /24..=/32 window.
    #[error("unsupported prefix /{0}: supported range is /24 to /32")]
    UnsupportedPrefix(u8),
}

/// A numeric argument fell outside its documented domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Requested subnet count outside 1..=256.
    #[error("subnet count must be between 1 and 256, got {0}")]
    SubnetCount(u16),

    /// Prefix outside 0..=31 for the assignable-host-count computation.
    #[error("prefix /{0} has no assignable host addresses")]
    HostPrefix(u8),

    /// Partition arithmetic ran past 255.255.255.255.
    #[error("subnet arithmetic overflowed the IPv4 address space")]
    AddressOverflow,
}

/// Combined error for operations that parse input and validate ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
