//! Validation errors for IPv4 address input.

use thiserror::Error;

/// Reasons an address string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address does not split into exactly four dot-separated octets.
    #[error("IP address must contain 4 octets separated by dots (got {0})")]
    OctetCount(usize),

    /// Decimal octet is not a number at all.
    #[error("cannot convert '{0}' to a number")]
    NotANumber(String),

    /// Decimal octet parsed but is outside 0-255.
    #[error("each octet must be a number from 0 to 255, got: {0}")]
    OutOfRange(String),

    /// Binary octet is not exactly eight '0'/'1' characters.
    #[error("each binary octet must contain exactly 8 bits (0 or 1), got: {0}")]
    InvalidBinaryOctet(String),

    /// Input is neither valid dotted-decimal nor valid dotted-binary.
    #[error("'{0}' is neither a dotted-decimal nor a dotted-binary IPv4 address")]
    UnknownFormat(String),

    #[error("prefix length /{0} is too long (must be 0-32)")]
    PrefixTooLong(u8),
}

pub type Result<T> = std::result::Result<T, AddressError>;
