//! Dotted-decimal and dotted-binary IPv4 notation.
//!
//! Both notations are exactly four `.`-separated octets. Decimal octets are
//! integers 0-255, binary octets are exactly eight `0`/`1` characters.

use crate::error::{AddressError, Result};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::num::IntErrorKind;

pub const OCTET_COUNT: usize = 4;
pub const OCTET_BITS: usize = 8;

/// Which notation an address string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Decimal,
    Binary,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Notation::Decimal => write!(f, "decimal"),
            Notation::Binary => write!(f, "binary"),
        }
    }
}

/// Split an address into its four octet strings.
pub fn split_octets(ip: &str) -> Result<[&str; OCTET_COUNT]> {
    let parts: Vec<&str> = ip.split('.').collect();
    <[&str; OCTET_COUNT]>::try_from(parts.as_slice())
        .map_err(|_| AddressError::OctetCount(parts.len()))
}

/// Parse one decimal octet. Surrounding whitespace and a leading sign are accepted.
pub fn parse_decimal_octet(octet: &str) -> Result<u8> {
    let value: i64 = octet.trim().parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                AddressError::OutOfRange(octet.to_string())
            }
            _ => AddressError::NotANumber(octet.to_string()),
        }
    })?;
    u8::try_from(value).map_err(|_| AddressError::OutOfRange(octet.to_string()))
}

/// Parse one binary octet, which must be exactly eight bits.
pub fn parse_binary_octet(octet: &str) -> Result<u8> {
    let is_bits = octet.len() == OCTET_BITS && octet.bytes().all(|b| b == b'0' || b == b'1');
    if !is_bits {
        return Err(AddressError::InvalidBinaryOctet(octet.to_string()));
    }
    u8::from_str_radix(octet, 2).map_err(|_| AddressError::InvalidBinaryOctet(octet.to_string()))
}

/// Parse a dotted-decimal address such as `192.168.1.1`.
///
/// # Examples
/// ```
/// use ipv4_tutor::models::parse_decimal;
/// assert_eq!(parse_decimal("10.0.0.1").unwrap(), [10, 0, 0, 1]);
/// assert!(parse_decimal("10.0.0.256").is_err());
/// ```
pub fn parse_decimal(ip: &str) -> Result<[u8; OCTET_COUNT]> {
    parse_with(ip, parse_decimal_octet)
}

/// Parse a dotted-binary address such as `11000000.10101000.00000001.00000001`.
pub fn parse_binary(ip: &str) -> Result<[u8; OCTET_COUNT]> {
    parse_with(ip, parse_binary_octet)
}

fn parse_with(ip: &str, parse_octet: fn(&str) -> Result<u8>) -> Result<[u8; OCTET_COUNT]> {
    let parts = split_octets(ip)?;
    let mut octets = [0u8; OCTET_COUNT];
    for (slot, part) in octets.iter_mut().zip(parts) {
        *slot = parse_octet(part)?;
    }
    Ok(octets)
}

/// Work out which notation `ip` is written in, if any.
///
/// Decimal wins when both would parse: `00000010.00000000.00000000.00000000`
/// is read as 10.0.0.0, not 2.0.0.0.
pub fn detect_notation(ip: &str) -> Option<Notation> {
    if parse_decimal(ip).is_ok() {
        Some(Notation::Decimal)
    } else if parse_binary(ip).is_ok() {
        Some(Notation::Binary)
    } else {
        None
    }
}

pub fn format_decimal(octets: [u8; OCTET_COUNT]) -> String {
    Ipv4Addr::from(octets).to_string()
}

pub fn format_binary(octets: [u8; OCTET_COUNT]) -> String {
    octets
        .iter()
        .map(|o| format!("{o:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}
