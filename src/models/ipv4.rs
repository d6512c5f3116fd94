//! IPv4 prefix arithmetic.
//!
//! Provides [`Ipv4`] for an address paired with a prefix length, along with
//! the mask, network and broadcast helpers used by the classful analyzer.

use crate::error::{AddressError, Result};
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_tutor::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// The subnet mask for a prefix length in dotted form, e.g. /16 -> 255.255.0.0.
pub fn mask_addr(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of usable host addresses in a network of the given prefix length.
///
/// Network and broadcast addresses are excluded, so /31 and /32 give 0.
pub fn num_hosts(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        return Err(AddressError::PrefixTooLong(len));
    }
    let total = 1u64 << (MAX_LENGTH - len);
    Ok(total.saturating_sub(2))
}

/// IPv4 address with a prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        if mask > MAX_LENGTH {
            return Err(AddressError::PrefixTooLong(mask));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Subnet mask in dotted-decimal form.
    pub fn netmask(&self) -> Ipv4Addr {
        mask_addr(self.prefix()).unwrap_or(Ipv4Addr::BROADCAST)
    }

    /// Lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix()).unwrap_or(self.addr)
    }

    /// Highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix()).unwrap_or(self.addr)
    }

    pub fn usable_hosts(&self) -> u64 {
        num_hosts(self.prefix()).unwrap_or(0)
    }

    // mask is checked in new(), but the fields are public
    fn prefix(&self) -> u8 {
        self.mask.min(MAX_LENGTH)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
