//! Classful analysis of an IPv4 address.
//!
//! Determines the class of an address and, for classes that have a default
//! mask, the network it belongs to.

use crate::error::Result;
use crate::models::{
    broadcast_addr, mask_addr, network_addr, num_hosts, parse_decimal, IpClass, Ipv4,
};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Analysis of one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IpInfo {
    /// Class with a default mask (A, B, C, Loopback).
    Classful {
        ip_address: Ipv4Addr,
        ip_class: IpClass,
        network_prefix: u8,
        subnet_mask: Ipv4Addr,
        network_address: Ipv4Addr,
        broadcast_address: Ipv4Addr,
        usable_hosts: u64,
        network: Ipv4,
    },
    /// Class D, E or an address outside every class.
    NoStandardMask {
        ip_address: Ipv4Addr,
        ip_class: IpClass,
        note: String,
    },
}

impl IpInfo {
    pub fn ip_class(&self) -> IpClass {
        match self {
            IpInfo::Classful { ip_class, .. } | IpInfo::NoStandardMask { ip_class, .. } => {
                *ip_class
            }
        }
    }

    pub fn ip_address(&self) -> Ipv4Addr {
        match self {
            IpInfo::Classful { ip_address, .. } | IpInfo::NoStandardMask { ip_address, .. } => {
                *ip_address
            }
        }
    }
}

/// True when `ip` is four decimal octets, each 0-255.
pub fn validate_ip(ip: &str) -> bool {
    parse_decimal(ip).is_ok()
}

/// Classify `ip` and compute its default network.
///
/// # Examples
/// ```
/// use ipv4_tutor::processing::{analyze_ip, IpInfo};
/// use std::net::Ipv4Addr;
///
/// match analyze_ip("10.0.0.1").unwrap() {
///     IpInfo::Classful { network_prefix, subnet_mask, .. } => {
///         assert_eq!(network_prefix, 8);
///         assert_eq!(subnet_mask, Ipv4Addr::new(255, 0, 0, 0));
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn analyze_ip(ip: &str) -> Result<IpInfo> {
    let ip_address = Ipv4Addr::from(parse_decimal(ip)?);
    let ip_class = IpClass::of(ip_address);

    let Some(prefix) = ip_class.default_prefix() else {
        log::debug!("analyze_ip({ip}) class {ip_class} has no default mask");
        return Ok(IpInfo::NoStandardMask {
            ip_address,
            ip_class,
            note: format!("No standard subnet mask applies to class {ip_class} addresses"),
        });
    };

    let network_address = network_addr(ip_address, prefix)?;
    let network = Ipv4::new(network_address, prefix)?;
    log::debug!("analyze_ip({ip}) class {ip_class} network {network}");

    Ok(IpInfo::Classful {
        ip_address,
        ip_class,
        network_prefix: prefix,
        subnet_mask: mask_addr(prefix)?,
        network_address,
        broadcast_address: broadcast_addr(ip_address, prefix)?,
        usable_hosts: num_hosts(prefix)?,
        network,
    })
}
