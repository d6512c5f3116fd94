//! Domain models for IPv4 addresses.
//!
//! - [`Ipv4`] and the prefix helpers - mask, network and broadcast arithmetic
//! - [`Notation`] - dotted-decimal / dotted-binary parsing and formatting
//! - [`IpClass`] - legacy classful addressing rules

mod class;
mod ipv4;
mod notation;

pub use class::IpClass;
pub use ipv4::{
    broadcast_addr, get_cidr_mask, mask_addr, network_addr, num_hosts, Ipv4, MAX_LENGTH,
};
pub use notation::{
    detect_notation, format_binary, format_decimal, parse_binary, parse_binary_octet,
    parse_decimal, parse_decimal_octet, split_octets, Notation, OCTET_BITS, OCTET_COUNT,
};
