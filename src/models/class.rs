//! Legacy classful addressing.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Address class determined by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental.
    E,
    /// 127.0.0.0/8, carved out of the class A range.
    Loopback,
    /// First octet 0, outside every class.
    Unknown,
}

impl IpClass {
    /// Classes in the order the reference table lists them.
    pub const ALL: [IpClass; 6] = [
        IpClass::A,
        IpClass::B,
        IpClass::C,
        IpClass::D,
        IpClass::E,
        IpClass::Loopback,
    ];

    pub fn from_first_octet(octet: u8) -> IpClass {
        match octet {
            1..=126 => IpClass::A,
            127 => IpClass::Loopback,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=255 => IpClass::E,
            0 => IpClass::Unknown,
        }
    }

    /// Classify an address.
    ///
    /// # Examples
    /// ```
    /// use ipv4_tutor::models::IpClass;
    /// use std::net::Ipv4Addr;
    /// assert_eq!(IpClass::of(Ipv4Addr::new(10, 0, 0, 1)), IpClass::A);
    /// assert_eq!(IpClass::of(Ipv4Addr::new(224, 0, 0, 1)).default_prefix(), None);
    /// ```
    pub fn of(addr: Ipv4Addr) -> IpClass {
        IpClass::from_first_octet(addr.octets()[0])
    }

    /// Default prefix length, or `None` where no standard mask applies.
    pub fn default_prefix(&self) -> Option<u8> {
        match self {
            IpClass::A | IpClass::Loopback => Some(8),
            IpClass::B => Some(16),
            IpClass::C => Some(24),
            IpClass::D | IpClass::E | IpClass::Unknown => None,
        }
    }

    /// First and last address covered by the class.
    pub fn range(&self) -> (Ipv4Addr, Ipv4Addr) {
        let (first, last) = match self {
            IpClass::A => (1, 126),
            IpClass::Loopback => (127, 127),
            IpClass::B => (128, 191),
            IpClass::C => (192, 223),
            IpClass::D => (224, 239),
            IpClass::E => (240, 255),
            IpClass::Unknown => (0, 0),
        };
        (
            Ipv4Addr::new(first, 0, 0, 0),
            Ipv4Addr::new(last, 255, 255, 255),
        )
    }

    /// Fixed high-order bits that identify the class.
    pub fn leading_bits(&self) -> Option<&'static str> {
        match self {
            IpClass::A => Some("0"),
            IpClass::B => Some("10"),
            IpClass::C => Some("110"),
            IpClass::D => Some("1110"),
            IpClass::E => Some("1111"),
            IpClass::Loopback | IpClass::Unknown => None,
        }
    }

    pub fn purpose(&self) -> &'static str {
        match self {
            IpClass::A => "Large networks (~16.7 million hosts)",
            IpClass::B => "Medium networks (~65.5 thousand hosts)",
            IpClass::C => "Small networks (254 hosts)",
            IpClass::D => "Multicast group addressing",
            IpClass::E => "Reserved for experimental use",
            IpClass::Loopback => "Reserved for local loopback",
            IpClass::Unknown => "Not assigned to any class",
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
            IpClass::Loopback => "Loopback",
            IpClass::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_first_octet_boundaries() {
        assert_eq!(IpClass::from_first_octet(0), IpClass::Unknown);
        assert_eq!(IpClass::from_first_octet(1), IpClass::A);
        assert_eq!(IpClass::from_first_octet(126), IpClass::A);
        assert_eq!(IpClass::from_first_octet(127), IpClass::Loopback);
        assert_eq!(IpClass::from_first_octet(128), IpClass::B);
        assert_eq!(IpClass::from_first_octet(191), IpClass::B);
        assert_eq!(IpClass::from_first_octet(192), IpClass::C);
        assert_eq!(IpClass::from_first_octet(223), IpClass::C);
        assert_eq!(IpClass::from_first_octet(224), IpClass::D);
        assert_eq!(IpClass::from_first_octet(239), IpClass::D);
        assert_eq!(IpClass::from_first_octet(240), IpClass::E);
        assert_eq!(IpClass::from_first_octet(255), IpClass::E);
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(IpClass::A.default_prefix(), Some(8));
        assert_eq!(IpClass::B.default_prefix(), Some(16));
        assert_eq!(IpClass::C.default_prefix(), Some(24));
        assert_eq!(IpClass::Loopback.default_prefix(), Some(8));
        assert_eq!(IpClass::D.default_prefix(), None);
        assert_eq!(IpClass::E.default_prefix(), None);
        assert_eq!(IpClass::Unknown.default_prefix(), None);
    }

    #[test]
    fn test_leading_bits_match_range() {
        for class in [IpClass::A, IpClass::B, IpClass::C, IpClass::D, IpClass::E] {
            let bits = class.leading_bits().unwrap();
            let (first, last) = class.range();
            for addr in [first, last] {
                let prefix = format!("{:08b}", addr.octets()[0]);
                assert!(prefix.starts_with(bits), "{class} {addr} {prefix}");
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(IpClass::C.to_string(), "C");
        assert_eq!(IpClass::Loopback.to_string(), "Loopback");
        assert_eq!(serde_json::to_string(&IpClass::D).unwrap(), r#""D""#);
    }
}
