//! Human and JSON rendering of exercise results.

use crate::error::AddressError;
use crate::models::{mask_addr, IpClass, Notation};
use crate::processing::{Conversion, IpInfo};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

use super::terminal::{format_label, rule, RULE_WIDTH};

const CONVERT_LABEL_WIDTH: usize = 19;
const INFO_LABEL_WIDTH: usize = 23;

/// Print both notations of a converted address, the typed one first.
pub fn write_conversion<W: Write>(out: &mut W, conversion: &Conversion) -> io::Result<()> {
    let decimal = format!(
        "{}{}",
        format_label("Decimal notation", CONVERT_LABEL_WIDTH),
        conversion.decimal
    );
    let binary = format!(
        "{}{}",
        format_label("Binary notation", CONVERT_LABEL_WIDTH),
        conversion.binary
    );
    writeln!(out)?;
    match conversion.notation {
        Notation::Decimal => {
            writeln!(out, "{decimal}")?;
            writeln!(out, "{binary}")
        }
        Notation::Binary => {
            writeln!(out, "{binary}")?;
            writeln!(out, "{decimal}")
        }
    }
}

/// Print a rejected conversion together with the notation rules.
pub fn write_conversion_error<W: Write>(out: &mut W, err: &AddressError) -> io::Result<()> {
    write_error(out, err)?;
    writeln!(out, "The IP address must contain 4 octets separated by dots.")?;
    writeln!(out, "Decimal notation: each octet is a number from 0 to 255.")?;
    writeln!(out, "Binary notation: each octet contains exactly 8 bits (0 or 1).")
}

pub fn write_error<W: Write>(out: &mut W, err: &AddressError) -> io::Result<()> {
    writeln!(out, "{} {err}", "Error:".red().bold())
}

/// Print the classful analysis of one address.
pub fn write_ip_info<W: Write>(out: &mut W, info: &IpInfo) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    match info {
        IpInfo::Classful {
            ip_address,
            ip_class,
            network_prefix,
            subnet_mask,
            network_address,
            broadcast_address,
            usable_hosts,
            ..
        } => {
            let rows: [(&str, String); 7] = [
                ("IP address", ip_address.to_string()),
                ("IP class", ip_class.to_string()),
                ("Network prefix", format!("/{network_prefix}")),
                ("Subnet mask", subnet_mask.to_string()),
                ("Network address", network_address.to_string()),
                ("Broadcast address", broadcast_address.to_string()),
                ("Usable hosts", usable_hosts.to_string()),
            ];
            for (label, value) in rows {
                writeln!(out, "{}{value}", format_label(label, INFO_LABEL_WIDTH))?;
            }
            writeln!(out, "{}", rule('=', RULE_WIDTH))
        }
        IpInfo::NoStandardMask {
            ip_address,
            ip_class,
            note,
        } => {
            writeln!(out, "{}{ip_address}", format_label("IP address", INFO_LABEL_WIDTH))?;
            writeln!(out, "{}{ip_class}", format_label("IP class", INFO_LABEL_WIDTH))?;
            writeln!(out, "{}{}", format_label("Note", INFO_LABEL_WIDTH), note.yellow())
        }
    }
}

/// Print a rejected analysis inside the report frame.
pub fn write_ip_info_error<W: Write>(out: &mut W, err: &AddressError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    write_error(out, err)
}

/// Print the reference table of address classes.
pub fn write_class_reference<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    writeln!(out, "{}", "IP address classes:".bold())?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    let indent = " ".repeat("Class A: ".len());
    for class in IpClass::ALL {
        let (first, last) = class.range();
        if class == IpClass::Loopback {
            writeln!(out, "Addresses {first} - {last} are reserved for local loopback")?;
            continue;
        }
        writeln!(out, "Class {class}: {first} - {last}")?;
        if let Some(prefix) = class.default_prefix() {
            if let Ok(mask) = mask_addr(prefix) {
                writeln!(out, "{indent}Subnet mask: {mask} (prefix /{prefix})")?;
            }
        }
        if let Some(bits) = class.leading_bits() {
            writeln!(out, "{indent}Leading bits: {bits}")?;
        }
        writeln!(out, "{indent}{}", class.purpose())?;
        writeln!(out)?;
    }
    writeln!(out, "{}", rule('-', RULE_WIDTH))
}

/// Print a section heading framed by `=` rules.
pub fn write_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))
}

/// Print any result as pretty JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{json}")
}

pub fn write_json_error<W: Write>(out: &mut W, input: &str, err: &AddressError) -> io::Result<()> {
    write_json(out, &serde_json::json!({ "input": input, "error": err.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{analyze_ip, convert};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_conversion_order() {
        let text = render(|out| write_conversion(out, &convert("192.168.1.1").unwrap()));
        assert_eq!(
            text,
            "\nDecimal notation:  192.168.1.1\nBinary notation:   11000000.10101000.00000001.00000001\n"
        );

        let text = render(|out| {
            write_conversion(out, &convert("11000000.10101000.00000001.00000001").unwrap())
        });
        assert!(text.find("Binary").unwrap() < text.find("Decimal").unwrap());
    }

    #[test]
    fn test_write_ip_info_classful() {
        let text = render(|out| write_ip_info(out, &analyze_ip("10.0.0.1").unwrap()));
        assert!(text.contains("IP class:              A\n"));
        assert!(text.contains("Network prefix:        /8\n"));
        assert!(text.contains("Subnet mask:           255.0.0.0\n"));
        assert!(text.contains("Broadcast address:     10.255.255.255\n"));
        assert!(text.contains("Usable hosts:          16777214\n"));
    }

    #[test]
    fn test_write_ip_info_note() {
        let text = render(|out| write_ip_info(out, &analyze_ip("224.0.0.1").unwrap()));
        assert!(text.contains("IP class:              D\n"));
        assert!(text.contains("No standard subnet mask applies to class D addresses"));
        assert!(!text.contains("Subnet mask:"));
    }

    #[test]
    fn test_write_class_reference() {
        let text = render(|out| write_class_reference(out));
        assert!(text.contains("Class A: 1.0.0.0 - 126.255.255.255"));
        assert!(text.contains("Subnet mask: 255.255.0.0 (prefix /16)"));
        assert!(text.contains("Leading bits: 1110"));
        assert!(text.contains("127.0.0.0 - 127.255.255.255 are reserved for local loopback"));
    }

    #[test]
    fn test_write_json_error() {
        let text = render(|out| write_json_error(out, "1.2.3", &AddressError::OctetCount(3)));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["input"], "1.2.3");
        assert!(value["error"].as_str().unwrap().contains("4 octets"));
    }
}
