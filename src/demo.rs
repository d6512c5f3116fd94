//! Worked examples printed before the interactive prompt.

use crate::output::{format_label, write_class_reference, write_heading, write_json, OutputFormat};
use crate::processing::{binary_to_decimal, convert, decimal_to_binary};
use crate::session::{handle_address, Exercise};
use std::io::{self, Write};

/// Binary addresses from the conversion exercise.
pub const BINARY_EXAMPLES: [&str; 3] = [
    "01011101.10111011.01001000.00110000",
    "01001000.10100011.00000100.10100001",
    "00001111.11011001.11101000.11110101",
];

/// Decimal addresses from the conversion exercise.
pub const DECIMAL_EXAMPLES: [&str; 2] = ["65.58.20.252", "154.246.184.244"];

/// One address per class, in reference-table order.
pub const CLASSIFY_EXAMPLES: [&str; 6] = [
    "10.0.0.1",
    "172.16.0.1",
    "192.168.1.1",
    "224.0.0.1",
    "240.0.0.1",
    "127.0.0.1",
];

const LABEL_WIDTH: usize = 19;

pub fn write_demo<W: Write>(
    out: &mut W,
    exercise: Exercise,
    format: OutputFormat,
) -> io::Result<()> {
    log::info!("#Start write_demo({exercise})");
    match (exercise, format) {
        (Exercise::Convert, OutputFormat::Human) => write_conversion_examples(out),
        (Exercise::Classify, OutputFormat::Human) => {
            write_class_reference(out)?;
            writeln!(out)?;
            write_heading(out, "Worked examples")?;
            for ip in CLASSIFY_EXAMPLES {
                handle_address(out, exercise, format, ip)?;
            }
            Ok(())
        }
        (Exercise::Convert, OutputFormat::Json) => {
            for ip in BINARY_EXAMPLES.iter().chain(DECIMAL_EXAMPLES.iter()) {
                match convert(ip) {
                    Ok(conversion) => write_json(out, &conversion)?,
                    Err(e) => log::error!("Bad built-in example {ip}: {e}"),
                }
            }
            Ok(())
        }
        (Exercise::Classify, OutputFormat::Json) => {
            for ip in CLASSIFY_EXAMPLES {
                handle_address(out, exercise, format, ip)?;
            }
            Ok(())
        }
    }
}

/// Numbered binary-then-decimal examples, as set in the exercise sheet.
fn write_conversion_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write_heading(out, "Worked examples")?;

    let binary_rows = BINARY_EXAMPLES
        .iter()
        .map(|ip| (ip.to_string(), binary_to_decimal(ip), true));
    let decimal_rows = DECIMAL_EXAMPLES
        .iter()
        .map(|ip| (ip.to_string(), decimal_to_binary(ip), false));

    for (n, (ip, converted, from_binary)) in binary_rows.chain(decimal_rows).enumerate() {
        let converted = match converted {
            Ok(c) => c,
            Err(e) => {
                log::error!("Bad built-in example {ip}: {e}");
                continue;
            }
        };
        let (first_label, second_label) = if from_binary {
            ("Binary notation", "Decimal notation")
        } else {
            ("Decimal notation", "Binary notation")
        };
        writeln!(out, "{}) {}{ip}", n + 1, format_label(first_label, LABEL_WIDTH))?;
        writeln!(out, "   {}{converted}", format_label(second_label, LABEL_WIDTH))?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(exercise: Exercise, format: OutputFormat) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_demo(&mut out, exercise, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_convert_demo_numbering() {
        let text = render(Exercise::Convert, OutputFormat::Human);
        assert!(text.contains("1) Binary notation:   01011101.10111011.01001000.00110000\n"));
        assert!(text.contains("   Decimal notation:  93.187.72.48\n"));
        assert!(text.contains("4) Decimal notation:  65.58.20.252\n"));
        assert!(text.contains("   Binary notation:   10011010.11110110.10111000.11110100\n"));
        assert!(!text.contains("6)"));
    }

    #[test]
    fn test_classify_demo_covers_every_class() {
        let text = render(Exercise::Classify, OutputFormat::Human);
        for class in ["A", "B", "C", "D", "E", "Loopback"] {
            assert!(
                text.contains(&format!("IP class:              {class}\n")),
                "missing class {class}"
            );
        }
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_convert_demo_json() {
        let text = render(Exercise::Convert, OutputFormat::Json);
        let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
            .into_iter::<serde_json::Value>()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 5);
        assert_eq!(docs[0]["notation"], "binary");
        assert_eq!(docs[3]["binary"], "01000001.00111010.00010100.11111100");
    }
}
