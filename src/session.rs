//! Interactive read-print loop shared by both exercises.

use crate::output::{
    write_conversion, write_conversion_error, write_heading, write_ip_info, write_ip_info_error,
    write_json, write_json_error, OutputFormat,
};
use crate::processing::{analyze_ip, convert};
use std::io::{self, BufRead, Write};

/// Words that end a session, compared case-insensitively.
pub const EXIT_KEYWORDS: [&str; 4] = ["exit", "quit", "q", "выход"];

pub fn is_exit_keyword(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&line.as_str())
}

/// The two course exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    /// Decimal <-> binary notation conversion.
    Convert,
    /// Classful analysis with default mask, network and broadcast.
    Classify,
}

impl Exercise {
    pub fn title(&self) -> &'static str {
        match self {
            Exercise::Convert => "IP address converter",
            Exercise::Classify => "IP address analyzer",
        }
    }

    fn intro(&self) -> &'static [&'static str] {
        match self {
            Exercise::Convert => &[
                "Enter an IP address in decimal notation (e.g. 192.168.1.1)",
                "or in binary notation (e.g. 11000000.10101000.00000001.00000001)",
            ],
            Exercise::Classify => &[
                "Determines the network class, the network and broadcast addresses",
                "and the default subnet mask of a given IP address",
            ],
        }
    }

    fn prompt(&self) -> &'static str {
        match self {
            Exercise::Convert => "\nEnter an IP address (or 'exit' to quit): ",
            Exercise::Classify => "\nEnter an IP address to analyze (or 'exit' to quit):\n> ",
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Exercise::Convert => write!(f, "convert"),
            Exercise::Classify => write!(f, "classify"),
        }
    }
}

/// Counts reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub processed: usize,
    pub rejected: usize,
}

/// Print the exercise banner.
pub fn write_intro<W: Write>(out: &mut W, exercise: Exercise) -> io::Result<()> {
    write_heading(out, exercise.title())?;
    for line in exercise.intro() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Run one address through `exercise` and print the outcome.
///
/// Returns `false` when the address was rejected.
pub fn handle_address<W: Write>(
    out: &mut W,
    exercise: Exercise,
    format: OutputFormat,
    input: &str,
) -> io::Result<bool> {
    log::debug!("handle_address({exercise}, {input:?})");
    let outcome = match exercise {
        Exercise::Convert => match convert(input) {
            Ok(conversion) => {
                match format {
                    OutputFormat::Human => write_conversion(out, &conversion)?,
                    OutputFormat::Json => write_json(out, &conversion)?,
                }
                Ok(())
            }
            Err(e) => {
                match format {
                    OutputFormat::Human => write_conversion_error(out, &e)?,
                    OutputFormat::Json => write_json_error(out, input, &e)?,
                }
                Err(e)
            }
        },
        Exercise::Classify => match analyze_ip(input) {
            Ok(info) => {
                match format {
                    OutputFormat::Human => write_ip_info(out, &info)?,
                    OutputFormat::Json => write_json(out, &info)?,
                }
                Ok(())
            }
            Err(e) => {
                match format {
                    OutputFormat::Human => write_ip_info_error(out, &e)?,
                    OutputFormat::Json => write_json_error(out, input, &e)?,
                }
                Err(e)
            }
        },
    };

    if let Err(e) = &outcome {
        log::warn!("Rejected {input:?}: {e}");
    }
    Ok(outcome.is_ok())
}

/// Prompt for addresses until an exit keyword or end of input.
///
/// Blank lines are skipped. Prompts are only printed for human output so a
/// JSON session stays machine-readable.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    exercise: Exercise,
    format: OutputFormat,
) -> io::Result<SessionSummary> {
    log::info!("#Start run_session({exercise})");
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    loop {
        if format == OutputFormat::Human {
            write!(out, "{}", exercise.prompt())?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            log::info!("End of input");
            if format == OutputFormat::Human {
                writeln!(out)?;
            }
            break;
        };
        let line = line?;
        let line = line.trim();

        if is_exit_keyword(line) {
            if format == OutputFormat::Human {
                writeln!(out, "\nProgram finished.")?;
            }
            break;
        }
        if line.is_empty() {
            continue;
        }

        summary.processed += 1;
        if !handle_address(out, exercise, format, line)? {
            summary.rejected += 1;
        }
    }

    log::info!(
        "#End run_session({exercise}) processed={} rejected={}",
        summary.processed,
        summary.rejected
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(exercise: Exercise, format: OutputFormat, input: &str) -> (SessionSummary, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let summary = run_session(Cursor::new(input), &mut out, exercise, format).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_is_exit_keyword() {
        assert!(is_exit_keyword("exit"));
        assert!(is_exit_keyword("QUIT"));
        assert!(is_exit_keyword(" q "));
        assert!(is_exit_keyword("Выход"));
        assert!(!is_exit_keyword("10.0.0.1"));
        assert!(!is_exit_keyword(""));
    }

    #[test]
    fn test_convert_session_stops_at_exit() {
        let (summary, text) = session(
            Exercise::Convert,
            OutputFormat::Human,
            "192.168.1.1\nexit\n10.0.0.1\n",
        );
        assert_eq!(summary, SessionSummary { processed: 1, rejected: 0 });
        assert!(text.contains("11000000.10101000.00000001.00000001"));
        assert!(!text.contains("00001010"));
        assert!(text.ends_with("Program finished.\n"));
    }

    #[test]
    fn test_session_continues_after_error() {
        let (summary, text) = session(
            Exercise::Convert,
            OutputFormat::Human,
            "1.2.3.256\n\n01011101.10111011.01001000.00110000\n",
        );
        assert_eq!(summary, SessionSummary { processed: 2, rejected: 1 });
        assert!(text.contains("Error:"));
        assert!(text.contains("93.187.72.48"));
    }

    #[test]
    fn test_classify_session() {
        let (summary, text) = session(
            Exercise::Classify,
            OutputFormat::Human,
            "224.0.0.1\nnonsense\nq\n",
        );
        assert_eq!(summary, SessionSummary { processed: 2, rejected: 1 });
        assert!(text.contains("No standard subnet mask applies to class D addresses"));
        assert!(text.contains("IP address must contain 4 octets separated by dots (got 1)"));
    }

    #[test]
    fn test_json_session_has_no_prompts() {
        let (_, text) = session(Exercise::Classify, OutputFormat::Json, "10.0.0.1\n");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ip_class"], "A");
        assert_eq!(value["subnet_mask"], "255.0.0.0");
    }
}
