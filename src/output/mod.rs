//! Output formatting for exercise results.
//!
//! - [`report`] - human-readable reports and JSON rendering
//! - [`terminal`] - column and separator helpers

mod report;
mod terminal;

pub use report::{
    write_class_reference, write_conversion, write_conversion_error, write_error, write_heading,
    write_ip_info, write_ip_info_error, write_json, write_json_error,
};
pub use terminal::{format_label, rule, RULE_WIDTH};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable report
    #[default]
    Human,
    /// Pretty-printed JSON, one document per address
    Json,
}
