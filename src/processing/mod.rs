//! Exercise logic.
//!
//! - [`convert`] - decimal <-> binary notation conversion
//! - [`analyze`] - classful analysis with default mask, network and broadcast

mod analyze;
mod convert;

pub use analyze::{analyze_ip, validate_ip, IpInfo};
pub use convert::{binary_to_decimal, convert, decimal_to_binary, Conversion};
