// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use error::{AddressError, Result};
pub use processing::{analyze_ip, binary_to_decimal, convert, decimal_to_binary, IpInfo};
pub use session::{run_session, Exercise};
