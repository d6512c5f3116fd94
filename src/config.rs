//! Runtime settings from the environment, and logging setup.
//!
//! `.env` is loaded by `main` before [`Settings::from_env`] runs, so either
//! source works. Settings are read before the logger exists, so rejected
//! values are kept in [`Settings::warnings`] and logged by
//! [`Settings::log_warnings`] once [`init_logging`] has run.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const LOG_CONFIG_VAR: &str = "IPV4_TUTOR_LOG_CONFIG";
pub const SHOW_DEMO_VAR: &str = "IPV4_TUTOR_SHOW_DEMO";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Print the worked examples before prompting.
    pub show_demo: bool,
    /// Environment values that were ignored.
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            show_demo: true,
            warnings: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.trim().is_empty()) {
            settings.log_config = PathBuf::from(path.trim());
        }
        if let Some(value) = lookup(SHOW_DEMO_VAR) {
            match parse_flag(&value) {
                Some(flag) => settings.show_demo = flag,
                None => settings
                    .warnings
                    .push(format!("Ignoring {SHOW_DEMO_VAR}={value:?}, expected true/false")),
            }
        }
        settings
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }
}

/// Parse the usual spellings of an on/off switch.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Initialise log4rs from the configured file, falling back to warnings on stderr.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    match init_from_file(&settings.log_config) {
        Ok(()) => Ok(()),
        Err(e) => {
            init_fallback()?;
            log::warn!(
                "Could not load {}: {e}; logging warnings to stderr",
                settings.log_config.display()
            );
            Ok(())
        }
    }
}

fn init_from_file(path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("log config file does not exist: {}", path.display()).into());
    }
    log4rs::init_file(path, Default::default()).map_err(|e| format!("{e:#}"))?;
    Ok(())
}

fn init_fallback() -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_config, PathBuf::from("log4rs.yml"));
        assert!(settings.show_demo);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (LOG_CONFIG_VAR, "/tmp/custom.yml"),
            (SHOW_DEMO_VAR, "false"),
        ]));
        assert_eq!(settings.log_config, PathBuf::from("/tmp/custom.yml"));
        assert!(!settings.show_demo);
    }

    #[test]
    fn test_bad_flag_keeps_default() {
        let settings = Settings::from_lookup(lookup_from(&[(SHOW_DEMO_VAR, "sometimes")]));
        assert!(settings.show_demo);
        assert_eq!(
            settings.warnings,
            [r#"Ignoring IPV4_TUTOR_SHOW_DEMO="sometimes", expected true/false"#]
        );
    }

    #[test]
    fn test_good_values_leave_no_warnings() {
        let settings = Settings::from_lookup(lookup_from(&[(SHOW_DEMO_VAR, "no")]));
        assert!(!settings.show_demo);
        assert!(settings.warnings.is_empty());
    }
}
