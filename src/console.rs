use crate::config::{CaseConfig, ConfigError};
use crate::telemetry;
use colored::Colorize;

pub fn heading(title: &str) {
    println!("{}", heading_text(title));
}

fn heading_text(title: &str) -> String {
    format!("== {} ==", title).bold().cyan().to_string()
}

/// Common start of every case study: config, logging, then the title.
pub fn bootstrap(title: &str) -> CaseConfig {
    let loaded = CaseConfig::load();
    let fallback = loaded.as_ref().cloned().unwrap_or_default();

    colored::control::set_override(fallback.color);
    telemetry::init(&fallback);
    let config = settle(loaded);

    heading(title);
    config
}

/// A broken config is reported, never fatal.
fn settle(loaded: Result<CaseConfig, ConfigError>) -> CaseConfig {
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; using default settings");
            CaseConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_heading_contains_title() {
        colored::control::set_override(false);
        assert_eq!(heading_text("Observer"), "== Observer ==");
    }

    #[test]
    fn test_malformed_config_settles_on_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [unterminated").unwrap();

        let loaded = CaseConfig::load_from(file.path());
        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
        assert_eq!(settle(loaded), CaseConfig::default());
    }

    #[test]
    fn test_valid_config_is_kept() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();

        let config = settle(CaseConfig::load_from(file.path()));
        assert!(!config.color);
        assert_eq!(config.log_level, "info");
    }
}
