pub mod schema;
pub mod watcher;

pub use schema::{AveragerConfig, AvgConfig, GlobalConfig, ThemeConfig};
pub use watcher::ConfigWatcher;

use avg_core::{AvgError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `AvgConfig::default()` if
/// the file doesn't exist so the calculator always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<AvgConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(AvgConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| AvgError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate configuration text.
pub fn parse(raw: &str) -> Result<AvgConfig> {
    let config: AvgConfig =
        toml::from_str(raw).map_err(|e| AvgError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

/// Reject values the averager cannot work with.
pub fn validate(config: &AvgConfig) -> Result<()> {
    if config.averager.capacity == 0 {
        return Err(AvgError::Config(
            "averager.capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("avg").join("avg.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use avg_core::NumberCategory;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.averager.capacity, 10);
        assert_eq!(cfg.global.category, NumberCategory::Prime);
        assert_eq!(cfg.theme.accent, "#4f46e5");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = parse(
            r##"
            [global]
            category = "even"

            [averager]
            capacity = 5

            [theme]
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(cfg.global.category, NumberCategory::Even);
        assert_eq!(cfg.global.width, 900.0);
        assert_eq!(cfg.averager.capacity, 5);
        assert_eq!(cfg.theme.accent, "#ff0000");
        assert_eq!(cfg.theme.surface, "#ffffff");
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = parse("[averager]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, AvgError::Config(_)));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(parse("[global"), Err(AvgError::Config(_))));
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(parse("[global]\ncategory = \"odd\"\n").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load("/nonexistent/avg/avg.toml").unwrap();
        assert_eq!(cfg.averager.capacity, 10);
    }
}
