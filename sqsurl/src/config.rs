//! Configuration management

use serde::Deserialize;

use crate::output::OutputFormat;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Emit remote resource attributes instead of the parsed components
    #[serde(default)]
    pub attributes: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("sqsurl").required(false))
            .add_source(
                config::Environment::with_prefix("SQSURL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize::<Config>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(src: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.attributes);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_file_values() {
        let config = from_toml(
            r#"
            [output]
            format = "text"
            attributes = true

            [log]
            level = "trace"
            "#,
        );
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.attributes);
        assert_eq!(config.log.level, "trace");
    }
}
