use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub claude: ClaudeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClaudeConfig {
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    pub api_version: String,
    // Loaded from env
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 3000,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `.env`, the optional TOML file at `path`, then the process environment.
    pub fn load(path: &Path) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_text = if path.exists() {
            Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            )
        } else {
            None
        };

        Self::from_sources(config_text.as_deref(), |key| std::env::var(key).ok())
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    pub fn from_sources<F>(config_text: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: AppConfig = match config_text {
            Some(text) => toml::from_str(text).context("Failed to parse config.toml")?,
            None => AppConfig::default(),
        };

        config.claude.api_key = env("ANTHROPIC_API_KEY").filter(|key| !key.is_empty());

        if let Some(model) = env("DEFAULT_MODEL").filter(|m| !m.is_empty()) {
            config.claude.model = model;
        }
        if let Some(max_tokens) = env("MAX_TOKENS") {
            config.claude.max_tokens = max_tokens
                .trim()
                .parse()
                .context("MAX_TOKENS must be an integer")?;
        }
        if let Some(level) = env("LOG_LEVEL").filter(|l| !l.is_empty()) {
            config.logging.level = level;
        }
        config.logging.level = normalize_level(&config.logging.level)?;

        Ok(config)
    }
}

/// Maps a level name, including the `WARNING`/`CRITICAL` spellings, onto a `tracing` level.
fn normalize_level(level: &str) -> Result<String> {
    let normalized = match level.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        "off" => "off",
        _ => anyhow::bail!("Unknown log level: {}", level),
    };
    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let config = AppConfig::from_sources(None, env_of(&[])).unwrap();
        assert_eq!(config.claude.model, "claude-sonnet-4-20250514");
        assert_eq!(config.claude.max_tokens, 3000);
        assert_eq!(config.logging.level, "info");
        assert!(config.claude.api_key.is_none());
    }

    #[test]
    fn env_overrides_file() {
        let toml = r#"
            [claude]
            model = "from-file"
            max_tokens = 100

            [logging]
            level = "warn"
        "#;
        let config = AppConfig::from_sources(
            Some(toml),
            env_of(&[
                ("ANTHROPIC_API_KEY", "sk-test"),
                ("DEFAULT_MODEL", "from-env"),
                ("LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.claude.model, "from-env");
        assert_eq!(config.claude.max_tokens, 100);
        assert_eq!(config.claude.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.claude.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn rejects_non_numeric_max_tokens() {
        let err = AppConfig::from_sources(None, env_of(&[("MAX_TOKENS", "lots")])).unwrap_err();
        assert!(format!("{:#}", err).contains("MAX_TOKENS must be an integer"));
    }

    #[test]
    fn accepts_python_style_level_names() {
        for (given, expected) in [
            ("WARNING", "warn"),
            ("warn", "warn"),
            ("CRITICAL", "error"),
            ("fatal", "error"),
            ("DEBUG", "debug"),
        ] {
            let config =
                AppConfig::from_sources(None, env_of(&[("LOG_LEVEL", given)])).unwrap();
            assert_eq!(config.logging.level, expected, "LOG_LEVEL={}", given);
        }
    }

    #[test]
    fn rejects_unknown_level() {
        let err =
            AppConfig::from_sources(None, env_of(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown log level: loud"));

        let toml = "[logging]\nlevel = \"verbose\"\n";
        assert!(AppConfig::from_sources(Some(toml), env_of(&[])).is_err());
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config =
            AppConfig::from_sources(None, env_of(&[("ANTHROPIC_API_KEY", "")])).unwrap();
        assert!(config.claude.api_key.is_none());
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(AppConfig::from_sources(Some("[claude\nmodel ="), env_of(&[])).is_err());
    }
}
