use anyhow::{bail, Context, Result};

use crate::generation::generator::GenerationOptions;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skip_duplicate_variation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skip_duplicate_variation: optional_flag("SKIP_DUPLICATE_VARIATION")?,
        })
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            skip_duplicate_variation: self.skip_duplicate_variation,
        }
    }
}

fn optional_flag(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value).with_context(|| format!("Invalid value for '{key}'")),
        Err(_) => Ok(false),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => bail!("expected true/false, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_generation_options_follow_flag() {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            skip_duplicate_variation: true,
        };
        assert!(config.generation_options().skip_duplicate_variation);
    }
}
