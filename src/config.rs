//! Configuration file structures for the Leise bot.
//!
//! Configuration is loaded from a YAML file, with environment variable
//! overrides using the `LEISE_` prefix and `__` as the section separator.
//!
//! # Configuration File Format
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export LEISE_DISCORD__TOKEN="your-bot-token"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure for the Leise bot.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Discord account configuration
    pub discord: Discord,
}

/// Discord account configuration.
///
/// # YAML Section
///
/// ```yaml
/// discord:
///   token: "your-bot-token"
/// ```
#[derive(Debug, Deserialize)]
pub struct Discord {
    /// Bot token used to authenticate against the Discord gateway and API.
    ///
    /// Prefer supplying this through the `LEISE_DISCORD__TOKEN` environment
    /// variable rather than writing it to disk.
    pub token: String,
}

impl Config {
    /// Loads the configuration from a YAML file merged with environment
    /// variables.
    ///
    /// Environment variables take precedence over file values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a required value is
    /// missing from both sources.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("LEISE_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discord:\n  token: \"abc123\"").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.discord.token, "abc123");
    }

    #[test]
    fn test_load_missing_token_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discord: {{}}").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "discord:\n  token: \"from-file\"")?;
            jail.set_env("LEISE_DISCORD__TOKEN", "from-env");

            let config = Config::load("config.yaml")?;
            assert_eq!(config.discord.token, "from-env");
            Ok(())
        });
    }
}
