//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;
use crate::infrastructure::horoscope::DEFAULT_HOST;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub adapters: AdaptersConfig,
    pub horoscope: HoroscopeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub discord: Option<DiscordConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

/// Horoscope endpoint settings. The API key is a secret: it normally
/// arrives through the HOROSCOPE_API_KEY environment variable rather
/// than the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HoroscopeConfig {
    pub host: String,
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "horoscope-bot".to_string(),
                prefix: "!hs".to_string(),
            },
            adapters: AdaptersConfig {
                discord: Some(DiscordConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig { enabled: true }),
            },
            horoscope: HoroscopeConfig {
                host: DEFAULT_HOST.to_string(),
                api_key: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(token) = std::env::var("BOT_TOKEN") {
            if let Some(ref mut discord) = config.adapters.discord {
                discord.token = Some(token);
                discord.enabled = true;
            }
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.prefix = prefix;
        }

        if let Ok(host) = std::env::var("HOROSCOPE_API_HOST") {
            config.horoscope.host = host;
        }

        if let Ok(key) = std::env::var("HOROSCOPE_API_KEY") {
            config.horoscope.api_key = Some(key);
        }

        config
    }

    /// Resolve the horoscope API key from the config file or environment
    pub fn horoscope_api_key(&self) -> Result<String, ConfigError> {
        self.horoscope
            .api_key
            .clone()
            .or_else(|| std::env::var("HOROSCOPE_API_KEY").ok())
            .ok_or_else(|| ConfigError::MissingField("horoscope.api-key".to_string()))
    }

    /// Resolve the Discord bot token, if any is configured
    pub fn discord_token(&self) -> Option<String> {
        self.adapters
            .discord
            .as_ref()
            .filter(|discord| discord.enabled)
            .and_then(|discord| discord.token.clone())
    }
}
