//! Engine configuration: TOML file for behavior, environment for secrets.

use chrono::NaiveTime;
use griot_core::{StyleCatalog, TopicCatalog};
use griot_error::{ConfigError, GriotResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_daily_limit() -> u32 {
    3
}

fn default_store_path() -> PathBuf {
    PathBuf::from("post_log.jsonl")
}

fn default_retry_pause_secs() -> u64 {
    2
}

fn default_poll_interval_secs() -> u64 {
    30
}

/// Configuration for the posting engine.
///
/// Loaded once at startup and passed by reference into each component; no
/// component reads ambient state. All fields have defaults, so an absent or
/// empty file yields a working configuration with the built-in catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Maximum posts per calendar day
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
    /// Times of day ("HH:MM") at which the long-lived scheduler fires
    #[serde(default)]
    pub schedule: Vec<String>,
    /// Topic catalog; empty means the built-in default catalog
    #[serde(default)]
    pub topics: Vec<String>,
    /// Style templates with `{topic}` placeholders; empty means built-in
    #[serde(default)]
    pub styles: Vec<String>,
    /// Path of the JSON-lines post log
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Pause between bounded generation attempts, seconds
    #[serde(default = "default_retry_pause_secs")]
    pub retry_pause_secs: u64,
    /// Scheduler polling interval, seconds
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
            schedule: Vec::new(),
            topics: Vec::new(),
            styles: Vec::new(),
            store_path: default_store_path(),
            retry_pause_secs: default_retry_pause_secs(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> GriotResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// The topic catalog, falling back to the built-in default when empty.
    pub fn topic_catalog(&self) -> TopicCatalog {
        TopicCatalog::new(self.topics.clone())
    }

    /// The style catalog, falling back to the built-in default when empty.
    pub fn style_catalog(&self) -> StyleCatalog {
        StyleCatalog::new(self.styles.clone())
    }

    /// Parse the configured schedule into times of day.
    ///
    /// Accepts "HH:MM" or "HH:MM:SS". An unparseable entry is a
    /// configuration error, surfaced at startup rather than at firing time.
    pub fn schedule_times(&self) -> GriotResult<Vec<NaiveTime>> {
        let mut times = Vec::with_capacity(self.schedule.len());
        for raw in &self.schedule {
            let time = NaiveTime::parse_from_str(raw, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
                .map_err(|e| ConfigError::new(format!("Invalid schedule time '{}': {}", raw, e)))?;
            times.push(time);
        }
        times.sort();
        Ok(times)
    }

    /// Pause between generation attempts.
    pub fn retry_pause(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.retry_pause_secs)
    }

    /// Scheduler polling interval.
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}

/// Credentials for the external collaborators, read from the environment.
///
/// The engine itself never uses these; they are handed to whichever
/// generator, publisher, and store backends the binary wires up. Missing
/// variables are a fatal startup error reported before any pipeline logic
/// runs.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Credentials {
    /// Identifier of the page posts are published to
    page_id: String,
    /// Access token for the publishing API
    page_token: String,
    /// API key for the text generation backend
    text_api_key: String,
    /// API key for the image generation backend
    image_api_key: String,
}

impl Credentials {
    /// Read credentials from the environment.
    ///
    /// Reports every missing variable in one error rather than failing on
    /// the first.
    pub fn from_env() -> GriotResult<Self> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match std::env::var(name) {
            Ok(value) if !value.is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let page_id = read("GRIOT_PAGE_ID");
        let page_token = read("GRIOT_PAGE_TOKEN");
        let text_api_key = read("GRIOT_TEXT_API_KEY");
        let image_api_key = read("GRIOT_IMAGE_API_KEY");

        if !missing.is_empty() {
            return Err(
                ConfigError::new(format!("Missing env vars: {}", missing.join(", "))).into(),
            );
        }

        Ok(Self {
            page_id,
            page_token,
            text_api_key,
            image_api_key,
        })
    }
}
