use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub lecturers: LecturerCacheConfig,
    pub logging: LoggingConfig,
}

/// Policy for two weekly slots on the same weekday whose times overlap.
///
/// The legacy data contains courses with double sessions on one day, so the
/// default keeps every slot. `Reject` drops the later overlapping slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOverlapPolicy {
    Allow,
    Reject,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GenerationConfig {
    /// Fallback duration in minutes for timed entries whose end time is
    /// missing or unparseable.
    pub default_duration_minutes: u32,
    pub overlap_policy: SlotOverlapPolicy,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LecturerCacheConfig {
    /// How long a loaded lecturer-name directory stays fresh.
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("generation.default_duration_minutes", 60)?
            .set_default("generation.overlap_policy", "allow")?
            .set_default("lecturers.ttl_seconds", 3600)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: 60,
            overlap_policy: SlotOverlapPolicy::Allow,
        }
    }
}

impl Default for LecturerCacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 3600 }
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
