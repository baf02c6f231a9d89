use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub similarity: SimilarityWeightsConfig,
    #[serde(default)]
    pub ranking: RankingWeightsConfig,
    #[serde(default = "default_count_cap")]
    pub count_cap: f64,
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            similarity: SimilarityWeightsConfig::default(),
            ranking: RankingWeightsConfig::default(),
            count_cap: default_count_cap(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityWeightsConfig {
    #[serde(default = "default_industry_weight")]
    pub industry: f64,
    #[serde(default = "default_services_weight")]
    pub services: f64,
    #[serde(default = "default_moq_weight")]
    pub moq: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for SimilarityWeightsConfig {
    fn default() -> Self {
        Self {
            industry: default_industry_weight(),
            services: default_services_weight(),
            moq: default_moq_weight(),
            location: default_location_weight(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingWeightsConfig {
    #[serde(default = "default_profile_score_weight")]
    pub profile_score: f64,
    #[serde(default = "default_match_score_weight")]
    pub match_score: f64,
    #[serde(default = "default_certification_count_weight")]
    pub certification_count: f64,
    #[serde(default = "default_services_count_weight")]
    pub services_count: f64,
}

impl Default for RankingWeightsConfig {
    fn default() -> Self {
        Self {
            profile_score: default_profile_score_weight(),
            match_score: default_match_score_weight(),
            certification_count: default_certification_count_weight(),
            services_count: default_services_count_weight(),
        }
    }
}

fn default_industry_weight() -> f64 { 0.30 }
fn default_services_weight() -> f64 { 0.35 }
fn default_moq_weight() -> f64 { 0.15 }
fn default_location_weight() -> f64 { 0.20 }

fn default_profile_score_weight() -> f64 { 0.4 }
fn default_match_score_weight() -> f64 { 0.3 }
fn default_certification_count_weight() -> f64 { 0.2 }
fn default_services_count_weight() -> f64 { 0.1 }

fn default_count_cap() -> f64 { 10.0 }
fn default_similarity_threshold() -> f64 { 50.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FABRICA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FABRICA_)
            // e.g., FABRICA_SCORING__COUNT_CAP -> scoring.count_cap
            .add_source(
                Environment::with_prefix("FABRICA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FABRICA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
