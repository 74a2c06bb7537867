use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main import configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent by the plain HTTP fetcher
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Images smaller than this many bytes are skipped before recognition
    #[serde(default = "default_min_image_bytes")]
    pub min_image_bytes: u64,
    /// Heuristic thresholds shared by the extractors
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            min_image_bytes: default_min_image_bytes(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Thresholds used by the HTML and OCR heuristics
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// How many leading OCR lines are considered when guessing a title
    #[serde(default = "default_title_scan_lines")]
    pub title_scan_lines: usize,
    /// HTML ingredient candidates at or above this length are discarded
    #[serde(default = "default_max_ingredient_chars")]
    pub max_ingredient_chars: usize,
    /// HTML direction candidates at or above this length are discarded
    #[serde(default = "default_max_direction_chars")]
    pub max_direction_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_scan_lines: default_title_scan_lines(),
            max_ingredient_chars: default_max_ingredient_chars(),
            max_direction_chars: default_max_direction_chars(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeExtract/1.0)".to_string()
}

fn default_min_image_bytes() -> u64 {
    1000
}

fn default_title_scan_lines() -> usize {
    15
}

fn default_max_ingredient_chars() -> usize {
    200
}

fn default_max_direction_chars() -> usize {
    1000
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_EXTRACT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_EXTRACT__EXTRACTION__TITLE_SCAN_LINES
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImportConfig::load`] for the source priority.
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_EXTRACT__EXTRACTION__MAX_DIRECTION_CHARS
        .add_source(
            Environment::with_prefix("RECIPE_EXTRACT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
