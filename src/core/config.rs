//! Configuration management for semilla
//!
//! Supports environment variables, config files, and CLI overrides.
//! Defaults are the literal seeding scenario the tool was written for.
//!
//! Config file location: ~/.config/semilla/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use url::Url;

use crate::core::error::{Result, SemillaError};

/// Main configuration for semilla
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target application configuration
    #[serde(default)]
    pub app: AppConfig,
    /// Browser driver configuration
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Seed record field values
    #[serde(default)]
    pub seed: SeedConfig,
    /// Artifact output configuration
    #[serde(default)]
    pub artifact: ArtifactConfig,
    /// Runner behavior configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Target application and admin credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the membership app
    pub base_url: String,
    /// Admin username for the login form
    pub username: String,
    /// Admin password for the login form
    pub password: String,
}

/// Browser driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Session name for agent-browser; None picks a fresh random one per run
    pub session_name: Option<String>,
    /// Whether to run in headed mode (visible browser)
    pub headed: bool,
    /// Wait budget in ms passed to wait operations; None keeps the driver default
    pub timeout_ms: Option<u64>,
}

/// Field values for the seeded client and membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Client full name
    pub full_name: String,
    /// Client phone number; the app treats it as optional
    pub phone: String,
    /// Client email address; the app treats it as optional
    pub email: String,
    /// Membership type, by visible option label
    pub membership_type: String,
    /// Payment method, by visible option label
    pub payment_method: String,
    /// How many days in the past the membership starts
    pub start_offset_days: u32,
}

/// Artifact output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Where the screenshot lands; overwritten on each run
    pub screenshot_path: PathBuf,
    /// Capture the full page instead of the viewport
    pub full_page: bool,
}

/// Runner behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Whether to show debug output
    pub debug: bool,
    /// Wait for the seeded client's name on the page before the screenshot
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            browser: BrowserConfig::default(),
            seed: SeedConfig::default(),
            artifact: ArtifactConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("SEMILLA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3306".to_string()),
            username: env::var("SEMILLA_USERNAME").unwrap_or_else(|_| "manuel".to_string()),
            password: env::var("SEMILLA_PASSWORD").unwrap_or_else(|_| "manuel123".to_string()),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            session_name: env::var("SEMILLA_BROWSER_SESSION").ok(),
            headed: env::var("SEMILLA_BROWSER_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            timeout_ms: None,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            full_name: "Test User Expiring Today".to_string(),
            phone: "123456789".to_string(),
            email: "test@example.com".to_string(),
            membership_type: "Individual".to_string(),
            payment_method: "Efectivo".to_string(),
            start_offset_days: 30,
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            screenshot_path: PathBuf::from("artifacts/seed-verification.png"),
            full_page: false,
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            debug: env::var("SEMILLA_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            verify: env::var("SEMILLA_VERIFY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("semilla")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(SemillaError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| SemillaError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SemillaError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Reject configs that cannot possibly seed anything
    pub fn validate(&self) -> Result<()> {
        self.app.base()?;

        if self.app.username.trim().is_empty() {
            return Err(SemillaError::config("username must not be empty"));
        }
        if self.app.password.is_empty() {
            return Err(SemillaError::config("password must not be empty"));
        }
        if self.seed.full_name.trim().is_empty() {
            return Err(SemillaError::config("seed full_name must not be empty"));
        }
        if self.seed.membership_type.trim().is_empty() {
            return Err(SemillaError::config("seed membership_type must not be empty"));
        }
        if self.seed.payment_method.trim().is_empty() {
            return Err(SemillaError::config("seed payment_method must not be empty"));
        }

        Ok(())
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}

impl AppConfig {
    /// Parse the configured base URL
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            SemillaError::config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })
    }
}
