// Application settings
// Loaded from ~/.config/railpal/settings.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend base URL. Overridden by --api-base and RAILPAL_API_BASE.
    #[serde(rename = "api.base")]
    pub api_base: Option<String>,

    /// Stripe price ID for the monthly plan
    #[serde(rename = "checkout.priceMonthly")]
    pub price_monthly: String,

    /// Stripe price ID for the credit pack
    #[serde(rename = "checkout.priceCredits")]
    pub price_credits: String,

    /// Default export filename for reconciliation results
    #[serde(rename = "export.filename")]
    pub default_export: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: None, // None = built-in production URL
            price_monthly: "price_monthly".to_string(),
            price_credits: "price_credits".to_string(),
            default_export: "railpal_results.csv".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("railpal");
        config_dir.join("settings.toml")
    }

    /// Load settings from disk, falling back to defaults.
    ///
    /// A missing file is normal and silent; a malformed file is reported
    /// to stderr and ignored rather than aborting the command.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from an explicit path (tests, --config overrides)
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let toml = toml::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(&path, toml).map_err(|e| e.to_string())
    }
}
