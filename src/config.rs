use crate::error::{KrishiError, Result};
use crate::i18n::{catalog, Lang};
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub reference: ReferenceConfig,
    pub advisory: AdvisoryConfig,
    #[serde(default)]
    pub device: Option<DeviceConfig>,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default display language code (must have a shipped table).
    pub language: String,
}

/// The fixed coordinate attached to manual entries and used as the
/// device-position fallback.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReferenceConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvisoryConfig {
    /// Simulated lookup latency before the static tables are served.
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceConfig {
    /// File holding the latest `lat lon` fix from a positioning daemon.
    pub fix_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Synthesizer command override; autodetected when unset.
    pub command: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(KrishiError::Config(format!(
                "Config file not found at {:?}. Run `krishi init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| KrishiError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| KrishiError::Config(format!("Failed to parse config: {}", e)))?;

        config.language()?;
        Ok(config)
    }

    /// The configured default language, rejected unless a complete
    /// translation table ships for it.
    pub fn language(&self) -> Result<Lang> {
        let lang = Lang::from_code(&self.general.language).ok_or_else(|| {
            KrishiError::Config(format!(
                "Unknown language code '{}'",
                self.general.language
            ))
        })?;
        if !catalog().supports(lang) {
            return Err(KrishiError::UnsupportedLanguage(lang.code().to_string()));
        }
        Ok(lang)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("krishi").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| KrishiError::Config("Cannot determine config directory".into()))?
            .join("krishi")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/krishi/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KrishiError::Config("Cannot determine config directory".into()))?
            .join("krishi");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up krishi!");
        println!();

        println!("General");
        let language: String = Input::new()
            .with_prompt("  Language (hi, en)")
            .default("hi".into())
            .validate_with(|code: &String| match Lang::from_code(code) {
                Some(lang) if catalog().supports(lang) => Ok(()),
                Some(_) => Err("language not translated yet"),
                None => Err("unknown language code"),
            })
            .interact_text()
            .map_err(|e| KrishiError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Reference location (used for manual entries and GPS fallback)");
        let label: String = Input::new()
            .with_prompt("  Place label")
            .default("Delhi, India".into())
            .interact_text()
            .map_err(|e| KrishiError::Config(format!("Input error: {}", e)))?;

        let latitude: f64 = Input::new()
            .with_prompt("  Latitude")
            .default(28.6139)
            .interact_text()
            .map_err(|e| KrishiError::Config(format!("Input error: {}", e)))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude")
            .default(77.2090)
            .interact_text()
            .map_err(|e| KrishiError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Device position (leave blank to skip)");
        let fix_file: String = Input::new()
            .with_prompt("  GPS fix file")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| KrishiError::Config(format!("Input error: {}", e)))?;

        let device = if fix_file.is_empty() {
            None
        } else {
            Some(DeviceConfig {
                fix_file: PathBuf::from(fix_file),
            })
        };

        println!();

        let speech_enabled = Confirm::new()
            .with_prompt("Enable spoken summaries?")
            .default(true)
            .interact()
            .map_err(|e| KrishiError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            general: GeneralConfig { language },
            reference: ReferenceConfig {
                latitude,
                longitude,
                label,
            },
            advisory: AdvisoryConfig { latency_ms: 2000 },
            device,
            speech: SpeechConfig {
                enabled: speech_enabled,
                command: None,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| KrishiError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# krishi Configuration\n# Generated by `krishi init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                language: "hi".into(),
            },
            reference: ReferenceConfig {
                latitude: 28.6139,
                longitude: 77.2090,
                label: "Delhi, India".into(),
            },
            advisory: AdvisoryConfig { latency_ms: 2000 },
            device: None,
            speech: SpeechConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.general.language, "hi");
        assert!((parsed.reference.latitude - 28.6139).abs() < 1e-9);
        assert_eq!(parsed.advisory.latency_ms, 2000);
        assert!(parsed.device.is_none());
        assert!(parsed.speech.enabled);
    }

    #[test]
    fn language_rejects_untranslated_codes() {
        let mut config = Config::default();
        assert_eq!(config.language().unwrap(), Lang::Hi);
        config.general.language = "ta".into();
        assert!(config.language().is_err());
        config.general.language = "xx".into();
        assert!(config.language().is_err());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("KRISHI_TEST_LABEL", "Pune, India");
        let out = Config::substitute_env_vars("label: ${KRISHI_TEST_LABEL}");
        assert_eq!(out, "label: Pune, India");
        // Unset variables are left as-is
        let out = Config::substitute_env_vars("label: ${KRISHI_TEST_UNSET_VAR}");
        assert_eq!(out, "label: ${KRISHI_TEST_UNSET_VAR}");
    }
}
