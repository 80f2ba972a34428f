use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

// Translation settings live with the translators that consume them
use incinote_translate::TranslationConfig;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct GenerateConfig {
    /// Run generated notes through the configured translator by default.
    #[serde(default)]
    pub translate: bool,
    /// Print the export record as JSON instead of plain sections.
    #[serde(default)]
    pub json: bool,
}

const CONFIG_TEMPLATE: &str = r#"{
  "generate": {
    "translate": false,
    "json": false
  },
  "translation": {
    "provider": "offline",
    "endpoint": "http://localhost:5000",
    "source": "en",
    "target": "fr",
    "timeout_secs": 10,
    "glossary": {
      "pod": "pod",
      "on-call": "astreinte"
    }
  }
}"#;

impl Config {
    /// Directory holding `config.json`.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("incinote"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/incinote/config.json`, or defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Set translation.provider to \"remote\" to use a translation service");
        println!("   2. Point translation.endpoint at a LibreTranslate-compatible server");
        println!("   3. Run 'incinote generate' and paste an incident description");
        println!();
        Ok(config_path)
    }

    /// Write the default template, refusing to overwrite an existing file.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        std::fs::write(path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
