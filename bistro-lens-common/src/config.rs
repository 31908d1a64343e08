use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_dataset_path() -> String {
    "tripadvisor_european_restaurants.csv".into()
}
fn default_delimiter() -> char {
    ','
}

impl DatasetConfig {
    /// Delimiter as the single byte the CSV reader wants; non-ASCII falls back to comma.
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b','
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default = "default_cuisines")]
    pub cuisines: Vec<String>,
    #[serde(default = "default_rating_lo")]
    pub rating_lo: f64,
    #[serde(default = "default_rating_hi")]
    pub rating_hi: f64,
}

fn default_cuisines() -> Vec<String> {
    vec!["Europe".into()]
}
fn default_rating_lo() -> f64 {
    1.0
}
fn default_rating_hi() -> f64 {
    5.0
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            cuisines: default_cuisines(),
            rating_lo: default_rating_lo(),
            rating_hi: default_rating_hi(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub filters: FilterDefaults,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bistro-lens")
            .join("config.toml")
    }

    pub fn load() -> std::io::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("BISTRO_LENS_CONFIG") {
            PathBuf::from(env_path) // $BISTRO_LENS_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let cfg: Self = toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        Ok(cfg)
    }

    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
