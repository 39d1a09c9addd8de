use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    /// Reproduce the unescaped comma-join of the original exporter
    /// instead of quoting fields that contain delimiters.
    #[serde(default)]
    pub legacy_csv: bool,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_csv_path() -> String {
    "realestate_data.csv".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            csv_path: default_csv_path(),
            legacy_csv: false,
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
