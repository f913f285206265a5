//! Configuration handling for the TUI

use crate::enquiry::LinkSettings;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default enquiry endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/enquiries";

/// Default WhatsApp number (country code, no `+`)
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919011141618";

pub const DEFAULT_ACADEMY_NAME: &str = "Eklavyaa Academy";

/// Environment variable overriding the enquiry endpoint
pub const ENDPOINT_ENV: &str = "ENQUIRY_API_URL";

/// Environment variable overriding the WhatsApp number
pub const WHATSAPP_ENV: &str = "ENQUIRY_WHATSAPP_NUMBER";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeskConfig {
    /// Where enquiries are POSTed
    pub api_endpoint: Option<String>,
    /// Number the WhatsApp links open a chat with
    pub whatsapp_number: Option<String>,
    /// Name used in prefilled messages
    pub academy_name: Option<String>,
}

impl DeskConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "eklavyaa", "enquiry-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read `path`; a missing file means defaults
    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overrides from `lookup` (the environment, in practice) win over the file
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            self.api_endpoint = Some(endpoint);
        }
        if let Some(number) = lookup(WHATSAPP_ENV).filter(|v| !v.is_empty()) {
            self.whatsapp_number = Some(number);
        }
    }

    pub fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn whatsapp_number(&self) -> &str {
        self.whatsapp_number
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
    }

    pub fn academy_name(&self) -> &str {
        self.academy_name.as_deref().unwrap_or(DEFAULT_ACADEMY_NAME)
    }

    /// Deep link settings; fails when the configured number isn't all digits
    pub fn link_settings(&self) -> Result<LinkSettings> {
        Ok(LinkSettings::new(
            self.whatsapp_number(),
            self.academy_name(),
        )?)
    }
}
