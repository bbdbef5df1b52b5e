use std::collections::HashMap;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{self, Catalog, FinishEntry};
use crate::error::{Result, StairsError};
use crate::faq::{self, FaqEntry};
use crate::model::ActiveModel;
use crate::site::SiteMeta;

/// Site configuration, normally read from ~/.stairworks/config.toml.
///
/// Every section is optional. Missing `finishes`, `models` or `faq` lists
/// fall back to the built-in content; an explicitly empty list stays empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub server: ServerSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finishes: Option<Vec<FinishEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ActiveModel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    /// Static files served under /assets; `${VAR}` references are expanded
    pub assets_dir: PathBuf,
    pub cors_permissive: bool,
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            assets_dir: PathBuf::from("assets"),
            cors_permissive: false,
            timeout_secs: 30,
        }
    }
}

impl SiteConfig {
    /// Load config from `STAIRWORKS_CONFIG` or ~/.stairworks/config.toml.
    ///
    /// A missing file is not an error: the site runs on built-in defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            warn!(path = %path.display(), "config not found, using built-in defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse_str(&content)
            .map_err(|source| StairsError::config_parse(path, source))?;
        config.expand_variables();
        config.validate()?;
        info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn parse_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Config path: `STAIRWORKS_CONFIG` if set, else ~/.stairworks/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("STAIRWORKS_CONFIG") {
            return PathBuf::from(path);
        }
        config_dir()
            .unwrap_or_else(|| PathBuf::from(".stairworks"))
            .join("config.toml")
    }

    /// Config with every list spelled out; used as the `config init` template
    pub fn with_defaults() -> Self {
        Self {
            finishes: Some(catalog::default_finish_entries()),
            models: Some(catalog::default_models()),
            faq: Some(faq::default_faq()),
            ..Self::default()
        }
    }

    /// Same config with missing lists replaced by the built-in content
    pub fn resolved(&self) -> Self {
        Self {
            site: self.site.clone(),
            server: self.server.clone(),
            finishes: Some(
                self.finishes
                    .clone()
                    .unwrap_or_else(catalog::default_finish_entries),
            ),
            models: Some(self.models.clone().unwrap_or_else(catalog::default_models)),
            faq: Some(self.faq()),
        }
    }

    /// Build the finish catalog from config, or the built-in one
    pub fn catalog(&self) -> Result<Catalog> {
        match (&self.finishes, &self.models) {
            (None, None) => Ok(Catalog::builtin()),
            (finishes, models) => {
                let finishes = finishes
                    .clone()
                    .unwrap_or_else(catalog::default_finish_entries);
                let models = models.clone().unwrap_or_else(catalog::default_models);
                Catalog::from_entries(&finishes, models)
            }
        }
    }

    /// Check settings and the catalog without starting anything
    pub fn validate(&self) -> Result<()> {
        if self.server.timeout_secs == 0 {
            return Err(StairsError::config("server.timeout_secs must be at least 1"));
        }
        if let Some(model) = self.models.iter().flatten().find(|m| m.name.trim().is_empty()) {
            return Err(StairsError::config(format!(
                "model with label '{}' has an empty name",
                model.label
            )));
        }
        self.catalog().map(|_| ())
    }

    pub fn faq(&self) -> Vec<FaqEntry> {
        self.faq.clone().unwrap_or_else(faq::default_faq)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Expand ${var} references in path settings
    fn expand_variables(&mut self) {
        let vars: HashMap<String, String> = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        let assets = self.server.assets_dir.display().to_string();
        self.server.assets_dir = PathBuf::from(expand_string(&assets, &vars));
    }
}

/// Replace `${NAME}` with `vars[NAME]`; unknown names expand to nothing
pub fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if let Some(value) = vars.get(name) {
                    result.push_str(value);
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated reference: keep it literally.
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// The stairworks config directory (~/.stairworks)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".stairworks"))
}

/// Load environment variables from .env files.
///
/// Current directory first, then ~/.stairworks/.env. dotenvy never
/// overwrites variables that are already set.
pub fn load_dotenv() {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => {
                    debug!("Loaded .env from {}", env_file.display());
                    loaded_from.push(env_file);
                }
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.stairworks)");
    }
}
