use crate::{StorefrontError, StorefrontResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultsConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// Labels drawn by pagination renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    #[serde(default)]
    pub previous_label: Option<String>,
    #[serde(default)]
    pub next_label: Option<String>,
    #[serde(default)]
    pub ellipsis: Option<String>,
}

impl PaginationConfig {
    pub fn effective_previous_label(&self) -> &str {
        self.previous_label.as_deref().unwrap_or("Previous")
    }

    pub fn effective_next_label(&self) -> &str {
        self.next_label.as_deref().unwrap_or("Next")
    }

    pub fn effective_ellipsis(&self) -> &str {
        self.ellipsis.as_deref().unwrap_or("…")
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/storefront/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("storefront/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("storefront\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Load from an explicit path, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> StorefrontResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> StorefrontResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| StorefrontError::Config(e.to_string()))?;
        if config.results.items_per_page == 0 {
            return Err(StorefrontError::InvalidPerPage);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.results.items_per_page, 12);
        assert_eq!(config.pagination.effective_previous_label(), "Previous");
        assert_eq!(config.pagination.effective_next_label(), "Next");
        assert_eq!(config.pagination.effective_ellipsis(), "…");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [pagination]
            previous_label = "السابق"
            next_label = "التالي"
            "#,
        )
        .unwrap();

        assert_eq!(config.results.items_per_page, 12);
        assert_eq!(config.pagination.effective_previous_label(), "السابق");
        assert_eq!(config.pagination.effective_next_label(), "التالي");
        assert_eq!(config.pagination.effective_ellipsis(), "…");
    }

    #[test]
    fn test_zero_items_per_page_rejected() {
        let result = AppConfig::from_toml_str("[results]\nitems_per_page = 0\n");
        assert!(matches!(result, Err(StorefrontError::InvalidPerPage)));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[results\nitems_per_page = ").unwrap();

        assert!(AppConfig::from_path(file.path()).is_err());
        assert_eq!(AppConfig::load_or_default(file.path()), AppConfig::default());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[results]\nitems_per_page = 24").unwrap();

        let config = AppConfig::from_path(file.path()).unwrap();
        assert_eq!(config.results.items_per_page, 24);
    }
}
