//! Configuration management for the Lakeshore content layer.
//!
//! Parses `lakeshore.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `notion.api_key`
//! - `notion.base_url`
//! - `notion.version`
//! - `collections.*`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Notion integration token.
    pub api_key: Option<String>,
    /// Override Notion API base URL.
    pub notion_base_url: Option<String>,
    /// Override public site URL.
    pub site_base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lakeshore.toml";

/// Default Notion API endpoint.
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion API version sent with every request.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion API configuration (optional section, validated on demand).
    pub notion: Option<NotionConfig>,
    /// Collection (database) identifiers.
    pub collections: CollectionsConfig,
    /// Public site settings.
    pub site: SiteConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Notion API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionConfig {
    /// Integration token.
    pub api_key: String,
    /// API base URL.
    #[serde(default = "default_notion_base_url")]
    pub base_url: String,
    /// Value of the `Notion-Version` header.
    #[serde(default = "default_notion_version")]
    pub version: String,
    /// Global request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl NotionConfig {
    /// Create a config with default endpoint, version and timeout.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_notion_base_url(),
            version: default_notion_version(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api_key, "notion.api_key")?;
        require_non_empty(&self.base_url, "notion.base_url")?;
        require_http_url(&self.base_url, "notion.base_url")?;
        require_non_empty(&self.version, "notion.version")?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "notion.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_notion_base_url() -> String {
    DEFAULT_NOTION_BASE_URL.to_owned()
}

fn default_notion_version() -> String {
    DEFAULT_NOTION_VERSION.to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Database identifiers for the six content collections.
///
/// A missing or empty identifier leaves the collection unbound.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionsConfig {
    pub cats: Option<String>,
    pub kittens: Option<String>,
    pub past_kittens: Option<String>,
    pub blog: Option<String>,
    pub faq: Option<String>,
    pub pages: Option<String>,
}

impl CollectionsConfig {
    /// Mutable access to every binding together with its config field name.
    fn fields_mut(&mut self) -> [(&mut Option<String>, &'static str); 6] {
        [
            (&mut self.cats, "collections.cats"),
            (&mut self.kittens, "collections.kittens"),
            (&mut self.past_kittens, "collections.past_kittens"),
            (&mut self.blog, "collections.blog"),
            (&mut self.faq, "collections.faq"),
            (&mut self.pages, "collections.pages"),
        ]
    }

    /// Drop bindings that are empty after trimming.
    fn normalize(&mut self) {
        for (value, _) in self.fields_mut() {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *value = None;
            } else if let Some(v) = value.as_mut() {
                *v = v.trim().to_owned();
            }
        }
    }
}

/// Public site settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical site URL, used for SEO metadata.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://lakeshoreragdolls.com".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.api_key`").
        field: String,
        /// Error message (e.g., "${`NOTION_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lakeshore.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_key) = &settings.api_key {
            match self.notion.as_mut() {
                Some(notion) => notion.api_key.clone_from(api_key),
                None => self.notion = Some(NotionConfig::with_api_key(api_key.clone())),
            }
        }
        if let Some(base_url) = &settings.notion_base_url
            && let Some(notion) = self.notion.as_mut()
        {
            notion.base_url.clone_from(base_url);
        }
        if let Some(site_url) = &settings.site_base_url {
            self.site.base_url.clone_from(site_url);
        }
    }

    /// Get validated Notion configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_notion(&self) -> Result<&NotionConfig, ConfigError> {
        let notion = self.notion.as_ref().ok_or_else(|| {
            ConfigError::Validation("[notion] section required in config".into())
        })?;
        notion.validate()?;
        Ok(notion)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.collections.normalize();
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[notion]` section is not validated here; commands that talk to
    /// the API call [`Config::require_notion`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut notion) = self.notion {
            notion.api_key = expand::expand_env(&notion.api_key, "notion.api_key")?;
            notion.base_url = expand::expand_env(&notion.base_url, "notion.base_url")?;
            notion.version = expand::expand_env(&notion.version, "notion.version")?;
        }

        for (value, field) in self.collections.fields_mut() {
            expand::expand_opt(value, field)?;
        }

        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.notion.is_none());
        assert_eq!(config.collections, CollectionsConfig::default());
        assert_eq!(config.site.base_url, "https://lakeshoreragdolls.com");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.notion.is_none());
        assert!(config.collections.cats.is_none());
    }

    #[test]
    fn test_parse_notion_defaults() {
        let toml = r#"
[notion]
api_key = "secret_123"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let notion = config.notion.unwrap();
        assert_eq!(notion.api_key, "secret_123");
        assert_eq!(notion.base_url, DEFAULT_NOTION_BASE_URL);
        assert_eq!(notion.version, DEFAULT_NOTION_VERSION);
        assert_eq!(notion.timeout_secs, 30);
    }

    #[test]
    fn test_parse_collections() {
        let toml = r#"
[collections]
cats = "db-cats"
kittens = "db-kittens"
faq = ""
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.collections.normalize();
        assert_eq!(config.collections.cats.as_deref(), Some("db-cats"));
        assert_eq!(config.collections.kittens.as_deref(), Some("db-kittens"));
        assert!(config.collections.faq.is_none());
        assert!(config.collections.blog.is_none());
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let mut collections = CollectionsConfig {
            blog: Some("  db-blog \n".to_owned()),
            pages: Some("   ".to_owned()),
            ..Default::default()
        };
        collections.normalize();
        assert_eq!(collections.blog.as_deref(), Some("db-blog"));
        assert!(collections.pages.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[notion]
api_key = "secret_file"
timeout_secs = 10

[collections]
cats = "db-cats"
pages = ""

[site]
base_url = "https://example.com"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.notion.as_ref().unwrap().timeout_secs, 10);
        assert_eq!(config.collections.cats.as_deref(), Some("db-cats"));
        assert!(config.collections.pages.is_none());
        assert_eq!(config.site.base_url, "https://example.com");
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/lakeshore.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_site_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\nbase_url = \"lakeshore.example\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_apply_cli_settings_api_key_creates_section() {
        let mut config = Config::default();
        let settings = CliSettings {
            api_key: Some("secret_cli".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        let notion = config.notion.unwrap();
        assert_eq!(notion.api_key, "secret_cli");
        assert_eq!(notion.base_url, DEFAULT_NOTION_BASE_URL);
    }

    #[test]
    fn test_apply_cli_settings_overrides_existing() {
        let mut config = Config {
            notion: Some(NotionConfig::with_api_key("secret_file")),
            ..Default::default()
        };
        let settings = CliSettings {
            api_key: Some("secret_cli".to_owned()),
            notion_base_url: Some("http://localhost:9000".to_owned()),
            site_base_url: Some("https://staging.example.com".to_owned()),
        };

        config.apply_cli_settings(&settings);

        let notion = config.notion.as_ref().unwrap();
        assert_eq!(notion.api_key, "secret_cli");
        assert_eq!(notion.base_url, "http://localhost:9000");
        assert_eq!(config.site.base_url, "https://staging.example.com");
    }

    #[test]
    fn test_apply_cli_settings_base_url_without_section_is_ignored() {
        let mut config = Config::default();
        let settings = CliSettings {
            notion_base_url: Some("http://localhost:9000".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert!(config.notion.is_none());
    }

    #[test]
    fn test_expand_env_vars_collections() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LS_TEST_CATS_DB", "db-from-env");
            std::env::remove_var("LS_TEST_FAQ_DB");
        }

        let toml = r#"
[collections]
cats = "${LS_TEST_CATS_DB}"
faq = "${LS_TEST_FAQ_DB:-}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.collections.normalize();

        assert_eq!(config.collections.cats.as_deref(), Some("db-from-env"));
        assert!(config.collections.faq.is_none());

        unsafe {
            std::env::remove_var("LS_TEST_CATS_DB");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_api_key() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LS_MISSING_API_KEY_TEST");
        }

        let toml = r#"
[notion]
api_key = "${LS_MISSING_API_KEY_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("notion.api_key"));
    }

    #[test]
    fn test_require_notion_missing_section() {
        let config = Config::default();
        let err = config.require_notion().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[notion]"));
    }

    #[test]
    fn test_require_notion_empty_key() {
        let config = Config {
            notion: Some(NotionConfig::with_api_key("")),
            ..Default::default()
        };
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_require_notion_invalid_url() {
        let mut notion = NotionConfig::with_api_key("secret");
        notion.base_url = "api.notion.com".to_owned();
        let config = Config {
            notion: Some(notion),
            ..Default::default()
        };
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_require_notion_zero_timeout() {
        let mut notion = NotionConfig::with_api_key("secret");
        notion.timeout_secs = 0;
        let err = notion.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_require_notion_valid() {
        let config = Config {
            notion: Some(NotionConfig::with_api_key("secret")),
            ..Default::default()
        };
        assert_eq!(config.require_notion().unwrap().api_key, "secret");
    }
}
