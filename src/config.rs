//! Configuration loading and management
//!
//! Handles parsing of `.toucan.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::board::ViewMode;
use crate::sort::SortDirection;

/// File name looked up in the working directory and the user config dir.
pub const CONFIG_FILE: &str = ".toucan.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Job service connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Board presentation defaults
    #[serde(default)]
    pub board: BoardConfig,

    /// Logo asset lookup
    #[serde(default)]
    pub logos: LogoConfig,
}

/// Job service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `jobs` endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("toucan/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Board presentation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Initial view mode
    #[serde(default)]
    pub view: ViewMode,

    /// Initial sort direction
    #[serde(default)]
    pub sort: SortDirection,
}

/// Logo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Directory holding `<logo key>.<extension>` files
    #[serde(default = "default_logo_dir")]
    pub dir: PathBuf,

    /// Logo file extension, without the dot
    #[serde(default = "default_logo_extension")]
    pub extension: String,
}

fn default_logo_dir() -> PathBuf {
    PathBuf::from("logos")
}

fn default_logo_extension() -> String {
    "png".to_string()
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            dir: default_logo_dir(),
            extension: default_logo_extension(),
        }
    }
}

impl Config {
    /// Load configuration from a `.toucan.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        if !path.exists() {
            return Err(crate::error::Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.toucan.toml` from `dir`, or return defaults when absent
    pub fn load_from_dir(dir: &Path) -> crate::error::Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve configuration: explicit path, then the working directory, then
    /// the per-user config directory, then defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> crate::error::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = cwd.join(CONFIG_FILE);
        if local.exists() {
            return Self::load(&local);
        }
        match user_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        self.api.validate()?;
        self.logos.validate()?;
        Ok(())
    }
}

/// Per-user config file location, e.g. `~/.config/toucan/.toucan.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "toucan")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl ApiConfig {
    fn validate(&self) -> crate::error::Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "api.base_url cannot be empty".to_string(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(crate::error::Error::InvalidConfig(format!(
                "api.base_url must start with http:// or https:// (got '{base}')"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "api.timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl LogoConfig {
    fn validate(&self) -> crate::error::Result<()> {
        let extension = self.extension.trim();
        if extension.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "logos.extension cannot be empty".to_string(),
            ));
        }
        if extension.starts_with('.') {
            return Err(crate::error::Error::InvalidConfig(
                "logos.extension must not start with '.'".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_expected() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "http://localhost:8080/api");
        assert_eq!(cfg.api.timeout_secs, 30);
        assert!(cfg.api.user_agent.starts_with("toucan/"));
        assert_eq!(cfg.board.view, ViewMode::Board);
        assert_eq!(cfg.board.sort, SortDirection::Newest);
        assert_eq!(cfg.logos.dir, PathBuf::from("logos"));
        assert_eq!(cfg.logos.extension, "png");
    }

    #[test]
    fn load_parses_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        let content = r#"
[api]
base_url = "https://jobs.example.com/api"
timeout_secs = 5

[board]
view = "table"
sort = "oldest"

[logos]
dir = "assets/logos"
extension = "svg"
"#;
        fs::write(&path, content.trim()).expect("write config");

        let cfg = Config::load(&path).expect("load config");
        assert_eq!(cfg.api.base_url, "https://jobs.example.com/api");
        assert_eq!(cfg.api.timeout_secs, 5);
        assert_eq!(cfg.board.view, ViewMode::Table);
        assert_eq!(cfg.board.sort, SortDirection::Oldest);
        assert_eq!(cfg.logos.dir, PathBuf::from("assets/logos"));
        assert_eq!(cfg.logos.extension, "svg");
    }

    #[test]
    fn invalid_base_url_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[api]\nbase_url = \"ftp://jobs\"").expect("write config");

        let err = Config::load(&path).expect_err("invalid config");
        match err {
            crate::error::Error::InvalidConfig(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_view_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[board]\nview = \"calendar\"").expect("write config");

        let err = Config::load(&path).expect_err("invalid config");
        match err {
            crate::error::Error::TomlParse(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_timeout_and_dotted_extension_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[api]\ntimeout_secs = 0").expect("write config");
        assert!(Config::load(&path).is_err());

        fs::write(&path, "[logos]\nextension = \".png\"").expect("write config");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn load_from_dir_defaults_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from_dir(dir.path()).expect("defaults");
        assert_eq!(cfg.api.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn discover_prefers_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "[board]\nsort = \"oldest\"").expect("write");
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[board]\nview = \"table\"").expect("write");

        let cfg = Config::discover(Some(&explicit), dir.path()).expect("discover");
        assert_eq!(cfg.board.view, ViewMode::Table);
        assert_eq!(cfg.board.sort, SortDirection::Newest);

        let cfg = Config::discover(None, dir.path()).expect("discover");
        assert_eq!(cfg.board.sort, SortDirection::Oldest);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Config::load(&dir.path().join("nope.toml")).expect_err("missing");
        assert!(matches!(err, crate::error::Error::ConfigNotFound(_)));
    }

    #[test]
    fn save_writes_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.toml");
        Config::default().save(&path).expect("save config");

        let written = fs::read_to_string(&path).expect("read config");
        assert!(written.contains("base_url = \"http://localhost:8080/api\""));
        assert!(written.contains("view = \"board\""));
    }
}
