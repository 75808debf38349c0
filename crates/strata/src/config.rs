use anyhow::{Context, Result};
use etcetera::BaseStrategy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::combine::Combine;
use crate::graph::Layer;

/// Configuration file name, also looked up under `strata/` in the platform
/// config directories.
const CONFIG_FILE: &str = "strata.toml";

/// `~/.config/strata/strata.toml` (or the platform equivalent).
fn user_config_file() -> Option<PathBuf> {
    etcetera::choose_base_strategy()
        .ok()
        .map(|dirs| dirs.config_dir().join("strata").join(CONFIG_FILE))
}

/// The system-wide config file, if one exists.
fn system_config_file() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        let system_drive = env::var("SYSTEMDRIVE").ok()?;
        let candidate = Path::new(&system_drive)
            .join("ProgramData")
            .join("strata")
            .join(CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }

    #[cfg(not(windows))]
    {
        let xdg_config_dirs = env::var("XDG_CONFIG_DIRS").ok().filter(|dirs| !dirs.is_empty());
        for dir in xdg_config_dirs.as_deref().unwrap_or("/etc/xdg").split(':') {
            if dir.is_empty() {
                continue;
            }
            let candidate = Path::new(dir).join("strata").join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        let fallback = Path::new("/etc/strata").join(CONFIG_FILE);
        fallback.is_file().then_some(fallback)
    }
}

/// One layer of the architecture to check, ordered high to low in the config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayerConfig {
    /// Sibling modules sharing this rank, relative to any container.
    pub modules: Vec<String>,

    /// Whether imports between the sibling modules are forbidden.
    pub independent: bool,

    /// Whether import chains from higher to lower layers must pass through
    /// this layer.
    pub closed: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            independent: true,
            closed: false,
        }
    }
}

impl LayerConfig {
    pub fn to_layer(&self) -> Layer {
        Layer::new(self.modules.iter().cloned(), self.independent, self.closed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories to resolve root package names against
    pub search_paths: Vec<PathBuf>,

    /// Whether to include imports of external packages in the graph
    pub include_external_packages: bool,

    /// Whether to drop imports guarded by `if TYPE_CHECKING:`
    pub exclude_type_checking_imports: bool,

    /// Cache directory; defaults to `.strata_cache` when unset
    pub cache_dir: Option<PathBuf>,

    /// Whether to use the cache at all
    pub cache: bool,

    /// Layered architecture to check, ordered from higher to lower layers
    pub layers: Vec<LayerConfig>,

    /// Parent modules supplying the namespaces for the layers
    pub containers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from("src"), PathBuf::from(".")],
            include_external_packages: false,
            exclude_type_checking_imports: false,
            cache_dir: None,
            cache: true,
            layers: Vec::new(),
            containers: Vec::new(),
        }
    }
}

impl Combine for Config {
    fn combine(self, other: Self) -> Self {
        let default = Config::default();
        Self {
            // For collections, higher precedence (self) completely replaces
            // lower precedence (other) if self has non-default values.
            search_paths: if self.search_paths != default.search_paths {
                self.search_paths
            } else {
                other.search_paths
            },
            layers: if !self.layers.is_empty() {
                self.layers
            } else {
                other.layers
            },
            containers: if !self.containers.is_empty() {
                self.containers
            } else {
                other.containers
            },
            cache_dir: self.cache_dir.combine(other.cache_dir),
            // For scalars, self always takes precedence
            include_external_packages: self.include_external_packages,
            exclude_type_checking_imports: self.exclude_type_checking_imports,
            cache: self.cache,
        }
    }
}

/// Configuration values from environment variables with STRATA_ prefix
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub search_paths: Option<Vec<PathBuf>>,
    pub include_external_packages: Option<bool>,
    pub exclude_type_checking_imports: Option<bool>,
    pub cache_dir: Option<PathBuf>,
    pub cache: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables with STRATA_ prefix
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // STRATA_SEARCH_PATHS - comma-separated list of directories
        if let Ok(paths_str) = env::var("STRATA_SEARCH_PATHS") {
            let paths: Vec<PathBuf> = paths_str
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
            if !paths.is_empty() {
                config.search_paths = Some(paths);
            }
        }

        if let Ok(value) = env::var("STRATA_INCLUDE_EXTERNAL_PACKAGES") {
            config.include_external_packages = parse_bool(&value);
        }

        if let Ok(value) = env::var("STRATA_EXCLUDE_TYPE_CHECKING_IMPORTS") {
            config.exclude_type_checking_imports = parse_bool(&value);
        }

        if let Ok(value) = env::var("STRATA_CACHE_DIR") {
            if !value.is_empty() {
                config.cache_dir = Some(PathBuf::from(value));
            }
        }

        if let Ok(value) = env::var("STRATA_CACHE") {
            config.cache = parse_bool(&value);
        }

        config
    }

    /// Apply environment config to base config
    pub fn apply_to(self, mut config: Config) -> Config {
        if let Some(search_paths) = self.search_paths {
            config.search_paths = search_paths;
        }
        if let Some(include_external_packages) = self.include_external_packages {
            config.include_external_packages = include_external_packages;
        }
        if let Some(exclude_type_checking_imports) = self.exclude_type_checking_imports {
            config.exclude_type_checking_imports = exclude_type_checking_imports;
        }
        if let Some(cache_dir) = self.cache_dir {
            config.cache_dir = Some(cache_dir);
        }
        if let Some(cache) = self.cache {
            config.cache = cache;
        }
        config
    }
}

/// Parse a boolean value from string, supporting various common formats
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load a single config file from a path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path:?}"))?;

        Ok(config)
    }

    fn try_load_and_combine<P: AsRef<Path>>(
        config: &mut Config,
        path: P,
        context: &str,
    ) -> Result<()> {
        if path.as_ref().exists() {
            log::debug!("Loading {} from: {:?}", context, path.as_ref());
            let loaded = Self::load_from_file(&path)
                .with_context(|| format!("Failed to load {} from {:?}", context, path.as_ref()))?;
            *config = loaded.combine(config.clone());
        }
        Ok(())
    }

    /// Load configuration with hierarchical precedence:
    /// 1. CLI-provided config path (highest precedence)
    /// 2. Environment variables (STRATA_*)
    /// 3. Project config (strata.toml in current directory)
    /// 4. User config (~/.config/strata/strata.toml)
    /// 5. System config (/etc/strata/strata.toml or equivalent)
    /// 6. Default values (lowest precedence)
    pub fn load(cli_config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        // 1. Load system config (lowest precedence)
        if let Some(system_config_path) = system_config_file() {
            Self::try_load_and_combine(&mut config, &system_config_path, "system config")?;
        }

        // 2. Load user config
        if let Some(user_config_path) = user_config_file() {
            Self::try_load_and_combine(&mut config, &user_config_path, "user config")?;
        }

        // 3. Load project config (strata.toml in current directory)
        let project_config_path = PathBuf::from(CONFIG_FILE);
        Self::try_load_and_combine(&mut config, &project_config_path, "project config")?;

        // 4. Apply environment variables
        let env_config = EnvConfig::from_env();
        config = env_config.apply_to(config);

        // 5. Load CLI-provided config (highest precedence)
        if let Some(cli_config_path) = cli_config_path {
            Self::try_load_and_combine(&mut config, cli_config_path, "CLI config")?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.search_paths,
            vec![PathBuf::from("src"), PathBuf::from(".")]
        );
        assert!(!config.include_external_packages);
        assert!(config.cache);
        assert!(config.layers.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("strata.toml");
        std::fs::write(
            &path,
            r#"
search_paths = ["lib"]
include_external_packages = true
containers = ["mypackage"]

[[layers]]
modules = ["api"]

[[layers]]
modules = ["plumbing", "helpers"]
independent = false
closed = true
"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.search_paths, vec![PathBuf::from("lib")]);
        assert!(config.include_external_packages);
        assert_eq!(config.containers, vec!["mypackage".to_owned()]);
        assert_eq!(config.layers.len(), 2);
        assert_eq!(config.layers[0].modules, vec!["api".to_owned()]);
        assert!(config.layers[0].independent);
        assert!(!config.layers[1].independent);
        assert!(config.layers[1].closed);
    }

    #[test]
    fn test_combine_prefers_non_default_collections() {
        let project = Config {
            search_paths: vec![PathBuf::from("lib")],
            ..Config::default()
        };
        let user = Config {
            search_paths: vec![PathBuf::from("elsewhere")],
            containers: vec!["mypackage".to_owned()],
            ..Config::default()
        };
        let combined = project.combine(user);
        assert_eq!(combined.search_paths, vec![PathBuf::from("lib")]);
        assert_eq!(combined.containers, vec!["mypackage".to_owned()]);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            env::set_var("STRATA_SEARCH_PATHS", "a,b");
            env::set_var("STRATA_INCLUDE_EXTERNAL_PACKAGES", "yes");
        }
        let config = EnvConfig::from_env().apply_to(Config::default());
        unsafe {
            env::remove_var("STRATA_SEARCH_PATHS");
            env::remove_var("STRATA_INCLUDE_EXTERNAL_PACKAGES");
        }

        assert_eq!(
            config.search_paths,
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
        assert!(config.include_external_packages);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("whatever"), None);
    }
}
