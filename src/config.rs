//! Configuration loading and management.
//!
//! Provides types for the TOML-based configuration file that controls the
//! field-name mapping, the mandatory-clause policy, the filter limits, and
//! per-checker toggles.
//!
//! # Configuration file
//!
//! The default configuration file is `routelint.toml` in the current working
//! directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use routelint::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.is_checker_enabled("naming"));
//! ```
//!
//! All fields carry defaults reflecting the latest rule revision, so the
//! config file can be omitted entirely. The earlier revision (no mandatory
//! `__inputId` clause, unknown destinations skipped) is available via
//! [`Config::apply_legacy`] or by setting the policy fields in TOML.

use std::path::Path;

/// Main configuration for the validation run.
///
/// Loaded from a TOML file (typically `routelint.toml`).
///
/// # Examples
///
/// ```rust,no_run
/// use routelint::config::Config;
///
/// // Load from the default location or fall back to built-in defaults.
/// let config = Config::load(None).unwrap();
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Field-name mapping for reading route records.
    pub fields: FieldsConfig,
    /// Mandatory-clause and unknown-destination policy.
    pub policy: PolicyConfig,
    /// Filter expression limits.
    pub filter: FilterConfig,
    /// Per-checker on/off toggles.
    pub checkers: CheckersConfig,
}

/// Field names under which route records carry their data.
///
/// The route name has been spelled both `name` and `routeName` across
/// revisions of the upstream record format, so `name` is a list of keys
/// tried in order.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Candidate keys for the route display name, in lookup order.
    pub name: Vec<String>,
    /// Key for the destination label.
    pub destination: String,
    /// Key for the filter expression.
    pub filter: String,
}

/// Rule-revision policy switches.
///
/// Defaults reflect the latest revision: the `__inputId` clause is mandatory
/// and unknown destinations fail the naming check. Earlier revisions omit
/// both; see [`Config::apply_legacy`].
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Require a `__inputId == <value>` clause in every filter.
    pub require_input_id: bool,
    /// Fail the naming check for destinations matching no known keyword.
    /// When `false`, unknown destinations pass with a "no rules applied" remark.
    pub unknown_destination_fails: bool,
}

/// Limits applied to the filter expression before grammar checks run.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Maximum trimmed filter length in characters.
    pub max_length: usize,
    /// Characters that must not appear anywhere in the filter. Violations are
    /// reported in the order of this list, not order of occurrence.
    pub forbidden: Vec<char>,
}

/// Per-checker on/off toggles.
///
/// Every checker defaults to **enabled**. Set a field to `false` in the
/// TOML config file to skip that checker during validation.
///
/// # Examples
///
/// ```toml
/// [checkers]
/// naming = false   # only validate filter syntax
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CheckersConfig {
    /// Destination-specific route naming convention (built-in).
    pub naming: bool,
    /// Filter expression syntax and mandatory-clause validation (built-in).
    pub filter: bool,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        FieldsConfig {
            name: vec!["name".to_string(), "routeName".to_string()],
            destination: "destination".to_string(),
            filter: "filter".to_string(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            require_input_id: true,
            unknown_destination_fails: true,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            max_length: 2000,
            forbidden: vec!['\0', '\r', '\n', '`', ';'],
        }
    }
}

impl Default for CheckersConfig {
    fn default() -> Self {
        CheckersConfig {
            naming: true,
            filter: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `routelint.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use routelint::config::Config;
    ///
    /// // Explicit path
    /// let cfg = Config::load(Some(Path::new("my-config.toml")))?;
    ///
    /// // Auto-detect or default
    /// let cfg = Config::load(None)?;
    /// # Ok::<(), String>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("routelint.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Returns `true` if the named checker is enabled.
    ///
    /// Unknown checker names are considered enabled (returns `true`).
    ///
    /// # Examples
    ///
    /// ```
    /// use routelint::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.is_checker_enabled("naming"));
    /// assert!(config.is_checker_enabled("unknown_checker"));
    /// ```
    pub fn is_checker_enabled(&self, name: &str) -> bool {
        match name {
            "naming" => self.checkers.naming,
            "filter" => self.checkers.filter,
            _ => true,
        }
    }

    /// Switches both policy flags to the earlier rule revision: the
    /// `__inputId` clause is no longer mandatory and routes with unknown
    /// destinations are skipped by the naming check instead of failed.
    pub fn apply_legacy(&mut self) {
        self.policy.require_input_id = false;
        self.policy.unknown_destination_fails = false;
    }
}
