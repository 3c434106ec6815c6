//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Probes multiple paths for a config file (JSON or TOML)
//! 2. Falls back to built-in defaults when no file exists
//! 3. Applies `RFSHOP_*` environment overrides on top
//!
//! ## Environment Variables
//! - `RFSHOP_BASE_URL`: Backend API root
//! - `RFSHOP_BASE_ID`: Workspace (base) identifier
//! - `RFSHOP_QUOTES_TABLE`, `RFSHOP_BUILD_LINES_TABLE`,
//!   `RFSHOP_QUOTE_LINES_TABLE`: Collection identifiers
//! - `RFSHOP_PAGE_SIZE`: Records per list page
//! - `RFSHOP_TIMEOUT_SECS`: Per-request timeout
//! - `RFSHOP_BATCH_SIZE`: Records per batched write
//! - `RFSHOP_BATCH_DELAY_MS`: Pause between batched writes
//! - `RFSHOP_LOG_LEVEL`: Default log filter
//! - `RFSHOP_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./rfshop.{json,toml}` or `./config.{json,toml}` (current directory)
//! 2. `../` and `../../` of the current directory
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rfshop_domain::{Config, Result, ShopError};

const CONFIG_FILE_NAMES: [&str; 4] = ["rfshop.json", "rfshop.toml", "config.json", "config.toml"];

/// Load configuration: file if one is found, else defaults, then
/// environment overrides.
///
/// # Errors
/// Returns `ShopError::Config` if a config file exists but is invalid, or an
/// override variable has an invalid value.
pub fn load() -> Result<Config> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(base)
}

/// Load defaults overridden by environment variables only.
///
/// # Errors
/// Returns `ShopError::Config` if an override variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    apply_env_overrides(Config::default())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections and keys take their defaults.
///
/// # Errors
/// Returns `ShopError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopError::config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShopError::config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Apply `RFSHOP_*` overrides to `config`.
///
/// # Errors
/// Returns `ShopError::Config` for unparseable numeric values.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    let airtable = &mut config.airtable;
    override_string("RFSHOP_BASE_URL", &mut airtable.base_url);
    override_string("RFSHOP_BASE_ID", &mut airtable.base_id);
    override_string("RFSHOP_QUOTES_TABLE", &mut airtable.tables.quotes);
    override_string("RFSHOP_BUILD_LINES_TABLE", &mut airtable.tables.build_lines);
    override_string("RFSHOP_QUOTE_LINES_TABLE", &mut airtable.tables.quote_lines);
    override_parsed("RFSHOP_PAGE_SIZE", &mut airtable.page_size)?;
    override_parsed("RFSHOP_TIMEOUT_SECS", &mut airtable.timeout_secs)?;

    override_parsed("RFSHOP_BATCH_SIZE", &mut config.writes.batch_size)?;
    override_parsed("RFSHOP_BATCH_DELAY_MS", &mut config.writes.batch_delay_ms)?;

    override_string("RFSHOP_LOG_LEVEL", &mut config.logging.level);
    config.logging.json = env_bool("RFSHOP_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `ShopError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShopError::config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShopError::config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShopError::config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Non-empty value of an environment variable.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn override_string(key: &str, target: &mut String) {
    if let Some(value) = env_var(key) {
        *target = value;
    }
}

fn override_parsed<T>(key: &str, target: &mut T) -> Result<()>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(value) = env_var(key) {
        *target = value
            .parse()
            .map_err(|e| ShopError::config(format!("Invalid value for {key}: {e}")))?;
    }
    Ok(())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("RFSHOP_TEST_BOOL_ON", "ON");
        std::env::set_var("RFSHOP_TEST_BOOL_OFF", "off");
        std::env::remove_var("RFSHOP_TEST_BOOL_MISSING");

        assert!(env_bool("RFSHOP_TEST_BOOL_ON", false));
        assert!(!env_bool("RFSHOP_TEST_BOOL_OFF", true));
        assert!(env_bool("RFSHOP_TEST_BOOL_MISSING", true));

        std::env::remove_var("RFSHOP_TEST_BOOL_ON");
        std::env::remove_var("RFSHOP_TEST_BOOL_OFF");
    }

    #[test]
    fn test_env_overrides_apply_on_top_of_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("RFSHOP_BASE_ID", "appOverride");
        std::env::set_var("RFSHOP_BATCH_DELAY_MS", " 400 ");
        std::env::set_var("RFSHOP_LOG_JSON", "true");
        std::env::set_var("RFSHOP_QUOTES_TABLE", "");

        let config = load_from_env().unwrap();
        assert_eq!(config.airtable.base_id, "appOverride");
        assert_eq!(config.writes.batch_delay_ms, 400);
        assert!(config.logging.json);
        // Empty values are ignored
        assert_eq!(config.airtable.tables.quotes, Config::default().airtable.tables.quotes);

        std::env::remove_var("RFSHOP_BASE_ID");
        std::env::remove_var("RFSHOP_BATCH_DELAY_MS");
        std::env::remove_var("RFSHOP_LOG_JSON");
        std::env::remove_var("RFSHOP_QUOTES_TABLE");
    }

    #[test]
    fn test_invalid_numeric_override() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("RFSHOP_PAGE_SIZE", "lots");
        let err = load_from_env().unwrap_err();
        std::env::remove_var("RFSHOP_PAGE_SIZE");

        assert!(matches!(err, ShopError::Config { .. }));
        assert!(err.to_string().contains("RFSHOP_PAGE_SIZE"));
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[airtable]
base_id = "appFromToml"

[airtable.tables]
quotes = "tblQ"

[writes]
batch_size = 5
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.airtable.base_id, "appFromToml");
        assert_eq!(config.airtable.tables.quotes, "tblQ");
        assert_eq!(config.airtable.tables.build_lines, Config::default().airtable.tables.build_lines);
        assert_eq!(config.writes.batch_size, 5);
        assert_eq!(config.writes.batch_delay_ms, 250);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/rfshop.json")));
        assert!(matches!(result, Err(ShopError::Config { .. })));
    }

    #[test]
    fn test_parse_config_json() {
        let json_content = r#"{ "logging": { "level": "debug" } }"#;
        let config = parse_config(json_content, Path::new("rfshop.json")).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let result = parse_config(r#"{ "airtable": "#, Path::new("rfshop.json"));
        assert!(matches!(result, Err(ShopError::Config { .. })));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("rfshop.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
