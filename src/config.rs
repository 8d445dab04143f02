//! Externalized settings for locating the statistics store. Nothing about the
//! database (path, table, columns) is compiled into the query anymore; the
//! defaults below only describe the conventional layout.

use std::fs::File;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

use crate::error::ConfigError;

const APP_NAME: &str = "immigration-stats";
const CONFIG_FILE_NAME: &str = "config.json";
/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".immigration-stats";
const DB_FILE_NAME: &str = "immigration_db.sqlite";
const LOG_FILE_NAME: &str = "immigration-stats.log";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: PathBuf,
    pub table: String,
    pub year_column: String,
    pub count_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: data_dir().join(DB_FILE_NAME),
            table: "immigration_stats".to_string(),
            year_column: "year".to_string(),
            count_column: "number".to_string(),
        }
    }
}

impl Config {
    /// Location of `config.json` in the platform config directory, if the
    /// platform exposes one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read a config file. A missing file is not an error: it yields the
    /// defaults so a fresh install runs without any setup.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        log::info!("loading config: {}", path.display());
        let config: Config = serde_json::from_reader(file).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Best-effort load used at startup: a broken config file is logged and
    /// replaced by the defaults so the viewer still comes up.
    pub fn resolve(path: Option<&Path>) -> Config {
        let Some(path) = path.map(Path::to_path_buf).or_else(Config::default_path) else {
            log::warn!("no config directory available, using defaults");
            return Config::default();
        };

        match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{:#}; falling back to defaults", anyhow::Error::new(err));
                Config::default()
            }
        }
    }

    /// Check every identifier that ends up spliced into SQL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_identifier("table", &self.table)?;
        check_identifier("year column", &self.year_column)?;
        check_identifier("count column", &self.count_column)?;
        Ok(())
    }
}

/// Directory holding the default database and the diagnostic log.
pub fn data_dir() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(DATA_DIR_NAME),
        None => PathBuf::from(DATA_DIR_NAME),
    }
}

pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_conventional_schema() {
        let config = Config::default();
        assert_eq!(config.table, "immigration_stats");
        assert_eq!(config.year_column, "year");
        assert_eq!(config.count_column, "number");
        assert!(config.database.ends_with(DB_FILE_NAME));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "database": "/tmp/stats.db", "table": "arrivals" }}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database, PathBuf::from("/tmp/stats.db"));
        assert_eq!(config.table, "arrivals");
        assert_eq!(config.count_column, "number");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn resolve_falls_back_on_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "table": "bad name" }}"#).unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::InvalidIdentifier { field: "table", .. })
        ));
        assert_eq!(Config::resolve(Some(file.path())), Config::default());
    }

    #[test]
    fn rejects_identifiers_that_are_not_plain_names() {
        for bad in ["", "1year", "year; DROP TABLE x", "na-me", "\"quoted\""] {
            let config = Config {
                year_column: bad.to_string(),
                ..Config::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidIdentifier { field: "year column", .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn accepts_underscored_identifiers() {
        let config = Config {
            table: "_stats_2024".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
