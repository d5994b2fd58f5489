use crate::itinerary::{default_event_time, hh_mm};
use crate::utils::format_utils::NumberFormat;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

/// Name of the itinerary file inside the data directory.
pub const DATA_FILE_NAME: &str = "dados_roteiro.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the whole itinerary.
    pub data_file: PathBuf,
    /// Separators and units used when printing estimates.
    pub number_format: NumberFormat,
    /// Time given to events added without `--time`. Valid format is "%H:%M". Default is 08:00.
    pub default_event_time: NaiveTime,
    /// The date to use as "today" when resolving relative day names.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    currency_symbol: Option<String>,
    volume_unit: Option<String>,
    decimal_separator: Option<String>,
    grouping_separator: Option<String>,
    default_event_time: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// A config file that can't be read or parsed is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = NumberFormat::default();
        let number_format = NumberFormat {
            decimal_separator: Self::parse_separator(
                "decimal_separator",
                file_config.decimal_separator.as_deref(),
            )
            .unwrap_or(defaults.decimal_separator),
            grouping_separator: Self::parse_separator(
                "grouping_separator",
                file_config.grouping_separator.as_deref(),
            )
            .unwrap_or(defaults.grouping_separator),
            currency_symbol: file_config
                .currency_symbol
                .unwrap_or(defaults.currency_symbol),
            volume_unit: file_config.volume_unit.unwrap_or(defaults.volume_unit),
        };

        let default_event_time = file_config
            .default_event_time
            .as_deref()
            .and_then(|time| {
                let parsed = hh_mm::parse(time);
                if parsed.is_none() {
                    warn!("default_event_time '{time}' is not HH:MM, using 08:00");
                }
                parsed
            })
            .unwrap_or_else(default_event_time);

        let data_file = file_config
            .data_file
            .unwrap_or_else(Self::default_data_file);

        Self {
            data_file,
            number_format,
            default_event_time,
            reference_date: Local::now().date_naive(),
        }
    }

    /// Accepts exactly one character.
    fn parse_separator(key: &str, value: Option<&str>) -> Option<char> {
        let value = value?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => {
                warn!("{key} '{value}' must be a single character, using default");
                None
            }
        }
    }

    /// Default itinerary file: `{data_dir}/itin/dados_roteiro.json`
    /// - macOS:   `~/Library/Application Support/itin`
    /// - Linux:   `$XDG_DATA_HOME/itin` or `~/.local/share/itin`
    /// - Windows: `%APPDATA%\itin`
    fn default_data_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("itin").join(DATA_FILE_NAME)
        } else {
            PathBuf::from(DATA_FILE_NAME)
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("itin").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("itin").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!("reading config from {}", path.display());
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("itin").join("config.toml");
            let expected_native = b.config_dir().join("itin").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc);
        assert_eq!(config.number_format, NumberFormat::default());
        assert_eq!(config.default_event_time, default_event_time());
        assert!(config.data_file.ends_with(DATA_FILE_NAME));
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            data_file = "/tmp/trip.json"
            currency_symbol = "€"
            volume_unit = "l"
            decimal_separator = "."
            grouping_separator = " "
            default_event_time = "09:30"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.data_file, Path::new("/tmp/trip.json"));
        assert_eq!(config.number_format.currency_symbol, "€");
        assert_eq!(config.number_format.volume_unit, "l");
        assert_eq!(config.number_format.decimal_separator, '.');
        assert_eq!(config.number_format.grouping_separator, ' ');
        assert_eq!(
            config.default_event_time,
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let toml = r#"
            decimal_separator = ",,"
            default_event_time = "half past nine"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.number_format.decimal_separator, ',');
        assert_eq!(config.default_event_time, default_event_time());
    }

    #[test]
    fn unknown_types_are_a_parse_error() {
        assert!(Config::parse_file("data_file = 3").is_err());
    }
}
