use crate::Config;
use crate::config::DATA_FILE_NAME;
use crate::itinerary::default_event_time;
use crate::utils::format_utils::NumberFormat;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        data_file: tmp_dir.join(DATA_FILE_NAME),
        number_format: NumberFormat::default(),
        default_event_time: default_event_time(),
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
    }
}
