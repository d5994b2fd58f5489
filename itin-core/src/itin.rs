use crate::{
    Config,
    itinerary::{Event, ItineraryDocument, format_day_date, parse_day_date},
    store::ItineraryStore,
};
use anyhow::Result;
use chrono::{Days, NaiveDate};
use std::str::FromStr;
use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum RelativeDay {
    Today,
    Yesterday,
    Tomorrow,
}

pub struct Itin {
    pub config: Config,
    pub store: ItineraryStore,
}

impl Itin {
    /// Creates a new `Itin` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        let store = ItineraryStore::new(config.data_file.clone());
        Self { config, store }
    }

    pub fn load(&self) -> Result<ItineraryDocument> {
        self.store.load()
    }

    pub fn save(&self, doc: &ItineraryDocument) -> Result<()> {
        self.store.save(doc)
    }

    /// A blank event at the configured default time.
    pub fn new_event(&self) -> Event {
        Event {
            time: self.config.default_event_time,
            ..Default::default()
        }
    }

    /// Turns user input into a day key (`DD/MM/YYYY`).
    ///
    /// Accepts `today`, `yesterday`, `tomorrow` (relative to the configured
    /// reference date), `DD/MM/YYYY` and ISO `YYYY-MM-DD`.
    pub fn resolve_day_date(&self, input: &str) -> Option<String> {
        let input = input.trim();
        let reference = self.config.reference_date;
        let date = match RelativeDay::from_str(input) {
            Ok(RelativeDay::Today) => Some(reference),
            Ok(RelativeDay::Yesterday) => reference.checked_sub_days(Days::new(1)),
            Ok(RelativeDay::Tomorrow) => reference.checked_add_days(Days::new(1)),
            Err(_) => parse_day_date(input)
                .or_else(|| NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()),
        };
        date.map(format_day_date)
    }

    /// Like `resolve_day_date`, but falls back to the raw input so days stored
    /// under a malformed date can still be addressed.
    pub fn day_key(&self, input: &str) -> String {
        self.resolve_day_date(input)
            .unwrap_or_else(|| input.to_string())
    }
}
