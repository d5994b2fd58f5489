//! Field codecs for the persisted JSON shape.
//!
//! Times are stored as `HH:MM`, photos as standard base64 (or `null`).

/// `NaiveTime` <-> `"HH:MM"`.
///
/// Times carrying seconds are written as `HH:MM:SS[.fff]` so they read back unchanged.
pub mod hh_mm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%H:%M:%S%.f";

    pub fn parse(s: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, FORMAT_WITH_SECONDS))
            .ok()
    }

    pub fn format(time: &NaiveTime) -> String {
        if time.second() == 0 && time.nanosecond() == 0 {
            time.format(FORMAT).to_string()
        } else {
            time.format(FORMAT_WITH_SECONDS).to_string()
        }
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| D::Error::custom(format!("invalid time '{s}', expected HH:MM")))
    }

    /// Same codec for optional fields; `None` is skipped by the caller.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) => super::parse(&s)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid time '{s}', expected HH:MM"))),
                None => Ok(None),
            }
        }
    }
}

/// `Option<Vec<u8>>` <-> base64 string or `null`.
pub mod photo_b64 {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        photo: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match photo {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => STANDARD
                .decode(s.as_bytes())
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid photo payload: {e}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::hh_mm;
    use chrono::NaiveTime;

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(hh_mm::parse("06:30"), NaiveTime::from_hms_opt(6, 30, 0));
        assert_eq!(hh_mm::parse("23:59:10"), NaiveTime::from_hms_opt(23, 59, 10));
        assert_eq!(
            hh_mm::parse("07:15:02.250"),
            NaiveTime::from_hms_milli_opt(7, 15, 2, 250)
        );
    }

    #[test]
    fn seconds_are_only_written_when_present() {
        let whole = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let secs = NaiveTime::from_hms_opt(8, 30, 15).unwrap();
        let millis = NaiveTime::from_hms_milli_opt(6, 0, 59, 500).unwrap();
        assert_eq!(hh_mm::format(&whole), "08:00");
        assert_eq!(hh_mm::format(&secs), "08:30:15");
        assert_eq!(hh_mm::format(&millis), "06:00:59.500");
        for t in [whole, secs, millis] {
            assert_eq!(hh_mm::parse(&hh_mm::format(&t)), Some(t));
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(hh_mm::parse("25:00").is_none());
        assert!(hh_mm::parse("noon").is_none());
        assert!(hh_mm::parse("").is_none());
    }
}
