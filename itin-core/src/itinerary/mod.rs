mod days;
mod document;
mod serde_utils;

pub use days::{
    DAY_DATE_FORMAT, add_day, add_event, add_event_with, find_day_index, find_day_mut,
    format_day_date, parse_day_date, remove_day, remove_event, remove_events, sort_days,
};
pub use document::{
    Day, Event, EventPatch, ItineraryDocument, LegKind, PHOTO_EXTENSIONS, TripLeg, TripLegPatch,
    default_event_time, is_supported_photo,
};
pub use serde_utils::hh_mm;
