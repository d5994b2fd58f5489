//! Repository operations over the day timeline.
//!
//! All of these are permissive: an unknown date or an out-of-range index is a
//! no-op, never an error.

use super::document::{Day, Event};
use chrono::NaiveDate;

/// Display format of `Day::date`. Trip-leg dates use ISO instead.
pub const DAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_day_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DAY_DATE_FORMAT).ok()
}

pub fn format_day_date(date: NaiveDate) -> String {
    date.format(DAY_DATE_FORMAT).to_string()
}

/// Exact string match, first hit.
pub fn find_day_index(days: &[Day], date: &str) -> Option<usize> {
    days.iter().position(|d| d.date == date)
}

pub fn find_day_mut<'a>(days: &'a mut [Day], date: &str) -> Option<&'a mut Day> {
    days.iter_mut().find(|d| d.date == date)
}

/// Appends an empty day unless one with `date` already exists.
/// Returns `true` when a day was added.
pub fn add_day(days: &mut Vec<Day>, date: &str) -> bool {
    if find_day_index(days, date).is_some() {
        return false;
    }
    days.push(Day::new(date));
    true
}

/// Removes the day and all of its events.
pub fn remove_day(days: &mut Vec<Day>, date: &str) -> Option<Day> {
    find_day_index(days, date).map(|idx| days.remove(idx))
}

/// Appends a default event (08:00, empty text, no photo) and returns its index.
pub fn add_event(day: &mut Day) -> usize {
    add_event_with(day, Event::default())
}

pub fn add_event_with(day: &mut Day, event: Event) -> usize {
    day.events.push(event);
    day.events.len() - 1
}

/// Removes the event at `index`; later events shift down by one.
pub fn remove_event(day: &mut Day, index: usize) -> Option<Event> {
    if index < day.events.len() {
        Some(day.events.remove(index))
    } else {
        None
    }
}

/// Removes every event addressed by `indices`, all of them referring to
/// positions before the batch started.
///
/// Indices are processed from highest to lowest so earlier removals never
/// shift a later target. Duplicates and out-of-range indices are ignored.
/// The removed events are returned in their original order.
pub fn remove_events(day: &mut Day, indices: &[usize]) -> Vec<Event> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    let mut removed: Vec<Event> = sorted
        .into_iter()
        .filter_map(|idx| remove_event(day, idx))
        .collect();
    removed.reverse();
    removed
}

/// Stable ascending sort by calendar date. Dates that don't parse sort first.
pub fn sort_days(days: &mut [Day]) {
    days.sort_by_key(|d| parse_day_date(&d.date));
}
