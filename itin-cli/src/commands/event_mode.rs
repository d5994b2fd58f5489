use super::ItinCli;
use crate::cli::EventCommand;
use anyhow::{Context, Result, bail};
use itin_core::{
    Event, EventPatch,
    itinerary::{
        PHOTO_EXTENSIONS, add_event_with, find_day_index, find_day_mut, is_supported_photo,
        remove_events,
    },
};
use std::{fs, path::Path};

impl ItinCli {
    pub(super) fn event_mode(&self, action: EventCommand) -> Result<()> {
        match action {
            EventCommand::Add { date, fields } => self.add_event(&date, fields.into()),
            EventCommand::Edit {
                date,
                number,
                fields,
            } => self.edit_event(&date, number, fields.into()),
            EventCommand::Rm { date, numbers } => self.remove_events(&date, &numbers),
            EventCommand::Photo {
                date,
                number,
                file,
                clear,
            } => match file {
                Some(path) if !clear => self.attach_photo(&date, number, &path),
                _ => self.clear_photo(&date, number),
            },
        }
    }

    pub(super) fn links_mode(&self, date: &str, number: usize) -> Result<()> {
        let date = self.itin.day_key(date);
        let doc = self.itin.load()?;
        let Some(idx) = find_day_index(&doc.days, &date) else {
            self.print_missing_day(&date);
            return Ok(());
        };
        let Some(event) = doc.days[idx].events.get(number - 1) else {
            self.print_missing_event(&date, number);
            return Ok(());
        };
        if event.location_text.trim().is_empty() {
            self.renderer.print_info(&format!("Event {number} of {date} has no location."));
            return Ok(());
        }
        self.renderer.print_place_links(&event.location_text);
        Ok(())
    }

    fn add_event(&self, date: &str, patch: EventPatch) -> Result<()> {
        let date = self.itin.day_key(date);
        let mut doc = self.itin.load()?;
        let Some(day) = find_day_mut(&mut doc.days, &date) else {
            self.print_missing_day(&date);
            return Ok(());
        };
        let mut event = self.itin.new_event();
        event.apply(patch);
        let idx = add_event_with(day, event);
        let added = day.events[idx].clone();

        self.commit(&mut doc)?;
        self.renderer.print_info(&format!("Added event to {date}"));
        self.renderer.print_event_line(idx + 1, &added);
        Ok(())
    }

    fn edit_event(&self, date: &str, number: usize, patch: EventPatch) -> Result<()> {
        if patch.is_empty() {
            bail!(
                "nothing to change, pass at least one of --time, --place, --description, --location"
            );
        }
        self.update_event(date, number, |event| {
            event.apply(patch);
            Ok(())
        })
    }

    fn remove_events(&self, date: &str, numbers: &[usize]) -> Result<()> {
        let date = self.itin.day_key(date);
        let mut doc = self.itin.load()?;
        let Some(day) = find_day_mut(&mut doc.days, &date) else {
            self.print_missing_day(&date);
            return Ok(());
        };
        let indices: Vec<usize> = numbers.iter().map(|n| n - 1).collect();
        let removed = remove_events(day, &indices);
        let remaining = day.clone();
        if removed.is_empty() {
            self.renderer.print_info(&format!("No matching events on {date}."));
            return Ok(());
        }

        self.commit(&mut doc)?;
        self.renderer.print_info(&format!("Removed {} event(s) from {date}", removed.len()));
        self.renderer.print_day(&remaining);
        Ok(())
    }

    fn attach_photo(&self, date: &str, number: usize, path: &Path) -> Result<()> {
        if !is_supported_photo(path) {
            bail!(
                "'{}' is not a supported photo ({})",
                path.display(),
                PHOTO_EXTENSIONS.join(", ")
            );
        }
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        self.update_event(date, number, |event| {
            event.set_photo(bytes);
            Ok(())
        })
    }

    fn clear_photo(&self, date: &str, number: usize) -> Result<()> {
        self.update_event(date, number, |event| {
            if event.clear_photo().is_none() {
                bail!("event {number} has no photo");
            }
            Ok(())
        })
    }

    /// Loads, finds event `number` of the day, applies `f` and saves.
    fn update_event<F>(&self, date: &str, number: usize, f: F) -> Result<()>
    where
        F: FnOnce(&mut Event) -> Result<()>,
    {
        let date = self.itin.day_key(date);
        let mut doc = self.itin.load()?;
        let Some(day) = find_day_mut(&mut doc.days, &date) else {
            self.print_missing_day(&date);
            return Ok(());
        };
        let Some(event) = day.events.get_mut(number - 1) else {
            self.print_missing_event(&date, number);
            return Ok(());
        };
        f(event)?;
        let updated = event.clone();

        self.commit(&mut doc)?;
        self.renderer.print_info(&format!("Updated event {number} of {date}"));
        self.renderer.print_event_line(number, &updated);
        Ok(())
    }

    fn print_missing_day(&self, date: &str) {
        self.renderer.print_info(&format!(
            "No day {date} found. Add it with `itin day add {date}`."
        ));
    }

    fn print_missing_event(&self, date: &str, number: usize) {
        self.renderer.print_info(&format!("No event {number} on {date}."));
    }
}
