mod day_mode;
mod event_mode;
mod leg_mode;
mod show_mode;

use crate::{
    cli::Command,
    render::{ColorMode, RenderOptions, Renderer},
};
use anyhow::{Result, bail};
use itin_core::{Itin, ItineraryDocument, itinerary::sort_days};

/// Maps each command to one load, at most one repository call and, for
/// mutating commands, one explicit save.
pub struct ItinCli {
    renderer: Renderer,
    itin: Itin,
}

impl ItinCli {
    pub fn new(color: ColorMode, itin: Itin) -> Self {
        let renderer = Renderer::new(Some(RenderOptions {
            number_format: itin.config.number_format.clone(),
            use_color: color.use_color(),
            short_mode: false,
        }));
        ItinCli { renderer, itin }
    }

    pub fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Path => {
                self.renderer.print_info(&format!("{}", self.itin.store.path().display()));
                Ok(())
            }
            Command::Show { short } => self.show_mode(short),
            Command::Title { text } => self.title_mode(&text.join(" ")),
            Command::Leg { leg, fields } => self.leg_mode(leg.into(), fields.into()),
            Command::Day { action } => self.day_mode(action),
            Command::Event { action } => self.event_mode(action),
            Command::Links { date, number } => self.links_mode(&date, number),
        }
    }

    /// Re-sorts the timeline and writes the whole document.
    fn commit(&self, doc: &mut ItineraryDocument) -> Result<()> {
        sort_days(&mut doc.days);
        self.itin.save(doc)
    }

    /// Day dates that will be stored must be real `DD/MM/YYYY` dates.
    fn require_day_date(&self, input: &str) -> Result<String> {
        match self.itin.resolve_day_date(input) {
            Some(date) => Ok(date),
            None => bail!("'{input}' is not a valid day (use DD/MM/YYYY, YYYY-MM-DD or today)"),
        }
    }

    fn title_mode(&self, text: &str) -> Result<()> {
        let mut doc = self.itin.load()?;
        doc.trip_title = text.trim().to_string();
        self.commit(&mut doc)?;
        self.renderer.print_info(&format!("Trip title set to \"{}\"", doc.trip_title));
        Ok(())
    }
}
