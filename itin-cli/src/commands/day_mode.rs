use super::ItinCli;
use crate::cli::DayCommand;
use anyhow::Result;
use itin_core::itinerary::{add_day, remove_day, sort_days};

impl ItinCli {
    pub(super) fn day_mode(&self, action: DayCommand) -> Result<()> {
        match action {
            DayCommand::Add { date } => {
                let date = self.require_day_date(&date)?;
                let mut doc = self.itin.load()?;
                if !add_day(&mut doc.days, &date) {
                    self.renderer.print_warning(&format!("Day {date} already exists!"));
                    return Ok(());
                }
                self.commit(&mut doc)?;
                self.renderer.print_info(&format!("Added day {date}"));
            }
            DayCommand::Rm { date } => {
                let date = self.itin.day_key(&date);
                let mut doc = self.itin.load()?;
                match remove_day(&mut doc.days, &date) {
                    Some(day) => {
                        self.commit(&mut doc)?;
                        self.renderer.print_info(&format!(
                            "Removed day {} and its {} event(s)",
                            day.date,
                            day.events.len()
                        ));
                    }
                    None => self.renderer.print_info(&format!("No day {date} found.")),
                }
            }
            DayCommand::List => {
                let mut doc = self.itin.load()?;
                sort_days(&mut doc.days);
                if doc.days.is_empty() {
                    self.renderer.print_info("No days yet.");
                } else {
                    self.renderer.print_day_list(&doc.days);
                }
            }
        }
        Ok(())
    }
}
