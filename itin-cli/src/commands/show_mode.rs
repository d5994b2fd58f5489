use super::ItinCli;
use anyhow::Result;
use itin_core::itinerary::sort_days;

impl ItinCli {
    pub(super) fn show_mode(&mut self, short: bool) -> Result<()> {
        let mut doc = self.itin.load()?;
        sort_days(&mut doc.days);
        self.renderer.set_short_mode(short);
        self.renderer.print_document(&doc);
        Ok(())
    }
}
