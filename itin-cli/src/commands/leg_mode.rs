use super::ItinCli;
use anyhow::Result;
use itin_core::{LegKind, TripLegPatch};

impl ItinCli {
    /// Without any field flags this only prints the leg.
    pub(super) fn leg_mode(&self, kind: LegKind, patch: TripLegPatch) -> Result<()> {
        let mut doc = self.itin.load()?;
        if patch != TripLegPatch::default() {
            doc.leg_mut(kind).apply(patch);
            self.commit(&mut doc)?;
            self.renderer.print_info(&format!("Updated {} leg", kind.as_ref()));
        }
        self.renderer.print_leg(kind, doc.leg(kind));
        Ok(())
    }
}
