use anyhow::{Result, bail};
use clap::Parser;
use realm_content::ContentFactory;
use realm_core::EquipmentSlot;

use super::summary_line;

/// List definitions occupying one equipment slot
#[derive(Parser)]
pub struct Slot {
    /// Slot name (e.g. "weapon") or container index (e.g. 3)
    #[arg(value_name = "SLOT")]
    slot: String,
}

impl Slot {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let slot = match self.slot.parse::<usize>() {
            Ok(index) => EquipmentSlot::from_index(index),
            Err(_) => self.slot.parse::<EquipmentSlot>().ok(),
        };
        let Some(slot) = slot else {
            bail!("'{}' is not an equipment slot", self.slot);
        };

        let (_, registry) = factory.load_all()?;
        let matching: Vec<_> = registry.all().filter(|def| def.slot() == slot).collect();

        for def in &matching {
            println!("{}", summary_line(def));
        }
        println!("\n{} definitions in slot {} (index {})", matching.len(), slot, slot.index());
        Ok(())
    }
}
