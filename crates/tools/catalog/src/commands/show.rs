use anyhow::{Context, Result};
use clap::Parser;
use realm_content::ContentFactory;
use realm_core::ItemId;

/// Show a single equipment definition
#[derive(Parser)]
pub struct Show {
    /// Item id to look up
    #[arg(value_name = "ID")]
    id: u32,
}

impl Show {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let (_, registry) = factory.load_all()?;
        let def = registry
            .get(ItemId(self.id))
            .with_context(|| format!("Lookup failed in {}", factory.data_dir().display()))?;

        println!("Item {}", def.id().0);
        println!("  slot:        {} (index {})", def.slot(), def.index());
        println!("  two-handed:  {}", def.is_two_handed());
        println!("  full body:   {}", def.is_full_body());
        println!("  full helmet: {}", def.is_full_helmet());

        println!("  requirements:");
        if def.requirements().is_empty() {
            println!("    none");
        }
        for req in def.requirements() {
            println!("    {:<12} {}", req.skill().as_ref(), req.level());
        }

        println!("  bonuses:");
        for (kind, value) in def.bonuses().iter() {
            println!("    {:<14} {:+}", kind.as_ref(), value);
        }
        Ok(())
    }
}
