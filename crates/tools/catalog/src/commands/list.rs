use anyhow::Result;
use clap::Parser;
use realm_content::ContentFactory;

use super::summary_line;

/// List every equipment definition in load order
#[derive(Parser)]
pub struct List {
    /// Only print the number of definitions
    #[arg(short, long)]
    count: bool,
}

impl List {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let (_, registry) = factory.load_all()?;

        if self.count {
            println!("{}", registry.len());
            return Ok(());
        }

        for def in registry.all() {
            println!("{}", summary_line(def));
        }
        println!("\n{} definitions", registry.len());
        Ok(())
    }
}
