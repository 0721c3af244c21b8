use anyhow::Result;
use clap::Parser;
use realm_core::AuthorityLevel;

/// Print the authority level table
#[derive(Parser)]
pub struct Authority {
    /// Only print levels at or above this one (e.g. "moderator")
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    at_least: Option<AuthorityLevel>,
}

fn parse_level(name: &str) -> Result<AuthorityLevel, String> {
    name.parse()
        .map_err(|_| format!("unknown authority level '{name}'"))
}

impl Authority {
    pub fn execute(self) -> Result<()> {
        let floor = self.at_least.unwrap_or_default();

        println!("{:<14} {:>8} {:>8}", "level", "client", "server");
        for level in AuthorityLevel::ALL
            .into_iter()
            .filter(|level| level.equal_or_greater(floor))
        {
            println!(
                "{:<14} {:>8} {:>8}",
                level.as_ref(),
                level.external_rank(),
                level.internal_rank()
            );
        }
        Ok(())
    }
}
