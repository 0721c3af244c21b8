//! Command implementations for realm-catalog
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod authority;
mod list;
mod show;
mod slot;

pub use authority::Authority;
pub use list::List;
pub use show::Show;
pub use slot::Slot;

use realm_core::EquipmentDefinition;

/// One-line summary shared by the listing commands.
pub(crate) fn summary_line(def: &EquipmentDefinition) -> String {
    let mut flags = Vec::new();
    if def.is_two_handed() {
        flags.push("two-handed");
    }
    if def.is_full_body() {
        flags.push("full-body");
    }
    if def.is_full_helmet() {
        flags.push("full-helmet");
    }

    let requirements: Vec<String> = def
        .requirements()
        .iter()
        .map(|req| format!("{} {}", req.skill(), req.level()))
        .collect();

    format!(
        "{:>6}  {:<7} [{}] reqs: {}",
        def.id().0,
        def.slot().as_ref(),
        flags.join(", "),
        if requirements.is_empty() {
            "none".to_string()
        } else {
            requirements.join(", ")
        }
    )
}
