//! Scripts command implementation
//!
//! Lists the script table as `NAME<TAB>tag`, optionally filtered.

use crate::cli::ScriptsArgs;
use newtext_core::Script;
use newtext_hb::Result;

pub fn run(args: &ScriptsArgs) -> Result<()> {
    for (name, script) in matching(args.filter.as_deref()) {
        println!("{}\t{}", name, script);
    }
    Ok(())
}

/// Table entries whose name or tag contains `filter`, ignoring case.
pub fn matching(filter: Option<&str>) -> Vec<(&'static str, Script)> {
    let needle = filter.map(str::to_ascii_lowercase);
    Script::ALL
        .iter()
        .copied()
        .filter(|(name, script)| match &needle {
            Some(needle) => {
                name.to_ascii_lowercase().contains(needle.as_str())
                    || script.to_string().to_ascii_lowercase().contains(needle.as_str())
            },
            None => true,
        })
        .collect()
}
