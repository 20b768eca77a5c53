//! The `nodes` subcommand.

use nodefetch_core::registry;

/// Print the node registration descriptors as pretty JSON.
pub fn execute() -> anyhow::Result<()> {
    let nodes = registry();
    println!("{}", serde_json::to_string_pretty(&nodes)?);
    Ok(())
}
