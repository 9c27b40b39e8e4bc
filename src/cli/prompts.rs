//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm overwriting an existing output file
pub fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    confirm_step(&format!("Output file {} exists. Overwrite?", path.display()))
}
