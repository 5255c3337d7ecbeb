//! Profiles command handler

use anyhow::Result;

use gsr::{Config, Profile};

/// Handle the profiles command: list the known grammar profiles and their
/// enabled state.
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    let enabled = config.enabled_profiles();

    println!("Grammar profiles:");
    for profile in Profile::ALL {
        let state = if enabled.contains(&profile) {
            "enabled"
        } else {
            "disabled"
        };
        println!(
            "  {:9} [{}]  {}; key granularity: {}",
            profile.name(),
            state,
            profile.describe(),
            profile.key_granularity()
        );
    }

    Ok(())
}
