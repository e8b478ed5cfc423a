//! Settings Commands

use anyhow::{Context, Result};
use netaccess_core::{CensorshipMode, CountryCodeParser, E164Parser, SettingsStore};

use crate::config::CliConfig;
use crate::display;

/// Shows stored settings.
pub fn show(config: &CliConfig) -> Result<()> {
    let settings = config.settings();
    let stored = settings.load()?;

    println!();
    display::info(&format!("Settings file: {}", settings.path().display()));
    println!("  censorship mode: {:?}", stored.censorship_mode);
    println!(
        "  local number:    {}",
        stored.local_number.as_deref().unwrap_or("(none)")
    );
    Ok(())
}

/// Sets the censorship mode.
pub fn set_mode(config: &CliConfig, mode: CensorshipMode) -> Result<()> {
    config.settings().set_censorship_mode(mode)?;
    display::success(&format!("Censorship mode set to {:?}", mode));
    Ok(())
}

/// Sets the local number after checking it parses.
pub fn set_number(config: &CliConfig, number: &str) -> Result<()> {
    let code = E164Parser
        .country_code(number)
        .with_context(|| format!("'{}' is not a valid international number", number))?;

    config.settings().set_local_number(Some(number))?;
    display::success(&format!("Local number set (country code {})", code));
    Ok(())
}

/// Forgets the local number.
pub fn clear_number(config: &CliConfig) -> Result<()> {
    config.settings().set_local_number(None)?;
    display::success("Local number cleared");
    Ok(())
}
