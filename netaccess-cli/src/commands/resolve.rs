//! Resolve Commands
//!
//! Show which configuration a number resolves to, and what hosts may be
//! contacted.

use anyhow::{Context, Result};
use netaccess_core::{
    CensorshipMode, CountryCode, ServiceConfiguration, ServiceFamily, ServiceUrl, SettingsStore,
};

use crate::config::CliConfig;
use crate::display;

/// Resolves the profile for a number, falling back to stored settings.
pub fn run(
    config: &CliConfig,
    number: Option<&str>,
    mode: Option<CensorshipMode>,
    json: bool,
) -> Result<()> {
    let access = config.network_access()?;
    let settings = config.settings();

    let stored_number = match number {
        Some(_) => None,
        None => settings.local_number()?,
    };
    let number = number.or(stored_number.as_deref());
    let mode = match mode {
        Some(mode) => mode,
        None => settings.censorship_mode()?,
    };

    let profile = access
        .resolve(number, mode)
        .with_context(|| format!("Cannot resolve '{}'", number.unwrap_or_default()))?;
    let censored = *profile != *access.uncensored();
    tracing::debug!(
        profile = profile.name(),
        censored,
        from_settings = stored_number.is_some(),
        "resolved profile"
    );

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(profile).context("Failed to serialize profile")?
        );
        return Ok(());
    }

    println!();
    display::info(&format!(
        "Number: {}  Mode: {:?}",
        number.unwrap_or("(none)"),
        mode
    ));
    if censored {
        display::warning(&format!("Censorship circumvention active: {}", profile.name()));
    } else {
        display::success(&format!("Direct connection: {}", profile.name()));
    }
    print_profile(profile);

    Ok(())
}

/// Prints whether a country calling code is censored by default.
pub fn censored_by_default(config: &CliConfig, code: u16) -> Result<()> {
    let access = config.network_access()?;
    let code = CountryCode::new(code);

    if !code.is_assigned() {
        display::warning(&format!("{} is not an assigned country calling code", code));
    }

    if access.is_country_code_censored_by_default(code) {
        display::warning(&format!("{} is censored by default", code));
    } else {
        display::info(&format!("{} is not censored by default", code));
    }
    Ok(())
}

/// Lists every host the client may contact.
pub fn hostnames(config: &CliConfig) -> Result<()> {
    let access = config.network_access()?;
    for host in access.known_hostnames() {
        println!("{}", host);
    }
    Ok(())
}

fn print_profile(profile: &ServiceConfiguration) {
    for family in ServiceFamily::ALL {
        println!("  {}:", family);
        for url in profile.urls(family) {
            println!("    {}", describe_url(url));
        }
    }

    let interceptors: Vec<_> = profile
        .interceptors()
        .iter()
        .map(|i| format!("{:?}", i))
        .collect();
    println!("  interceptors: {}", interceptors.join(", "));
}

fn describe_url(url: &ServiceUrl) -> String {
    match url.host_header() {
        Some(host) => format!("{} (Host: {})", url.url(), host),
        None => url.url().to_string(),
    }
}
