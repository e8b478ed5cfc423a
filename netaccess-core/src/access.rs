// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Access
//!
//! Selects the service configuration a client should use for a given phone
//! number and censorship mode.
//!
//! Resolution:
//! 1. No number (or an empty one): the uncensored profile, whatever the mode.
//! 2. Otherwise the number's country calling code is extracted; a number
//!    that cannot be parsed is an error.
//! 3. `Disabled` returns the uncensored profile. `Enabled` returns the
//!    country's fronted profile (or the default fronted profile).
//!    `Default` does the same as `Enabled` for countries censored by
//!    default, and returns the uncensored profile for all others.
//!
//! All profiles are built once in [`NetworkAccess::new`] and are read-only
//! afterwards, so a single instance can be shared between threads.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::config::{NetworkAccessConfig, ServerUrls};
use crate::endpoint::{CdnTier, ServiceFamily, ServiceUrl};
use crate::error::NetworkAccessError;
use crate::fronting::{build_routing_table, fronting_hostnames, DEFAULT_CENSORED_COUNTRY_CODES};
use crate::params::ServerPublicParams;
use crate::phone::{CountryCode, CountryCodeParser, E164Parser};
use crate::profile::{validate_url, ServiceConfiguration};
use crate::routing::CountryRoutingTable;
use crate::settings::{CensorshipMode, SettingsStore};
use crate::trust::TrustStores;

/// Resolves phone numbers to service configurations.
pub struct NetworkAccess {
    uncensored: Arc<ServiceConfiguration>,
    routing: CountryRoutingTable,
    default_censored: HashSet<CountryCode>,
    parser: Arc<dyn CountryCodeParser>,
    hostnames: BTreeSet<String>,
}

impl std::fmt::Debug for NetworkAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkAccess")
            .field("uncensored", &self.uncensored.name())
            .field("routed_countries", &self.routing.country_codes())
            .field("default_censored", &self.default_censored.len())
            .finish()
    }
}

impl NetworkAccess {
    /// Builds every profile from configuration.
    ///
    /// Public params are decoded here; invalid params or URLs fail startup
    /// rather than a later request.
    pub fn new(
        config: &NetworkAccessConfig,
        trust_stores: TrustStores,
    ) -> Result<Self, NetworkAccessError> {
        config.urls.validate()?;
        let public_params = Arc::new(ServerPublicParams::decode(&config.public_params)?);

        let uncensored = build_uncensored_profile(&config.urls, &trust_stores, &public_params)?;
        let routing = build_routing_table(&trust_stores, &public_params)?;

        let mut builder = NetworkAccess::builder(uncensored, routing);
        for host in config.urls.hostnames()? {
            builder = builder.extra_hostname(host);
        }
        for host in fronting_hostnames() {
            builder = builder.extra_hostname(host);
        }

        let access = builder.build()?;
        tracing::info!(
            countries = access.routing.len(),
            hostnames = access.hostnames.len(),
            "network access profiles built"
        );
        Ok(access)
    }

    /// Assembles a selector from prebuilt parts (fake tables, custom parser).
    pub fn builder(
        uncensored: ServiceConfiguration,
        routing: CountryRoutingTable,
    ) -> NetworkAccessBuilder {
        NetworkAccessBuilder::new(uncensored, routing)
    }

    /// Resolves the configuration for `number` under `mode`.
    pub fn resolve(
        &self,
        number: Option<&str>,
        mode: CensorshipMode,
    ) -> Result<&ServiceConfiguration, NetworkAccessError> {
        let number = match number {
            Some(number) if !number.is_empty() => number,
            _ => return Ok(self.uncensored.as_ref()),
        };

        let country_code = self.parser.country_code(number)?;

        let profile: &ServiceConfiguration = match mode {
            CensorshipMode::Enabled => self.routing.lookup(country_code),
            CensorshipMode::Disabled => &self.uncensored,
            CensorshipMode::Default => {
                if self.default_censored.contains(&country_code) {
                    self.routing.lookup(country_code)
                } else {
                    &self.uncensored
                }
            }
        };

        tracing::debug!(
            country = %country_code,
            ?mode,
            profile = profile.name(),
            "resolved network configuration"
        );
        Ok(profile)
    }

    /// Like [`resolve`](Self::resolve), but an unparseable number is treated
    /// as an unknown country and resolves to the uncensored profile.
    pub fn resolve_or_uncensored(
        &self,
        number: Option<&str>,
        mode: CensorshipMode,
    ) -> &ServiceConfiguration {
        match self.resolve(number, mode) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to uncensored configuration");
                self.uncensored.as_ref()
            }
        }
    }

    /// True iff `number` resolves to anything but the uncensored profile.
    pub fn is_censored(
        &self,
        number: Option<&str>,
        mode: CensorshipMode,
    ) -> Result<bool, NetworkAccessError> {
        Ok(*self.resolve(number, mode)? != *self.uncensored)
    }

    /// True if circumvention is on by default for `code`.
    pub fn is_country_code_censored_by_default(&self, code: CountryCode) -> bool {
        self.default_censored.contains(&code)
    }

    /// Resolves using the local number and mode from `settings`.
    pub fn configuration(
        &self,
        settings: &dyn SettingsStore,
    ) -> Result<&ServiceConfiguration, NetworkAccessError> {
        let number = settings.local_number()?;
        let mode = settings.censorship_mode()?;
        self.resolve(number.as_deref(), mode)
    }

    /// [`is_censored`](Self::is_censored) using the local number and mode
    /// from `settings`.
    pub fn is_censored_with(&self, settings: &dyn SettingsStore) -> Result<bool, NetworkAccessError> {
        Ok(*self.configuration(settings)? != *self.uncensored)
    }

    /// The direct profile.
    pub fn uncensored(&self) -> &ServiceConfiguration {
        &self.uncensored
    }

    pub fn routing_table(&self) -> &CountryRoutingTable {
        &self.routing
    }

    /// Countries censored by default, ascending.
    pub fn default_censored_country_codes(&self) -> Vec<CountryCode> {
        let mut codes: Vec<_> = self.default_censored.iter().copied().collect();
        codes.sort();
        codes
    }

    /// Every host this client may contact, sorted and deduplicated.
    pub fn known_hostnames(&self) -> impl Iterator<Item = &str> {
        self.hostnames.iter().map(String::as_str)
    }
}

/// Builder for NetworkAccess
pub struct NetworkAccessBuilder {
    uncensored: ServiceConfiguration,
    routing: CountryRoutingTable,
    default_censored: HashSet<CountryCode>,
    parser: Arc<dyn CountryCodeParser>,
    extra_hostnames: BTreeSet<String>,
}

impl NetworkAccessBuilder {
    /// Create a new builder with the standard censored set and E.164 parser
    pub fn new(uncensored: ServiceConfiguration, routing: CountryRoutingTable) -> Self {
        NetworkAccessBuilder {
            uncensored,
            routing,
            default_censored: DEFAULT_CENSORED_COUNTRY_CODES.into_iter().collect(),
            parser: Arc::new(E164Parser::new()),
            extra_hostnames: BTreeSet::new(),
        }
    }

    /// Replace the set of countries censored by default
    pub fn default_censored(mut self, codes: impl IntoIterator<Item = CountryCode>) -> Self {
        self.default_censored = codes.into_iter().collect();
        self
    }

    /// Replace the phone number parser
    pub fn parser(mut self, parser: Arc<dyn CountryCodeParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Add a host that appears in no profile (calling, link previews)
    pub fn extra_hostname(mut self, host: impl Into<String>) -> Self {
        self.extra_hostnames.insert(host.into());
        self
    }

    /// Build the selector
    pub fn build(self) -> Result<NetworkAccess, NetworkAccessError> {
        if self.uncensored.is_fronted() {
            return Err(NetworkAccessError::FrontedUncensoredProfile(
                self.uncensored.name().to_string(),
            ));
        }

        let mut hostnames = self.extra_hostnames;
        let profiles = std::iter::once(&self.uncensored).chain(self.routing.profiles());
        for profile in profiles {
            for url in profile.all_urls() {
                if let Some(host) = validate_url(url.url())?.host_str() {
                    hostnames.insert(host.to_string());
                }
                if let Some(host) = url.host_header() {
                    hostnames.insert(host.to_string());
                }
            }
        }

        Ok(NetworkAccess {
            uncensored: Arc::new(self.uncensored),
            routing: self.routing,
            default_censored: self.default_censored,
            parser: self.parser,
            hostnames,
        })
    }
}

/// Direct profile: one endpoint per family, validated against the service
/// trust store.
fn build_uncensored_profile(
    urls: &ServerUrls,
    trust_stores: &TrustStores,
    public_params: &Arc<ServerPublicParams>,
) -> Result<ServiceConfiguration, NetworkAccessError> {
    let direct = |url: &str| ServiceUrl::direct(url, Arc::clone(&trust_stores.service));

    ServiceConfiguration::builder("direct", Arc::clone(public_params))
        .add_url(ServiceFamily::Service, direct(&urls.service))
        .add_url(ServiceFamily::Cdn(CdnTier::Tier0), direct(&urls.cdn))
        .add_url(ServiceFamily::Cdn(CdnTier::Tier2), direct(&urls.cdn2))
        .add_url(ServiceFamily::Cdn(CdnTier::Tier3), direct(&urls.cdn3))
        .add_url(ServiceFamily::Storage, direct(&urls.storage))
        .add_url(ServiceFamily::Cdsi, direct(&urls.cdsi))
        .add_url(ServiceFamily::Svr2, direct(&urls.svr2))
        .build()
}
