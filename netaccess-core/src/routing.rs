// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Country routing table: country calling code to fronted profile.

use std::collections::HashMap;
use std::sync::Arc;

use crate::phone::CountryCode;
use crate::profile::ServiceConfiguration;

/// Maps country calling codes to fronted profiles.
///
/// Lookups are total: a code without an entry resolves to the default
/// fronted profile.
#[derive(Debug, Clone)]
pub struct CountryRoutingTable {
    entries: HashMap<CountryCode, Arc<ServiceConfiguration>>,
    default_fronted: Arc<ServiceConfiguration>,
}

impl CountryRoutingTable {
    /// Creates an empty table around the default fronted profile.
    pub fn new(default_fronted: Arc<ServiceConfiguration>) -> Self {
        CountryRoutingTable {
            entries: HashMap::new(),
            default_fronted,
        }
    }

    /// Adds or replaces the profile for a country.
    pub fn with_entry(mut self, code: CountryCode, profile: Arc<ServiceConfiguration>) -> Self {
        self.entries.insert(code, profile);
        self
    }

    /// Returns the country's profile, or the default fronted profile.
    pub fn lookup(&self, code: CountryCode) -> &ServiceConfiguration {
        self.entries
            .get(&code)
            .map(Arc::as_ref)
            .unwrap_or(&self.default_fronted)
    }

    /// Returns the country's explicit entry, if any.
    pub fn get(&self, code: CountryCode) -> Option<&ServiceConfiguration> {
        self.entries.get(&code).map(Arc::as_ref)
    }

    pub fn default_fronted(&self) -> &ServiceConfiguration {
        &self.default_fronted
    }

    /// Country codes with an explicit entry, ascending.
    pub fn country_codes(&self) -> Vec<CountryCode> {
        let mut codes: Vec<_> = self.entries.keys().copied().collect();
        codes.sort();
        codes
    }

    /// The default profile followed by each entry's profile. A profile
    /// shared by several countries is yielded once per country.
    pub fn profiles(&self) -> impl Iterator<Item = &ServiceConfiguration> {
        std::iter::once(self.default_fronted.as_ref())
            .chain(self.entries.values().map(Arc::as_ref))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
