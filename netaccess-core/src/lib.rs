// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Access Core Library
//!
//! Decides how a messaging client reaches its service: directly, or through
//! a domain-fronted profile chosen from the account's country calling code
//! and the user's censorship circumvention setting.
//!
//! # Example
//!
//! ```ignore
//! use netaccess_core::{CensorshipMode, NetworkAccess, NetworkAccessConfig, TrustStores};
//!
//! let config = NetworkAccessConfig::load(path)?;
//! let access = NetworkAccess::new(&config, TrustStores::default())?;
//!
//! let profile = access.resolve(Some("+201001234567"), CensorshipMode::Default)?;
//! for candidate in profile.service_urls() {
//!     // try candidates in order, first reachable wins
//! }
//! ```

pub mod access;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod fronting;
pub mod params;
pub mod phone;
pub mod profile;
pub mod routing;
pub mod settings;
pub mod tls;
pub mod trust;

pub use access::{NetworkAccess, NetworkAccessBuilder};
pub use config::{NetworkAccessConfig, ServerUrls};
pub use endpoint::{CdnTier, RequestInterceptor, ServiceFamily, ServiceUrl};
pub use error::{NetworkAccessError, NetworkAccessResult};
pub use params::{PublicParamsConfig, ServerPublicParams};
pub use phone::{CountryCode, CountryCodeParser, E164Parser, PhoneNumberError};
pub use profile::{ServiceConfiguration, ServiceConfigurationBuilder};
pub use routing::CountryRoutingTable;
pub use settings::{
    CensorshipMode, FileSettings, MemorySettings, NetworkSettings, SettingsError, SettingsStore,
};
pub use tls::{CipherSuite, TlsProfile, TlsVersion};
pub use trust::{PinnedCertificate, TrustStore, TrustStoreKind, TrustStores};
