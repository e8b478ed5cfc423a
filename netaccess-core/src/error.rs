// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network access error types.

use thiserror::Error;

use crate::endpoint::ServiceFamily;
use crate::phone::PhoneNumberError;

/// Errors raised while building or resolving service configurations.
#[derive(Error, Debug)]
pub enum NetworkAccessError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(#[from] PhoneNumberError),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid {name} public params: {source}")]
    InvalidPublicParams {
        name: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("No endpoints configured for {0}")]
    EmptyEndpointList(ServiceFamily),

    #[error("Uncensored profile '{0}' must not contain fronted endpoints")]
    FrontedUncensoredProfile(String),

    #[error("Unknown CDN tier: {0}")]
    UnknownCdnTier(u8),

    #[error("Invalid certificate pin: {0}")]
    InvalidPin(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] crate::settings::SettingsError),

    #[error("No cipher suite in the profile is supported by the TLS backend")]
    NoSupportedCipherSuites,

    #[cfg(feature = "rustls")]
    #[error("TLS error: {0}")]
    Tls(#[from] rustls::Error),
}

/// Result type for network access operations.
pub type NetworkAccessResult<T> = Result<T, NetworkAccessError>;
