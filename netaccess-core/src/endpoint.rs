// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Endpoint Configuration
//!
//! A [`ServiceUrl`] describes one candidate way of reaching a service: the
//! base URL to connect to, the host the request is really meant for (when
//! fronted), the trust store to validate against, and the TLS profile.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::error::NetworkAccessError;
use crate::tls::TlsProfile;
use crate::trust::TrustStore;

/// One candidate endpoint for a service family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceUrl {
    url: String,
    host_header: Option<String>,
    trust_store: Arc<TrustStore>,
    tls: TlsProfile,
}

impl ServiceUrl {
    /// A direct endpoint: the URL's own host is the real destination.
    pub fn direct(url: impl Into<String>, trust_store: Arc<TrustStore>) -> Self {
        ServiceUrl {
            url: url.into(),
            host_header: None,
            trust_store,
            tls: TlsProfile::modern(),
        }
    }

    /// A fronted endpoint: connect to `url`, route to `host_header`.
    pub fn fronted(
        url: impl Into<String>,
        host_header: impl Into<String>,
        trust_store: Arc<TrustStore>,
        tls: TlsProfile,
    ) -> Self {
        ServiceUrl {
            url: url.into(),
            host_header: Some(host_header.into()),
            trust_store,
            tls,
        }
    }

    /// Base URL to connect to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host the front should route to, if this endpoint is fronted.
    pub fn host_header(&self) -> Option<&str> {
        self.host_header.as_deref()
    }

    pub fn trust_store(&self) -> &TrustStore {
        &self.trust_store
    }

    pub fn tls(&self) -> &TlsProfile {
        &self.tls
    }

    pub fn is_fronted(&self) -> bool {
        self.host_header.is_some()
    }
}

/// CDN tiers. Tier 1 is reserved and never configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CdnTier {
    #[serde(rename = "0")]
    Tier0,
    #[serde(rename = "2")]
    Tier2,
    #[serde(rename = "3")]
    Tier3,
}

impl CdnTier {
    /// All configured tiers in ascending order.
    pub const ALL: [CdnTier; 3] = [CdnTier::Tier0, CdnTier::Tier2, CdnTier::Tier3];

    /// Numeric tier identifier.
    pub fn number(self) -> u8 {
        match self {
            CdnTier::Tier0 => 0,
            CdnTier::Tier2 => 2,
            CdnTier::Tier3 => 3,
        }
    }
}

impl TryFrom<u8> for CdnTier {
    type Error = NetworkAccessError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            0 => Ok(CdnTier::Tier0),
            2 => Ok(CdnTier::Tier2),
            3 => Ok(CdnTier::Tier3),
            other => Err(NetworkAccessError::UnknownCdnTier(other)),
        }
    }
}

/// A logical service reachable through a configuration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceFamily {
    /// Chat/message service.
    Service,
    /// Content delivery network tier.
    Cdn(CdnTier),
    /// Storage service.
    Storage,
    /// Contact discovery service.
    Cdsi,
    /// Secure value recovery service.
    Svr2,
}

impl ServiceFamily {
    /// Every family in a fixed order.
    pub const ALL: [ServiceFamily; 7] = [
        ServiceFamily::Service,
        ServiceFamily::Cdn(CdnTier::Tier0),
        ServiceFamily::Cdn(CdnTier::Tier2),
        ServiceFamily::Cdn(CdnTier::Tier3),
        ServiceFamily::Storage,
        ServiceFamily::Cdsi,
        ServiceFamily::Svr2,
    ];

    /// Path suffix appended to a Google front for this family.
    pub fn front_path(self) -> &'static str {
        match self {
            ServiceFamily::Service => "/service",
            ServiceFamily::Cdn(CdnTier::Tier0) => "/cdn",
            ServiceFamily::Cdn(CdnTier::Tier2) => "/cdn2",
            ServiceFamily::Cdn(CdnTier::Tier3) => "/cdn3",
            ServiceFamily::Storage => "/storage",
            ServiceFamily::Cdsi => "/cdsi",
            ServiceFamily::Svr2 => "/svr2",
        }
    }
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceFamily::Service => write!(f, "service"),
            ServiceFamily::Cdn(tier) => write!(f, "cdn{}", tier.number()),
            ServiceFamily::Storage => write!(f, "storage"),
            ServiceFamily::Cdsi => write!(f, "cdsi"),
            ServiceFamily::Svr2 => write!(f, "svr2"),
        }
    }
}

/// Cross-cutting request policies applied by the transport to every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestInterceptor {
    /// Stamps the client's user agent.
    StandardUserAgent,
    /// Watches responses for remote client deprecation.
    RemoteDeprecationDetector,
    /// Blocks requests once the client build has expired.
    DeprecatedClientPrevention,
    /// Blocks requests while a device transfer is in progress.
    DeviceTransferBlocking,
}

impl RequestInterceptor {
    /// The interceptor chain shared by every profile, in execution order.
    pub const DEFAULT_CHAIN: [RequestInterceptor; 4] = [
        RequestInterceptor::StandardUserAgent,
        RequestInterceptor::RemoteDeprecationDetector,
        RequestInterceptor::DeprecatedClientPrevention,
        RequestInterceptor::DeviceTransferBlocking,
    ];
}
