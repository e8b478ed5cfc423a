// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain Fronting Tables
//!
//! Static fronts, routing hosts and per-country assignments used when
//! censorship circumvention is active.
//!
//! Two fronting networks are used:
//! - **Google**: a Cloud Run reflector reached through Google front domains.
//!   Each front gets a per-family path suffix (`/service`, `/cdn2`, ...) and
//!   mimics the TLS handshake of the Google client that owns the domain.
//! - **Fastly**: the service's Fastly hosts reached through unrelated Fastly
//!   customers. URLs are used unchanged and the family is selected by the
//!   routing host.

use std::sync::Arc;

use crate::endpoint::{CdnTier, ServiceFamily, ServiceUrl};
use crate::error::NetworkAccessError;
use crate::params::ServerPublicParams;
use crate::phone::CountryCode;
use crate::profile::ServiceConfiguration;
use crate::routing::CountryRoutingTable;
use crate::tls::TlsProfile;
use crate::trust::TrustStores;

/// Google reflector host.
pub const GOOGLE_REFLECTOR_HOST: &str = "reflector-nrgwuv7kwq-uc.a.run.app";

pub const FASTLY_SERVICE_HOST: &str = "chat-signal.global.ssl.fastly.net";
pub const FASTLY_STORAGE_HOST: &str = "storage.signal.org.global.prod.fastly.net";
pub const FASTLY_CDN_HOST: &str = "cdn.signal.org.global.prod.fastly.net";
pub const FASTLY_CDN2_HOST: &str = "cdn2.signal.org.global.prod.fastly.net";
pub const FASTLY_CDN3_HOST: &str = "cdn3-signal.global.ssl.fastly.net";
pub const FASTLY_CDSI_HOST: &str = "cdsi-signal.global.ssl.fastly.net";
pub const FASTLY_SVR2_HOST: &str = "svr2-signal.global.ssl.fastly.net";

pub const GOOGLE_FRONT_WWW: &str = "https://www.google.com";
pub const GOOGLE_FRONT_ANDROID_CLIENTS: &str = "https://android.clients.google.com";
pub const GOOGLE_FRONT_CLIENTS3: &str = "https://clients3.google.com";
pub const GOOGLE_FRONT_CLIENTS4: &str = "https://clients4.google.com";
pub const GOOGLE_FRONT_INBOX: &str = "https://inbox.google.com";

/// Fastly fronts, in fallback order.
pub const FASTLY_FRONTS: [&str; 3] = [
    "https://slate.com",
    "https://www.zesty.io",
    "https://www.redditstatic.com",
];

/// Allowed while fronting but not used as a front by any profile.
pub const OPEN_SCDN_CO: &str = "https://open.scdn.co";

/// Named country calling codes.
pub mod country {
    use crate::phone::CountryCode;

    pub const EGYPT: CountryCode = CountryCode::new(20);
    pub const UAE: CountryCode = CountryCode::new(971);
    pub const OMAN: CountryCode = CountryCode::new(968);
    pub const QATAR: CountryCode = CountryCode::new(974);
    pub const IRAN: CountryCode = CountryCode::new(98);
    pub const CUBA: CountryCode = CountryCode::new(53);
    pub const UZBEKISTAN: CountryCode = CountryCode::new(998);
    pub const RUSSIA: CountryCode = CountryCode::new(7);
    pub const VENEZUELA: CountryCode = CountryCode::new(58);
    pub const PAKISTAN: CountryCode = CountryCode::new(92);
}

/// Countries where circumvention is on unless the user disables it.
pub const DEFAULT_CENSORED_COUNTRY_CODES: [CountryCode; 10] = [
    country::EGYPT,
    country::UAE,
    country::OMAN,
    country::QATAR,
    country::IRAN,
    country::CUBA,
    country::UZBEKISTAN,
    country::RUSSIA,
    country::VENEZUELA,
    country::PAKISTAN,
];

/// Countries with a local Google front placed ahead of the shared ones.
pub const GOOGLE_COUNTRY_FRONTS: [(CountryCode, &str); 7] = [
    (country::EGYPT, "https://www.google.com.eg"),
    (country::UAE, "https://www.google.ae"),
    (country::OMAN, "https://www.google.com.om"),
    (country::QATAR, "https://www.google.com.qa"),
    (country::UZBEKISTAN, "https://www.google.co.uz"),
    (country::VENEZUELA, "https://www.google.co.ve"),
    (country::PAKISTAN, "https://www.google.com.pk"),
];

/// Countries routed through the Fastly profile.
pub const FASTLY_COUNTRIES: [CountryCode; 3] = [country::IRAN, country::CUBA, country::RUSSIA];

/// One Google front and the handshake it must mimic.
#[derive(Debug, Clone)]
struct HostConfig {
    base_url: &'static str,
    host: &'static str,
    tls: TlsProfile,
}

impl HostConfig {
    fn new(base_url: &'static str, tls: TlsProfile) -> Self {
        HostConfig {
            base_url,
            host: GOOGLE_REFLECTOR_HOST,
            tls,
        }
    }
}

fn base_google_host_configs() -> Vec<HostConfig> {
    vec![
        HostConfig::new(GOOGLE_FRONT_WWW, TlsProfile::gmail()),
        HostConfig::new(GOOGLE_FRONT_ANDROID_CLIENTS, TlsProfile::google_play()),
        HostConfig::new(GOOGLE_FRONT_CLIENTS3, TlsProfile::google_maps()),
        HostConfig::new(GOOGLE_FRONT_CLIENTS4, TlsProfile::google_maps()),
        HostConfig::new(GOOGLE_FRONT_INBOX, TlsProfile::gmail()),
    ]
}

fn build_google_profile(
    name: String,
    host_configs: &[HostConfig],
    trust_stores: &TrustStores,
    public_params: &Arc<ServerPublicParams>,
) -> Result<ServiceConfiguration, NetworkAccessError> {
    ServiceFamily::ALL
        .into_iter()
        .fold(
            ServiceConfiguration::builder(name, Arc::clone(public_params)),
            |builder, family| {
                builder.add_urls(
                    family,
                    host_configs.iter().map(|config| {
                        ServiceUrl::fronted(
                            format!("{}{}", config.base_url, family.front_path()),
                            config.host,
                            Arc::clone(&trust_stores.google_fronting),
                            config.tls.clone(),
                        )
                    }),
                )
            },
        )
        .build()
}

/// Routing host for a family on the Fastly network.
fn fastly_host(family: ServiceFamily) -> &'static str {
    match family {
        ServiceFamily::Service => FASTLY_SERVICE_HOST,
        ServiceFamily::Cdn(CdnTier::Tier0) => FASTLY_CDN_HOST,
        ServiceFamily::Cdn(CdnTier::Tier2) => FASTLY_CDN2_HOST,
        ServiceFamily::Cdn(CdnTier::Tier3) => FASTLY_CDN3_HOST,
        ServiceFamily::Storage => FASTLY_STORAGE_HOST,
        ServiceFamily::Cdsi => FASTLY_CDSI_HOST,
        ServiceFamily::Svr2 => FASTLY_SVR2_HOST,
    }
}

fn build_fastly_profile(
    trust_stores: &TrustStores,
    public_params: &Arc<ServerPublicParams>,
) -> Result<ServiceConfiguration, NetworkAccessError> {
    ServiceFamily::ALL
        .into_iter()
        .fold(
            ServiceConfiguration::builder("fastly", Arc::clone(public_params)),
            |builder, family| {
                builder.add_urls(
                    family,
                    FASTLY_FRONTS.iter().map(|front| {
                        ServiceUrl::fronted(
                            *front,
                            fastly_host(family),
                            Arc::clone(&trust_stores.fastly_fronting),
                            TlsProfile::modern(),
                        )
                    }),
                )
            },
        )
        .build()
}

/// Builds the country routing table.
///
/// Countries with a local Google front get that front first, followed by
/// the shared Google fronts. Iran, Cuba and Russia use Fastly. Everything
/// else falls back to the shared Google fronts followed by Fastly.
pub fn build_routing_table(
    trust_stores: &TrustStores,
    public_params: &Arc<ServerPublicParams>,
) -> Result<CountryRoutingTable, NetworkAccessError> {
    let base_google = base_google_host_configs();
    let fastly = Arc::new(build_fastly_profile(trust_stores, public_params)?);

    let default_fronted = build_google_profile(
        "google".to_string(),
        &base_google,
        trust_stores,
        public_params,
    )?
    .merged_with(&fastly, "default-fronted");

    let mut table = CountryRoutingTable::new(Arc::new(default_fronted));

    for (code, front) in GOOGLE_COUNTRY_FRONTS {
        let mut host_configs = vec![HostConfig::new(front, TlsProfile::gmail())];
        host_configs.extend(base_google.iter().cloned());

        let profile = build_google_profile(
            format!("google{}", code),
            &host_configs,
            trust_stores,
            public_params,
        )?;
        table = table.with_entry(code, Arc::new(profile));
    }

    for code in FASTLY_COUNTRIES {
        table = table.with_entry(code, Arc::clone(&fastly));
    }

    Ok(table)
}

/// Every host contacted while fronting: routing hosts and fronts, without
/// protocol.
pub fn fronting_hostnames() -> Vec<&'static str> {
    let mut hosts = vec![GOOGLE_REFLECTOR_HOST];
    hosts.extend(ServiceFamily::ALL.into_iter().map(fastly_host));
    hosts.extend(
        [
            GOOGLE_FRONT_WWW,
            GOOGLE_FRONT_ANDROID_CLIENTS,
            GOOGLE_FRONT_CLIENTS3,
            GOOGLE_FRONT_CLIENTS4,
            GOOGLE_FRONT_INBOX,
        ]
        .into_iter()
        .chain(FASTLY_FRONTS)
        .chain([OPEN_SCDN_CO])
        .chain(GOOGLE_COUNTRY_FRONTS.into_iter().map(|(_, front)| front))
        .map(strip_protocol),
    );
    hosts
}

fn strip_protocol(url: &'static str) -> &'static str {
    url.strip_prefix("https://").unwrap_or(url)
}
