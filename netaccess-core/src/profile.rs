// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Service Configuration Profiles
//!
//! A [`ServiceConfiguration`] bundles the candidate endpoints for every
//! service family together with the shared public params and interceptor
//! chain. Profiles are built once and never mutated; the transport tries the
//! candidates of a family in order and keeps the first reachable one.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use url::Url;

use crate::endpoint::{CdnTier, RequestInterceptor, ServiceFamily, ServiceUrl};
use crate::error::NetworkAccessError;
use crate::params::ServerPublicParams;

/// Endpoints for every service family plus shared parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfiguration {
    name: String,
    service_urls: Vec<ServiceUrl>,
    cdn_urls: BTreeMap<CdnTier, Vec<ServiceUrl>>,
    storage_urls: Vec<ServiceUrl>,
    cdsi_urls: Vec<ServiceUrl>,
    svr2_urls: Vec<ServiceUrl>,
    interceptors: Vec<RequestInterceptor>,
    #[serde(skip)]
    public_params: Arc<ServerPublicParams>,
}

impl ServiceConfiguration {
    /// Create a new builder
    pub fn builder(
        name: impl Into<String>,
        public_params: Arc<ServerPublicParams>,
    ) -> ServiceConfigurationBuilder {
        ServiceConfigurationBuilder::new(name, public_params)
    }

    /// Profile name, for logs and diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidate endpoints for a family, in fallback order. Never empty.
    pub fn urls(&self, family: ServiceFamily) -> &[ServiceUrl] {
        match family {
            ServiceFamily::Service => &self.service_urls,
            ServiceFamily::Cdn(tier) => self.cdn_urls(tier),
            ServiceFamily::Storage => &self.storage_urls,
            ServiceFamily::Cdsi => &self.cdsi_urls,
            ServiceFamily::Svr2 => &self.svr2_urls,
        }
    }

    pub fn service_urls(&self) -> &[ServiceUrl] {
        &self.service_urls
    }

    pub fn cdn_urls(&self, tier: CdnTier) -> &[ServiceUrl] {
        self.cdn_urls.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// CDN endpoints by numeric tier identifier (0, 2 or 3).
    pub fn cdn_urls_by_number(&self, tier: u8) -> Result<&[ServiceUrl], NetworkAccessError> {
        Ok(self.cdn_urls(CdnTier::try_from(tier)?))
    }

    pub fn storage_urls(&self) -> &[ServiceUrl] {
        &self.storage_urls
    }

    pub fn cdsi_urls(&self) -> &[ServiceUrl] {
        &self.cdsi_urls
    }

    pub fn svr2_urls(&self) -> &[ServiceUrl] {
        &self.svr2_urls
    }

    pub fn interceptors(&self) -> &[RequestInterceptor] {
        &self.interceptors
    }

    pub fn public_params(&self) -> &ServerPublicParams {
        &self.public_params
    }

    /// Returns true if any endpoint routes through a front.
    pub fn is_fronted(&self) -> bool {
        ServiceFamily::ALL
            .iter()
            .any(|family| self.urls(*family).iter().any(ServiceUrl::is_fronted))
    }

    /// Iterates over every endpoint of every family.
    pub fn all_urls(&self) -> impl Iterator<Item = &ServiceUrl> {
        ServiceFamily::ALL
            .into_iter()
            .flat_map(move |family| self.urls(family).iter())
    }

    /// Concatenates the candidates of `other` after this profile's, family
    /// by family. Interceptors and public params are taken from `self`.
    pub fn merged_with(&self, other: &ServiceConfiguration, name: impl Into<String>) -> Self {
        let concat = |a: &[ServiceUrl], b: &[ServiceUrl]| -> Vec<ServiceUrl> {
            a.iter().chain(b.iter()).cloned().collect()
        };

        ServiceConfiguration {
            name: name.into(),
            service_urls: concat(&self.service_urls, &other.service_urls),
            cdn_urls: CdnTier::ALL
                .into_iter()
                .map(|tier| (tier, concat(self.cdn_urls(tier), other.cdn_urls(tier))))
                .collect(),
            storage_urls: concat(&self.storage_urls, &other.storage_urls),
            cdsi_urls: concat(&self.cdsi_urls, &other.cdsi_urls),
            svr2_urls: concat(&self.svr2_urls, &other.svr2_urls),
            interceptors: self.interceptors.clone(),
            public_params: Arc::clone(&self.public_params),
        }
    }
}

/// Builder for ServiceConfiguration
#[derive(Debug)]
pub struct ServiceConfigurationBuilder {
    name: String,
    urls: HashMap<ServiceFamily, Vec<ServiceUrl>>,
    interceptors: Vec<RequestInterceptor>,
    public_params: Arc<ServerPublicParams>,
}

impl ServiceConfigurationBuilder {
    /// Create a new builder with the default interceptor chain
    pub fn new(name: impl Into<String>, public_params: Arc<ServerPublicParams>) -> Self {
        ServiceConfigurationBuilder {
            name: name.into(),
            urls: HashMap::new(),
            interceptors: RequestInterceptor::DEFAULT_CHAIN.to_vec(),
            public_params,
        }
    }

    /// Append a candidate endpoint for a family
    pub fn add_url(mut self, family: ServiceFamily, url: ServiceUrl) -> Self {
        self.urls.entry(family).or_default().push(url);
        self
    }

    /// Append several candidate endpoints for a family
    pub fn add_urls(
        mut self,
        family: ServiceFamily,
        urls: impl IntoIterator<Item = ServiceUrl>,
    ) -> Self {
        self.urls.entry(family).or_default().extend(urls);
        self
    }

    /// Replace the interceptor chain
    pub fn interceptors(mut self, interceptors: Vec<RequestInterceptor>) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// Build the profile
    ///
    /// Every family needs at least one candidate and every URL must parse
    /// with a host.
    pub fn build(mut self) -> Result<ServiceConfiguration, NetworkAccessError> {
        for family in ServiceFamily::ALL {
            let urls = self.urls.get(&family).map(Vec::as_slice).unwrap_or(&[]);
            if urls.is_empty() {
                return Err(NetworkAccessError::EmptyEndpointList(family));
            }
            for url in urls {
                validate_url(url.url())?;
            }
        }

        let mut take = |family: ServiceFamily| self.urls.remove(&family).unwrap_or_default();

        Ok(ServiceConfiguration {
            service_urls: take(ServiceFamily::Service),
            cdn_urls: CdnTier::ALL
                .into_iter()
                .map(|tier| (tier, take(ServiceFamily::Cdn(tier))))
                .collect(),
            storage_urls: take(ServiceFamily::Storage),
            cdsi_urls: take(ServiceFamily::Cdsi),
            svr2_urls: take(ServiceFamily::Svr2),
            name: self.name,
            interceptors: self.interceptors,
            public_params: self.public_params,
        })
    }
}

/// Checks that `url` parses and names a host.
pub(crate) fn validate_url(url: &str) -> Result<Url, NetworkAccessError> {
    let parsed = Url::parse(url).map_err(|e| NetworkAccessError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().is_none() {
        return Err(NetworkAccessError::InvalidUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::TlsProfile;
    use crate::trust::{TrustStore, TrustStoreKind};

    fn params() -> Arc<ServerPublicParams> {
        Arc::new(ServerPublicParams::new(vec![1], vec![2], vec![3]))
    }

    fn store() -> Arc<TrustStore> {
        Arc::new(TrustStore::new(TrustStoreKind::Service))
    }

    fn direct_builder(host: &str) -> ServiceConfigurationBuilder {
        ServiceFamily::ALL.into_iter().fold(
            ServiceConfiguration::builder(host, params()),
            |builder, family| {
                builder.add_url(
                    family,
                    ServiceUrl::direct(format!("https://{}.{}", family, host), store()),
                )
            },
        )
    }

    #[test]
    fn test_build_complete_profile() {
        let profile = direct_builder("example.org").build().unwrap();

        assert_eq!(profile.name(), "example.org");
        assert_eq!(profile.service_urls()[0].url(), "https://service.example.org");
        assert_eq!(
            profile.cdn_urls(CdnTier::Tier3)[0].url(),
            "https://cdn3.example.org"
        );
        assert_eq!(profile.interceptors(), &RequestInterceptor::DEFAULT_CHAIN);
        assert!(!profile.is_fronted());
        assert_eq!(profile.all_urls().count(), 7);
    }

    #[test]
    fn test_build_rejects_missing_family() {
        let result = ServiceConfiguration::builder("partial", params())
            .add_url(
                ServiceFamily::Service,
                ServiceUrl::direct("https://chat.example.org", store()),
            )
            .build();

        assert!(matches!(
            result,
            Err(NetworkAccessError::EmptyEndpointList(ServiceFamily::Cdn(CdnTier::Tier0)))
        ));
    }

    #[test]
    fn test_build_rejects_unparseable_url() {
        let result = direct_builder("example.org")
            .add_url(ServiceFamily::Storage, ServiceUrl::direct("not a url", store()))
            .build();

        assert!(matches!(result, Err(NetworkAccessError::InvalidUrl { .. })));
    }

    #[test]
    fn test_cdn_urls_by_number() {
        let profile = direct_builder("example.org").build().unwrap();

        assert_eq!(
            profile.cdn_urls_by_number(2).unwrap()[0].url(),
            "https://cdn2.example.org"
        );
        assert!(matches!(
            profile.cdn_urls_by_number(1),
            Err(NetworkAccessError::UnknownCdnTier(1))
        ));
    }

    #[test]
    fn test_merged_with_concatenates_in_order() {
        let first = direct_builder("one.org").build().unwrap();
        let second = ServiceFamily::ALL
            .into_iter()
            .fold(
                ServiceConfiguration::builder("two", params()),
                |builder, family| {
                    builder.add_url(
                        family,
                        ServiceUrl::fronted(
                            "https://front.example",
                            format!("{}.two.org", family),
                            store(),
                            TlsProfile::modern(),
                        ),
                    )
                },
            )
            .build()
            .unwrap();

        let merged = first.merged_with(&second, "both");

        assert_eq!(merged.name(), "both");
        for family in ServiceFamily::ALL {
            let urls = merged.urls(family);
            assert_eq!(urls.len(), 2);
            assert!(!urls[0].is_fronted());
            assert!(urls[1].is_fronted());
        }
        assert!(merged.is_fronted());
    }

    #[test]
    fn test_equal_profiles_compare_equal() {
        let a = direct_builder("example.org").build().unwrap();
        let b = direct_builder("example.org").build().unwrap();
        assert_eq!(a, b);
    }
}
