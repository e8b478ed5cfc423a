// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for building network access profiles

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::NetworkAccessError;
use crate::params::PublicParamsConfig;
use crate::profile::validate_url;

/// Direct service URLs (defaults are the production hosts)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerUrls {
    /// Chat/message service
    pub service: String,
    /// Storage service
    pub storage: String,
    /// CDN tier 0
    pub cdn: String,
    /// CDN tier 2
    pub cdn2: String,
    /// CDN tier 3
    pub cdn3: String,
    /// Contact discovery
    pub cdsi: String,
    /// Secure value recovery
    pub svr2: String,
    /// Calling selective forwarding unit
    pub sfu: String,
    /// Staging calling selective forwarding unit
    pub staging_sfu: String,
    /// Link preview content proxy (host, not URL)
    pub content_proxy_host: String,
}

impl Default for ServerUrls {
    fn default() -> Self {
        Self {
            service: "https://chat.signal.org".to_string(),
            storage: "https://storage.signal.org".to_string(),
            cdn: "https://cdn.signal.org".to_string(),
            cdn2: "https://cdn2.signal.org".to_string(),
            cdn3: "https://cdn3.signal.org".to_string(),
            cdsi: "https://cdsi.signal.org".to_string(),
            svr2: "https://svr2.signal.org".to_string(),
            sfu: "https://sfu.voip.signal.org".to_string(),
            staging_sfu: "https://sfu.staging.voip.signal.org".to_string(),
            content_proxy_host: "contentproxy.signal.org".to_string(),
        }
    }
}

impl ServerUrls {
    /// All service URLs (content proxy excluded)
    pub fn urls(&self) -> [&str; 9] {
        [
            self.service.as_str(),
            self.storage.as_str(),
            self.cdn.as_str(),
            self.cdn2.as_str(),
            self.cdn3.as_str(),
            self.cdsi.as_str(),
            self.svr2.as_str(),
            self.sfu.as_str(),
            self.staging_sfu.as_str(),
        ]
    }

    /// Check every URL parses with a host
    pub fn validate(&self) -> Result<(), NetworkAccessError> {
        for url in self.urls() {
            validate_url(url)?;
        }
        if self.content_proxy_host.is_empty() || self.content_proxy_host.contains('/') {
            return Err(NetworkAccessError::InvalidUrl {
                url: self.content_proxy_host.clone(),
                reason: "content proxy must be a bare host".to_string(),
            });
        }
        Ok(())
    }

    /// Hostnames of every configured URL plus the content proxy host
    pub fn hostnames(&self) -> Result<Vec<String>, NetworkAccessError> {
        let mut hosts = Vec::with_capacity(10);
        for url in self.urls() {
            let parsed = validate_url(url)?;
            if let Some(host) = parsed.host_str() {
                hosts.push(host.to_string());
            }
        }
        hosts.push(self.content_proxy_host.clone());
        Ok(hosts)
    }
}

/// Everything needed to build the profiles at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAccessConfig {
    /// Direct service URLs
    #[serde(default)]
    pub urls: ServerUrls,

    /// Base64 server public params
    pub public_params: PublicParamsConfig,
}

impl NetworkAccessConfig {
    /// Production URLs with the given public params
    pub fn new(public_params: PublicParamsConfig) -> Self {
        Self {
            urls: ServerUrls::default(),
            public_params,
        }
    }

    /// Override the direct service URLs
    pub fn with_urls(mut self, urls: ServerUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, NetworkAccessError> {
        let config: NetworkAccessConfig = serde_json::from_str(json)?;
        config.urls.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, NetworkAccessError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_json() -> &'static str {
        r#"{"zkgroup": "AQID", "generic": "BAU=", "backup": "Bg=="}"#
    }

    #[test]
    fn test_default_urls_are_valid() {
        ServerUrls::default().validate().unwrap();
    }

    #[test]
    fn test_from_json_uses_default_urls() {
        let json = format!(r#"{{"public_params": {}}}"#, params_json());
        let config = NetworkAccessConfig::from_json(&json).unwrap();

        assert_eq!(config.urls, ServerUrls::default());
        assert_eq!(config.public_params.zkgroup, "AQID");
    }

    #[test]
    fn test_from_json_partial_url_override() {
        let json = format!(
            r#"{{"urls": {{"service": "https://chat.staging.example"}}, "public_params": {}}}"#,
            params_json()
        );
        let config = NetworkAccessConfig::from_json(&json).unwrap();

        assert_eq!(config.urls.service, "https://chat.staging.example");
        assert_eq!(config.urls.storage, "https://storage.signal.org");
    }

    #[test]
    fn test_from_json_requires_public_params() {
        assert!(matches!(
            NetworkAccessConfig::from_json("{}"),
            Err(NetworkAccessError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_url() {
        let json = format!(
            r#"{{"urls": {{"cdn": "cdn without scheme"}}, "public_params": {}}}"#,
            params_json()
        );
        assert!(matches!(
            NetworkAccessConfig::from_json(&json),
            Err(NetworkAccessError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_with_urls_replaces_defaults() {
        let urls = ServerUrls {
            cdsi: "https://cdsi.staging.example".to_string(),
            ..ServerUrls::default()
        };
        let params: PublicParamsConfig = serde_json::from_str(params_json()).unwrap();
        let config = NetworkAccessConfig::new(params).with_urls(urls.clone());

        assert_eq!(config.urls, urls);
        assert!(config
            .urls
            .hostnames()
            .unwrap()
            .contains(&"cdsi.staging.example".to_string()));
    }

    #[test]
    fn test_hostnames() {
        let hosts = ServerUrls::default().hostnames().unwrap();
        assert!(hosts.contains(&"chat.signal.org".to_string()));
        assert!(hosts.contains(&"sfu.staging.voip.signal.org".to_string()));
        assert!(hosts.contains(&"contentproxy.signal.org".to_string()));
        assert_eq!(hosts.len(), 10);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.json");
        fs::write(&path, format!(r#"{{"public_params": {}}}"#, params_json())).unwrap();

        let config = NetworkAccessConfig::load(&path).unwrap();
        assert_eq!(config.public_params.backup, "Bg==");
    }
}
