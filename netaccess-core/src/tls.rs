// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! TLS Parameter Profiles
//!
//! Each endpoint carries the TLS versions and cipher suites a client must
//! offer when connecting to it. Fronted endpoints mimic the handshake of the
//! front's own first-party clients, so their profiles are restricted to
//! exactly the suites those clients offer.

use serde::{Serialize, Serializer};

/// TLS protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TlsVersion {
    #[serde(rename = "TLSv1.2")]
    Tls1_2,
    #[serde(rename = "TLSv1.3")]
    Tls1_3,
}

/// A TLS cipher suite, identified by its IANA code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherSuite {
    Aes128GcmSha256,
    Aes256GcmSha384,
    Chacha20Poly1305Sha256,
    EcdheEcdsaWithAes128GcmSha256,
    EcdheEcdsaWithAes256GcmSha384,
    EcdheEcdsaWithChacha20Poly1305Sha256,
    EcdheRsaWithAes128GcmSha256,
    EcdheRsaWithAes256GcmSha384,
    EcdheRsaWithChacha20Poly1305Sha256,
    EcdheEcdsaWithAes128CbcSha,
    EcdheEcdsaWithAes256CbcSha,
    EcdheRsaWithAes128CbcSha,
    EcdheRsaWithAes256CbcSha,
    RsaWithAes128GcmSha256,
    RsaWithAes256GcmSha384,
    RsaWithAes128CbcSha,
    RsaWithAes256CbcSha,
}

impl CipherSuite {
    /// Returns the IANA code point.
    pub fn iana_code(self) -> u16 {
        match self {
            CipherSuite::Aes128GcmSha256 => 0x1301,
            CipherSuite::Aes256GcmSha384 => 0x1302,
            CipherSuite::Chacha20Poly1305Sha256 => 0x1303,
            CipherSuite::EcdheEcdsaWithAes128GcmSha256 => 0xC02B,
            CipherSuite::EcdheEcdsaWithAes256GcmSha384 => 0xC02C,
            CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256 => 0xCCA9,
            CipherSuite::EcdheRsaWithAes128GcmSha256 => 0xC02F,
            CipherSuite::EcdheRsaWithAes256GcmSha384 => 0xC030,
            CipherSuite::EcdheRsaWithChacha20Poly1305Sha256 => 0xCCA8,
            CipherSuite::EcdheEcdsaWithAes128CbcSha => 0xC009,
            CipherSuite::EcdheEcdsaWithAes256CbcSha => 0xC00A,
            CipherSuite::EcdheRsaWithAes128CbcSha => 0xC013,
            CipherSuite::EcdheRsaWithAes256CbcSha => 0xC014,
            CipherSuite::RsaWithAes128GcmSha256 => 0x009C,
            CipherSuite::RsaWithAes256GcmSha384 => 0x009D,
            CipherSuite::RsaWithAes128CbcSha => 0x002F,
            CipherSuite::RsaWithAes256CbcSha => 0x0035,
        }
    }

    /// Returns the IANA name (e.g. `TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256`).
    pub fn name(self) -> &'static str {
        match self {
            CipherSuite::Aes128GcmSha256 => "TLS_AES_128_GCM_SHA256",
            CipherSuite::Aes256GcmSha384 => "TLS_AES_256_GCM_SHA384",
            CipherSuite::Chacha20Poly1305Sha256 => "TLS_CHACHA20_POLY1305_SHA256",
            CipherSuite::EcdheEcdsaWithAes128GcmSha256 => {
                "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"
            }
            CipherSuite::EcdheEcdsaWithAes256GcmSha384 => {
                "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"
            }
            CipherSuite::EcdheEcdsaWithChacha20Poly1305Sha256 => {
                "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"
            }
            CipherSuite::EcdheRsaWithAes128GcmSha256 => "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::EcdheRsaWithAes256GcmSha384 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
            CipherSuite::EcdheRsaWithChacha20Poly1305Sha256 => {
                "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256"
            }
            CipherSuite::EcdheEcdsaWithAes128CbcSha => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
            CipherSuite::EcdheEcdsaWithAes256CbcSha => "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
            CipherSuite::EcdheRsaWithAes128CbcSha => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
            CipherSuite::EcdheRsaWithAes256CbcSha => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
            CipherSuite::RsaWithAes128GcmSha256 => "TLS_RSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::RsaWithAes256GcmSha384 => "TLS_RSA_WITH_AES_256_GCM_SHA384",
            CipherSuite::RsaWithAes128CbcSha => "TLS_RSA_WITH_AES_128_CBC_SHA",
            CipherSuite::RsaWithAes256CbcSha => "TLS_RSA_WITH_AES_256_CBC_SHA",
        }
    }
}

impl Serialize for CipherSuite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Allowed protocol versions and cipher suites for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsProfile {
    /// Protocol versions the client may negotiate.
    pub versions: Vec<TlsVersion>,
    /// Cipher suites offered, in preference order.
    pub cipher_suites: Vec<CipherSuite>,
    /// Whether TLS extensions (SNI, ALPN) are sent.
    pub supports_tls_extensions: bool,
}

impl TlsProfile {
    /// Modern TLS: 1.3 and 1.2 with the approved AEAD-first suite list.
    pub fn modern() -> Self {
        use CipherSuite::*;
        TlsProfile {
            versions: vec![TlsVersion::Tls1_3, TlsVersion::Tls1_2],
            cipher_suites: vec![
                Aes128GcmSha256,
                Aes256GcmSha384,
                Chacha20Poly1305Sha256,
                EcdheEcdsaWithAes128GcmSha256,
                EcdheRsaWithAes128GcmSha256,
                EcdheEcdsaWithAes256GcmSha384,
                EcdheRsaWithAes256GcmSha384,
                EcdheEcdsaWithChacha20Poly1305Sha256,
                EcdheRsaWithChacha20Poly1305Sha256,
                EcdheRsaWithAes128CbcSha,
                EcdheRsaWithAes256CbcSha,
                RsaWithAes128GcmSha256,
                RsaWithAes256GcmSha384,
                RsaWithAes128CbcSha,
                RsaWithAes256CbcSha,
            ],
            supports_tls_extensions: true,
        }
    }

    /// Handshake shape of the Google Maps client.
    pub fn google_maps() -> Self {
        use CipherSuite::*;
        TlsProfile {
            versions: vec![TlsVersion::Tls1_2],
            cipher_suites: vec![
                EcdheEcdsaWithChacha20Poly1305Sha256,
                EcdheEcdsaWithAes128GcmSha256,
                EcdheEcdsaWithAes256GcmSha384,
                EcdheRsaWithChacha20Poly1305Sha256,
                EcdheRsaWithAes128GcmSha256,
                EcdheRsaWithAes256GcmSha384,
                EcdheEcdsaWithAes128CbcSha,
                EcdheEcdsaWithAes256CbcSha,
                EcdheRsaWithAes128CbcSha,
                EcdheRsaWithAes256CbcSha,
                RsaWithAes128GcmSha256,
                RsaWithAes256GcmSha384,
                RsaWithAes128CbcSha,
                RsaWithAes256CbcSha,
            ],
            supports_tls_extensions: true,
        }
    }

    /// Handshake shape of the Gmail client.
    pub fn gmail() -> Self {
        TlsProfile {
            versions: vec![TlsVersion::Tls1_2],
            cipher_suites: google_legacy_suites(),
            supports_tls_extensions: true,
        }
    }

    /// Handshake shape of the Google Play client.
    ///
    /// Offers the same suites as Gmail today; kept separate so the two can
    /// diverge without touching the host tables.
    pub fn google_play() -> Self {
        TlsProfile {
            versions: vec![TlsVersion::Tls1_2],
            cipher_suites: google_legacy_suites(),
            supports_tls_extensions: true,
        }
    }

    /// Returns true if `version` may be negotiated.
    pub fn allows_version(&self, version: TlsVersion) -> bool {
        self.versions.contains(&version)
    }
}

fn google_legacy_suites() -> Vec<CipherSuite> {
    use CipherSuite::*;
    vec![
        EcdheEcdsaWithAes128GcmSha256,
        EcdheRsaWithAes128GcmSha256,
        EcdheEcdsaWithAes256CbcSha,
        EcdheEcdsaWithAes128CbcSha,
        EcdheRsaWithAes128CbcSha,
        EcdheRsaWithAes256CbcSha,
        RsaWithAes128GcmSha256,
        RsaWithAes128CbcSha,
        RsaWithAes256CbcSha,
    ]
}

#[cfg(feature = "rustls")]
mod rustls_support {
    use super::{TlsProfile, TlsVersion};
    use crate::error::NetworkAccessError;
    use rustls::crypto::{ring, CryptoProvider};
    use rustls::{ClientConfig, RootCertStore, SupportedCipherSuite, SupportedProtocolVersion};
    use std::sync::Arc;

    impl TlsProfile {
        /// Cipher suites of this profile that the ring provider implements,
        /// in the profile's preference order.
        ///
        /// CBC and static-RSA suites are not implemented by rustls and are
        /// silently dropped.
        pub fn rustls_cipher_suites(&self) -> Vec<SupportedCipherSuite> {
            self.cipher_suites
                .iter()
                .filter_map(|wanted| {
                    ring::ALL_CIPHER_SUITES
                        .iter()
                        .find(|supported| u16::from(supported.suite()) == wanted.iana_code())
                        .copied()
                })
                .collect()
        }

        /// Protocol versions of this profile as rustls versions.
        pub fn rustls_protocol_versions(&self) -> Vec<&'static SupportedProtocolVersion> {
            self.versions
                .iter()
                .map(|version| match version {
                    TlsVersion::Tls1_2 => &rustls::version::TLS12,
                    TlsVersion::Tls1_3 => &rustls::version::TLS13,
                })
                .collect()
        }

        /// Builds a rustls client configuration restricted to this profile.
        ///
        /// SNI is the only extension rustls lets callers switch off, so
        /// `supports_tls_extensions` controls SNI alone.
        pub fn client_config(&self, roots: RootCertStore) -> Result<ClientConfig, NetworkAccessError> {
            let cipher_suites = self.rustls_cipher_suites();
            if cipher_suites.is_empty() {
                return Err(NetworkAccessError::NoSupportedCipherSuites);
            }

            let provider = CryptoProvider {
                cipher_suites,
                ..ring::default_provider()
            };

            let mut config = ClientConfig::builder_with_provider(Arc::new(provider))
                .with_protocol_versions(&self.rustls_protocol_versions())?
                .with_root_certificates(roots)
                .with_no_client_auth();
            config.enable_sni = self.supports_tls_extensions;

            Ok(config)
        }
    }
}
