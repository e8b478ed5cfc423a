// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Trust Anchors
//!
//! Every endpoint names the root-of-trust bundle its server certificate must
//! chain to. Direct endpoints use the service's own roots; fronted endpoints
//! validate against the front's public CA. A store may additionally carry
//! SHA-256 pins of DER-encoded certificates.

use ring::digest;
use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::error::NetworkAccessError;

/// Which root-of-trust bundle a store represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustStoreKind {
    /// Roots for the service's own hosts.
    Service,
    /// Roots for Google-fronted endpoints.
    GoogleFronting,
    /// DigiCert roots for Fastly-fronted endpoints.
    FastlyFronting,
}

/// SHA-256 fingerprint of a DER-encoded certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinnedCertificate([u8; 32]);

impl PinnedCertificate {
    pub fn new(fingerprint: [u8; 32]) -> Self {
        PinnedCertificate(fingerprint)
    }

    /// Fingerprints DER-encoded certificate bytes.
    pub fn from_der(cert_der: &[u8]) -> Self {
        let mut fingerprint = [0u8; 32];
        fingerprint.copy_from_slice(digest::digest(&digest::SHA256, cert_der).as_ref());
        PinnedCertificate(fingerprint)
    }

    /// Parses a hex-encoded fingerprint (colons allowed, as printed by openssl).
    pub fn from_hex(fingerprint: &str) -> Result<Self, NetworkAccessError> {
        let cleaned: String = fingerprint.chars().filter(|c| *c != ':').collect();
        let bytes = hex::decode(&cleaned)
            .map_err(|e| NetworkAccessError::InvalidPin(e.to_string()))?;
        let fingerprint: [u8; 32] = bytes
            .try_into()
            .map_err(|_| NetworkAccessError::InvalidPin("expected 32 bytes".into()))?;
        Ok(PinnedCertificate(fingerprint))
    }

    pub fn fingerprint(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// A root-of-trust bundle reference with optional certificate pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustStore {
    kind: TrustStoreKind,
    pins: Vec<PinnedCertificate>,
}

impl TrustStore {
    /// Creates a store that defers entirely to the bundle's roots.
    pub fn new(kind: TrustStoreKind) -> Self {
        TrustStore {
            kind,
            pins: Vec::new(),
        }
    }

    /// Adds a certificate pin.
    pub fn with_pin(mut self, pin: PinnedCertificate) -> Self {
        self.pins.push(pin);
        self
    }

    pub fn kind(&self) -> TrustStoreKind {
        self.kind
    }

    pub fn pins(&self) -> &[PinnedCertificate] {
        &self.pins
    }

    /// Returns true if any pins are configured.
    pub fn is_pinned(&self) -> bool {
        !self.pins.is_empty()
    }

    /// Checks a DER-encoded certificate against the pins.
    ///
    /// An unpinned store accepts every certificate; chain validation against
    /// the bundle's roots is the transport's job.
    pub fn verify(&self, cert_der: &[u8]) -> bool {
        if self.pins.is_empty() {
            return true;
        }
        self.pins.contains(&PinnedCertificate::from_der(cert_der))
    }
}

impl Serialize for TrustStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind.serialize(serializer)
    }
}

/// The three trust stores shared by every profile.
#[derive(Debug, Clone)]
pub struct TrustStores {
    pub service: Arc<TrustStore>,
    pub google_fronting: Arc<TrustStore>,
    pub fastly_fronting: Arc<TrustStore>,
}

impl Default for TrustStores {
    fn default() -> Self {
        TrustStores {
            service: Arc::new(TrustStore::new(TrustStoreKind::Service)),
            google_fronting: Arc::new(TrustStore::new(TrustStoreKind::GoogleFronting)),
            fastly_fronting: Arc::new(TrustStore::new(TrustStoreKind::FastlyFronting)),
        }
    }
}
