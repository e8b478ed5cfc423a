// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server public parameters embedded at build time.
//!
//! The bytes are opaque here; group, credential and backup protocols in
//! higher layers interpret them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::NetworkAccessError;

/// Base64-encoded public params as they appear in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicParamsConfig {
    pub zkgroup: String,
    pub generic: String,
    pub backup: String,
}

/// Decoded server public params shared by every profile.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerPublicParams {
    zkgroup: Vec<u8>,
    generic: Vec<u8>,
    backup: Vec<u8>,
}

impl ServerPublicParams {
    /// Wraps already-decoded params.
    pub fn new(zkgroup: Vec<u8>, generic: Vec<u8>, backup: Vec<u8>) -> Self {
        ServerPublicParams {
            zkgroup,
            generic,
            backup,
        }
    }

    /// Decodes the configured base64 params.
    pub fn decode(config: &PublicParamsConfig) -> Result<Self, NetworkAccessError> {
        Ok(ServerPublicParams {
            zkgroup: decode_param("zkgroup", &config.zkgroup)?,
            generic: decode_param("generic", &config.generic)?,
            backup: decode_param("backup", &config.backup)?,
        })
    }

    pub fn zkgroup(&self) -> &[u8] {
        &self.zkgroup
    }

    pub fn generic(&self) -> &[u8] {
        &self.generic
    }

    pub fn backup(&self) -> &[u8] {
        &self.backup
    }
}

fn decode_param(name: &'static str, encoded: &str) -> Result<Vec<u8>, NetworkAccessError> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|source| NetworkAccessError::InvalidPublicParams { name, source })
}

impl fmt::Debug for ServerPublicParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerPublicParams")
            .field("zkgroup_len", &self.zkgroup.len())
            .field("generic_len", &self.generic.len())
            .field("backup_len", &self.backup.len())
            .finish()
    }
}

impl Serialize for ServerPublicParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PublicParamsConfig {
            zkgroup: STANDARD.encode(&self.zkgroup),
            generic: STANDARD.encode(&self.generic),
            backup: STANDARD.encode(&self.backup),
        }
        .serialize(serializer)
    }
}
