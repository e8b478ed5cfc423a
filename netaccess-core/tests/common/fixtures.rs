// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use netaccess_core::{NetworkAccess, NetworkAccessConfig, PublicParamsConfig, TrustStores};

/// Small but valid base64 public params.
pub fn public_params() -> PublicParamsConfig {
    PublicParamsConfig {
        zkgroup: "AAECAwQFBgc=".to_string(),
        generic: "CAkKCw==".to_string(),
        backup: "DA0ODw==".to_string(),
    }
}

/// Production URLs with test public params.
pub fn config() -> NetworkAccessConfig {
    NetworkAccessConfig::new(public_params())
}

/// A fully built selector over the production tables.
pub fn network_access() -> NetworkAccess {
    NetworkAccess::new(&config(), TrustStores::default()).expect("production tables build")
}
