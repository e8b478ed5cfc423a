// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for error display messages

use netaccess_core::{CdnTier, NetworkAccessError, PhoneNumberError, ServiceFamily};

#[test]
fn test_error_display_messages() {
    let errors = vec![
        (
            NetworkAccessError::InvalidPhoneNumber(PhoneNumberError::MissingPlus),
            "Invalid phone number: Number is not in international format (missing leading '+')",
        ),
        (
            NetworkAccessError::EmptyEndpointList(ServiceFamily::Cdn(CdnTier::Tier2)),
            "No endpoints configured for cdn2",
        ),
        (NetworkAccessError::UnknownCdnTier(1), "Unknown CDN tier: 1"),
        (
            NetworkAccessError::InvalidUrl {
                url: "nope".into(),
                reason: "relative URL without a base".into(),
            },
            "Invalid URL 'nope': relative URL without a base",
        ),
    ];

    for (error, expected) in errors {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn test_phone_error_converts() {
    let error: NetworkAccessError = PhoneNumberError::TooShort.into();
    assert!(matches!(
        error,
        NetworkAccessError::InvalidPhoneNumber(PhoneNumberError::TooShort)
    ));
}
