// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property tests for NetworkAccess::resolve

mod common;

use common::fixtures::network_access;
use common::strategies::*;
use netaccess_core::{CensorshipMode, CountryCode, NetworkAccessError, ServiceFamily};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_censored_country_default_mode_is_fronted((code, number) in censored_number_strategy()) {
        let access = network_access();
        let profile = access.resolve(Some(&number), CensorshipMode::Default).unwrap();

        prop_assert_ne!(profile, access.uncensored());
        prop_assert!(profile.is_fronted());
        prop_assert!(access.is_country_code_censored_by_default(CountryCode::new(code)));
    }

    #[test]
    fn prop_uncensored_country_default_mode_is_direct((code, number) in uncensored_number_strategy()) {
        let access = network_access();
        let profile = access.resolve(Some(&number), CensorshipMode::Default).unwrap();

        prop_assert_eq!(profile, access.uncensored());
        prop_assert!(!access.is_country_code_censored_by_default(CountryCode::new(code)));
    }

    #[test]
    fn prop_no_number_is_uncensored(mode in mode_strategy()) {
        let access = network_access();
        prop_assert_eq!(access.resolve(None, mode).unwrap(), access.uncensored());
    }

    #[test]
    fn prop_disabled_is_always_uncensored(number in any_number_strategy()) {
        let access = network_access();
        let profile = access.resolve(Some(&number), CensorshipMode::Disabled).unwrap();
        prop_assert_eq!(profile, access.uncensored());
    }

    #[test]
    fn prop_enabled_is_never_uncensored(number in any_number_strategy()) {
        let access = network_access();
        let profile = access.resolve(Some(&number), CensorshipMode::Enabled).unwrap();

        prop_assert_ne!(profile, access.uncensored());
        for family in ServiceFamily::ALL {
            prop_assert!(!profile.urls(family).is_empty());
        }
    }

    #[test]
    fn prop_is_censored_matches_resolve(number in any_number_strategy(), mode in mode_strategy()) {
        let access = network_access();
        let resolved = access.resolve(Some(&number), mode).unwrap();
        let censored = access.is_censored(Some(&number), mode).unwrap();

        prop_assert_eq!(censored, resolved != access.uncensored());
    }

    #[test]
    fn prop_resolve_is_idempotent(number in any_number_strategy(), mode in mode_strategy()) {
        let access = network_access();
        let first = access.resolve(Some(&number), mode).unwrap().clone();
        let second = access.resolve(Some(&number), mode).unwrap();

        prop_assert_eq!(&first, second);
    }

    #[test]
    fn prop_malformed_number_is_an_error(number in malformed_number_strategy(), mode in mode_strategy()) {
        let access = network_access();
        let result = access.resolve(Some(&number), mode);

        prop_assert!(matches!(result, Err(NetworkAccessError::InvalidPhoneNumber(_))));
        prop_assert_eq!(access.resolve_or_uncensored(Some(&number), mode), access.uncensored());
    }
}
