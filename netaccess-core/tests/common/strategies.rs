// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Phone numbers are generated per country group so properties can state
//! the expected profile without re-implementing the selector.

use netaccess_core::fronting::DEFAULT_CENSORED_COUNTRY_CODES;
use netaccess_core::CensorshipMode;
use proptest::prelude::*;

/// Assigned calling codes that are not censored by default.
pub const UNCENSORED_CODES: [u16; 12] = [1, 27, 33, 44, 49, 55, 61, 81, 86, 91, 234, 380];

/// Strategy for national significant numbers (6 to 12 digits).
pub fn nsn_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{5,11}"
}

/// Strategy for numbers in a country censored by default.
pub fn censored_number_strategy() -> impl Strategy<Value = (u16, String)> {
    (
        prop::sample::select(DEFAULT_CENSORED_COUNTRY_CODES.to_vec()),
        nsn_strategy(),
    )
        .prop_map(|(code, nsn)| (code.value(), format!("+{}{}", code.value(), nsn)))
}

/// Strategy for numbers in a country not censored by default.
pub fn uncensored_number_strategy() -> impl Strategy<Value = (u16, String)> {
    (prop::sample::select(UNCENSORED_CODES.to_vec()), nsn_strategy())
        .prop_map(|(code, nsn)| (code, format!("+{}{}", code, nsn)))
}

/// Strategy for any valid number from either group.
pub fn any_number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        censored_number_strategy().prop_map(|(_, n)| n),
        uncensored_number_strategy().prop_map(|(_, n)| n),
    ]
}

/// Strategy for censorship modes.
pub fn mode_strategy() -> impl Strategy<Value = CensorshipMode> {
    prop_oneof![
        Just(CensorshipMode::Enabled),
        Just(CensorshipMode::Disabled),
        Just(CensorshipMode::Default),
    ]
}

/// Strategy for inputs that are not international-format numbers.
pub fn malformed_number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[1-9][0-9]{6,12}",
        "\\+[a-z]{3,10}",
        Just("+".to_string()),
        Just("+0123456".to_string()),
    ]
}
