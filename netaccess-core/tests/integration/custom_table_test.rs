// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Injected tables and parsers replace the production ones.

use std::sync::Arc;

use netaccess_core::{
    CensorshipMode, CountryCode, CountryCodeParser, CountryRoutingTable, NetworkAccess,
    NetworkAccessError, PhoneNumberError, ServerPublicParams, ServiceConfiguration, ServiceFamily,
    ServiceUrl, TlsProfile, TrustStore, TrustStoreKind,
};

fn profile(name: &str, fronted: bool) -> ServiceConfiguration {
    let params = Arc::new(ServerPublicParams::new(vec![1], vec![2], vec![3]));
    let store = Arc::new(TrustStore::new(TrustStoreKind::Service));

    ServiceFamily::ALL
        .into_iter()
        .fold(ServiceConfiguration::builder(name, params), |builder, family| {
            let url = format!("https://{}.{}.test", family, name);
            let endpoint = if fronted {
                ServiceUrl::fronted(url, "real.test", Arc::clone(&store), TlsProfile::modern())
            } else {
                ServiceUrl::direct(url, Arc::clone(&store))
            };
            builder.add_url(family, endpoint)
        })
        .build()
        .unwrap()
}

/// Treats the first digit after '+' as the whole country code.
struct FirstDigitParser;

impl CountryCodeParser for FirstDigitParser {
    fn country_code(&self, number: &str) -> Result<CountryCode, PhoneNumberError> {
        number
            .strip_prefix('+')
            .and_then(|rest| rest.chars().next())
            .and_then(|c| c.to_digit(10))
            .map(|d| CountryCode::new(d as u16))
            .ok_or(PhoneNumberError::NotANumber)
    }
}

fn access() -> NetworkAccess {
    let table = CountryRoutingTable::new(Arc::new(profile("fallback", true)))
        .with_entry(CountryCode::new(3), Arc::new(profile("three", true)));

    NetworkAccess::builder(profile("direct", false), table)
        .default_censored([CountryCode::new(3), CountryCode::new(4)])
        .parser(Arc::new(FirstDigitParser))
        .extra_hostname("calls.test")
        .build()
        .unwrap()
}

#[test]
fn test_injected_table_and_censored_set() {
    let access = access();

    let three = access.resolve(Some("+3999"), CensorshipMode::Default).unwrap();
    assert_eq!(three.name(), "three");

    // Censored but no entry: default fronted profile
    let four = access.resolve(Some("+4999"), CensorshipMode::Default).unwrap();
    assert_eq!(four.name(), "fallback");

    let five = access.resolve(Some("+5999"), CensorshipMode::Default).unwrap();
    assert_eq!(five.name(), "direct");

    assert!(access.is_country_code_censored_by_default(CountryCode::new(4)));
    assert!(!access.is_country_code_censored_by_default(CountryCode::new(98)));
}

#[test]
fn test_injected_parser_errors_propagate() {
    let access = access();
    assert!(matches!(
        access.resolve(Some("no plus"), CensorshipMode::Enabled),
        Err(NetworkAccessError::InvalidPhoneNumber(PhoneNumberError::NotANumber))
    ));
}

#[test]
fn test_hostnames_cover_urls_host_headers_and_extras() {
    let access = access();
    let hosts: Vec<&str> = access.known_hostnames().collect();

    assert!(hosts.contains(&"service.direct.test"));
    assert!(hosts.contains(&"cdn3.three.test"));
    assert!(hosts.contains(&"real.test"));
    assert!(hosts.contains(&"calls.test"));
}
