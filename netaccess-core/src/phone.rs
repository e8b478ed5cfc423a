// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phone Number Country Codes
//!
//! Extracts the ITU-T E.164 country calling code from a phone number in
//! international format. Only the calling code matters for endpoint
//! selection, so no per-region number validation is performed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum length of the national significant number.
pub const MIN_NSN_LENGTH: usize = 2;

/// Maximum length of the national significant number.
pub const MAX_NSN_LENGTH: usize = 17;

/// Digits required before vanity letters are accepted.
pub const MIN_DIGITS_BEFORE_LETTERS: usize = 3;

/// Errors produced while extracting a country calling code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("Number is not in international format (missing leading '+')")]
    MissingPlus,

    #[error("Input is not a phone number")]
    NotANumber,

    #[error("No assigned country calling code matches the number")]
    InvalidCountryCode,

    #[error("National number is too short")]
    TooShort,

    #[error("National number is too long")]
    TooLong,
}

/// An ITU-T E.164 country calling code (e.g. 1, 20, 998).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(u16);

impl CountryCode {
    /// Creates a country code from its numeric value.
    pub const fn new(code: u16) -> Self {
        CountryCode(code)
    }

    /// Returns the numeric value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns true if the code is in the ITU assigned calling code table.
    pub fn is_assigned(self) -> bool {
        ASSIGNED_CALLING_CODES.binary_search(&self.0).is_ok()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

impl From<u16> for CountryCode {
    fn from(code: u16) -> Self {
        CountryCode(code)
    }
}

/// Extracts a country calling code from a phone number.
///
/// Implementations must be pure: the same input always yields the same
/// result.
pub trait CountryCodeParser: Send + Sync {
    /// Parses `number` and returns its country calling code.
    fn country_code(&self, number: &str) -> Result<CountryCode, PhoneNumberError>;
}

/// Parser for numbers in international (`+<cc><nsn>`) format.
///
/// Visual separators (space, `-`, `.`, `(`, `)`, `/`) are ignored. There is
/// no default region, so national-format numbers are rejected. Vanity
/// letters map to their keypad digits once at least
/// [`MIN_DIGITS_BEFORE_LETTERS`] digits have been read, so `+1 555 CALL NOW`
/// parses while `+CALLNOW` does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct E164Parser;

impl E164Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        E164Parser
    }

    fn digits(number: &str) -> Result<Vec<u8>, PhoneNumberError> {
        let rest = number
            .trim()
            .strip_prefix('+')
            .ok_or(PhoneNumberError::MissingPlus)?;

        let mut digits = Vec::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c as u8 - b'0'),
                ' ' | '-' | '.' | '(' | ')' | '/' => {}
                c if c.is_ascii_alphabetic() && digits.len() >= MIN_DIGITS_BEFORE_LETTERS => {
                    digits.push(keypad_digit(c));
                }
                _ => return Err(PhoneNumberError::NotANumber),
            }
        }

        if digits.is_empty() {
            return Err(PhoneNumberError::NotANumber);
        }
        Ok(digits)
    }
}

/// Telephone keypad digit for an ASCII letter.
fn keypad_digit(letter: char) -> u8 {
    match letter.to_ascii_uppercase() {
        'A'..='C' => 2,
        'D'..='F' => 3,
        'G'..='I' => 4,
        'J'..='L' => 5,
        'M'..='O' => 6,
        'P'..='S' => 7,
        'T'..='V' => 8,
        _ => 9,
    }
}

impl CountryCodeParser for E164Parser {
    fn country_code(&self, number: &str) -> Result<CountryCode, PhoneNumberError> {
        let digits = Self::digits(number)?;
        if digits[0] == 0 {
            return Err(PhoneNumberError::InvalidCountryCode);
        }

        // Calling codes are prefix-free, so the shortest match is the only one.
        let mut value = 0u16;
        for (len, digit) in digits.iter().take(3).enumerate() {
            value = value * 10 + u16::from(*digit);
            let code = CountryCode(value);
            if code.is_assigned() {
                let nsn_len = digits.len() - (len + 1);
                if nsn_len < MIN_NSN_LENGTH {
                    return Err(PhoneNumberError::TooShort);
                }
                if nsn_len > MAX_NSN_LENGTH {
                    return Err(PhoneNumberError::TooLong);
                }
                return Ok(code);
            }
        }

        Err(PhoneNumberError::InvalidCountryCode)
    }
}

/// ITU-T assigned country calling codes, sorted.
const ASSIGNED_CALLING_CODES: &[u16] = &[
    1, 7, 20, 27, 30, 31, 32, 33, 34, 36, 39, 40, 41, 43, 44, 45, 46, 47, 48, 49, 51, 52, 53, 54,
    55, 56, 57, 58, 60, 61, 62, 63, 64, 65, 66, 81, 82, 84, 86, 90, 91, 92, 93, 94, 95, 98, 211,
    212, 213, 216, 218, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234,
    235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253,
    254, 255, 256, 257, 258, 260, 261, 262, 263, 264, 265, 266, 267, 268, 269, 290, 291, 297, 298,
    299, 350, 351, 352, 353, 354, 355, 356, 357, 358, 359, 370, 371, 372, 373, 374, 375, 376, 377,
    378, 380, 381, 382, 383, 385, 386, 387, 389, 420, 421, 423, 500, 501, 502, 503, 504, 505, 506,
    507, 508, 509, 590, 591, 592, 593, 594, 595, 596, 597, 598, 599, 670, 672, 673, 674, 675, 676,
    677, 678, 679, 680, 681, 682, 683, 685, 686, 687, 688, 689, 690, 691, 692, 800, 808, 850, 852,
    853, 855, 856, 870, 878, 880, 881, 882, 883, 886, 888, 960, 961, 962, 963, 964, 965, 966, 967,
    968, 970, 971, 972, 973, 974, 975, 976, 977, 979, 992, 993, 994, 995, 996, 998,
];
