//! CNJ unified process numbers (Resolução CNJ 65/2008).
//!
//! Canonical form: `NNNNNNN-DD.AAAA.J.TR.OOOO`
//!
//! - `NNNNNNN` sequential number within the origin unit and year
//! - `DD` check digits (ISO 7064 mod 97)
//! - `AAAA` filing year
//! - `J` justice branch
//! - `TR` court code within the branch
//! - `OOOO` origin unit
//!
//! Operators paste numbers with stray spaces, slashes or labels around them.
//! Only ASCII digits, `.` and `-` carry meaning; everything else is stripped
//! before the strict pattern is applied. There is no fuzzy matching: the
//! cleaned string either is a canonical number or it is rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CnjError;

static CNJ_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{7}-[0-9]{2}\.[0-9]{4}\.[0-9]\.[0-9]{2}\.[0-9]{4}$")
        .expect("CNJ pattern compiles")
});

/// Number of digits in a complete process number.
pub const CNJ_DIGITS: usize = 20;

// Segment offsets into the canonical 25-character form.
const SEQUENTIAL: std::ops::Range<usize> = 0..7;
const CHECK_DIGITS: std::ops::Range<usize> = 8..10;
const YEAR: std::ops::Range<usize> = 11..15;
const JUSTICE_BRANCH: std::ops::Range<usize> = 16..17;
const COURT_CODE: std::ops::Range<usize> = 18..20;
const ORIGIN_CODE: std::ops::Range<usize> = 21..25;

/// Separator inserted after the n-th digit when masking.
const MASK: [(usize, char); 5] = [(7, '-'), (9, '.'), (13, '.'), (14, '.'), (16, '.')];

/// A validated CNJ process number in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessNumber(String);

impl ProcessNumber {
    pub fn sequential(&self) -> &str {
        &self.0[SEQUENTIAL]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[CHECK_DIGITS]
    }

    pub fn year(&self) -> &str {
        &self.0[YEAR]
    }

    pub fn justice_branch(&self) -> &str {
        &self.0[JUSTICE_BRANCH]
    }

    pub fn court_code(&self) -> &str {
        &self.0[COURT_CODE]
    }

    pub fn origin_code(&self) -> &str {
        &self.0[ORIGIN_CODE]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check digits implied by the other segments.
    ///
    /// `98 - (NNNNNNN AAAA J TR OOOO 00 mod 97)`, computed digit by digit so
    /// the 20-digit operand never needs a wide integer.
    pub fn expected_check_digits(&self) -> u8 {
        let remainder = [
            self.sequential(),
            self.year(),
            self.justice_branch(),
            self.court_code(),
            self.origin_code(),
            "00",
        ]
        .iter()
        .flat_map(|segment| segment.bytes())
        .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 97);
        (98 - remainder) as u8
    }

    /// Whether the entered check digits match [`expected_check_digits`](Self::expected_check_digits).
    ///
    /// Diagnostic only. Classification accepts numbers with wrong check digits.
    pub fn check_digits_valid(&self) -> bool {
        self.check_digits()
            .parse::<u8>()
            .is_ok_and(|dd| dd == self.expected_check_digits())
    }
}

impl fmt::Display for ProcessNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProcessNumber {
    type Err = CnjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_process_number(s)
    }
}

impl Serialize for ProcessNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProcessNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Strip everything except ASCII digits, `.` and `-`.
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Whether `input`, once cleaned, is a canonical CNJ process number.
pub fn is_valid_cnj_format(input: &str) -> bool {
    CNJ_PATTERN.is_match(&clean(input))
}

/// Clean and validate `input`.
pub fn parse_process_number(input: &str) -> Result<ProcessNumber, CnjError> {
    let cleaned = clean(input);
    if CNJ_PATTERN.is_match(&cleaned) {
        Ok(ProcessNumber(cleaned))
    } else {
        Err(CnjError::InvalidFormat(input.to_string()))
    }
}

/// Format exactly 20 digits into the canonical mask.
///
/// Non-digit characters are ignored, so an already-masked number formats to
/// itself. Returns `None` unless the input holds exactly [`CNJ_DIGITS`] digits.
pub fn format_process_number(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != CNJ_DIGITS {
        return None;
    }
    Some(mask_partial(&digits))
}

/// Apply the CNJ mask to however many digits have been typed so far.
///
/// "00012345620248" → "0001234-56.2024.8". Digits past the 20th are dropped.
pub fn mask_partial(input: &str) -> String {
    let mut out = String::with_capacity(CNJ_DIGITS + MASK.len());
    let digits = input.chars().filter(|c| c.is_ascii_digit()).take(CNJ_DIGITS);

    for (i, digit) in digits.enumerate() {
        if let Some(&(_, sep)) = MASK.iter().find(|(pos, _)| *pos == i) {
            out.push(sep);
        }
        out.push(digit);
    }
    out
}
