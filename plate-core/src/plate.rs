//! Plate strings: one leading letter, three digits, two series letters.
//! Format: `А000АА`, letters limited to the Cyrillic set that reads the same in Latin.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Letters allowed on a plate.
pub const PLATE_LETTERS: [char; 12] = ['А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х'];

/// Number of characters in every plate string.
pub const PLATE_LEN: usize = 6;

static PLATE_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[АВЕКМНОРСТУХ][0-9]{3}[АВЕКМНОРСТУХ]{2}$").ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlateParseError {
    #[error("plate must be {PLATE_LEN} characters (got {0})")]
    Length(usize),
    #[error("plate {0:?} does not match letter, three digits, two letters")]
    Shape(String),
}

/// A generated plate. Always six characters matching `[Letter][Digit]{3}[Letter]{2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateString([char; PLATE_LEN]);

impl PlateString {
    #[must_use]
    pub const fn chars(&self) -> [char; PLATE_LEN] {
        self.0
    }

    #[must_use]
    pub const fn leading_letter(&self) -> char {
        self.0[0]
    }

    #[must_use]
    pub const fn digits(&self) -> [char; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    #[must_use]
    pub const fn series(&self) -> [char; 2] {
        [self.0[4], self.0[5]]
    }

    /// The letters in plate order: leading letter followed by the series.
    #[must_use]
    pub const fn letters(&self) -> [char; 3] {
        [self.0[0], self.0[4], self.0[5]]
    }

    #[must_use]
    pub fn digits_str(&self) -> String {
        self.digits().iter().collect()
    }

    #[must_use]
    pub fn series_str(&self) -> String {
        self.series().iter().collect()
    }
}

impl fmt::Display for PlateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for PlateString {
    type Err = PlateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != PLATE_LEN {
            return Err(PlateParseError::Length(chars.len()));
        }
        let matches = PLATE_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(trimmed));
        if !matches {
            return Err(PlateParseError::Shape(trimmed.to_string()));
        }
        let mut out = ['А'; PLATE_LEN];
        out.copy_from_slice(&chars);
        Ok(Self(out))
    }
}

impl Serialize for PlateString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlateString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    PLATE_LETTERS[rng.gen_range(0..PLATE_LETTERS.len())]
}

fn digit_char(value: u32) -> char {
    char::from_digit(value % 10, 10).unwrap_or('0')
}

/// Draw a random plate: one letter, a zero-padded number in `0..=999`, two more letters.
pub fn generate_plate<R: Rng + ?Sized>(rng: &mut R) -> PlateString {
    let first = random_letter(rng);
    let number: u32 = rng.gen_range(0..1000);
    let series = [random_letter(rng), random_letter(rng)];
    PlateString([
        first,
        digit_char(number / 100),
        digit_char(number / 10),
        digit_char(number),
        series[0],
        series[1],
    ])
}
