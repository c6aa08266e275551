//! Password policy validation (Day 2)
//!
//! Each input line pairs a rule with a password:
//!
//! ```text
//! 1-3 a: abcde
//! ```
//!
//! The two numbers of a rule are read differently depending on the [`Policy`].

use crate::domain::input_format::EntryParseError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Validation policy applied to every entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// The character occurs between `low` and `high` times, inclusive
    OccurrenceCount,
    /// Exactly one of the 1-based positions `low` and `high` holds the character
    PositionXor,
}

/// Rule attached to a password
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Character the rule is about
    pub value: char,
    /// Lower bound (policy A) or first position (policy B)
    pub low: usize,
    /// Upper bound (policy A) or second position (policy B)
    pub high: usize,
}

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub rule: Rule,
    pub password: String,
}

impl Entry {
    pub fn new(rule: Rule, password: impl Into<String>) -> Self {
        Self {
            rule,
            password: password.into(),
        }
    }

    /// Check this entry against `policy`
    pub fn is_valid(&self, policy: Policy) -> bool {
        match policy {
            Policy::OccurrenceCount => self.is_valid_occurrence_count(),
            Policy::PositionXor => self.is_valid_position_xor(),
        }
    }

    fn is_valid_occurrence_count(&self) -> bool {
        let count = self
            .password
            .chars()
            .filter(|&c| c == self.rule.value)
            .count();
        (self.rule.low..=self.rule.high).contains(&count)
    }

    fn is_valid_position_xor(&self) -> bool {
        let Rule { value, low, high } = self.rule;
        let chars: Vec<char> = self.password.chars().collect();

        if low == 0 || low > chars.len() || high > chars.len() {
            warn!(
                password = %self.password,
                low,
                high,
                "rule position out of range"
            );
            return false;
        }

        // Positions are 1-based
        let match_low = chars.get(low - 1) == Some(&value);
        let match_high = chars.get(high - 1) == Some(&value);
        match_low ^ match_high
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}: {}",
            self.rule.low, self.rule.high, self.rule.value, self.password
        )
    }
}

impl FromStr for Entry {
    type Err = EntryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_entry(s)
    }
}

/// Parse a line of the form `<low>-<high> <char>: <password>`
pub fn parse_entry(line: &str) -> Result<Entry, EntryParseError> {
    let (range, rest) = line
        .split_once(' ')
        .ok_or(EntryParseError::MissingRange)?;
    let (low, high) = range
        .split_once('-')
        .ok_or(EntryParseError::MissingRange)?;
    let (value, password) = rest
        .split_once(": ")
        .ok_or(EntryParseError::MissingSeparator)?;

    let mut chars = value.chars();
    let value = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(EntryParseError::InvalidCharacter(value.to_string())),
    };

    Ok(Entry::new(
        Rule {
            value,
            low: parse_bound(low)?,
            high: parse_bound(high)?,
        },
        password,
    ))
}

fn parse_bound(s: &str) -> Result<usize, EntryParseError> {
    s.parse()
        .map_err(|_| EntryParseError::InvalidBound(s.to_string()))
}

/// Count the entries satisfying `policy`
pub fn count_valid(entries: &[Entry], policy: Policy) -> usize {
    entries.iter().filter(|entry| entry.is_valid(policy)).count()
}
