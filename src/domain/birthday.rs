/// Birthday value object and calendar rolling
/// 
/// This module defines BirthdayDate, which parses the DD.MM.YYYY format used
/// everywhere a user types or reads a date, and the helpers that project a
/// birthday onto its next occurrence and move weekend dates to Monday.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use crate::domain::DomainError;

/// Format used for parsing and displaying birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A validated calendar date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`
    /// 
    /// Day and month must be exactly two digits and the year exactly four,
    /// and the result must be a real calendar date (31.02.2024 is rejected).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !Self::has_strict_shape(raw) {
            return Err(DomainError::InvalidDate(raw.to_string()));
        }
        
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate(raw.to_string()))
    }
    
    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
    
    /// Next occurrence of this birthday on or after `today`
    /// 
    /// The birthday stays in the current year when its (month, day) is on or
    /// after today's, otherwise it rolls into the next year. A 29 February
    /// birthday lands on 28 February in years without a leap day. Returns
    /// None only when the target year is outside chrono's supported range.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let month = self.0.month();
        let day = self.0.day();
        
        let year = if (month, day) >= (today.month(), today.day()) {
            today.year()
        } else {
            today.year() + 1
        };
        
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
    }
    
    /// Date on which to congratulate, i.e. the next occurrence moved off weekends
    pub fn congratulation_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.next_occurrence(today).map(shift_to_weekday)
    }
    
    fn has_strict_shape(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }
}

/// Move a Saturday or Sunday forward to the following Monday
pub fn shift_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + chrono::Duration::days(2),
        Weekday::Sun => date + chrono::Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        BirthdayDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
