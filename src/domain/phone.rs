/// Phone number value object
/// 
/// A phone number is stored exactly as entered. It must be ten ASCII digits,
/// with no separators, country prefix or whitespace.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use crate::domain::DomainError;

/// Number of digits every stored phone number has
pub const PHONE_DIGITS: usize = 10;

/// A validated ten-digit phone number
/// 
/// The only way to change the held value is `set`, which re-runs validation
/// and leaves the old value in place when the new one is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new phone number, validating the format
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        Self::validate(&raw)?;
        Ok(Self(raw))
    }
    
    /// Replace the held value with a newly validated one
    pub fn set(&mut self, raw: impl Into<String>) -> Result<(), DomainError> {
        let raw = raw.into();
        Self::validate(&raw)?;
        self.0 = raw;
        Ok(())
    }
    
    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
    
    fn validate(raw: &str) -> Result<(), DomainError> {
        if raw.len() != PHONE_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone(raw.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Serialized as the bare string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Stored data goes through the same validation as user input
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PhoneNumber::new(raw).map_err(serde::de::Error::custom)
    }
}
