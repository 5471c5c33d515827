/// Contact record entity
/// 
/// A Record aggregates one contact's name, phone numbers and optional
/// birthday. The name is the record's identity in the address book and
/// cannot change once the record exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::{BirthdayDate, DomainError, PhoneNumber};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create an empty record for `name`
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;
        
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }
    
    pub fn name(&self) -> &str {
        &self.name
    }
    
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }
    
    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }
    
    /// Validate and append a phone number; duplicates are kept
    pub fn add_phone(&mut self, raw: &str) -> Result<(), DomainError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }
    
    /// Replace the first phone equal to `old` with `new`
    /// 
    /// Returns the previous value, or `Ok(None)` when no phone matches `old`.
    /// An invalid `new` is an error and leaves the list untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<Option<PhoneNumber>, DomainError> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                let previous = phone.clone();
                phone.set(new)?;
                Ok(Some(previous))
            }
            None => Ok(None),
        }
    }
    
    /// Find the first phone whose text equals `raw`
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }
    
    /// Remove every phone equal to `raw`, returning how many were removed
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }
    
    /// Set the birthday, overwriting any previous one
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), DomainError> {
        self.birthday = Some(BirthdayDate::parse(raw)?);
        Ok(())
    }
    
    /// Phones joined for display, or None when the record has none
    pub fn phones_display(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        
        Some(
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
    
    pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "Contact name cannot be empty".to_string()
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self.phones_display();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.as_deref().unwrap_or("No phone numbers")
        )?;
        
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        
        Ok(())
    }
}
