/// Domain module containing the contact data model and its validation rules
/// 
/// This module defines the value objects (PhoneNumber, BirthdayDate), the
/// per-contact Record, and the AddressBook collection that owns all records.

pub mod phone;
pub mod birthday;
pub mod record;
pub mod book;

// Re-export public types for easy access
pub use phone::*;
pub use birthday::*;
pub use record::*;
pub use book::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid phone number '{0}': expected exactly 10 digits")]
    InvalidPhone(String),
    
    #[error("Invalid date '{0}': use DD.MM.YYYY")]
    InvalidDate(String),
    
    #[error("Invalid contact name: {0}")]
    InvalidName(String),
    
    #[error("Invalid number of days '{0}': expected a whole number")]
    InvalidWindow(String),
}
