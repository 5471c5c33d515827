/// Address book collection and upcoming-birthday queries
/// 
/// The AddressBook owns every Record, keyed by the record's name. It is
/// serialized as a flat list of records and the name index is rebuilt on
/// load, so a key always matches the name of the record it points to.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use crate::domain::{DomainError, Record};

/// Default look-ahead window for upcoming birthdays, in days
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday should be celebrated soon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Next occurrence of the birthday, moved to Monday if it falls on a weekend
    pub congratulation_date: NaiveDate,
    /// Days from today until the congratulation date (always positive)
    pub days_until: i64,
}

/// Name-keyed collection of contact records
/// 
/// Iteration is ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookSnapshot", into = "BookSnapshot")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Insert a record under its own name
    /// 
    /// An existing record with the same name is replaced wholesale (no merge)
    /// and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().to_string(), record)
    }
    
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }
    
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }
    
    /// Remove a record, returning it if it existed
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }
    
    pub fn len(&self) -> usize {
        self.records.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    
    /// All records in name order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
    
    /// Contacts to congratulate within the next `window_days` days
    /// 
    /// For each record with a birthday, the birthday is projected onto its
    /// next occurrence relative to `today`, moved off the weekend, and kept
    /// when `0 < days_until <= window_days`. A birthday whose congratulation
    /// date is today is not included.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let congratulation_date = record.birthday()?.congratulation_date(today)?;
                let days_until = (congratulation_date - today).num_days();
                
                (days_until > 0 && days_until <= window_days).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date,
                    days_until,
                })
            })
            .collect()
    }
}

/// On-disk shape of the address book
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookSnapshot {
    records: Vec<Record>,
}

impl From<AddressBook> for BookSnapshot {
    fn from(book: AddressBook) -> Self {
        Self {
            records: book.records.into_values().collect(),
        }
    }
}

impl TryFrom<BookSnapshot> for AddressBook {
    type Error = DomainError;
    
    fn try_from(snapshot: BookSnapshot) -> Result<Self, Self::Error> {
        let mut book = AddressBook::new();
        for record in snapshot.records {
            Record::validate_name(record.name())?;
            book.add_record(record);
        }
        Ok(book)
    }
}
