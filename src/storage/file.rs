/// JSON file implementation of the book storage interface

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AddressBook;
use crate::storage::{BookStorage, StorageError};

/// Stores the address book as a single JSON document
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
    
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> Result<AddressBook, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Address book file {} not found, starting with an empty book",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        
        let book: AddressBook = serde_json::from_slice(&bytes)?;
        tracing::info!("Loaded {} contacts from {}", book.len(), self.path.display());
        Ok(book)
    }
    
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(book)?;
        
        std::fs::write(&self.path, bytes).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        
        tracing::info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
