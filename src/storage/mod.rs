/// Storage layer for persisting the address book
/// 
/// The whole book is loaded once at startup and written once at shutdown.
/// There is no incremental persistence.

pub mod file;

// Re-export the main storage types
pub use file::*;

use std::path::PathBuf;
use thiserror::Error;
use crate::domain::AddressBook;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read address book from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    #[error("Failed to write address book to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    #[error("Address book data is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining how an address book is loaded and saved
pub trait BookStorage {
    /// Load the stored book, or an empty one if nothing has been saved yet
    fn load(&self) -> Result<AddressBook, StorageError>;
    
    /// Replace the stored book with `book`
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
