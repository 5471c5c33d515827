/// Public library interface for the contact book assistant
///
/// This module exports the assistant itself and the public types that can be
/// used by other applications or tests.

use std::path::PathBuf;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

// Internal modules
mod domain;
mod storage;
mod commands;
mod repl;

// Re-export public modules and types
pub use domain::*;
pub use storage::{BookStorage, JsonFileStorage, StorageError};
pub use commands::{respond, CommandError, CommandResult};
pub use repl::{dispatch, parse_input, CommandKind, ParsedLine, Reply, Session};

/// Errors that can occur while running the assistant
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The contact book assistant
///
/// Loads the address book when created, runs the interactive session, and
/// writes the book back when the session ends.
pub struct AssistantBot {
    storage: JsonFileStorage,
    book: AddressBook,
}

impl AssistantBot {
    /// Create an assistant backed by the file at `data_path`
    ///
    /// A missing file gives an empty book. A file that cannot be read or
    /// parsed is an error.
    pub fn new(data_path: PathBuf) -> Result<Self, BotError> {
        tracing::info!("Initializing contact book with data file: {:?}", data_path);

        let storage = JsonFileStorage::new(data_path);
        let book = storage.load()?;

        Ok(Self { storage, book })
    }

    /// Run the session over stdin/stdout, then save
    pub async fn run(self) -> Result<(), BotError> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.run_with(reader, writer).await
    }

    /// Run the session over the given input and output, then save
    ///
    /// The book is saved even when the session ends with an I/O error.
    pub async fn run_with<R, W>(mut self, reader: R, writer: W) -> Result<(), BotError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let outcome = Session::new(&mut self.book).run(reader, writer).await;
        self.save()?;
        outcome?;
        Ok(())
    }

    /// Write the current book to storage
    pub fn save(&self) -> Result<(), BotError> {
        self.storage.save(&self.book)?;
        Ok(())
    }

    /// Get a reference to the address book (useful for testing)
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Get a mutable reference to the address book
    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &JsonFileStorage {
        &self.storage
    }
}
