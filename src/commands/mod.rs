/// Command handlers for the assistant
/// 
/// Each handler takes the arguments typed after the command word, works on
/// the address book, and produces the text shown to the user. Failures from
/// the domain layer are folded into three user-facing categories by
/// CommandError, and `respond` turns every outcome into a string so nothing
/// escapes the handler boundary.

pub mod contact;
pub mod birthday;

// Re-export handler functions for easy access
pub use contact::*;
pub use birthday::*;

use thiserror::Error;
use crate::domain::DomainError;

/// Why a command could not be carried out
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A contact or phone the command refers to does not exist
    #[error("{0}")]
    NotFound(String),
    
    /// An argument failed validation
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] DomainError),
    
    /// Too few arguments for the command
    #[error("Invalid command format. Usage: {usage}")]
    MissingArgument { usage: &'static str },
}

impl CommandError {
    pub fn contact_not_found(name: &str) -> Self {
        Self::NotFound(format!("Contact '{}' not found.", name))
    }
}

/// Result type returned by every handler
pub type CommandResult = Result<String, CommandError>;

/// Render a handler outcome as the text shown to the user
pub fn respond(result: CommandResult) -> String {
    result.unwrap_or_else(|e| {
        tracing::debug!("Command failed: {:?}", e);
        e.to_string()
    })
}

/// Check that at least `count` arguments were given
fn require(args: &[String], count: usize, usage: &'static str) -> Result<(), CommandError> {
    if args.len() < count {
        return Err(CommandError::MissingArgument { usage });
    }
    Ok(())
}

/// Usage lines shown by the `help` command
pub const HELP: &str = "\
Available commands:
  hello                             greet the assistant
  add [name] [phone]                add a contact or another phone to it
  change [name] [old phone] [new phone]
                                    replace one of a contact's phones
  phone [name]                      show a contact's phones
  remove-phone [name] [phone]       remove a phone from a contact
  delete [name]                     delete a contact
  all                               show every contact
  add-birthday [name] [DD.MM.YYYY]  set a contact's birthday
  show-birthday [name]              show a contact's birthday
  birthdays [days]                  birthdays in the next 7 (or [days]) days
  help                              show this list
  close | exit                      save and quit";
