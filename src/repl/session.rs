/// Read-eval-print session
/// 
/// This module implements the loop that:
/// 1. Prompts and reads one line at a time
/// 2. Routes the command to its handler
/// 3. Writes the handler's reply back out
/// 
/// The loop stops on `close`/`exit` or when the input ends.

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::commands::{self, respond};
use crate::domain::AddressBook;
use crate::repl::parser::{parse_input, CommandKind, ParsedLine};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line
    Continue(String),
    /// Print the text and end the session
    Exit(String),
}

/// Route one parsed line to its handler
pub fn dispatch(line: &ParsedLine, book: &mut AddressBook, today: NaiveDate) -> Reply {
    let kind = match line.command.parse::<CommandKind>() {
        Ok(kind) => kind,
        Err(_) => return Reply::Continue(INVALID_COMMAND.to_string()),
    };
    
    let args = line.args.as_slice();
    let text = match kind {
        CommandKind::Exit => return Reply::Exit(GOODBYE.to_string()),
        CommandKind::Hello => GREETING.to_string(),
        CommandKind::Help => commands::HELP.to_string(),
        CommandKind::Add => respond(commands::add_contact(args, book)),
        CommandKind::Change => respond(commands::change_contact(args, book)),
        CommandKind::Phone => respond(commands::show_phones(args, book)),
        CommandKind::RemovePhone => respond(commands::remove_phone(args, book)),
        CommandKind::Delete => respond(commands::delete_contact(args, book)),
        CommandKind::All => respond(commands::show_all(book)),
        CommandKind::AddBirthday => respond(commands::add_birthday(args, book)),
        CommandKind::ShowBirthday => respond(commands::show_birthday(args, book)),
        CommandKind::Birthdays => respond(commands::birthdays(args, book, today)),
    };
    
    Reply::Continue(text)
}

/// One interactive conversation over an address book
pub struct Session<'a> {
    book: &'a mut AddressBook,
}

impl<'a> Session<'a> {
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }
    
    /// Run the loop until an exit command or end of input
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Session started with {} contacts", self.book.len());
        Self::write_line(&mut writer, WELCOME).await?;
        
        let mut buf = Vec::new();
        
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;
            
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => {
                    info!("Input closed, ending session");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    return Err(e);
                }
            }
            
            // Undecodable bytes become U+FFFD and fall through to "Invalid command."
            let line = String::from_utf8_lossy(&buf);
            let Some(parsed) = parse_input(&line) else {
                continue;
            };
            debug!("Dispatching '{}' with {} argument(s)", parsed.command, parsed.args.len());
            
            let today = chrono::Local::now().date_naive();
            match dispatch(&parsed, self.book, today) {
                Reply::Continue(text) => Self::write_line(&mut writer, &text).await?,
                Reply::Exit(text) => {
                    Self::write_line(&mut writer, &text).await?;
                    info!("Exit requested, ending session");
                    break;
                }
            }
        }
        
        Ok(())
    }
    
    async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
        writer.write_all(text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await
    }
}
