/// Line parsing for the command loop

use std::str::FromStr;

/// A non-blank input line split on whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Command word, lowercased
    pub command: String,
    /// Remaining words, verbatim
    pub args: Vec<String>,
}

/// Split a line into command and arguments; None for a blank line
pub fn parse_input(line: &str) -> Option<ParsedLine> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    
    Some(ParsedLine {
        command,
        args: words.map(str::to_string).collect(),
    })
}

/// Every command the assistant understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

/// Returned for a command word that matches nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for CommandKind {
    type Err = UnknownCommand;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(CommandKind::Hello),
            "add" => Ok(CommandKind::Add),
            "change" => Ok(CommandKind::Change),
            "phone" => Ok(CommandKind::Phone),
            "remove-phone" => Ok(CommandKind::RemovePhone),
            "delete" => Ok(CommandKind::Delete),
            "all" => Ok(CommandKind::All),
            "add-birthday" => Ok(CommandKind::AddBirthday),
            "show-birthday" => Ok(CommandKind::ShowBirthday),
            "birthdays" => Ok(CommandKind::Birthdays),
            "help" => Ok(CommandKind::Help),
            "close" | "exit" => Ok(CommandKind::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
