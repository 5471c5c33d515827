/// Interactive command loop
/// 
/// This module splits input lines into a command word and arguments, routes
/// them to the command handlers, and runs the read-eval-print session.

pub mod parser;
pub mod session;

// Re-export main types
pub use parser::{parse_input, CommandKind, ParsedLine};
pub use session::{dispatch, Reply, Session};
