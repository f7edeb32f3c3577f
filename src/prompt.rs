//! Operator surface: one line of input maps onto at most one send action.

/// Shown at startup and after an unrecognized line.
pub const USAGE: &str = "commands: text [message] | record | quit";

/// A single parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Emit the rest of the line on the string channel. May be empty.
    SendText(String),
    /// Emit the fixed sample record on the struct channel.
    SendRecord,
    /// Disconnect and exit.
    Quit,
    /// Anything else. The loop prints [`USAGE`] and emits nothing.
    Unknown,
}

impl Command {
    /// Parses one prompt line. The text after `text ` is taken verbatim,
    /// whitespace and all.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(rest) = line.strip_prefix("text ") {
            return Self::SendText(rest.to_owned());
        }
        match line {
            "text" => Self::SendText(String::new()),
            "record" => Self::SendRecord,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}
