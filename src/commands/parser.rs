//! Input tokenizer for the command line.

/// A raw user input split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command name, lowercased
    pub command: String,

    /// The remaining whitespace-separated tokens, verbatim
    pub args: Vec<String>,
}

/// Split a raw input line into a command and arguments.
///
/// The first whitespace-separated token is lowercased and becomes the
/// command; the rest are passed through untouched (names and dates keep
/// their case). Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<ParsedCommand> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedCommand { command, args })
}
