//! Telegram command parsing.
//!
//! Commands are matched through a routing table keyed on the leading
//! `/word`. Plain text that is not a command falls through to a search.

use crate::domain::CatalogId;

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCommand {
    Help,
    Search(String),
    CheckIsbn(CatalogId),
    Status,
    List,
    Add(String),
    Delete(String),
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidIsbn(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty message"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument { command, argument } => {
                write!(f, "`{command}` needs a {argument}")
            }
            Self::InvalidIsbn(value) => write!(f, "`{value}` is not a 13-digit ISBN"),
        }
    }
}

impl std::error::Error for CommandParseError {}

type Route = fn(&str) -> Result<TelegramCommand, CommandParseError>;

/// Command word to builder. The builder receives the trimmed argument text.
const ROUTES: &[(&str, Route)] = &[
    ("/start", help),
    ("/help", help),
    ("/h", help),
    ("/search", search),
    ("/s", search),
    ("/isbn", isbn),
    ("/status", status),
    ("/st", status),
    ("/list", list),
    ("/l", list),
    ("/add", add),
    ("/a", add),
    ("/delete", delete),
    ("/d", delete),
];

const ISBN_PREFIX: &str = "/isbn";

/// Parse a Telegram message into a bot command.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandParseError::Empty);
    }
    if !text.starts_with('/') {
        return Ok(TelegramCommand::Search(text.to_string()));
    }

    let (raw_command, args) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(head, rest)| (head, rest.trim()));
    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    // Search results link to `/isbn9788983711892`, with no space.
    if let Some(digits) = command.strip_prefix(ISBN_PREFIX) {
        if !digits.is_empty() {
            return isbn(digits);
        }
    }

    ROUTES
        .iter()
        .find(|(word, _)| *word == command)
        .map_or_else(
            || Err(CommandParseError::UnknownCommand(command.to_string())),
            |(_, route)| route(args),
        )
}

fn help(_: &str) -> Result<TelegramCommand, CommandParseError> {
    Ok(TelegramCommand::Help)
}

fn status(_: &str) -> Result<TelegramCommand, CommandParseError> {
    Ok(TelegramCommand::Status)
}

fn list(_: &str) -> Result<TelegramCommand, CommandParseError> {
    Ok(TelegramCommand::List)
}

fn search(args: &str) -> Result<TelegramCommand, CommandParseError> {
    required(args, "/search", "title or ISBN").map(TelegramCommand::Search)
}

fn add(args: &str) -> Result<TelegramCommand, CommandParseError> {
    required(args, "/add", "title").map(TelegramCommand::Add)
}

fn delete(args: &str) -> Result<TelegramCommand, CommandParseError> {
    required(args, "/delete", "title").map(TelegramCommand::Delete)
}

fn isbn(args: &str) -> Result<TelegramCommand, CommandParseError> {
    let raw = required(args, ISBN_PREFIX, "13-digit ISBN")?;
    CatalogId::parse_isbn13(&raw)
        .map(TelegramCommand::CheckIsbn)
        .ok_or(CommandParseError::InvalidIsbn(raw))
}

fn required(
    args: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandParseError> {
    if args.is_empty() {
        Err(CommandParseError::MissingArgument { command, argument })
    } else {
        Ok(args.to_string())
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📚 Library Availability Bot\n\n\
    🔍 /search <title or ISBN> (/s) - Search and check every branch\n\
    📖 /isbn<13 digits> - Check one ISBN everywhere\n\
    📊 /status (/st) - Current state of watched books\n\
    📋 /list (/l) - Watched books\n\
    ➕ /add <title> (/a) - Watch a book\n\
    🗑️ /delete <title> (/d) - Stop watching a book\n\
    ❓ /help (/h) - This message\n\n\
    Plain text is treated as a search."
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("search", "Search by title or ISBN"),
        ("status", "Current state of watched books"),
        ("list", "Watched books"),
        ("add", "Watch a book"),
        ("delete", "Stop watching a book"),
        ("help", "Show all commands"),
    ]
}
