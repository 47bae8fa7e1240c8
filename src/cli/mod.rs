pub mod prompt;
pub mod session;

pub use session::Session;

/// Problems with what the user typed, as opposed to problems with the
/// measurements themselves (see `EstimateError`).
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("'{text}' is not a valid {field} measurement. Enter a number of inches.")]
    InvalidNumber { field: &'static str, text: String },
    #[error("Invalid gender entered.")]
    InvalidSex(String),
    #[error("Input ended unexpectedly")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Top-level commands understood by the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Calculate,
    Exit,
}

impl Command {
    /// Accepts the full command name or its first letter, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "help" | "h" => Some(Command::Help),
            "calculate" | "c" => Some(Command::Calculate),
            "exit" | "e" => Some(Command::Exit),
            _ => None,
        }
    }
}
