use std::fmt;

/// Custom error types for the ant farm simulation
#[derive(Debug)]
pub enum CommandError {
    /// IO operation failed while reading command input
    IoError(std::io::Error),
    /// Command keyword was not recognized
    InvalidCommand,
    /// Species token did not name a known ant species
    UnknownSpecies(String),
    /// Farm id was never issued by the meadow
    UnknownFarm(u32),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::InvalidCommand => write!(f, "Invalid command."),
            CommandError::UnknownSpecies(token) => write!(f, "Unknown species: {}.", token),
            CommandError::UnknownFarm(id) => write!(f, "No ant farm with id {}.", id),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, CommandError>;
