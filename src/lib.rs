//! # Ant Farm
//!
//! A turn-based, text-command-driven simulation of ant colonies living in a
//! shared meadow.
//!
//! This library provides the command interpreter and the colony ownership
//! model: a meadow owns farms, farms own rooms and ants, and line commands
//! spawn farms, deposit resources, tick the simulation, and print summaries.

pub mod ant;
pub mod cli;
pub mod command;
pub mod error;
pub mod farm;
pub mod meadow;
pub mod species;

pub use ant::Ant;
pub use cli::Args;
pub use command::{parse_command, Command, Interpreter};
pub use error::{CommandError, Result};
pub use farm::{AntFarm, Room};
pub use meadow::Meadow;
pub use species::Species;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, AntFarm, Args, Command, CommandError, Interpreter, Meadow, Result, Room, Species,
    };
}
