use crate::error::CommandError;
use std::str::FromStr;

/// 3 fixed ant species; a closed set keeps dispatch a plain match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Species {
    Worker = 0,
    Soldier = 1,
    Queen = 2,
}

impl FromStr for Species {
    type Err = CommandError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(Species::Worker),
            "soldier" => Ok(Species::Soldier),
            "queen" => Ok(Species::Queen),
            _ => Err(CommandError::UnknownSpecies(s.to_string())),
        }
    }
}

impl Species {
    /// All known species
    pub const ALL: [Species; 3] = [Species::Worker, Species::Soldier, Species::Queen];

    /// Command token that names this species
    pub const fn as_str(self) -> &'static str {
        match self {
            Species::Worker => "worker",
            Species::Soldier => "soldier",
            Species::Queen => "queen",
        }
    }

    /// Roster label shown in farm summaries
    pub const fn label(self) -> &'static str {
        match self {
            Species::Worker => "Worker Ant",
            Species::Soldier => "Soldier Ant",
            Species::Queen => "Queen Ant",
        }
    }

    /// Fixed task line produced on every simulation tick
    pub const fn task(self) -> &'static str {
        match self {
            Species::Worker => "Worker Ant is foraging for food.",
            Species::Soldier => "Soldier Ant is guarding the colony.",
            Species::Queen => "Queen Ant is laying eggs.",
        }
    }
}
