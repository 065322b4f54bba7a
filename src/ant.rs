use crate::species::Species;

/// An individual ant: a species label plus its fixed task behavior.
/// Ants are anonymous within a farm and immutable after creation.
#[derive(Clone, Copy, Debug)]
pub struct Ant {
    species: Species,
}

impl Ant {
    /// Create a new ant of the given species
    pub fn new(species: Species) -> Self {
        Self { species }
    }

    /// Species of this ant
    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    /// Roster label, e.g. "Worker Ant"
    #[inline]
    pub fn label(&self) -> &'static str {
        self.species.label()
    }

    /// Perform this ant's task, printing its fixed task line
    pub fn perform_task(&self) {
        println!("{}", self.species.task());
    }
}
