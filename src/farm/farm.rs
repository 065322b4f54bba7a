use crate::ant::Ant;
use crate::farm::room::Room;
use std::collections::BTreeMap;
use std::fmt;

/// A single ant colony: a named collection of rooms, ants, and resources.
///
/// Resource quantities are cumulative sums of every deposit ever applied to
/// that resource name; nothing is consumed, capped, or validated.
#[derive(Clone, Debug)]
pub struct AntFarm {
    name: String,
    position: (i64, i64),
    rooms: Vec<Room>,
    ants: Vec<Ant>,
    // BTreeMap so the summary lists resources sorted by name
    resources: BTreeMap<String, i64>,
}

impl AntFarm {
    /// Create an empty farm at the given meadow position
    pub fn new(name: impl Into<String>, position: (i64, i64)) -> Self {
        Self {
            name: name.into(),
            position,
            rooms: Vec::new(),
            ants: Vec::new(),
            resources: BTreeMap::new(),
        }
    }

    /// Farm name, e.g. "Farm1"
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawn position in the meadow
    #[inline]
    pub fn position(&self) -> (i64, i64) {
        self.position
    }

    /// Ants owned directly by the farm, in insertion order
    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Append a room, taking ownership
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Append an ant, taking ownership
    pub fn add_ant(&mut self, ant: Ant) {
        self.ants.push(ant);
    }

    /// Deposit `amount` of the named resource, creating the entry at zero
    /// if it does not exist yet
    pub fn add_resource(&mut self, resource: &str, amount: i64) {
        *self.resources.entry(resource.to_string()).or_insert(0) += amount;
    }

    /// Stored quantity for a resource name (zero if never deposited)
    pub fn resource_amount(&self, resource: &str) -> i64 {
        self.resources.get(resource).copied().unwrap_or(0)
    }

    /// Run one tick: every room first, then every directly-owned ant,
    /// each in insertion order
    pub fn process(&self) {
        for room in &self.rooms {
            room.process();
        }
        for ant in &self.ants {
            ant.perform_task();
        }
    }
}

impl fmt::Display for AntFarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ant Farm: {}", self.name)?;
        writeln!(f, "Position: ({}, {})", self.position.0, self.position.1)?;
        writeln!(f, "Resources:")?;
        for (resource, amount) in &self.resources {
            writeln!(f, "{}: {}", resource, amount)?;
        }
        writeln!(f, "Ants:")?;
        for ant in &self.ants {
            writeln!(f, " - {}", ant.label())?;
        }
        Ok(())
    }
}
