use crate::ant::Ant;

/// An intermediate grouping of ants inside a farm.
///
/// Rooms can batch-process their members, but no command currently routes
/// ants into a room; the type is unreachable from the external interface and
/// is kept only so farms can grow internal structure later.
#[derive(Clone, Debug, Default)]
pub struct Room {
    ants: Vec<Ant>,
}

impl Room {
    /// Create an empty room
    pub fn new() -> Self {
        Self { ants: Vec::new() }
    }

    /// Add an ant to the room, taking ownership
    pub fn add_ant(&mut self, ant: Ant) {
        self.ants.push(ant);
    }

    /// Run every contained ant's task in insertion order
    pub fn process(&self) {
        for ant in &self.ants {
            ant.perform_task();
        }
    }

    /// Number of ants in the room
    #[inline]
    pub fn ant_count(&self) -> usize {
        self.ants.len()
    }
}
