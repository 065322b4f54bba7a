use crate::ant::Ant;
use crate::error::{CommandError, Result};
use crate::farm::AntFarm;
use crate::species::Species;
use std::collections::BTreeMap;

/// Every new farm starts with this many ants of the requested species
pub const ANTS_PER_FARM: usize = 5;

/// The meadow: owner of every ant farm, keyed by an auto-incrementing id.
///
/// Ids start at 1, grow monotonically, and are never reused. Constructed
/// explicitly and passed to whoever needs it; there is no global instance.
#[derive(Clone, Debug)]
pub struct Meadow {
    // BTreeMap keeps process_all deterministic: farms tick in ascending id
    // order, which coincides with creation order since ids are monotone.
    farms: BTreeMap<u32, AntFarm>,
    next_id: u32,
}

impl Default for Meadow {
    fn default() -> Self {
        Self::new()
    }
}

impl Meadow {
    /// Create an empty meadow
    pub fn new() -> Self {
        Self {
            farms: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a farm named "Farm{id}" populated with [`ANTS_PER_FARM`] ants
    /// of the given species, and return the assigned id
    pub fn create_farm(&mut self, species: Species, position: (i64, i64)) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let mut farm = AntFarm::new(format!("Farm{}", id), position);
        for _ in 0..ANTS_PER_FARM {
            farm.add_ant(Ant::new(species));
        }
        self.farms.insert(id, farm);
        id
    }

    /// Deposit a resource into the farm with the given id
    pub fn add_resource_to_farm(&mut self, id: u32, resource: &str, amount: i64) -> Result<()> {
        let farm = self
            .farms
            .get_mut(&id)
            .ok_or(CommandError::UnknownFarm(id))?;
        farm.add_resource(resource, amount);
        Ok(())
    }

    /// Run one tick over every farm, in ascending id order
    pub fn process_all(&self) {
        for farm in self.farms.values() {
            farm.process();
        }
    }

    /// True when at most one farm remains
    pub fn is_simulation_over(&self) -> bool {
        self.farms.len() <= 1
    }

    /// Look up a farm by id
    pub fn farm(&self, id: u32) -> Option<&AntFarm> {
        self.farms.get(&id)
    }

    /// Number of farms in the meadow
    pub fn farm_count(&self) -> usize {
        self.farms.len()
    }
}
