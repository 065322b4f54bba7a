pub mod farm;
pub mod room;

pub use farm::AntFarm;
pub use room::Room;
