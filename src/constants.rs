use crate::ids::UnitTypeId;

/// Footprint radius of every race's townhall.
pub const TOWNHALL_RADIUS: f32 = 2.75;
/// Mineral cost of any race's worker.
pub const WORKER_MINERAL_COST: u32 = 50;

/// Unit types the opener asks production for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceValues {
	pub start_townhall: UnitTypeId,
	pub supply: UnitTypeId,
	pub worker: UnitTypeId,
}

pub const ZERG_VALUES: RaceValues = RaceValues {
	start_townhall: UnitTypeId::Hatchery,
	supply: UnitTypeId::Overlord,
	worker: UnitTypeId::Drone,
};
