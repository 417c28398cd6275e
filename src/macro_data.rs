//! Economy counters read each tick and the desired counts the opener publishes.

use crate::ids::UnitTypeId;
use rustc_hash::FxHashMap;

/// Resource and supply snapshot of the current tick.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MacroCounters {
	pub minerals: u32,
	pub supply_used: u32,
	pub supply_cap: u32,
	pub larva: u32,
}
impl MacroCounters {
	pub fn new(minerals: u32, supply_used: u32, supply_cap: u32, larva: u32) -> Self {
		Self {
			minerals,
			supply_used,
			supply_cap,
			larva,
		}
	}
	/// Supply left before hitting the cap.
	pub fn supply_left(&self) -> u32 {
		self.supply_cap.saturating_sub(self.supply_used)
	}
}

/// What the opener wants production to build.
///
/// One instance is owned by [`Opener`](crate::opener::Opener) and read by the host's production.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroIntent {
	/// Desired totals of units by type.
	pub desired_units: FxHashMap<UnitTypeId, u32>,
	/// Desired totals of production structures by type.
	pub desired_production: FxHashMap<UnitTypeId, u32>,
	pub desired_gases: u32,
	/// Gas building was requested and not picked up yet.
	pub gas_requested: bool,
	/// Production must not build workers beyond the desired count.
	pub strict_worker_count: bool,
	/// Production must not build gas buildings beyond the desired count.
	pub strict_gas_count: bool,
	/// Production must not build supply beyond the desired count.
	pub strict_supply_count: bool,
}
impl MacroIntent {
	pub fn desired_unit(&self, unit: UnitTypeId) -> u32 {
		self.desired_units.get(&unit).copied().unwrap_or_default()
	}
	pub fn desired_producers(&self, unit: UnitTypeId) -> u32 {
		self.desired_production.get(&unit).copied().unwrap_or_default()
	}
	pub fn set_unit(&mut self, unit: UnitTypeId, count: u32) {
		self.desired_units.insert(unit, count);
	}
	pub fn set_producers(&mut self, unit: UnitTypeId, count: u32) {
		self.desired_production.insert(unit, count);
	}
}
