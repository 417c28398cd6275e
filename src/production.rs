//! Worker production from larva.

use crate::{
	action::{Command, Commander, Target, UnitOrder},
	constants::WORKER_MINERAL_COST,
	ids::AbilityId,
	macro_data::MacroCounters,
};

/// Larva as seen on current tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Larva {
	pub tag: u64,
	/// Game loop on which the larva was last seen.
	pub last_seen: u32,
	pub orders: Vec<UnitOrder>,
}
impl Larva {
	pub fn new(tag: u64, last_seen: u32) -> Self {
		Self {
			tag,
			last_seen,
			orders: Vec::new(),
		}
	}
	pub fn is_idle(&self) -> bool {
		self.orders.is_empty()
	}
}

/// Trains a drone from the idle larva seen the longest ago.
///
/// Does nothing without enough minerals, free supply or idle larva.
pub fn train_worker(larvae: &[Larva], counters: &MacroCounters, commander: &mut Commander) -> Option<Command> {
	if counters.minerals < WORKER_MINERAL_COST || counters.supply_left() == 0 {
		return None;
	}
	let larva = larvae
		.iter()
		.filter(|l| l.is_idle())
		.min_by_key(|l| l.last_seen)?;

	let command = Command::new(larva.tag, AbilityId::LarvaTrainDrone, Target::None, false);
	if commander.push(command, larva.orders.first(), false) {
		Some(command)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn picks_oldest_idle_larva() {
		let mut busy = Larva::new(1, 10);
		busy.orders.push(UnitOrder::new(AbilityId::LarvaTrainDrone, Target::None));
		let larvae = vec![busy, Larva::new(2, 30), Larva::new(3, 20)];
		let mut commander = Commander::new();

		let command = train_worker(&larvae, &MacroCounters::new(50, 13, 14, 3), &mut commander);
		assert_eq!(command.map(|c| c.unit), Some(3));
		assert_eq!(commander.len(), 1);
	}

	#[test]
	fn needs_minerals_and_supply() {
		let larvae = vec![Larva::new(1, 0)];
		let mut commander = Commander::new();

		assert_eq!(train_worker(&larvae, &MacroCounters::new(49, 13, 14, 1), &mut commander), None);
		assert_eq!(train_worker(&larvae, &MacroCounters::new(100, 14, 14, 1), &mut commander), None);
		assert!(commander.is_empty());
	}
}
