#![allow(dead_code)]

use drone_opener::prelude::*;

pub const TOWNHALL: u64 = 900;
/// Game loop far enough from the start that fixture workers aren't fresh.
pub const LATE: u32 = 1000;

pub fn p(x: f32, y: f32) -> Point2 {
	Point2::new(x, y)
}

/// Main base at (30, 30) with minerals 10 cells north of it.
///
/// Eight close patches at `y = 40`, `x` from 26.5 to 33.5, and two far ones at x = 20 and 40.
pub fn main_base() -> Base {
	let close = (0..8).map(|i| ResourcePatch::new(801 + i, p(26.5 + i as f32, 40.0), 1800));
	let far = vec![
		ResourcePatch::new(809, p(20.0, 40.0), 900),
		ResourcePatch::new(810, p(40.0, 40.0), 900),
	];
	Base::new(p(30.0, 30.0))
		.with_townhall(TOWNHALL)
		.with_patches(close.chain(far))
		.with_mineral_line(p(30.0, 38.0))
}

/// Natural expansion without a townhall.
pub fn natural() -> Base {
	Base::new(p(60.0, 30.0)).with_patches(vec![ResourcePatch::new(850, p(60.0, 38.0), 1800)])
}

pub fn idle(tag: u64, x: f32, y: f32) -> Worker {
	Worker::new(tag, p(x, y))
}

pub fn miner(tag: u64, x: f32, y: f32) -> Worker {
	Worker::new(tag, p(x, y)).with_order(AbilityId::HarvestGather, Target::Tag(801))
}

pub fn carrier(tag: u64, x: f32, y: f32) -> Worker {
	Worker::new(tag, p(x, y))
		.with_buff(BuffId::CarryMineralFieldMinerals)
		.with_order(AbilityId::HarvestReturn, Target::None)
}

pub fn extractor(tag: u64, progress: f32) -> Structure {
	Structure::new(tag, UnitTypeId::Extractor, progress)
}

/// Observation with a 14 supply economy on the main base.
pub fn observation(tick: u32, minerals: u32, workers: Vec<Worker>) -> Observation {
	let workers: Workers = workers.into_iter().collect();
	let mut unit_counts = rustc_hash::FxHashMap::default();
	unit_counts.insert(UnitTypeId::Drone, workers.len() as u32);
	unit_counts.insert(UnitTypeId::Overlord, 1);
	Observation {
		tick,
		counters: Some(MacroCounters::new(minerals, 14, 14, 1)),
		workers,
		bases: vec![main_base(), natural()],
		structures: Vec::new(),
		unit_counts,
	}
}

pub fn with_structures(mut obs: Observation, structures: Vec<Structure>) -> Observation {
	obs.structures = structures;
	obs
}

/// Usual mining crowd: three drones at the patches and one returning next to the townhall.
pub fn mining_crowd() -> Vec<Worker> {
	vec![
		miner(1, 28.0, 39.0),
		miner(2, 30.0, 39.0),
		miner(3, 32.0, 39.0),
		carrier(4, 30.0, 26.0),
	]
}

pub fn context<'a>(
	workers: &'a Workers,
	bases: &'a [Base],
	patches: &'a PatchClassification,
	assignments: &'a Assignments,
) -> SelectionContext<'a> {
	SelectionContext {
		workers,
		bases,
		patches,
		assignments,
	}
}
