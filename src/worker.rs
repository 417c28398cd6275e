//! Snapshot of harvesting units and their ordered collection.

use crate::{
	action::{Command, Commander, Target, UnitOrder},
	distance::Distance,
	geometry::Point2,
	ids::{AbilityId, BuffId},
};
use indexmap::{
	map::{IntoValues, Keys, Values},
	IndexMap,
};
use rustc_hash::{FxHashSet, FxHasher};
use std::hash::BuildHasherDefault;

/// What a worker is busy with, as seen by the host's unit tracking.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromStr)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub enum WorkerRole {
	Minerals,
	Gas,
	/// Constructing a structure.
	Build,
	/// Walking to a spot where it will construct a structure later.
	PreBuild,
	Other,
}
impl Default for WorkerRole {
	fn default() -> Self {
		WorkerRole::Minerals
	}
}

/// Harvesting unit as seen on current tick.
#[derive(Debug, Clone)]
pub struct Worker {
	/// Unique and constant for each unit.
	pub tag: u64,
	pub position: Point2,
	/// Game loop on which the worker was first seen.
	pub created_at: u32,
	/// Current orders, first one is executed now.
	pub orders: Vec<UnitOrder>,
	/// Active buffs, carried resources show up here.
	pub buffs: FxHashSet<BuffId>,
	pub role: WorkerRole,
}
impl Worker {
	pub fn new(tag: u64, position: Point2) -> Self {
		Self {
			tag,
			position,
			created_at: 0,
			orders: Vec::new(),
			buffs: Default::default(),
			role: Default::default(),
		}
	}
	pub fn with_created_at(mut self, tick: u32) -> Self {
		self.created_at = tick;
		self
	}
	pub fn with_order(mut self, ability: AbilityId, target: Target) -> Self {
		self.orders.push(UnitOrder::new(ability, target));
		self
	}
	pub fn with_buff(mut self, buff: BuffId) -> Self {
		self.buffs.insert(buff);
		self
	}
	pub fn with_role(mut self, role: WorkerRole) -> Self {
		self.role = role;
		self
	}

	/// Checks if worker don't have any orders currently.
	pub fn is_idle(&self) -> bool {
		self.orders.is_empty()
	}
	/// Ability of the order executed now.
	pub fn ordered_ability(&self) -> Option<AbilityId> {
		self.orders.first().map(|order| order.ability)
	}
	/// Checks if worker has minerals or gas in hands.
	pub fn is_carrying_resource(&self) -> bool {
		self.buffs.iter().any(|buff| buff.is_carry())
	}
	/// Checks if any order of worker brings it back to a drop-off point.
	pub fn is_returning(&self) -> bool {
		self.orders.iter().any(|order| order.ability.is_return_class())
	}
	/// Worker has cargo or is already on the way to drop it off.
	pub fn has_cargo(&self) -> bool {
		self.is_carrying_resource() || self.is_returning()
	}
	pub fn is_constructing(&self) -> bool {
		self.ordered_ability().map_or(false, |ability| ability.is_constructing())
	}
	/// Age of the worker in game loops, `0` if it comes from the future.
	pub fn age(&self, now: u32) -> u32 {
		now.saturating_sub(self.created_at)
	}

	/// Orders worker to use given ability, unless it already does exactly that.
	pub fn command(&self, commander: &mut Commander, ability: AbilityId, target: Target, queue: bool) -> bool {
		commander.push(
			Command::new(self.tag, ability, target, queue),
			self.orders.first(),
			false,
		)
	}
	/// Orders worker to use given ability even if it's the current order.
	pub fn command_spam(
		&self,
		commander: &mut Commander,
		ability: AbilityId,
		target: Target,
		queue: bool,
	) -> bool {
		commander.push(
			Command::new(self.tag, ability, target, queue),
			self.orders.first(),
			true,
		)
	}
	pub fn smart(&self, commander: &mut Commander, target: Target, queue: bool) -> bool {
		self.command(commander, AbilityId::Smart, target, queue)
	}
	pub fn move_to(&self, commander: &mut Commander, target: Target, queue: bool) -> bool {
		self.command(commander, AbilityId::MoveMove, target, queue)
	}
	pub fn return_resource(&self, commander: &mut Commander, queue: bool) -> bool {
		self.command(commander, AbilityId::HarvestReturn, Target::None, queue)
	}
}
impl From<&Worker> for Point2 {
	#[inline]
	fn from(w: &Worker) -> Self {
		w.position
	}
}
impl Distance for &Worker {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		self.position.distance_squared(other)
	}
}

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Workers keyed by tag, iterated in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Workers(FxIndexMap<u64, Worker>);
impl Workers {
	#[inline]
	pub fn new() -> Self {
		Self(Default::default())
	}
	#[inline]
	pub fn first(&self) -> Option<&Worker> {
		self.0.values().next()
	}
	#[inline]
	pub fn push(&mut self, w: Worker) -> Option<Worker> {
		self.0.insert(w.tag, w)
	}
	#[inline]
	pub fn remove(&mut self, tag: u64) -> Option<Worker> {
		self.0.shift_remove(&tag)
	}
	#[inline]
	pub fn iter(&self) -> Values<u64, Worker> {
		self.0.values()
	}
	#[inline]
	pub fn tags(&self) -> Keys<u64, Worker> {
		self.0.keys()
	}
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}
	pub fn find_tag(&self, tag: u64) -> Option<&Worker> {
		self.0.get(&tag)
	}
}
impl FromIterator<Worker> for Workers {
	fn from_iter<I: IntoIterator<Item = Worker>>(iter: I) -> Self {
		Self(iter.into_iter().map(|w| (w.tag, w)).collect())
	}
}
impl IntoIterator for Workers {
	type Item = Worker;
	type IntoIter = IntoValues<u64, Worker>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_values()
	}
}
impl<'a> IntoIterator for &'a Workers {
	type Item = &'a Worker;
	type IntoIter = Values<'a, u64, Worker>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.values()
	}
}
