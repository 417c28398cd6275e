//! Exclusive ownership of workers taken off their usual duty.

use crate::{
	geometry::Point2,
	worker::{Worker, WorkerRole},
};
use rustc_hash::FxHashMap;

/// Task a claimed worker was given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Assignment {
	pub role: WorkerRole,
	pub destination: Point2,
	/// Game loop on which the worker was claimed.
	pub since: u32,
}

/// Map from worker tag to its current task.
///
/// A worker present here is claimed and won't be picked by the selector again
/// until whoever uses it calls [`release`](Self::release).
#[derive(Debug, Clone, Default)]
pub struct Assignments(FxHashMap<u64, Assignment>);
impl Assignments {
	pub fn new() -> Self {
		Self::default()
	}

	/// Claims worker for given task.
	///
	/// Returns `false` and keeps existing task if worker is already claimed.
	pub fn claim(&mut self, tag: u64, role: WorkerRole, destination: Point2, now: u32) -> bool {
		if self.0.contains_key(&tag) {
			return false;
		}
		self.0.insert(
			tag,
			Assignment {
				role,
				destination,
				since: now,
			},
		);
		true
	}
	/// Gives worker back, returning its last task.
	pub fn release(&mut self, tag: u64) -> Option<Assignment> {
		self.0.remove(&tag)
	}
	pub fn is_claimed(&self, tag: u64) -> bool {
		self.0.contains_key(&tag)
	}
	pub fn get(&self, tag: u64) -> Option<&Assignment> {
		self.0.get(&tag)
	}
	/// Role given to a claimed worker.
	pub fn role_of(&self, tag: u64) -> Option<WorkerRole> {
		self.0.get(&tag).map(|a| a.role)
	}
	/// Role of worker, preferring the one given here over what host reports.
	pub fn effective_role(&self, worker: &Worker) -> WorkerRole {
		self.role_of(worker.tag).unwrap_or(worker.role)
	}
	/// Drops tasks of workers which no longer exist.
	pub fn retain_alive<F: FnMut(u64) -> bool>(&mut self, mut alive: F) {
		self.0.retain(|tag, _| alive(*tag));
	}
	pub fn iter(&self) -> impl Iterator<Item = (u64, &Assignment)> {
		self.0.iter().map(|(tag, a)| (*tag, a))
	}
	pub fn len(&self) -> usize {
		self.0.len()
	}
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
