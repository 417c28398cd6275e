//! Data structures for issuing commands to units.

use crate::{geometry::Point2, ids::AbilityId};
use rustc_hash::FxHashSet;
use std::fmt;

/// Target of ability used by unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Target {
	/// Ability target is position (move, build, ...).
	Pos(Point2),
	/// Ability target is unit (smart, return cargo to, cancel, ...).
	Tag(u64),
	/// Ability don't require target (train, return cargo, ...).
	None,
}
impl Target {
	pub fn pos(self) -> Option<Point2> {
		match self {
			Target::Pos(pos) => Some(pos),
			_ => None,
		}
	}
	pub fn tag(self) -> Option<u64> {
		match self {
			Target::Tag(tag) => Some(tag),
			_ => None,
		}
	}
}
impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Target::Pos(pos) => write!(f, "{}", pos),
			Target::Tag(tag) => write!(f, "#{}", tag),
			Target::None => f.write_str("-"),
		}
	}
}

/// Order which unit is currently executing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitOrder {
	pub ability: AbilityId,
	pub target: Target,
	/// Progress of train abilities. Range: `[0.0, 1.0]`
	pub progress: f32,
}
impl UnitOrder {
	pub fn new(ability: AbilityId, target: Target) -> Self {
		Self {
			ability,
			target,
			progress: 0.0,
		}
	}
}

/// Single command for a unit, as it's sent to the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Command {
	/// Tag of commanded unit.
	pub unit: u64,
	pub ability: AbilityId,
	pub target: Target,
	/// Whether command is appended to unit's orders or replaces them.
	pub queue: bool,
}
impl Command {
	pub fn new(unit: u64, ability: AbilityId, target: Target, queue: bool) -> Self {
		Self {
			unit,
			ability,
			target,
			queue,
		}
	}
}
impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{} {:?} {}", self.unit, self.ability, self.target)?;
		if self.queue {
			f.write_str(" (queued)")?;
		}
		Ok(())
	}
}

/// Collects commands issued during one step.
///
/// Commands are kept in the order they were issued.
#[derive(Debug, Default, Clone)]
pub struct Commander {
	commands: Vec<Command>,
	issued: FxHashSet<Command>,
}
impl Commander {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds command for unit with given current order.
	///
	/// Unless `queue` or `allow_spam` is set, command repeating current order
	/// of a busy unit is dropped. Exact duplicates within one step are always dropped.
	///
	/// Returns `true` if command was recorded.
	pub fn push(&mut self, command: Command, current: Option<&UnitOrder>, allow_spam: bool) -> bool {
		if !(command.queue || allow_spam) {
			if let Some(order) = current {
				if command.ability == order.ability && command.target == order.target {
					debug!("Suppressed {}", command);
					return false;
				}
			}
		}
		if !self.issued.insert(command) {
			return false;
		}

		debug!("Command {}", command);
		self.commands.push(command);
		true
	}

	pub fn commands(&self) -> &[Command] {
		&self.commands
	}
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
	pub fn len(&self) -> usize {
		self.commands.len()
	}
	/// Returns all collected commands and prepares commander for the next step.
	pub fn take_commands(&mut self) -> Vec<Command> {
		self.issued.clear();
		std::mem::take(&mut self.commands)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn move_to(x: f32, y: f32, queue: bool) -> Command {
		Command::new(1, AbilityId::MoveMove, Target::Pos(Point2::new(x, y)), queue)
	}

	#[test]
	fn repeated_order_is_suppressed() {
		let mut commander = Commander::new();
		let current = UnitOrder::new(AbilityId::MoveMove, Target::Pos(Point2::new(5.0, 5.0)));

		assert!(!commander.push(move_to(5.0, 5.0, false), Some(&current), false));
		assert!(commander.push(move_to(5.0, 5.0, false), Some(&current), true));
		assert!(commander.push(move_to(5.0, 5.0, true), Some(&current), false));
		assert_eq!(commander.len(), 2);
	}

	#[test]
	fn duplicates_dropped_until_taken() {
		let mut commander = Commander::new();
		assert!(commander.push(move_to(1.0, 1.0, false), None, false));
		assert!(!commander.push(move_to(1.0, 1.0, false), None, true));

		assert_eq!(commander.take_commands(), vec![move_to(1.0, 1.0, false)]);
		assert!(commander.is_empty());
		assert!(commander.push(move_to(1.0, 1.0, false), None, false));
	}

	#[test]
	fn display_marks_queued() {
		let c = Command::new(7, AbilityId::Smart, Target::Tag(3), true);
		assert_eq!(c.to_string(), "#7 Smart #3 (queued)");
	}
}
