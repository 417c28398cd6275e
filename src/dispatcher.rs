//! Turning a selected worker into orders which bring it to a destination.

use crate::{
	action::{Command, Commander, Target},
	assignments::Assignments,
	base::{Base, Townhall},
	classify::PatchClassification,
	constants::TOWNHALL_RADIUS,
	distance::{cmp_f32, Distance, DistanceIterator},
	error::{OpenerError, OpenerResult},
	geometry::Point2,
	ids::AbilityId,
	options::CargoBands,
	selector::{Selection, SelectionContext, WorkerSelector},
	worker::{Worker, WorkerRole, Workers},
};

/// What happened to a dispatch request.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
	/// These commands were recorded, in order.
	Issued(Vec<Command>),
	/// Every command repeated what the worker already does, so nothing was recorded.
	Suppressed,
	/// Host's builder task took over moving a worker.
	Delegated,
	/// No worker could be selected, try again later.
	NoCandidate,
}
impl DispatchOutcome {
	pub fn is_issued(&self) -> bool {
		matches!(self, DispatchOutcome::Issued(_))
	}
	/// Commands recorded by this dispatch.
	pub fn commands(&self) -> &[Command] {
		match self {
			DispatchOutcome::Issued(commands) => commands,
			_ => &[],
		}
	}
}

/// Host task which knows how to send a builder on its own.
///
/// When registered, prepositioning hands the destination over instead of issuing orders.
pub trait BuilderTask {
	fn send_builder(&mut self, destination: Point2, now: u32) -> OpenerResult<()>;
}

/// Selected worker together with what was done with it.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReport {
	pub selection: Option<Selection>,
	pub outcome: DispatchOutcome,
}
impl DispatchReport {
	/// Tag of the selected worker.
	pub fn worker(&self) -> Option<u64> {
		self.selection.map(|s| s.worker)
	}
}

/// State of the current tick a preposition needs, with the parts it may change.
pub struct DispatchEnv<'a> {
	pub workers: &'a Workers,
	pub bases: &'a [Base],
	pub patches: &'a PatchClassification,
	pub assignments: &'a mut Assignments,
	pub commander: &'a mut Commander,
	pub builder: Option<&'a mut dyn BuilderTask>,
}

/// Issues the minimal order sequence bringing a worker to a destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerDispatcher {
	pub bands: CargoBands,
}
impl WorkerDispatcher {
	pub fn new(bands: CargoBands) -> Self {
		Self { bands }
	}

	/// Sends worker to `destination`.
	///
	/// A worker with cargo returns it first and only the order after the drop-off changes,
	/// its assignment stays untouched. Any other worker is claimed for pre-building
	/// and moved right away.
	pub fn dispatch(
		&self,
		worker: &Worker,
		bases: &[Base],
		destination: Point2,
		now: u32,
		assignments: &mut Assignments,
		commander: &mut Commander,
	) -> OpenerResult<DispatchOutcome> {
		if !destination.is_finite() {
			return Err(OpenerError::DispatchFailure(format!(
				"destination {} is not a map point",
				destination
			)));
		}
		let recorded = commander.len();

		if worker.has_cargo() {
			self.return_then_go(worker, bases, destination, commander)?;
		} else {
			if !assignments.claim(worker.tag, WorkerRole::PreBuild, destination, now) {
				return Err(OpenerError::DispatchFailure(format!(
					"worker {} is already claimed",
					worker.tag
				)));
			}
			worker.command_spam(commander, AbilityId::MoveMove, Target::Pos(destination), false);
		}

		let commands = &commander.commands()[recorded..];
		if commands.is_empty() {
			debug!("Nothing new to order for worker {}", worker.tag);
			Ok(DispatchOutcome::Suppressed)
		} else {
			Ok(DispatchOutcome::Issued(commands.to_vec()))
		}
	}

	fn return_then_go(
		&self,
		worker: &Worker,
		bases: &[Base],
		destination: Point2,
		commander: &mut Commander,
	) -> OpenerResult<()> {
		let (base, townhall) = closest_townhall(worker, bases).ok_or(OpenerError::MissingInput("townhall"))?;
		let distance = worker.distance_squared(townhall);

		if distance > self.bands.far_squared {
			debug!("Worker {} is far from townhall, pointing it home", worker.tag);
			worker.smart(commander, Target::Tag(townhall.tag), false);
		} else if distance < self.bands.near_squared {
			debug!("Worker {} returns cargo, then goes to {}", worker.tag, destination);
			worker.return_resource(commander, false);
			worker.move_to(commander, Target::Pos(destination), true);
		} else {
			let drop_off = base
				.patches
				.iter()
				.closest(worker.position)
				.map_or(townhall.position, |patch| {
					townhall.position.towards(patch.position, TOWNHALL_RADIUS)
				});
			debug!("Worker {} walks to drop-off at {}", worker.tag, drop_off);
			worker.move_to(commander, Target::Pos(drop_off), false);
			worker.smart(commander, Target::Tag(townhall.tag), true);
		}
		Ok(())
	}

	/// Selects a worker for `destination` and dispatches it, or hands it to the builder task.
	pub fn preposition(
		&self,
		selector: &WorkerSelector,
		env: DispatchEnv,
		destination: Point2,
		now: u32,
	) -> OpenerResult<DispatchReport> {
		let ctx = SelectionContext {
			workers: env.workers,
			bases: env.bases,
			patches: env.patches,
			assignments: env.assignments,
		};
		let selection = match selector.select(&ctx, Some(destination), now) {
			Some(selection) => selection,
			None => {
				return Ok(DispatchReport {
					selection: None,
					outcome: DispatchOutcome::NoCandidate,
				})
			}
		};

		if let Some(builder) = env.builder {
			builder.send_builder(destination, now)?;
			debug!("Builder task took over, selected worker {}", selection.worker);
			return Ok(DispatchReport {
				selection: Some(selection),
				outcome: DispatchOutcome::Delegated,
			});
		}

		let worker = env
			.workers
			.find_tag(selection.worker)
			.ok_or(OpenerError::MissingInput("selected worker"))?;
		let outcome = self.dispatch(worker, env.bases, destination, now, env.assignments, env.commander)?;
		Ok(DispatchReport {
			selection: Some(selection),
			outcome,
		})
	}
}

fn closest_townhall<'a>(worker: &Worker, bases: &'a [Base]) -> Option<(&'a Base, &'a Townhall)> {
	bases
		.iter()
		.filter_map(|base| base.townhall.as_ref().map(|townhall| (base, townhall)))
		.min_by(|(_, a), (_, b)| cmp_f32(worker.distance_squared(*a), worker.distance_squared(*b)))
}
