//! Opening build order built around the extractor trick.
//!
//! The opener requests a gas building, queues an extra worker once it starts,
//! cancels it to get the supply back and then sends a worker to the top of the ramp.
//! Everything is driven by [`Opener::on_step`], called once per game step:
//! ```
//! use drone_opener::prelude::*;
//!
//! let mut opener = Opener::new(OpenerOptions::default()).unwrap();
//! opener.start(0);
//!
//! let obs = Observation {
//! 	tick: 1,
//! 	counters: Some(MacroCounters::new(120, 14, 14, 1)),
//! 	..Default::default()
//! };
//! let report = opener.on_step(&obs);
//! assert_eq!(report.phase, BuildPhase::TrickRequested);
//! assert_eq!(opener.intent().desired_gases, 1);
//! ```

use crate::{
	action::{Command, Commander, Target},
	assignments::Assignments,
	base::Base,
	classify::{PatchClassification, PatchClassifier},
	constants::{RaceValues, ZERG_VALUES},
	dispatcher::{BuilderTask, DispatchEnv, DispatchOutcome, DispatchReport, WorkerDispatcher},
	error::{OpenerError, OpenerResult},
	geometry::Point2,
	ids::{AbilityId, UnitTypeId},
	locator::{Located, TargetLocator},
	macro_data::{MacroCounters, MacroIntent},
	options::OpenerOptions,
	selector::WorkerSelector,
	telemetry::Telemetry,
	terrain::{TerrainHeight, WallCatalog},
	worker::Workers,
};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt;

/// Stage of the opener. Only ever moves forward during a run.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromStr)]
pub enum BuildPhase {
	Start,
	Baseline,
	TrickRequested,
	ExtraWorkersQueued,
	CancelInFlight,
	TrickCompleted,
	TargetComputed,
	EarlyStopped,
}
impl Default for BuildPhase {
	fn default() -> Self {
		BuildPhase::Start
	}
}

/// Our structure as seen on current tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Structure {
	pub tag: u64,
	pub type_id: UnitTypeId,
	/// Construction progress. Range: `[0.0, 1.0]`
	pub build_progress: f32,
}
impl Structure {
	pub fn new(tag: u64, type_id: UnitTypeId, build_progress: f32) -> Self {
		Self {
			tag,
			type_id,
			build_progress,
		}
	}
	pub fn is_in_progress(&self) -> bool {
		self.build_progress < 1.0
	}
}

/// Everything the opener reads from the game on one tick.
#[derive(Debug, Clone, Default)]
pub struct Observation {
	/// Current game loop.
	pub tick: u32,
	/// `None` if host couldn't read resources this tick.
	pub counters: Option<MacroCounters>,
	pub workers: Workers,
	pub bases: Vec<Base>,
	pub structures: Vec<Structure>,
	/// Current counts of our units by type.
	pub unit_counts: FxHashMap<UnitTypeId, u32>,
}
impl Observation {
	/// Count of our units of given type, `0` if unknown.
	pub fn count(&self, unit: UnitTypeId) -> u32 {
		self.unit_counts.get(&unit).copied().unwrap_or_default()
	}
	/// Tags of gas buildings still under construction.
	pub fn gas_in_progress(&self) -> Vec<u64> {
		self.structures
			.iter()
			.filter(|s| s.type_id.is_gas_building() && s.is_in_progress())
			.map(|s| s.tag)
			.collect()
	}
	/// First base with our townhall, or just the first base if we have none.
	pub fn main_base(&self) -> Option<&Base> {
		self.bases.iter().find(|b| b.is_own()).or_else(|| self.bases.first())
	}
}

/// Something that happened during a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepEvent {
	Transition { from: BuildPhase, to: BuildPhase },
	/// Gas building was requested from production.
	GasRequested,
	/// Desired worker count was raised.
	ExtraWorkerQueued { desired: u32 },
	/// Cancel was issued for these gas buildings.
	CancelRequested(Vec<u64>),
	/// Gas is given up, second townhall and next supply unit are requested.
	TrickCompleted { desired_supply: u32 },
	TargetComputed(Located),
	Dispatched(DispatchReport),
	/// A step of the opener couldn't do its work.
	Skipped(OpenerError),
}

/// Outcome of one [`Opener::on_step`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
	pub tick: u32,
	/// Phase after the step.
	pub phase: BuildPhase,
	pub events: Vec<StepEvent>,
	/// Commands to send to the game, in order.
	pub commands: Vec<Command>,
}
impl StepReport {
	fn new(tick: u32, phase: BuildPhase) -> Self {
		Self {
			tick,
			phase,
			events: Vec::new(),
			commands: Vec::new(),
		}
	}
	/// Nothing happened.
	pub fn is_quiet(&self) -> bool {
		self.events.is_empty() && self.commands.is_empty()
	}
	pub fn transitions(&self) -> impl Iterator<Item = (BuildPhase, BuildPhase)> + '_ {
		self.events.iter().filter_map(|e| match e {
			StepEvent::Transition { from, to } => Some((*from, *to)),
			_ => None,
		})
	}
	pub fn skipped(&self) -> impl Iterator<Item = &OpenerError> {
		self.events.iter().filter_map(|e| match e {
			StepEvent::Skipped(reason) => Some(reason),
			_ => None,
		})
	}
	pub fn dispatches(&self) -> impl Iterator<Item = &DispatchReport> {
		self.events.iter().filter_map(|e| match e {
			StepEvent::Dispatched(report) => Some(report),
			_ => None,
		})
	}
}

impl fmt::Display for StepReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {:?}", self.tick, self.phase)?;
		for (from, to) in self.transitions() {
			write!(f, " {:?}->{:?}", from, to)?;
		}
		if !self.commands.is_empty() {
			write!(f, ": {}", self.commands.iter().join(", "))?;
		}
		Ok(())
	}
}

/// Build order driven once per game step.
pub trait BuildOrder {
	/// Called once when a new run begins.
	fn on_start(&mut self, tick: u32);
	/// Called on every game step.
	fn on_step(&mut self, obs: &Observation) -> StepReport;
	/// Build order has nothing left to do.
	fn is_finished(&self) -> bool {
		false
	}
}

/// Extractor trick opener.
pub struct Opener {
	options: OpenerOptions,
	classifier: PatchClassifier,
	selector: WorkerSelector,
	dispatcher: WorkerDispatcher,
	locator: TargetLocator,
	race: RaceValues,
	phase: BuildPhase,
	intent: MacroIntent,
	assignments: Assignments,
	commander: Commander,
	patches: PatchClassification,
	target: Option<Located>,
	target_dispatched: bool,
	stop_dispatched: bool,
	terrain: Option<Box<dyn TerrainHeight>>,
	walls: WallCatalog,
	map_name: Option<String>,
	builder: Option<Box<dyn BuilderTask>>,
	telemetry: Option<Box<dyn Telemetry>>,
}
impl Opener {
	/// Creates opener with given options, fails if they don't make sense.
	pub fn new(options: OpenerOptions) -> OpenerResult<Self> {
		options.validate()?;
		Ok(Self {
			classifier: PatchClassifier::new(options.patches),
			selector: WorkerSelector::new(options.selection),
			dispatcher: WorkerDispatcher::new(options.cargo),
			locator: TargetLocator::new(options.locator),
			options,
			race: ZERG_VALUES,
			phase: BuildPhase::Start,
			intent: Default::default(),
			assignments: Default::default(),
			commander: Default::default(),
			patches: Default::default(),
			target: None,
			target_dispatched: false,
			stop_dispatched: false,
			terrain: None,
			walls: Default::default(),
			map_name: None,
			builder: None,
			telemetry: None,
		})
	}
	/// Uses given terrain for ramp detection.
	pub fn with_terrain<T: TerrainHeight + 'static>(mut self, terrain: T) -> Self {
		self.terrain = Some(Box::new(terrain));
		self
	}
	/// Uses wall metadata of the named map for ramp detection.
	pub fn with_walls<S: Into<String>>(mut self, walls: WallCatalog, map_name: S) -> Self {
		self.walls = walls;
		self.map_name = Some(map_name.into());
		self
	}
	/// Hands worker moves over to host's builder task.
	pub fn with_builder<B: BuilderTask + 'static>(mut self, builder: B) -> Self {
		self.builder = Some(Box::new(builder));
		self
	}
	pub fn with_telemetry<T: Telemetry + 'static>(mut self, telemetry: T) -> Self {
		self.telemetry = Some(Box::new(telemetry));
		self
	}

	pub fn options(&self) -> &OpenerOptions {
		&self.options
	}
	pub fn phase(&self) -> BuildPhase {
		self.phase
	}
	/// Desired counts for production.
	pub fn intent(&self) -> &MacroIntent {
		&self.intent
	}
	/// Staging point, once computed.
	pub fn target(&self) -> Option<Located> {
		self.target
	}
	/// Patch classification of the last step.
	pub fn patches(&self) -> &PatchClassification {
		&self.patches
	}
	pub fn assignments(&self) -> &Assignments {
		&self.assignments
	}
	/// Lets host release workers it's done with.
	pub fn assignments_mut(&mut self) -> &mut Assignments {
		&mut self.assignments
	}

	/// Begins a new run, resetting everything from the previous one.
	pub fn start(&mut self, tick: u32) {
		let mut report = StepReport::new(tick, self.phase);
		self.start_run(tick, &mut report);
	}

	fn start_run(&mut self, tick: u32, report: &mut StepReport) {
		self.phase = BuildPhase::Start;
		self.target = None;
		self.target_dispatched = false;
		self.stop_dispatched = false;
		self.assignments = Default::default();
		self.commander = Default::default();

		let mut intent = MacroIntent {
			strict_worker_count: true,
			strict_gas_count: true,
			strict_supply_count: true,
			..Default::default()
		};
		intent.set_producers(self.race.start_townhall, 1);
		intent.set_unit(self.race.worker, 22);
		intent.set_unit(UnitTypeId::Queen, 1);
		intent.set_unit(self.race.supply, 1);
		self.intent = intent;

		self.advance(BuildPhase::Baseline, tick, 0, report);
	}

	/// Runs one step of the opener. Never fails: problems end up as [`StepEvent::Skipped`].
	pub fn on_step(&mut self, obs: &Observation) -> StepReport {
		let mut report = StepReport::new(obs.tick, self.phase);
		self.patches = self.classifier.classify_all(&obs.bases);

		match self.phase {
			BuildPhase::Start => self.start_run(obs.tick, &mut report),
			BuildPhase::EarlyStopped => {}
			_ => match obs.counters {
				Some(counters) => self.evaluate(obs, counters, &mut report),
				None => skip(&mut report, OpenerError::MissingInput("macro counters")),
			},
		}

		report.phase = self.phase;
		report.commands = self.commander.take_commands();
		if let Some(telemetry) = self.telemetry.as_mut() {
			if let Err(e) = telemetry.record(&report) {
				warn!("Telemetry failed: {}", e);
			}
		}
		report
	}

	fn evaluate(&mut self, obs: &Observation, counters: MacroCounters, report: &mut StepReport) {
		let gates = self.options.gates;
		let minerals = counters.minerals;

		match self.phase {
			BuildPhase::Baseline => {
				if counters.supply_used >= gates.supply
					&& counters.larva >= gates.larva
					&& minerals >= gates.trick_minerals
				{
					self.intent.desired_gases = 1;
					self.intent.gas_requested = true;
					report.events.push(StepEvent::GasRequested);
					self.advance(BuildPhase::TrickRequested, obs.tick, minerals, report);
				}
			}
			BuildPhase::TrickRequested => {
				if !obs.gas_in_progress().is_empty() {
					let workers = obs.unit_counts.get(&self.race.worker).copied();
					let desired = workers.unwrap_or(obs.workers.len() as u32) + 1;
					self.intent.set_unit(self.race.worker, desired);
					self.intent.gas_requested = false;
					report.events.push(StepEvent::ExtraWorkerQueued { desired });
					self.advance(BuildPhase::ExtraWorkersQueued, obs.tick, minerals, report);
				}
			}
			BuildPhase::ExtraWorkersQueued | BuildPhase::CancelInFlight => {
				let in_progress = obs.gas_in_progress();
				if in_progress.is_empty() {
					self.complete_trick(obs, report);
					self.advance(BuildPhase::TrickCompleted, obs.tick, minerals, report);
				} else {
					self.cancel_gas(in_progress, report);
					if self.phase == BuildPhase::ExtraWorkersQueued {
						self.advance(BuildPhase::CancelInFlight, obs.tick, minerals, report);
					}
				}
			}
			BuildPhase::TrickCompleted => {
				if minerals > gates.target_minerals && !self.target_dispatched {
					self.compute_target(obs, minerals, report);
				}
			}
			BuildPhase::TargetComputed => {
				if minerals > gates.stop_minerals && !self.stop_dispatched {
					self.stop_dispatched = true;
					match self.target {
						Some(target) => self.dispatch_to(target.point, obs, report),
						None => skip(report, OpenerError::MissingInput("staging point")),
					}
					self.advance(BuildPhase::EarlyStopped, obs.tick, minerals, report);
				}
			}
			BuildPhase::Start | BuildPhase::EarlyStopped => {}
		}
	}

	fn cancel_gas(&mut self, tags: Vec<u64>, report: &mut StepReport) {
		self.intent.desired_gases = 0;
		for tag in &tags {
			self.commander.push(
				Command::new(*tag, AbilityId::CancelBuildInProgress, Target::None, false),
				None,
				false,
			);
		}
		report.events.push(StepEvent::CancelRequested(tags));
	}

	fn complete_trick(&mut self, obs: &Observation, report: &mut StepReport) {
		let desired_supply = obs.count(self.race.supply) + 1;
		self.intent.desired_gases = 0;
		self.intent.strict_gas_count = true;
		self.intent.set_producers(self.race.start_townhall, 2);
		self.intent.set_unit(self.race.supply, desired_supply);
		report.events.push(StepEvent::TrickCompleted { desired_supply });
	}

	fn compute_target(&mut self, obs: &Observation, minerals: u32, report: &mut StepReport) {
		let base = match obs.main_base() {
			Some(base) => base,
			None => return skip(report, OpenerError::MissingInput("main base")),
		};
		self.target_dispatched = true;

		let walls = self.map_name.as_deref().and_then(|name| self.walls.entries(name));
		let located = self.locator.locate(base, self.terrain.as_deref(), walls);
		self.target = Some(located);
		report.events.push(StepEvent::TargetComputed(located));

		self.dispatch_to(located.point, obs, report);
		self.advance(BuildPhase::TargetComputed, obs.tick, minerals, report);
	}

	fn dispatch_to(&mut self, point: Point2, obs: &Observation, report: &mut StepReport) {
		let env = DispatchEnv {
			workers: &obs.workers,
			bases: &obs.bases,
			patches: &self.patches,
			assignments: &mut self.assignments,
			commander: &mut self.commander,
			builder: self.builder.as_mut().map(|b| &mut **b as &mut dyn BuilderTask),
		};
		match self.dispatcher.preposition(&self.selector, env, point, obs.tick) {
			Ok(dispatched) => {
				if dispatched.outcome == DispatchOutcome::NoCandidate {
					warn!("No worker available to send to {}", point);
				}
				report.events.push(StepEvent::Dispatched(dispatched));
			}
			Err(e) => skip(report, e),
		}
	}

	fn advance(&mut self, to: BuildPhase, tick: u32, minerals: u32, report: &mut StepReport) {
		let from = self.phase;
		debug_assert!(to > from, "build phase moved back from {:?} to {:?}", from, to);
		info!("[{}] Opener {:?} -> {:?} ({} minerals)", tick, from, to, minerals);
		self.phase = to;
		report.events.push(StepEvent::Transition { from, to });
	}
}
impl BuildOrder for Opener {
	fn on_start(&mut self, tick: u32) {
		self.start(tick)
	}
	fn on_step(&mut self, obs: &Observation) -> StepReport {
		Opener::on_step(self, obs)
	}
	fn is_finished(&self) -> bool {
		self.phase == BuildPhase::EarlyStopped
	}
}

fn skip(report: &mut StepReport, reason: OpenerError) {
	warn!("Opener step skipped: {}", reason);
	report.events.push(StepEvent::Skipped(reason));
}
