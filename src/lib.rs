//! Opening decision core for StarCraft II zerg bots.
//!
//! Every game step host builds an [`Observation`](opener::Observation) and passes it to
//! [`Opener::on_step`](opener::Opener::on_step), which returns commands for the game
//! together with everything that happened on this step.
//!
//! Building blocks are usable on their own:
//! - [`PatchClassifier`](classify::PatchClassifier) splits patches of each base into near and far
//! - [`WorkerSelector`](selector::WorkerSelector) picks a worker to pull off mining
//! - [`WorkerDispatcher`](dispatcher::WorkerDispatcher) turns it into minimal orders
//! - [`TargetLocator`](locator::TargetLocator) finds a staging point at the top of the ramp
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
extern crate num_derive;
#[macro_use]
pub extern crate opener_macro;
#[macro_use]
extern crate log;

/// The most frequent used items and various traits here.
/// Prefered usage: `use drone_opener::prelude::*;`.
pub mod prelude {
	pub use crate::{
		action::{Command, Commander, Target, UnitOrder},
		assignments::{Assignment, Assignments},
		base::{Base, ResourcePatch, Townhall},
		classify::{PatchClassification, PatchClassifier, PatchSplit},
		dispatcher::{BuilderTask, DispatchEnv, DispatchOutcome, DispatchReport, WorkerDispatcher},
		distance::*,
		error::{OpenerError, OpenerResult},
		geometry::Point2,
		ids::*,
		locator::{LocateSource, Located, TargetLocator},
		macro_data::{MacroCounters, MacroIntent},
		opener::{BuildOrder, BuildPhase, Observation, Opener, StepEvent, StepReport, Structure},
		options::OpenerOptions,
		selector::{Selection, SelectionContext, Tier, WorkerSelector},
		terrain::{HeightMap, TerrainHeight, WallCatalog, WallEntry},
		worker::{Worker, WorkerRole, Workers},
	};
}

pub mod action;
pub mod assignments;
pub mod base;
pub mod classify;
pub mod constants;
pub mod dispatcher;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod locator;
pub mod macro_data;
pub mod opener;
pub mod options;
pub mod production;
pub mod selector;
pub mod telemetry;
pub mod terrain;
pub mod worker;
