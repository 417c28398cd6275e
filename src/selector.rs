//! Picking the worker to pull off mining.

use crate::{
	assignments::Assignments,
	base::Base,
	classify::PatchClassification,
	distance::{Distance, DistanceIterator},
	geometry::Point2,
	options::SelectionOptions,
	worker::{Worker, WorkerRole, Workers},
};

/// Priority bracket the selected worker came from, best first.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
	/// Created within the new worker window, taken before it starts mining.
	Fresh,
	/// Has nothing to do and stands within reach of the target.
	Idle,
	/// Next to a townhall and not mining a close patch.
	AtDropOff,
	/// Carries cargo or heads back with it, not mining a close patch.
	Returning,
	/// Closest unclaimed worker which isn't mining a close patch.
	///
	/// Unclaimed near-patch miners are left out here as well, so they are only ever taken when fresh or idle.
	Fallback,
}

/// Worker picked by [`WorkerSelector`] and why.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selection {
	pub worker: u64,
	pub tier: Tier,
	/// Squared distance from the worker to the target.
	pub distance_squared: f32,
}

/// Everything selector looks at, borrowed from the current tick.
#[derive(Clone, Copy)]
pub struct SelectionContext<'a> {
	pub workers: &'a Workers,
	pub bases: &'a [Base],
	pub patches: &'a PatchClassification,
	pub assignments: &'a Assignments,
}

/// Chooses the single best worker to send somewhere, protecting efficient miners.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerSelector {
	pub options: SelectionOptions,
}
impl WorkerSelector {
	pub fn new(options: SelectionOptions) -> Self {
		Self { options }
	}

	/// Checks if worker stands within `worker_radius` of the closest patch of our bases.
	pub fn is_near_patch_miner(&self, ctx: &SelectionContext, worker: &Worker) -> bool {
		ctx.patches
			.own_patches()
			.closest_distance_squared(worker.position)
			.map_or(false, |d| {
				let radius = self.options.worker_radius;
				d <= radius * radius
			})
	}

	fn is_at_drop_off(&self, ctx: &SelectionContext, worker: &Worker) -> bool {
		ctx.bases
			.iter()
			.filter_map(|base| base.townhall.as_ref())
			.any(|townhall| worker.is_within(self.options.hatchery_radius, townhall))
	}

	/// Picks worker to send to `target`.
	///
	/// Tiers are tried in order of [`Tier`]: the first fresh worker wins at once,
	/// other tiers pick the closest candidate. Claimed workers and workers on their way
	/// to construct something are never picked.
	/// Returns `None` if target is missing or nobody fits.
	pub fn select(&self, ctx: &SelectionContext, target: Option<Point2>, now: u32) -> Option<Selection> {
		let target = target.filter(|t| t.is_finite())?;
		let reach = self.options.worker_radius;

		let mut best: [Option<(f32, u64)>; 5] = [None; 5];
		let mut consider = |tier: Tier, d: f32, tag: u64| {
			let slot = &mut best[tier as usize];
			match slot {
				Some((bd, _)) if d >= *bd || d.is_nan() => {}
				_ => *slot = Some((d, tag)),
			}
		};

		for worker in ctx.workers {
			if ctx.assignments.is_claimed(worker.tag) || worker.is_constructing() {
				continue;
			}
			let d = worker.distance_squared(target);

			if worker.age(now) <= self.options.new_window {
				let selection = Selection {
					worker: worker.tag,
					tier: Tier::Fresh,
					distance_squared: d,
				};
				debug!("Selected {:?}", selection);
				return Some(selection);
			}

			let idle = worker.is_idle()
				&& !worker.is_carrying_resource()
				&& ctx.assignments.effective_role(worker) != WorkerRole::Build;
			if idle {
				if d <= reach * reach {
					consider(Tier::Idle, d, worker.tag);
				} else if !self.is_near_patch_miner(ctx, worker) {
					// Idle but out of reach: only good as a last resort
					consider(Tier::Fallback, d, worker.tag);
				}
				continue;
			}

			if self.is_near_patch_miner(ctx, worker) {
				continue;
			}
			if self.is_at_drop_off(ctx, worker) {
				consider(Tier::AtDropOff, d, worker.tag);
			} else if worker.has_cargo() {
				consider(Tier::Returning, d, worker.tag);
			}
			consider(Tier::Fallback, d, worker.tag);
		}

		let selection = [Tier::Idle, Tier::AtDropOff, Tier::Returning, Tier::Fallback]
			.iter()
			.find_map(|tier| {
				best[*tier as usize].map(|(d, tag)| Selection {
					worker: tag,
					tier: *tier,
					distance_squared: d,
				})
			});
		match selection {
			Some(s) => debug!("Selected {:?}", s),
			None => debug!("No worker to send to {}", target),
		}
		selection
	}
}
