mod common;

use common::*;
use drone_opener::prelude::*;

/// Point below the main base ramp, away from the minerals.
const TARGET: Point2 = Point2::new(30.0, 14.0);

fn select(workers: Vec<Worker>, assignments: &Assignments) -> Option<Selection> {
	let workers: Workers = workers.into_iter().collect();
	let bases = vec![main_base(), natural()];
	let patches = PatchClassifier::default().classify_all(&bases);
	WorkerSelector::default().select(&context(&workers, &bases, &patches, assignments), Some(TARGET), LATE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_worker_wins_regardless_of_distance() {
		let workers = vec![
			carrier(4, 30.0, 26.0),
			idle(5, 80.0, 80.0).with_created_at(LATE - 10),
		];
		let selection = select(workers, &Assignments::new()).unwrap();

		assert_eq!(selection.worker, 5);
		assert!(selection.tier.is_fresh());
	}

	#[test]
	fn near_patch_miners_are_protected() {
		let selection = select(mining_crowd(), &Assignments::new()).unwrap();
		assert_eq!(selection.worker, 4);
		assert_eq!(selection.tier, Tier::AtDropOff);

		assert_eq!(select(vec![miner(2, 30.0, 39.0)], &Assignments::new()), None);
	}

	#[test]
	fn idle_worker_within_reach_is_taken_even_at_patches() {
		let bases = vec![main_base()];
		let patches = PatchClassifier::default().classify_all(&bases);
		let workers: Workers = vec![carrier(4, 30.0, 26.0), idle(6, 30.0, 39.0)].into_iter().collect();
		let assignments = Assignments::new();
		let ctx = context(&workers, &bases, &patches, &assignments);

		let selection = WorkerSelector::default().select(&ctx, Some(p(30.0, 36.0)), LATE).unwrap();
		assert_eq!(selection.worker, 6);
		assert!(selection.tier.is_idle());
		assert_eq!(selection.distance_squared, 9.0);
	}

	#[test]
	fn returning_beats_closer_fallback() {
		let walking = Worker::new(8, p(30.0, 15.0)).with_order(AbilityId::MoveMove, Target::Pos(p(50.0, 15.0)));
		let selection = select(vec![walking, carrier(7, 30.0, 20.0)], &Assignments::new()).unwrap();

		assert_eq!(selection.worker, 7);
		assert!(selection.tier.is_returning());
	}

	#[test]
	fn closest_candidate_wins_within_tier() {
		let selection = select(vec![carrier(7, 30.0, 20.0), carrier(9, 30.0, 17.0)], &Assignments::new()).unwrap();
		assert_eq!(selection.worker, 9);
		assert_eq!(selection.distance_squared, 9.0);
	}

	#[test]
	fn claimed_workers_are_skipped() {
		let mut assignments = Assignments::new();
		assert!(assignments.claim(4, WorkerRole::PreBuild, TARGET, 0));
		let mut workers = mining_crowd();
		workers.push(idle(5, 80.0, 80.0).with_created_at(LATE));
		assert!(assignments.claim(5, WorkerRole::PreBuild, TARGET, 0));

		assert_eq!(select(workers, &assignments), None);
	}

	#[test]
	fn workers_sent_to_build_are_skipped() {
		let building = Worker::new(12, p(30.0, 15.0)).with_order(AbilityId::ZergBuildExtractor, Target::Tag(600));
		assert!(building.is_constructing());
		assert_eq!(select(vec![building.clone()], &Assignments::new()), None);

		let selection = select(vec![building, carrier(7, 30.0, 20.0)], &Assignments::new()).unwrap();
		assert_eq!(selection.worker, 7);
	}

	#[test]
	fn near_patch_miner_is_never_fallback() {
		let selection = select(vec![miner(2, 30.0, 39.0), idle(10, 50.0, 10.0)], &Assignments::new()).unwrap();
		assert_eq!(selection.worker, 10);
		assert_eq!(selection.tier, Tier::Fallback);
	}

	#[test]
	fn idle_worker_out_of_reach_is_fallback() {
		let selection = select(vec![idle(10, 50.0, 10.0)], &Assignments::new()).unwrap();
		assert_eq!(selection.worker, 10);
		assert_eq!(selection.tier, Tier::Fallback);
	}

	#[test]
	fn builders_are_not_idle() {
		let mut assignments = Assignments::new();
		assignments.claim(11, WorkerRole::Build, TARGET, 0);
		let builder = idle(11, 30.0, 15.0);
		assert_eq!(select(vec![builder.clone()], &assignments), None);

		let selection = select(vec![builder.with_role(WorkerRole::Build)], &Assignments::new()).unwrap();
		assert_eq!(selection.tier, Tier::Fallback);
	}

	#[test]
	fn nothing_to_select() {
		let workers: Workers = mining_crowd().into_iter().collect();
		let bases = vec![main_base()];
		let patches = PatchClassifier::default().classify_all(&bases);
		let assignments = Assignments::new();
		let ctx = context(&workers, &bases, &patches, &assignments);
		let selector = WorkerSelector::default();

		assert_eq!(selector.select(&ctx, None, LATE), None);
		assert_eq!(selector.select(&ctx, Some(p(f32::NAN, 0.0)), LATE), None);
		assert_eq!(select(Vec::new(), &assignments), None);
	}
}
