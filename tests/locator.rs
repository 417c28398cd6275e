mod common;

use common::*;
use drone_opener::{options::SpawnOverride, prelude::*};

fn base_with_minerals() -> Base {
	Base::new(p(10.0, 10.0)).with_mineral_line(p(10.0, 17.0))
}

fn wall(base: Point2, center: Option<Point2>, bottom: Option<Point2>) -> WallEntry {
	WallEntry {
		base,
		ramp_center: center,
		ramp_bottom: bottom,
		ramp_top: None,
	}
}

/// Map where everything at `y <= 12` is high ground.
fn cliff() -> HeightMap {
	let mut map = HeightMap::flat(32, 32, 5);
	map.paint(|_, y| if y <= 12 { Some(10) } else { None });
	map
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wall_data_offsets_from_ramp_towards_base() {
		let walls = [wall(p(10.0, 10.0), Some(p(10.0, 20.0)), None)];
		let located = TargetLocator::default().locate(&base_with_minerals(), None, Some(&walls));

		assert_eq!(located.source, LocateSource::WallData);
		assert!(located.point.approx_eq(p(10.0, 14.0), 1e-4));
	}

	#[test]
	fn wall_anchor_falls_back_to_bottom() {
		let walls = [wall(p(10.0, 10.0), None, Some(p(10.0, 25.0)))];
		let located = TargetLocator::default().locate(&base_with_minerals(), None, Some(&walls));

		assert!(located.source.is_wall_data());
		assert!(located.point.approx_eq(p(10.0, 16.0), 1e-4));
	}

	#[test]
	fn unusable_walls_fall_through() {
		let locator = TargetLocator::default();
		let base = base_with_minerals();

		let degenerate = [wall(p(10.0, 10.0), Some(p(10.0, 10.0)), None)];
		assert!(locator.locate(&base, None, Some(&degenerate)).source.is_mineral_line());

		let other_base = [wall(p(50.0, 50.0), Some(p(50.0, 60.0)), None)];
		assert!(locator.locate(&base, None, Some(&other_base)).source.is_mineral_line());

		let no_anchor = [wall(p(10.0, 10.0), None, None)];
		assert!(locator.locate(&base, None, Some(&no_anchor)).source.is_mineral_line());
	}

	#[test]
	fn mineral_line_offset_is_clamped() {
		let located = TargetLocator::default().locate(&base_with_minerals(), None, None);
		assert_eq!(located.source, LocateSource::MineralLine);
		assert!(located.point.approx_eq(p(10.0, 5.8), 1e-4));

		let close = Base::new(p(10.0, 10.0)).with_mineral_line(p(10.0, 12.0));
		let located = TargetLocator::default().locate(&close, None, None);
		assert!(located.point.approx_eq(p(10.0, 6.0), 1e-4));

		let distant = Base::new(p(10.0, 10.0)).with_mineral_line(p(10.0, 40.0));
		let located = TargetLocator::default().locate(&distant, None, None);
		assert!(located.point.approx_eq(p(10.0, -1.0), 1e-4));
	}

	#[test]
	fn south_of_base_without_mineral_line() {
		let locator = TargetLocator::default();

		let located = locator.locate(&Base::new(p(10.0, 10.0)), None, None);
		assert_eq!(located.source, LocateSource::South);
		assert_eq!(located.point, p(10.0, 2.0));

		let on_top = Base::new(p(10.0, 10.0)).with_mineral_line(p(10.0, 10.0));
		assert_eq!(locator.locate(&on_top, None, None).point, p(10.0, 2.0));
	}

	#[test]
	fn override_beats_everything() {
		let mut options = OpenerOptions::default().locator;
		options.spawn_override = Some(SpawnOverride {
			x_greater: p(100.0, 20.0),
			otherwise: p(20.0, 100.0),
		});
		let locator = TargetLocator::new(options);
		let walls = [wall(p(10.0, 10.0), Some(p(10.0, 20.0)), None)];

		let located = locator.locate(&base_with_minerals(), None, Some(&walls));
		assert_eq!(located, Located {
			point: p(20.0, 100.0),
			source: LocateSource::Override,
		});
		let east = Base::new(p(150.0, 30.0));
		assert_eq!(locator.locate(&east, None, None).point, p(100.0, 20.0));
	}

	#[test]
	fn terrain_walk_finds_cliff_edge() {
		let map = cliff();
		let located = TargetLocator::default().locate(&base_with_minerals(), Some(&map), None);

		assert_eq!(located.source, LocateSource::TerrainRamp);
		assert!(located.point.approx_eq(p(10.0, 8.5), 1e-4));
	}

	#[test]
	fn walls_win_over_terrain() {
		let map = cliff();
		let walls = [wall(p(10.0, 10.0), Some(p(10.0, 20.0)), None)];
		let located = TargetLocator::default().locate(&base_with_minerals(), Some(&map), Some(&walls));

		assert!(located.source.is_wall_data());
	}

	#[test]
	fn broken_terrain_falls_back_to_mineral_line() {
		let broken =
			|_cell: (i64, i64)| -> OpenerResult<u8> { Err(OpenerError::ComputationFailure("no map".to_string())) };
		let located = TargetLocator::default().locate(&base_with_minerals(), Some(&broken), None);

		assert!(located.source.is_mineral_line());
		assert!(located.point.approx_eq(p(10.0, 5.8), 1e-4));
	}

	#[test]
	fn terrain_walk_is_bounded() {
		let map = HeightMap::flat(32, 32, 5);
		let base = Base::new(p(10.9, 10.9)).with_mineral_line(p(10.9, 17.9));

		let mut endless = OpenerOptions::default().locator;
		endless.sample_overshoot = f32::INFINITY;
		let located = TargetLocator::new(endless).locate(&base, Some(&map), None);
		assert!(located.source.is_mineral_line());

		endless.sample_overshoot = f32::NAN;
		let located = TargetLocator::new(endless).locate(&base, Some(&map), None);
		assert!(located.source.is_mineral_line());

		let mut tiny = OpenerOptions::default().locator;
		tiny.sample_step = 1e-9;
		let located = TargetLocator::new(tiny).locate(&base, Some(&cliff()), None);
		assert!(located.point.is_finite());
	}

	#[test]
	fn base_off_the_map_falls_back() {
		let map = HeightMap::flat(4, 4, 5);
		let located = TargetLocator::default().locate(&base_with_minerals(), Some(&map), None);
		assert!(located.source.is_mineral_line());
	}
}
