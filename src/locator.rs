//! Finding the staging point at the top of the main base ramp.

use crate::{
	base::Base,
	error::{OpenerError, OpenerResult},
	geometry::Point2,
	options::LocatorOptions,
	terrain::{TerrainHeight, WallEntry},
};

/// Which source the located point came from.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LocateSource {
	/// Fixed point configured for the map.
	Override,
	/// Ramp anchor from wall metadata.
	WallData,
	/// Ramp found by walking terrain from the mineral line.
	TerrainRamp,
	/// Offset from the base away from the mineral line.
	MineralLine,
	/// Fixed distance south of the base.
	South,
}

/// Point found by [`TargetLocator`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Located {
	pub point: Point2,
	pub source: LocateSource,
}

const MIN_DIRECTION: f32 = 0.001;
/// Upper bound of terrain samples, enough to cross the largest map twice at the default step.
const MAX_SAMPLES: u32 = 1024;

/// Computes a point near the ramp of a base, trying several sources in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetLocator {
	pub options: LocatorOptions,
}
impl TargetLocator {
	pub fn new(options: LocatorOptions) -> Self {
		Self { options }
	}

	/// Locates staging point for given base.
	///
	/// Sources are tried in order: configured override, wall metadata, terrain walk
	/// from the mineral line, plain offset from the mineral line, point south of the base.
	/// Every source that can't produce a point hands over to the next one.
	pub fn locate(
		&self,
		base: &Base,
		terrain: Option<&dyn TerrainHeight>,
		walls: Option<&[WallEntry]>,
	) -> Located {
		let origin = base.location;
		let located = |point, source| {
			debug!("Located {} via {:?} for base at {}", point, source, origin);
			Located { point, source }
		};

		if let Some(fixed) = self.options.spawn_override {
			return located(fixed.pick(origin), LocateSource::Override);
		}
		if let Some(point) = walls.and_then(|walls| self.from_walls(origin, walls)) {
			return located(point, LocateSource::WallData);
		}
		if let Some(mineral_line) = base.mineral_line {
			if let Some(dir) = (origin - mineral_line).normalize(MIN_DIRECTION) {
				if let Some(terrain) = terrain {
					match self.from_terrain(origin, mineral_line, dir, terrain) {
						Ok(Some(point)) => return located(point, LocateSource::TerrainRamp),
						Ok(None) => debug!("No ramp found between mineral line and base at {}", origin),
						Err(e) => warn!("Terrain walk failed: {}", e),
					}
				}
				let len = (origin - mineral_line).len();
				return located(
					origin + dir * self.options.clamped_offset(len),
					LocateSource::MineralLine,
				);
			}
		}
		located(origin.offset(0.0, -self.options.south_offset), LocateSource::South)
	}

	fn from_walls(&self, origin: Point2, walls: &[WallEntry]) -> Option<Point2> {
		let entry = walls
			.iter()
			.find(|entry| entry.base.approx_eq(origin, self.options.wall_tolerance))?;
		let ramp = entry.anchor()?;
		let to_base = origin - ramp;
		let dir = to_base.normalize(self.options.wall_tolerance)?;
		Some(ramp + dir * self.options.clamped_offset(to_base.len()))
	}

	/// Walks from the mineral line towards the base and past it,
	/// the first cell as high as the base marks the ramp edge.
	fn from_terrain(
		&self,
		origin: Point2,
		mineral_line: Point2,
		dir: Point2,
		terrain: &dyn TerrainHeight,
	) -> OpenerResult<Option<Point2>> {
		let base_height = terrain.height(origin.cell())?;
		let step = self.options.sample_step;
		if !(step > 0.0) {
			return Err(OpenerError::ComputationFailure("sample step must be positive".to_string()));
		}
		let limit = (origin - mineral_line).len() + self.options.sample_overshoot;
		if !limit.is_finite() {
			return Err(OpenerError::ComputationFailure(format!(
				"terrain walk of length {} never ends",
				limit
			)));
		}
		let samples = ((limit / step).floor() as u32).min(MAX_SAMPLES);

		for i in 0..=samples {
			let s = i as f32 * step;
			let sample = mineral_line + dir * s;
			// Cells off the map are skipped
			if terrain.height(sample.rounded()).map_or(false, |h| h == base_height) {
				let ramp = mineral_line + dir * (s - step).max(0.0);
				let to_base = origin - ramp;
				let ramp_dir = to_base.normalize(MIN_DIRECTION).unwrap_or_default();
				return Ok(Some(ramp + ramp_dir * self.options.clamped_offset(to_base.len())));
			}
		}
		Ok(None)
	}
}
