//! Tunables of the opener, grouped by the component which reads them.
//!
//! Every group implements [`Default`] with values tuned for 1v1 ladder maps,
//! so usually it's enough to override a couple of fields:
//! ```
//! use drone_opener::options::OpenerOptions;
//!
//! let mut options = OpenerOptions::default();
//! options.gates.stop_minerals = 300;
//! assert!(options.validate().is_ok());
//! ```

use crate::{
	error::{OpenerError, OpenerResult},
	geometry::Point2,
};

#[cfg(feature = "serde")]
use serde::Deserialize;

/// All tunables of the opener.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct OpenerOptions {
	pub patches: PatchOptions,
	pub selection: SelectionOptions,
	pub cargo: CargoBands,
	pub gates: Gates,
	pub locator: LocatorOptions,
}

/// Options of [`PatchClassifier`](crate::classify::PatchClassifier).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct PatchOptions {
	/// Patches within this radius of the mineral line center are "near". [Default: `6`]
	pub near_radius: f32,
}
impl Default for PatchOptions {
	fn default() -> Self {
		Self { near_radius: 6.0 }
	}
}

/// Options of [`WorkerSelector`](crate::selector::WorkerSelector).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct SelectionOptions {
	/// Workers younger than this many game loops are taken first. [Default: `50`]
	pub new_window: u32,
	/// Distance from a townhall at which a worker counts as dropping off. [Default: `4`]
	pub hatchery_radius: f32,
	/// Walking reach for idle workers and the near-patch miner radius. [Default: `6`]
	pub worker_radius: f32,
}
impl Default for SelectionOptions {
	fn default() -> Self {
		Self {
			new_window: 50,
			hatchery_radius: 4.0,
			worker_radius: 6.0,
		}
	}
}

/// Squared distance bands used when redirecting a worker that carries cargo.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct CargoBands {
	/// Below this squared distance the worker returns cargo and then walks away. [Default: `10`]
	pub near_squared: f32,
	/// Above this squared distance the worker is only pointed at its townhall. [Default: `20`]
	pub far_squared: f32,
}
impl Default for CargoBands {
	fn default() -> Self {
		Self {
			near_squared: 10.0,
			far_squared: 20.0,
		}
	}
}

/// Counter thresholds driving [`Opener`](crate::opener::Opener).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct Gates {
	/// Supply used required to start the trick. [Default: `14`]
	pub supply: u32,
	/// Larva required to start the trick. [Default: `1`]
	pub larva: u32,
	/// Minerals required to request the gas building. [Default: `120`]
	pub trick_minerals: u32,
	/// Minerals which must be exceeded to compute the target and send the first worker. [Default: `175`]
	pub target_minerals: u32,
	/// Minerals which must be exceeded to send the second worker and stop. [Default: `275`]
	pub stop_minerals: u32,
}
impl Default for Gates {
	fn default() -> Self {
		Self {
			supply: 14,
			larva: 1,
			trick_minerals: 120,
			target_minerals: 175,
			stop_minerals: 275,
		}
	}
}

/// Fixed targets replacing the ramp search on a known map.
///
/// The target is picked by comparing the two coordinates of the base.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct SpawnOverride {
	/// Used when the base has `x > y`.
	pub x_greater: Point2,
	/// Used otherwise.
	pub otherwise: Point2,
}
impl SpawnOverride {
	pub fn pick(&self, base: Point2) -> Point2 {
		if base.x > base.y {
			self.x_greater
		} else {
			self.otherwise
		}
	}
}

/// Options of [`TargetLocator`](crate::locator::TargetLocator).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct LocatorOptions {
	/// Lower clamp of the offset from the ramp. [Default: `4`]
	pub offset_min: f32,
	/// Upper clamp of the offset from the ramp. [Default: `11`]
	pub offset_max: f32,
	/// Share of the base-ramp distance used as offset before clamping. [Default: `0.6`]
	pub offset_scale: f32,
	/// Step of terrain sampling from the mineral line. [Default: `0.5`]
	pub sample_step: f32,
	/// How far past the base terrain sampling continues. [Default: `2`]
	pub sample_overshoot: f32,
	/// Distance "south" of the base used when nothing else is known. [Default: `8`]
	pub south_offset: f32,
	/// Max coordinate difference between a base and a wall entry's base. [Default: `0.01`]
	pub wall_tolerance: f32,
	/// Map-specific fixed targets, checked before everything else. [Default: `None`]
	pub spawn_override: Option<SpawnOverride>,
}
impl Default for LocatorOptions {
	fn default() -> Self {
		Self {
			offset_min: 4.0,
			offset_max: 11.0,
			offset_scale: 0.6,
			sample_step: 0.5,
			sample_overshoot: 2.0,
			south_offset: 8.0,
			wall_tolerance: 0.01,
			spawn_override: None,
		}
	}
}
impl LocatorOptions {
	/// `min(offset_max, max(offset_min, distance * offset_scale))`
	pub fn clamped_offset(&self, distance: f32) -> f32 {
		self.offset_max.min(self.offset_min.max(distance * self.offset_scale))
	}
}

impl OpenerOptions {
	/// Checks that radii and locator distances are finite and non-negative,
	/// clamps are ordered and mineral gates increase.
	pub fn validate(&self) -> OpenerResult<()> {
		let invalid = |msg: &str| Err(OpenerError::InvalidOptions(msg.to_string()));

		let radii = [
			self.patches.near_radius,
			self.selection.hatchery_radius,
			self.selection.worker_radius,
		];
		if radii.iter().any(|r| !r.is_finite() || *r < 0.0) {
			return invalid("radii must be finite and non-negative");
		}
		if !(self.cargo.near_squared <= self.cargo.far_squared) {
			return invalid("cargo near band must not exceed far band");
		}
		let l = &self.locator;
		let lengths = [
			l.offset_min,
			l.offset_max,
			l.offset_scale,
			l.sample_step,
			l.sample_overshoot,
			l.south_offset,
			l.wall_tolerance,
		];
		if lengths.iter().any(|v| !v.is_finite() || *v < 0.0) {
			return invalid("locator distances must be finite and non-negative");
		}
		if !(l.offset_min <= l.offset_max) || !(l.offset_scale > 0.0) {
			return invalid("locator offset clamp is inverted or scale is not positive");
		}
		if !(l.sample_step > 0.0) {
			return invalid("terrain sample step must be positive");
		}
		let g = &self.gates;
		if !(g.trick_minerals < g.target_minerals && g.target_minerals < g.stop_minerals) {
			return invalid("mineral gates must strictly increase");
		}
		Ok(())
	}

	/// Parses options from TOML, missing fields keep their defaults.
	#[cfg(feature = "serde")]
	pub fn from_toml_str(s: &str) -> OpenerResult<Self> {
		let options: Self = toml::from_str(s).map_err(|e| OpenerError::InvalidOptions(e.to_string()))?;
		options.validate()?;
		Ok(options)
	}
}
