//! Splitting resource patches of each base into near and far ones.

use crate::{
	base::{Base, ResourcePatch},
	distance::{Center, Distance},
	geometry::Point2,
	options::PatchOptions,
};
use rustc_hash::FxHashMap;

/// Patches of one base split by distance to the mineral line center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSplit {
	/// Point patches were measured from, `None` for a base without patches.
	pub center: Option<Point2>,
	pub near: Vec<ResourcePatch>,
	pub far: Vec<ResourcePatch>,
	/// Base had our townhall when classified.
	pub own: bool,
}
impl PatchSplit {
	pub fn is_empty(&self) -> bool {
		self.near.is_empty() && self.far.is_empty()
	}
	pub fn len(&self) -> usize {
		self.near.len() + self.far.len()
	}
	/// All classified patches, near ones first.
	pub fn patches(&self) -> impl Iterator<Item = &ResourcePatch> {
		self.near.iter().chain(self.far.iter())
	}
}

/// Result of classifying every base on one tick, keyed by base location.
#[derive(Debug, Clone, Default)]
pub struct PatchClassification(FxHashMap<Point2, PatchSplit>);
impl PatchClassification {
	pub fn split(&self, base: &Base) -> Option<&PatchSplit> {
		self.0.get(&base.location)
	}
	/// Near patches of given base, empty if base wasn't classified.
	pub fn near(&self, base: &Base) -> &[ResourcePatch] {
		self.split(base).map_or(&[], |s| s.near.as_slice())
	}
	/// Far patches of given base, empty if base wasn't classified.
	pub fn far(&self, base: &Base) -> &[ResourcePatch] {
		self.split(base).map_or(&[], |s| s.far.as_slice())
	}
	/// Patches of all bases with our townhall.
	pub fn own_patches(&self) -> impl Iterator<Item = &ResourcePatch> {
		self.0.values().filter(|s| s.own).flat_map(|s| s.patches())
	}
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

/// Partitions patches of a base into those close to its mineral line center and the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchClassifier {
	pub options: PatchOptions,
}
impl PatchClassifier {
	pub fn new(options: PatchOptions) -> Self {
		Self { options }
	}

	/// Splits patches of given base.
	///
	/// Center is the middle mineral when base knows it, or mean of patch positions otherwise.
	/// Never fails: if center can't be found, both lists are empty.
	pub fn classify(&self, base: &Base) -> PatchSplit {
		let own = base.is_own();
		let center = match base
			.middle_mineral
			.or_else(|| base.patches.iter().center())
			.filter(|c| c.is_finite())
		{
			Some(center) => center,
			None => {
				if !base.patches.is_empty() {
					warn!("No usable mineral line center for base at {}", base.location);
				}
				return PatchSplit {
					own,
					..Default::default()
				};
			}
		};

		let radius = self.options.near_radius;
		let (near, far): (Vec<_>, Vec<_>) = base
			.patches
			.iter()
			.copied()
			.partition(|patch| patch.is_within(radius, center));

		PatchSplit {
			center: Some(center),
			near,
			far,
			own,
		}
	}

	/// Classifies every base independently.
	pub fn classify_all(&self, bases: &[Base]) -> PatchClassification {
		PatchClassification(bases.iter().map(|base| (base.location, self.classify(base))).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn middle_mineral_overrides_mean() {
		let base = Base::new(Point2::new(0.0, 0.0))
			.with_patches(vec![
				ResourcePatch::new(1, Point2::new(0.0, 0.0), 1800),
				ResourcePatch::new(2, Point2::new(20.0, 0.0), 1800),
			])
			.with_middle_mineral(Point2::new(19.0, 0.0));

		let split = PatchClassifier::default().classify(&base);
		assert_eq!(split.center, Some(Point2::new(19.0, 0.0)));
		assert_eq!(split.near.iter().map(|p| p.tag).collect::<Vec<_>>(), vec![2]);
		assert_eq!(split.far.iter().map(|p| p.tag).collect::<Vec<_>>(), vec![1]);
	}
}
