//! Bases with their townhalls and resource patches.

use crate::{distance::Distance, geometry::Point2};

/// Harvestable resource point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResourcePatch {
	pub tag: u64,
	pub position: Point2,
	/// Remaining amount of resource.
	pub contents: u32,
}
impl ResourcePatch {
	pub fn new(tag: u64, position: Point2, contents: u32) -> Self {
		Self {
			tag,
			position,
			contents,
		}
	}
}
impl From<&ResourcePatch> for Point2 {
	#[inline]
	fn from(p: &ResourcePatch) -> Self {
		p.position
	}
}
impl Distance for &ResourcePatch {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		self.position.distance_squared(other)
	}
}

/// Structure where workers drop off their cargo.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Townhall {
	pub tag: u64,
	pub position: Point2,
}
impl From<&Townhall> for Point2 {
	#[inline]
	fn from(t: &Townhall) -> Self {
		t.position
	}
}
impl Distance for &Townhall {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		self.position.distance_squared(other)
	}
}

/// Expansion location with everything mined around it.
#[derive(Debug, Clone, Default)]
pub struct Base {
	/// Where townhall of this base is (or would be) placed.
	pub location: Point2,
	/// Our townhall here, if any.
	pub townhall: Option<Townhall>,
	pub patches: Vec<ResourcePatch>,
	/// Reference point of the mineral line, usually between the patches and the townhall.
	pub mineral_line: Option<Point2>,
	/// Position of the middle patch, when host knows which one it is.
	pub middle_mineral: Option<Point2>,
}
impl Base {
	pub fn new(location: Point2) -> Self {
		Self {
			location,
			..Default::default()
		}
	}
	pub fn with_townhall(mut self, tag: u64) -> Self {
		self.townhall = Some(Townhall {
			tag,
			position: self.location,
		});
		self
	}
	pub fn with_patches<I: IntoIterator<Item = ResourcePatch>>(mut self, patches: I) -> Self {
		self.patches.extend(patches);
		self
	}
	pub fn with_mineral_line(mut self, point: Point2) -> Self {
		self.mineral_line = Some(point);
		self
	}
	pub fn with_middle_mineral(mut self, point: Point2) -> Self {
		self.middle_mineral = Some(point);
		self
	}

	/// Checks if we have a townhall on this base.
	pub fn is_own(&self) -> bool {
		self.townhall.is_some()
	}
}
