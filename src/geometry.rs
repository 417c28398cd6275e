//! Plain 2D geometry used by every decision in the opener.

use std::{
	fmt,
	hash::{Hash, Hasher},
	iter::Sum,
	ops::{Add, Div, Mul, Neg, Sub},
};

/// Point (or vector) on the map plane.
///
/// Map coordinates grow to the "east" along `x` and to the "north" along `y`,
/// so a point "south" of another has a smaller `y`.
#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Point2 {
	pub x: f32,
	pub y: f32,
}
impl Point2 {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
	/// Euclidean length of the point treated as a vector.
	pub fn len(self) -> f32 {
		(self.x * self.x + self.y * self.y).sqrt()
	}
	/// Returns vector of length `1` pointing in the same direction,
	/// or `None` if length is below `epsilon`.
	pub fn normalize(self, epsilon: f32) -> Option<Self> {
		let len = self.len();
		if len < epsilon || !len.is_finite() {
			None
		} else {
			Some(self / len)
		}
	}
	/// Returns point moved by `offset` from `self` in direction of `other`.
	pub fn towards(self, other: Self, offset: f32) -> Self {
		match (other - self).normalize(f32::EPSILON) {
			Some(dir) => self + dir * offset,
			None => self,
		}
	}
	/// Returns point shifted by given values on each axis.
	pub fn offset(self, x: f32, y: f32) -> Self {
		Self {
			x: self.x + x,
			y: self.y + y,
		}
	}
	/// Rounds both coordinates to the nearest grid cell.
	pub fn rounded(self) -> (i64, i64) {
		(self.x.round() as i64, self.y.round() as i64)
	}
	/// Truncates both coordinates to the grid cell containing the point.
	pub fn cell(self) -> (i64, i64) {
		(self.x as i64, self.y as i64)
	}
	/// Checks that both coordinates differ by less than `tolerance`.
	pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
		(self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
	}
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}
impl PartialEq for Point2 {
	fn eq(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y
	}
}
impl Eq for Point2 {}
impl Hash for Point2 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.x.to_bits().hash(state);
		self.y.to_bits().hash(state);
	}
}
impl fmt::Display for Point2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:.2}, {:.2})", self.x, self.y)
	}
}
impl From<(f32, f32)> for Point2 {
	fn from((x, y): (f32, f32)) -> Self {
		Self { x, y }
	}
}
impl Add for Point2 {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self {
			x: self.x + other.x,
			y: self.y + other.y,
		}
	}
}
impl Sub for Point2 {
	type Output = Self;

	fn sub(self, other: Self) -> Self {
		Self {
			x: self.x - other.x,
			y: self.y - other.y,
		}
	}
}
impl Neg for Point2 {
	type Output = Self;

	fn neg(self) -> Self {
		Self {
			x: -self.x,
			y: -self.y,
		}
	}
}
impl Mul<f32> for Point2 {
	type Output = Self;

	fn mul(self, other: f32) -> Self {
		Self {
			x: self.x * other,
			y: self.y * other,
		}
	}
}
impl Div<f32> for Point2 {
	type Output = Self;

	fn div(self, other: f32) -> Self {
		Self {
			x: self.x / other,
			y: self.y / other,
		}
	}
}
impl Sum for Point2 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Default::default(), Add::add)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn towards_moves_exact_offset() {
		let p = Point2::new(10.0, 20.0).towards(Point2::new(10.0, 10.0), 6.0);
		assert_eq!(p, Point2::new(10.0, 14.0));
	}

	#[test]
	fn towards_same_point_stays() {
		let p = Point2::new(3.0, 3.0);
		assert_eq!(p.towards(p, 5.0), p);
	}

	#[test]
	fn normalize_rejects_short_vectors() {
		assert!(Point2::new(0.001, 0.0).normalize(0.01).is_none());
		let n = Point2::new(3.0, 4.0).normalize(0.01).unwrap();
		assert!((n.len() - 1.0).abs() < 1e-6);
	}
}
