//! Traits for comparing distance between points, workers and resource patches.

use crate::geometry::Point2;
use std::cmp::Ordering;

/// Basic trait for comparing distance.
pub trait Distance: Sized {
	/// Calculates squared euclidean distance from `self` to `other`.
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32;

	/// Calculates euclidean distance from `self` to `other`.
	#[inline]
	fn distance<P: Into<Point2>>(self, other: P) -> f32 {
		self.distance_squared(other).sqrt()
	}
	/// Checks if distance between `self` and `other` is less than or equal to given `distance`.
	/// The boundary counts as inside.
	#[inline]
	fn is_within<P: Into<Point2>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) <= distance * distance
	}
	/// Checks if distance between `self` and `other` is greater than given `distance`.
	#[inline]
	fn is_further<P: Into<Point2>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) > distance * distance
	}
}

impl Distance for Point2 {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		let other = other.into();
		let dx = self.x - other.x;
		let dy = self.y - other.y;
		dx * dx + dy * dy
	}
}
impl Distance for &Point2 {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		(*self).distance_squared(other)
	}
}

/// Total order over `f32` treating `NaN` as equal, so sorting never panics.
#[inline]
pub(crate) fn cmp_f32(a: f32, b: f32) -> Ordering {
	a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Helper trait for iterators of items implementing [`Distance`].
pub trait DistanceIterator<T>
where
	Self: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
	/// Returns closest to `target` item in iterator.
	///
	/// Ties keep the earliest item.
	fn closest<P: Into<Point2> + Copy>(self, target: P) -> Option<T> {
		self.map(|u| (u.distance_squared(target), u))
			.fold(None, |best: Option<(f32, T)>, (d, u)| match best {
				Some((bd, _)) if d >= bd || d.is_nan() => best,
				_ => Some((d, u)),
			})
			.map(|(_, u)| u)
	}
	/// Returns squared distance to closest to `target` item in iterator.
	fn closest_distance_squared<P: Into<Point2> + Copy>(self, target: P) -> Option<f32> {
		self.map(|u| u.distance_squared(target)).min_by(|a, b| cmp_f32(*a, *b))
	}
}

/// Helper trait for iterator of points, used to find center of these points.
pub trait Center<T>
where
	Self: Iterator<Item = T> + Sized,
	T: Into<Point2>,
{
	/// Returns center of all iterated points or `None` if iterator is empty.
	fn center(self) -> Option<Point2> {
		let (sum, len) = self.fold((Point2::default(), 0), |(sum, len), p| (sum + p.into(), len + 1));
		if len > 0 {
			Some(sum / len as f32)
		} else {
			None
		}
	}
}

impl<I, T> Center<T> for I
where
	I: Iterator<Item = T> + Sized,
	T: Into<Point2>,
{
}

impl<I, T> DistanceIterator<T> for I
where
	I: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
}
