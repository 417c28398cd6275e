//! Terrain height queries and per-map wall metadata.

use crate::{
	error::{OpenerError, OpenerResult},
	geometry::Point2,
};
use ndarray::Array2;
use rustc_hash::FxHashMap;

pub type ByteMap = Array2<u8>;

/// Source of terrain height by grid cell.
pub trait TerrainHeight {
	/// Height of the cell, fails for cells outside the map.
	fn height(&self, cell: (i64, i64)) -> OpenerResult<u8>;
}
impl<F> TerrainHeight for F
where
	F: Fn((i64, i64)) -> OpenerResult<u8>,
{
	fn height(&self, cell: (i64, i64)) -> OpenerResult<u8> {
		self(cell)
	}
}

/// Terrain height grid indexed by `(x, y)`.
#[derive(Debug, Clone, Default)]
pub struct HeightMap(ByteMap);
impl HeightMap {
	/// Builds grid from bytes sent by the game, one row of `width` cells per `y`.
	pub fn from_bytes(width: usize, height: usize, data: Vec<u8>) -> OpenerResult<Self> {
		Array2::from_shape_vec((height, width), data)
			.map(|rows| Self(rows.reversed_axes()))
			.map_err(|e| OpenerError::ComputationFailure(format!("can't create height map: {}", e)))
	}
	/// Grid of given size filled with the same height.
	pub fn flat(width: usize, height: usize, value: u8) -> Self {
		Self(Array2::from_elem((width, height), value))
	}
	/// Sets height of every cell for which `f` returns `Some`.
	pub fn paint<F: Fn(usize, usize) -> Option<u8>>(&mut self, f: F) {
		for ((x, y), h) in self.0.indexed_iter_mut() {
			if let Some(value) = f(x, y) {
				*h = value;
			}
		}
	}
	pub fn dim(&self) -> (usize, usize) {
		self.0.dim()
	}
	/// Height in game units instead of raw byte.
	pub fn z_height(&self, cell: (i64, i64)) -> OpenerResult<f32> {
		self.height(cell).map(|h| h as f32 * 32.0 / 255.0 - 16.0)
	}
}
impl From<ByteMap> for HeightMap {
	fn from(grid: ByteMap) -> Self {
		Self(grid)
	}
}
impl TerrainHeight for HeightMap {
	fn height(&self, (x, y): (i64, i64)) -> OpenerResult<u8> {
		if x < 0 || y < 0 {
			return Err(OpenerError::ComputationFailure(format!("cell ({}, {}) is off the map", x, y)));
		}
		self.0
			.get((x as usize, y as usize))
			.copied()
			.ok_or_else(|| OpenerError::ComputationFailure(format!("cell ({}, {}) is off the map", x, y)))
	}
}

/// Wall placement data of one start location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct WallEntry {
	/// Start location this entry belongs to.
	pub base: Point2,
	pub ramp_center: Option<Point2>,
	pub ramp_bottom: Option<Point2>,
	pub ramp_top: Option<Point2>,
}
impl WallEntry {
	/// Point representing the ramp: center, else bottom, else top.
	pub fn anchor(&self) -> Option<Point2> {
		self.ramp_center.or(self.ramp_bottom).or(self.ramp_top)
	}
}

/// Wall entries of every known map, keyed by map name.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct WallCatalog(FxHashMap<String, Vec<WallEntry>>);
impl WallCatalog {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn insert<S: Into<String>>(&mut self, map: S, entry: WallEntry) {
		self.0.entry(map.into()).or_default().push(entry);
	}
	/// Entries of given map, `None` for unknown maps.
	pub fn entries(&self, map: &str) -> Option<&[WallEntry]> {
		self.0.get(map).map(Vec::as_slice)
	}
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Parses catalog written as `[[MapName]]` tables of entries.
	#[cfg(feature = "serde")]
	pub fn from_toml_str(s: &str) -> OpenerResult<Self> {
		toml::from_str(s).map_err(|e| OpenerError::InvalidOptions(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn off_map_cells_fail() {
		let map = HeightMap::flat(4, 4, 10);
		assert_eq!(map.height((3, 3)), Ok(10));
		assert!(map.height((4, 0)).is_err());
		assert!(map.height((-1, 0)).is_err());
	}

	#[test]
	fn bytes_are_read_row_by_row() {
		let map = HeightMap::from_bytes(3, 2, vec![0, 1, 2, 10, 11, 12]).unwrap();
		assert_eq!(map.dim(), (3, 2));
		assert_eq!(map.height((2, 0)), Ok(2));
		assert_eq!(map.height((0, 1)), Ok(10));
		assert_eq!(map.height((2, 1)), Ok(12));
		assert!(map.height((0, 2)).is_err());

		assert!(matches!(
			HeightMap::from_bytes(3, 3, vec![0; 6]),
			Err(OpenerError::ComputationFailure(_))
		));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn catalog_loads_entries_per_map() {
		let catalog = WallCatalog::from_toml_str(
			r#"
[[AcropolisLE]]
base = { x = 33.5, y = 138.5 }
ramp_center = { x = 38.0, y = 124.0 }

[[AcropolisLE]]
base = { x = 142.5, y = 33.5 }
ramp_bottom = { x = 138.0, y = 48.0 }

[["Thunderbird LE"]]
base = { x = 38.5, y = 133.5 }
ramp_top = { x = 41.0, y = 120.5 }
"#,
		)
		.unwrap();

		let acropolis = catalog.entries("AcropolisLE").unwrap();
		assert_eq!(acropolis.len(), 2);
		assert_eq!(acropolis[0].anchor(), Some(Point2::new(38.0, 124.0)));
		assert_eq!(acropolis[1].ramp_center, None);
		assert_eq!(acropolis[1].anchor(), Some(Point2::new(138.0, 48.0)));

		let thunderbird = catalog.entries("Thunderbird LE").unwrap();
		assert_eq!(thunderbird[0].base, Point2::new(38.5, 133.5));
		assert_eq!(thunderbird[0].anchor(), Some(Point2::new(41.0, 120.5)));

		assert_eq!(catalog.entries("Unknown LE"), None);
		assert!(WallCatalog::from_toml_str("[[AcropolisLE]]
base = 5
").is_err());
	}

	#[test]
	fn anchor_prefers_center() {
		let entry = WallEntry {
			base: Point2::new(0.0, 0.0),
			ramp_center: None,
			ramp_bottom: Some(Point2::new(1.0, 1.0)),
			ramp_top: Some(Point2::new(2.0, 2.0)),
		};
		assert_eq!(entry.anchor(), Some(Point2::new(1.0, 1.0)));
	}
}
