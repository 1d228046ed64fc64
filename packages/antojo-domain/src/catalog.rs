use antojo_geo::Point;

use crate::{Error, Result};

/// A geotagged place that serves one or more dishes.
///
/// `geohash` is always derived from `coords` at a fixed precision; the
/// two never diverge. Construction and relocation go through the codec,
/// so a record read back from the store can be trusted by the range
/// planner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Place {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub address: Option<String>,
	pub coords: Point,
	pub dish_keys: Vec<String>,
	#[serde(default)]
	pub rating: Option<f32>,
	#[serde(default)]
	pub price_level: Option<u8>,
	#[serde(default)]
	pub open_now: Option<bool>,
	pub geohash: String,
}

impl Place {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		coords: Point,
		dish_keys: Vec<String>,
		precision: usize,
	) -> Result<Self> {
		let id = id.into();

		if dish_keys.is_empty() {
			return Err(Error::NoDishKeys { id });
		}

		let geohash = antojo_geo::encode(coords, precision)?;

		Ok(Self {
			id,
			name: name.into(),
			address: None,
			coords,
			dish_keys,
			rating: None,
			price_level: None,
			open_now: None,
			geohash,
		})
	}

	pub fn with_address(mut self, address: impl Into<String>) -> Self {
		self.address = Some(address.into());

		self
	}

	/// Moves the place and recomputes its geohash in the same step.
	pub fn relocate(&mut self, coords: Point, precision: usize) -> Result<()> {
		self.geohash = antojo_geo::encode(coords, precision)?;
		self.coords = coords;

		Ok(())
	}

	pub fn serves(&self, dish_key: &str) -> bool {
		self.dish_keys.iter().any(|key| key == dish_key)
	}
}

/// A catalog item. Consumed by the similarity scorer and suggestion
/// aggregator only; the geospatial engine never sees dishes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dish {
	pub id: String,
	pub name: String,
	pub reference_price: f64,
	pub zone: String,
	/// 0 (not spicy) through 5.
	pub spice_level: u8,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub image_ref: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
}
