mod bounds;
mod codec;
mod distance;
mod error;

pub use bounds::{HashRange, query_bounds};
pub use codec::{BASE32, MAX_PRECISION, encode};
pub use distance::distance_between_m;
pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A WGS84 coordinate pair in decimal degrees.
///
/// Construction is unchecked; every operation that depends on the
/// latitude/longitude ranges validates and fails with
/// [`Error::InvalidCoordinate`] instead of clamping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
	pub lat: f64,
	pub lng: f64,
}

impl Point {
	pub fn new(lat: f64, lng: f64) -> Result<Self> {
		let point = Self { lat, lng };

		point.validate()?;

		Ok(point)
	}

	pub fn validate(&self) -> Result<()> {
		if !self.lat.is_finite()
			|| !self.lng.is_finite()
			|| !(-90.0..=90.0).contains(&self.lat)
			|| !(-180.0..=180.0).contains(&self.lng)
		{
			return Err(Error::InvalidCoordinate { lat: self.lat, lng: self.lng });
		}

		Ok(())
	}
}
