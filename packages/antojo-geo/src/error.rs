#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Coordinate out of range: lat {lat}, lng {lng}.")]
	InvalidCoordinate { lat: f64, lng: f64 },
	#[error("Radius must be a positive number of meters, got {meters}.")]
	InvalidRadius { meters: f64 },
	#[error("Geohash precision must be between 1 and 22 characters, got {precision}.")]
	InvalidPrecision { precision: usize },
}
