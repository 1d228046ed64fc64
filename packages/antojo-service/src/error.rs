pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error(transparent)]
	Geo(#[from] antojo_geo::Error),
	#[error("Fetch failed for geohash range [{start}, {end}): {message}")]
	Fetch { start: String, end: String, message: String },
}
