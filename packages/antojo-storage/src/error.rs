#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid geohash range: {0}")]
	InvalidRange(String),
}
