#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Geo(#[from] antojo_geo::Error),
	#[error("Place {id} must serve at least one dish key.")]
	NoDishKeys { id: String },
}
