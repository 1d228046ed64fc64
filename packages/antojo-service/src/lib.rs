pub mod nearby;
pub mod suggestions;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use error::{Error, Result};
pub use nearby::{Coverage, NearbyItem, NearbyRequest, NearbyResponse};
pub use suggestions::{SuggestRequest, SuggestResponse};

use antojo_config::Config;
use antojo_domain::Place;
use antojo_geo::HashRange;
use antojo_storage::MemoryPlaceStore;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The storage collaborator seam: an ordered range-query capability over
/// a collection of places, queryable by geohash with `[start, end)`
/// semantics.
///
/// `dish_key` lets a capable store filter by dish containment
/// server-side; the service re-checks the key locally either way, so a
/// source is free to ignore it.
pub trait PlaceSource
where
	Self: Send + Sync,
{
	fn places_in_range<'a>(
		&'a self,
		range: &'a HashRange,
		dish_key: Option<&'a str>,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Place>>>;
}

impl PlaceSource for MemoryPlaceStore {
	fn places_in_range<'a>(
		&'a self,
		range: &'a HashRange,
		dish_key: Option<&'a str>,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Place>>> {
		let result = MemoryPlaceStore::places_in_range(self, range, dish_key)
			.map_err(color_eyre::Report::new);

		Box::pin(async move { result })
	}
}

/// Stateless search and suggestion engine. Holds configuration and the
/// place source; every invocation works on the arguments it is given,
/// never on ambient state.
pub struct AntojoService {
	pub cfg: Config,
	pub source: Arc<dyn PlaceSource>,
}

impl AntojoService {
	pub fn new(cfg: Config, source: Arc<dyn PlaceSource>) -> Self {
		Self { cfg, source }
	}
}
