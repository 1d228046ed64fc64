use std::{
	collections::{BTreeMap, HashMap},
	ops::Bound,
};

use antojo_domain::Place;
use antojo_geo::HashRange;

use crate::{Error, Result};

/// In-memory reference implementation of the ordered place collection.
///
/// Records are keyed by `(geohash, id)` so range scans come back in
/// geohash order, the same contract a range-indexed document store
/// provides. The secondary id index keeps upserts correct when a place
/// moves and its geohash changes.
#[derive(Debug, Default)]
pub struct MemoryPlaceStore {
	places: BTreeMap<(String, String), Place>,
	geohash_by_id: HashMap<String, String>,
}

impl MemoryPlaceStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a place by id.
	pub fn upsert(&mut self, place: Place) {
		if let Some(previous_hash) = self.geohash_by_id.remove(&place.id) {
			self.places.remove(&(previous_hash, place.id.clone()));
		}

		self.geohash_by_id.insert(place.id.clone(), place.geohash.clone());
		self.places.insert((place.geohash.clone(), place.id.clone()), place);
	}

	pub fn len(&self) -> usize {
		self.places.len()
	}

	pub fn is_empty(&self) -> bool {
		self.places.is_empty()
	}

	/// Every place whose geohash lies in `[start, end)`, ordered by
	/// geohash. When a dish key is given, records not serving it are
	/// filtered out store-side.
	pub fn places_in_range(
		&self,
		range: &HashRange,
		dish_key: Option<&str>,
	) -> Result<Vec<Place>> {
		if range.start >= range.end {
			return Err(Error::InvalidRange(format!(
				"start {:?} does not precede end {:?}",
				range.start, range.end
			)));
		}

		let lower = Bound::Included((range.start.clone(), String::new()));
		let upper = Bound::Excluded((range.end.clone(), String::new()));

		Ok(self
			.places
			.range((lower, upper))
			.map(|(_, place)| place)
			.filter(|place| dish_key.is_none_or(|key| place.serves(key)))
			.cloned()
			.collect())
	}
}
