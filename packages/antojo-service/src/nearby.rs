use std::{cmp::Ordering, collections::HashSet};

use antojo_config::CoveragePolicy;
use antojo_domain::Place;
use antojo_geo::{HashRange, Point};
use uuid::Uuid;

use crate::{AntojoService, Error, Result};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NearbyRequest {
	pub center: Point,
	pub radius_m: f64,
	/// Already-normalized dish key; see `antojo_domain::dish_key_from_name`.
	pub dish_key: String,
	pub limit: Option<u32>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NearbyItem {
	pub place: Place,
	pub distance_m: f64,
}

/// Whether every planned range was fetched. Partial coverage only occurs
/// under `CoveragePolicy::Partial`; it is reported, never silent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Coverage {
	Full,
	Partial { failed_ranges: Vec<HashRange> },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NearbyResponse {
	/// Tags this search so a caller racing successive queries can drop
	/// stale results; last request wins.
	pub request_id: Uuid,
	/// Ascending by distance; ties break on place id.
	pub items: Vec<NearbyItem>,
	pub coverage: Coverage,
}

impl AntojoService {
	/// Every place within `radius_m` of `center` that serves `dish_key`,
	/// nearest first.
	///
	/// Plans the geohash ranges for the radius, fetches them all
	/// concurrently, then restores exactness over the union: dedupe
	/// across overlapping ranges, keep only places serving the dish,
	/// re-check the true great-circle distance, and sort. No matches is
	/// an empty response, not an error.
	pub async fn nearby(&self, request: NearbyRequest) -> Result<NearbyResponse> {
		let NearbyRequest { center, radius_m, dish_key, limit } = request;

		if dish_key.trim().is_empty() {
			return Err(Error::InvalidRequest {
				message: "dish_key must be non-empty.".to_string(),
			});
		}

		let request_id = Uuid::new_v4();
		let ranges = antojo_geo::query_bounds(center, radius_m)?;

		tracing::debug!(
			%request_id,
			range_count = ranges.len(),
			radius_m,
			dish_key = dish_key.as_str(),
			"Planned geohash ranges."
		);

		let mut handles = Vec::with_capacity(ranges.len());

		for range in &ranges {
			let source = self.source.clone();
			let range = range.clone();
			let dish_key = dish_key.clone();

			handles.push(tokio::spawn(async move {
				source.places_in_range(&range, Some(&dish_key)).await
			}));
		}

		let mut candidates = Vec::new();
		let mut failed_ranges = Vec::new();

		for (range, handle) in ranges.into_iter().zip(handles) {
			let result = match handle.await {
				Ok(result) => result,
				Err(err) => Err(color_eyre::eyre::eyre!("fetch task failed: {err}")),
			};

			match result {
				Ok(places) => candidates.extend(places),
				Err(err) => match self.cfg.search.coverage {
					CoveragePolicy::Fail => {
						return Err(Error::Fetch {
							start: range.start,
							end: range.end,
							message: err.to_string(),
						});
					},
					CoveragePolicy::Partial => {
						tracing::warn!(
							%request_id,
							start = range.start.as_str(),
							end = range.end.as_str(),
							error = %err,
							"Range fetch failed, reporting partial coverage."
						);

						failed_ranges.push(range);
					},
				},
			}
		}

		let mut seen = HashSet::with_capacity(candidates.len());
		let mut items = Vec::new();

		for place in candidates {
			// Adjacent ranges can both return a boundary place.
			if !seen.insert(place.id.clone()) {
				continue;
			}
			if !place.serves(&dish_key) {
				continue;
			}

			let distance_m = antojo_geo::distance_between_m(center, place.coords);

			// The ranges over-approximate the disc; the exact distance
			// is the authority.
			if distance_m <= radius_m {
				items.push(NearbyItem { place, distance_m });
			}
		}

		items.sort_by(|a, b| {
			a.distance_m
				.partial_cmp(&b.distance_m)
				.unwrap_or(Ordering::Equal)
				.then_with(|| a.place.id.cmp(&b.place.id))
		});

		if let Some(limit) = limit {
			items.truncate(limit as usize);
		}

		let coverage = if failed_ranges.is_empty() {
			Coverage::Full
		} else {
			Coverage::Partial { failed_ranges }
		};

		tracing::debug!(%request_id, result_count = items.len(), "Proximity search complete.");

		Ok(NearbyResponse { request_id, items, coverage })
	}
}
