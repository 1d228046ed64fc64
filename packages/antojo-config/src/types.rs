use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub service: Service,
	pub geo: Geo,
	pub search: Search,
	pub ranking: Ranking,
	pub suggestions: Suggestions,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Service {
	pub log_level: String,
}

impl Default for Service {
	fn default() -> Self {
		Self { log_level: "info".to_string() }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Geo {
	/// Geohash length stored on every place record. Coordinates and the
	/// stored hash must always be derived with the same precision.
	pub place_precision: usize,
}

impl Default for Geo {
	fn default() -> Self {
		Self { place_precision: 10 }
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Search {
	pub coverage: CoveragePolicy,
}

/// What a proximity query does when one of its range fetches fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveragePolicy {
	/// Fail the whole query. An error is never mistakable for "no places
	/// found".
	#[default]
	Fail,
	/// Return the survivors and report the failed ranges on the
	/// response, so partial coverage is explicit.
	Partial,
}

/// Similarity weights, one per feature dimension. The reference defaults
/// sum to 1.0; they are tunables, not a law.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Ranking {
	pub zone_weight: f64,
	pub spice_weight: f64,
	pub price_weight: f64,
	pub tags_weight: f64,
	/// Price and tag contributions at or below this value neither score
	/// nor set the suggestion reason.
	pub reason_threshold: f64,
}

impl Default for Ranking {
	fn default() -> Self {
		Self {
			zone_weight: 0.45,
			spice_weight: 0.30,
			price_weight: 0.15,
			tags_weight: 0.10,
			reason_threshold: 0.01,
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Suggestions {
	pub limit: usize,
}

impl Default for Suggestions {
	fn default() -> Self {
		Self { limit: 12 }
	}
}
