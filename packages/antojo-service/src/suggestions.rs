use std::collections::{HashMap, HashSet};

use antojo_domain::{Dish, Reason, suggest};

use crate::AntojoService;

/// Catalog and favorites arrive as snapshots taken by the caller; the
/// engine never reads them from ambient state.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SuggestRequest {
	pub catalog: Vec<Dish>,
	pub favorite_ids: HashSet<String>,
	pub limit: Option<usize>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SuggestResponse {
	/// Descending by summed similarity; catalog order among ties.
	pub items: Vec<Dish>,
	pub reason_by_id: HashMap<String, Reason>,
}

impl AntojoService {
	/// Suggests un-favorited dishes ranked against the favorite set.
	/// Empty favorites produce an empty response; there is no signal to
	/// fabricate suggestions from.
	pub fn suggest(&self, request: SuggestRequest) -> SuggestResponse {
		let SuggestRequest { catalog, favorite_ids, limit } = request;
		let limit = limit.unwrap_or(self.cfg.suggestions.limit);
		let suggestions = suggest(&catalog, &favorite_ids, limit, &self.cfg.ranking);

		tracing::debug!(
			catalog_len = catalog.len(),
			favorite_count = favorite_ids.len(),
			result_count = suggestions.items.len(),
			"Suggestion ranking complete."
		);

		SuggestResponse { items: suggestions.items, reason_by_id: suggestions.reason_by_id }
	}
}
