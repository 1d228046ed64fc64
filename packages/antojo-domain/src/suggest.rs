use std::collections::{HashMap, HashSet};

use antojo_config::Ranking;

use crate::{Dish, Reason, similarity::similarity_score};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Suggestions {
	pub items: Vec<Dish>,
	pub reason_by_id: HashMap<String, Reason>,
}

/// Ranks un-favorited catalog items by their summed similarity to every
/// favorite, in the favorites' catalog order. The recorded reason for an
/// item is the first one any favorite produced. Items with no similarity
/// signal at all are dropped rather than padded in; an empty favorite
/// set yields no suggestions.
///
/// Deterministic: the sort is stable, so equal totals keep their
/// original catalog order.
pub fn suggest(
	catalog: &[Dish],
	favorite_ids: &HashSet<String>,
	limit: usize,
	ranking: &Ranking,
) -> Suggestions {
	if favorite_ids.is_empty() {
		return Suggestions::default();
	}

	let favorites: Vec<&Dish> =
		catalog.iter().filter(|dish| favorite_ids.contains(&dish.id)).collect();
	let mut scored: Vec<(&Dish, f64, Option<Reason>)> = Vec::new();

	for candidate in catalog.iter().filter(|dish| !favorite_ids.contains(&dish.id)) {
		let mut total = 0.0;
		let mut reason: Option<Reason> = None;

		for favorite in &favorites {
			let (score, cause) = similarity_score(favorite, candidate, ranking);

			total += score;

			if reason.is_none() {
				reason = cause;
			}
		}

		scored.push((candidate, total, reason));
	}

	scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

	let mut items = Vec::with_capacity(limit.min(scored.len()));
	let mut reason_by_id = HashMap::new();

	for (dish, total, reason) in scored {
		if total <= 0.0 {
			break;
		}
		if items.len() == limit {
			break;
		}

		if let Some(reason) = reason {
			reason_by_id.insert(dish.id.clone(), reason);
		}

		items.push(dish.clone());
	}

	Suggestions { items, reason_by_id }
}
