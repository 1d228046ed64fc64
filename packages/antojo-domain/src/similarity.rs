use std::collections::HashSet;

use antojo_config::Ranking;

use crate::Dish;

const SPICE_SPAN: f64 = 5.0;
const PRICE_SPAN: f64 = 100.0;

/// The feature dimension credited for a suggestion, in the fixed
/// priority order the scorer reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCause {
	Zone,
	Spice,
	Price,
	Tags,
}

impl ReasonCause {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Zone => "zone",
			Self::Spice => "spice",
			Self::Price => "price",
			Self::Tags => "tags",
		}
	}
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reason {
	pub cause: ReasonCause,
	pub ref_dish_id: String,
}

/// Scores how similar `candidate` is to `reference` across zone, spice,
/// price, and tag overlap. Each dimension contributes within
/// `[0, weight]`; the reported reason is the first dimension in priority
/// order (zone, spice, price, tags) whose contribution qualifies, not
/// the largest one. That attribution order is load-bearing for the
/// explanations users see; do not reorder it silently.
///
/// The arithmetic is symmetric in its arguments. The reason is not: it
/// names the reference dish, and the threshold tie-break can credit
/// different dimensions depending on argument order.
pub fn similarity_score(
	reference: &Dish,
	candidate: &Dish,
	ranking: &Ranking,
) -> (f64, Option<Reason>) {
	let mut score = 0.0;
	let mut cause: Option<ReasonCause> = None;

	if !reference.zone.is_empty() && reference.zone == candidate.zone {
		score += ranking.zone_weight;
		cause.get_or_insert(ReasonCause::Zone);
	}

	let spice_diff = (f64::from(reference.spice_level) - f64::from(candidate.spice_level)).abs();
	let spice_contribution = ranking.spice_weight * (1.0 - (spice_diff / SPICE_SPAN).min(1.0));

	if spice_contribution > 0.0 {
		score += spice_contribution;
		cause.get_or_insert(ReasonCause::Spice);
	}

	let price_diff = (reference.reference_price - candidate.reference_price).abs();
	let price_contribution = ranking.price_weight * (1.0 - (price_diff / PRICE_SPAN).min(1.0));

	if price_contribution > ranking.reason_threshold {
		score += price_contribution;
		cause.get_or_insert(ReasonCause::Price);
	}

	if !reference.tags.is_empty() && !candidate.tags.is_empty() {
		let tags_contribution = ranking.tags_weight * jaccard(&reference.tags, &candidate.tags);

		if tags_contribution > ranking.reason_threshold {
			score += tags_contribution;
			cause.get_or_insert(ReasonCause::Tags);
		}
	}

	(score, cause.map(|cause| Reason { cause, ref_dish_id: reference.id.clone() }))
}

/// Intersection over union of the two tag sets.
fn jaccard(a: &[String], b: &[String]) -> f64 {
	let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
	let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
	let intersection = set_a.intersection(&set_b).count();
	let union = set_a.union(&set_b).count().max(1);

	intersection as f64 / union as f64
}

/// Human-readable explanation for a surfaced suggestion.
pub fn explain_reason(cause: ReasonCause, ref_dish_name: &str) -> String {
	match cause {
		ReasonCause::Zone => format!("Because you liked {ref_dish_name} in that area"),
		ReasonCause::Spice => {
			format!("Because you liked {ref_dish_name} with a similar spice level")
		},
		ReasonCause::Price => format!("Because you liked {ref_dish_name} at a similar price"),
		ReasonCause::Tags => format!("Because you liked {ref_dish_name} with a similar style"),
	}
}
