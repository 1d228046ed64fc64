use std::{
	collections::HashSet,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use antojo_config::{Config, CoveragePolicy};
use antojo_domain::{Place, ReasonCause, dish_key_from_name};
use antojo_geo::{HashRange, Point};
use antojo_service::{
	AntojoService, BoxFuture, Coverage, Error, NearbyRequest, PlaceSource, SuggestRequest,
};
use antojo_storage::MemoryPlaceStore;
use antojo_testkit::{SEED_PRECISION, seed_dishes, seeded_store};

/// Mercado Miraflores, the map screen's default center.
const MIRAFLORES: (f64, f64) = (-16.5030, -68.1190);
/// Degrees of latitude per meter on the mean-radius sphere.
const LAT_DEGREES_PER_M: f64 = 1.0 / 111_194.9;

struct FailingSource;
impl PlaceSource for FailingSource {
	fn places_in_range<'a>(
		&'a self,
		_range: &'a HashRange,
		_dish_key: Option<&'a str>,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Place>>> {
		Box::pin(async move { Err(color_eyre::eyre::eyre!("store unavailable")) })
	}
}

/// Returns the same place for every range, as adjacent ranges can for a
/// record sitting on their shared boundary.
struct DuplicatingSource {
	place: Place,
	calls: Arc<AtomicUsize>,
}
impl PlaceSource for DuplicatingSource {
	fn places_in_range<'a>(
		&'a self,
		_range: &'a HashRange,
		_dish_key: Option<&'a str>,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Place>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let place = self.place.clone();

		Box::pin(async move { Ok(vec![place]) })
	}
}

fn service_with(source: Arc<dyn PlaceSource>) -> AntojoService {
	AntojoService::new(Config::default(), source)
}

fn seeded_service() -> AntojoService {
	service_with(Arc::new(seeded_store(SEED_PRECISION).unwrap()))
}

fn center() -> Point {
	Point::new(MIRAFLORES.0, MIRAFLORES.1).unwrap()
}

fn place_at(id: &str, dish: &str, lat: f64, lng: f64) -> Place {
	Place::new(
		id,
		id,
		Point::new(lat, lng).unwrap(),
		vec![dish_key_from_name(dish)],
		SEED_PRECISION,
	)
	.unwrap()
}

fn nearby_request(radius_m: f64, dish_key: &str) -> NearbyRequest {
	NearbyRequest { center: center(), radius_m, dish_key: dish_key.to_string(), limit: None }
}

#[tokio::test]
async fn miraflores_fricase_scenario() {
	// Two fricase spots at ~1.2 km and ~1.8 km due north, and a closer
	// spot that serves something else.
	let mut store = MemoryPlaceStore::new();

	store.upsert(place_at(
		"fricase-near",
		"Fricase",
		MIRAFLORES.0 + 1_200.0 * LAT_DEGREES_PER_M,
		MIRAFLORES.1,
	));
	store.upsert(place_at(
		"fricase-far",
		"Fricase",
		MIRAFLORES.0 + 1_800.0 * LAT_DEGREES_PER_M,
		MIRAFLORES.1,
	));
	store.upsert(place_at(
		"silpancho-close",
		"Silpancho",
		MIRAFLORES.0 + 500.0 * LAT_DEGREES_PER_M,
		MIRAFLORES.1,
	));

	let service = service_with(Arc::new(store));
	let response = service.nearby(nearby_request(2_000.0, "fricase")).await.unwrap();
	let ids: Vec<&str> = response.items.iter().map(|item| item.place.id.as_str()).collect();

	assert_eq!(ids, ["fricase-near", "fricase-far"]);
	assert_eq!(response.coverage, Coverage::Full);
	assert!((response.items[0].distance_m - 1_200.0).abs() < 20.0);
	assert!((response.items[1].distance_m - 1_800.0).abs() < 20.0);
}

#[tokio::test]
async fn results_are_sorted_and_within_radius() {
	let service = seeded_service();
	let response = service.nearby(nearby_request(2_000.0, "fricase")).await.unwrap();

	assert_eq!(response.items.len(), 2);
	// The seed has a fricase stand at the query center itself.
	assert_eq!(response.items[0].place.id, "puesto-miraflores-fricase");
	assert_eq!(response.items[1].place.id, "dona-remedios-fricase");

	for item in &response.items {
		assert!(item.distance_m <= 2_000.0);
		assert!(item.place.serves("fricase"));
	}
	for pair in response.items.windows(2) {
		assert!(pair[0].distance_m <= pair[1].distance_m);
	}
}

#[tokio::test]
async fn proximity_does_not_override_the_dish_filter() {
	let service = seeded_service();
	// Silpanchería Miraflores is a few hundred meters from the center
	// but serves no fricase.
	let response = service.nearby(nearby_request(2_000.0, "fricase")).await.unwrap();

	assert!(response.items.iter().all(|item| item.place.id != "silpancheria-miraflores-silpancho"));
}

#[tokio::test]
async fn widening_the_radius_reaches_more_places() {
	let service = seeded_service();
	let near = service.nearby(nearby_request(1_000.0, "saltenas")).await.unwrap();
	// Paceña La Salteña sits ~1.8 km away in the center; El Patio is in
	// Calacoto, several km south.
	assert!(near.items.is_empty());

	let mid = service.nearby(nearby_request(2_500.0, "saltenas")).await.unwrap();
	let ids: Vec<&str> = mid.items.iter().map(|item| item.place.id.as_str()).collect();

	assert_eq!(ids, ["pacena-la-saltena-saltenas"]);

	let wide = service.nearby(nearby_request(8_000.0, "saltenas")).await.unwrap();

	assert_eq!(wide.items.len(), 2);
	assert_eq!(wide.items[0].place.id, "pacena-la-saltena-saltenas");
}

#[tokio::test]
async fn empty_match_is_a_normal_outcome() {
	let service = seeded_service();
	let response = service.nearby(nearby_request(500.0, "tucumanas")).await.unwrap();

	assert!(response.items.is_empty());
	assert_eq!(response.coverage, Coverage::Full);
}

#[tokio::test]
async fn reruns_produce_identical_ordering() {
	let service = seeded_service();
	let first = service.nearby(nearby_request(5_000.0, "chairo-paceno")).await.unwrap();
	let second = service.nearby(nearby_request(5_000.0, "chairo-paceno")).await.unwrap();
	let first_ids: Vec<&str> = first.items.iter().map(|item| item.place.id.as_str()).collect();
	let second_ids: Vec<&str> = second.items.iter().map(|item| item.place.id.as_str()).collect();

	assert!(!first_ids.is_empty());
	assert_eq!(first_ids, second_ids);
	// Distinct searches carry distinct identifiers for staleness checks.
	assert_ne!(first.request_id, second.request_id);
}

#[tokio::test]
async fn limit_truncates_the_ranked_list() {
	let service = seeded_service();
	let mut request = nearby_request(8_000.0, "saltenas");

	request.limit = Some(1);

	let response = service.nearby(request).await.unwrap();

	assert_eq!(response.items.len(), 1);
	assert_eq!(response.items[0].place.id, "pacena-la-saltena-saltenas");
}

#[tokio::test]
async fn duplicate_candidates_across_ranges_collapse() {
	let place = place_at("boundary-stand", "Anticuchos", MIRAFLORES.0, MIRAFLORES.1);
	let calls = Arc::new(AtomicUsize::new(0));
	let source = DuplicatingSource { place, calls: calls.clone() };
	let service = service_with(Arc::new(source));
	let response = service.nearby(nearby_request(2_000.0, "anticuchos")).await.unwrap();

	assert_eq!(response.items.len(), 1);
	// One fetch per planned range, all issued.
	assert!(calls.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn fetch_failure_fails_the_query_by_default() {
	let service = service_with(Arc::new(FailingSource));
	let result = service.nearby(nearby_request(2_000.0, "fricase")).await;

	assert!(matches!(result, Err(Error::Fetch { .. })));
}

#[tokio::test]
async fn partial_policy_reports_failed_ranges() {
	let mut cfg = Config::default();

	cfg.search.coverage = CoveragePolicy::Partial;

	let service = AntojoService::new(cfg, Arc::new(FailingSource));
	let response = service.nearby(nearby_request(2_000.0, "fricase")).await.unwrap();

	assert!(response.items.is_empty());

	match response.coverage {
		Coverage::Partial { failed_ranges } => assert!(!failed_ranges.is_empty()),
		Coverage::Full => panic!("expected partial coverage"),
	}
}

#[tokio::test]
async fn rejects_blank_dish_key() {
	let service = seeded_service();
	let result = service.nearby(nearby_request(2_000.0, "  ")).await;

	assert!(matches!(result, Err(Error::InvalidRequest { .. })));
}

#[tokio::test]
async fn rejects_non_positive_radius() {
	let service = seeded_service();
	let result = service.nearby(nearby_request(0.0, "fricase")).await;

	assert!(matches!(result, Err(Error::Geo(antojo_geo::Error::InvalidRadius { .. }))));
}

#[tokio::test]
async fn rejects_out_of_range_center() {
	let service = seeded_service();
	let request = NearbyRequest {
		center: Point { lat: 120.0, lng: 0.0 },
		radius_m: 1_000.0,
		dish_key: "fricase".to_string(),
		limit: None,
	};
	let result = service.nearby(request).await;

	assert!(matches!(result, Err(Error::Geo(antojo_geo::Error::InvalidCoordinate { .. }))));
}

#[test]
fn suggestions_rank_san_pedro_dishes_for_a_fricase_fan() {
	let service = seeded_service();
	let response = service.suggest(SuggestRequest {
		catalog: seed_dishes(),
		favorite_ids: HashSet::from(["fricase".to_string()]),
		limit: None,
	});
	let ids: Vec<&str> = response.items.iter().map(|dish| dish.id.as_str()).collect();

	// Same zone, same spice level, close price, overlapping tags.
	assert_eq!(ids[0], "aji-de-fideos");
	assert_eq!(response.reason_by_id["aji-de-fideos"].cause, ReasonCause::Zone);
	assert_eq!(response.reason_by_id["aji-de-fideos"].ref_dish_id, "fricase");
	// Favorites are never suggested back.
	assert!(!ids.contains(&"fricase"));
}

#[test]
fn suggestions_require_favorites() {
	let service = seeded_service();
	let response = service.suggest(SuggestRequest {
		catalog: seed_dishes(),
		favorite_ids: HashSet::new(),
		limit: None,
	});

	assert!(response.items.is_empty());
	assert!(response.reason_by_id.is_empty());
}

#[test]
fn suggestion_limit_defaults_from_config() {
	let mut cfg = Config::default();

	cfg.suggestions.limit = 2;

	let service = AntojoService::new(cfg, Arc::new(MemoryPlaceStore::new()));
	let response = service.suggest(SuggestRequest {
		catalog: seed_dishes(),
		favorite_ids: HashSet::from(["fricase".to_string()]),
		limit: None,
	});

	assert_eq!(response.items.len(), 2);
}
