use std::{collections::HashSet, fs, path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use antojo_config::Config;
use antojo_domain::{Dish, Place, dish_key_from_name, explain_reason};
use antojo_geo::Point;
use antojo_service::{AntojoService, Coverage, NearbyRequest, SuggestRequest};
use antojo_storage::MemoryPlaceStore;

#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Write the La Paz seed dataset to a JSON file.
	Seed {
		#[arg(long, value_name = "FILE", default_value = "antojo-seed.json")]
		out: PathBuf,
	},
	/// Find places serving a dish within a radius of a point.
	Nearby {
		#[arg(long, value_name = "FILE")]
		data: PathBuf,
		#[arg(long)]
		lat: f64,
		#[arg(long)]
		lng: f64,
		#[arg(long, default_value_t = 2_000.0)]
		radius_m: f64,
		/// Dish name or key; normalized before querying.
		#[arg(long)]
		dish: String,
		#[arg(long)]
		limit: Option<u32>,
	},
	/// Suggest dishes based on a set of favorite dish ids.
	Suggest {
		#[arg(long, value_name = "FILE")]
		data: PathBuf,
		/// Comma-separated favorite dish ids.
		#[arg(long, value_delimiter = ',')]
		favorites: Vec<String>,
		#[arg(long)]
		limit: Option<usize>,
	},
}

/// On-disk dataset the commands operate on; what the hosted store would
/// hold in a deployment.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
	pub places: Vec<Place>,
	pub dishes: Vec<Dish>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = match args.config.as_deref() {
		Some(path) => antojo_config::load(path)?,
		None => Config::default(),
	};

	init_tracing(&cfg);

	match args.command {
		Command::Seed { out } => seed(&cfg, &out),
		Command::Nearby { data, lat, lng, radius_m, dish, limit } => {
			nearby(cfg, &data, lat, lng, radius_m, &dish, limit).await
		},
		Command::Suggest { data, favorites, limit } => suggest(cfg, &data, favorites, limit),
	}
}

fn init_tracing(cfg: &Config) {
	let filter =
		EnvFilter::try_new(&cfg.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn seed(cfg: &Config, out: &PathBuf) -> color_eyre::Result<()> {
	let dataset = Dataset {
		places: antojo_testkit::seed_places(cfg.geo.place_precision)?,
		dishes: antojo_testkit::seed_dishes(),
	};

	fs::write(out, serde_json::to_string_pretty(&dataset)?)?;

	tracing::info!(
		path = %out.display(),
		place_count = dataset.places.len(),
		dish_count = dataset.dishes.len(),
		"Seed dataset written."
	);

	Ok(())
}

fn load_dataset(path: &PathBuf) -> color_eyre::Result<Dataset> {
	let raw = fs::read_to_string(path)
		.map_err(|err| eyre::eyre!("Failed to read dataset at {}: {err}", path.display()))?;

	Ok(serde_json::from_str(&raw)?)
}

async fn nearby(
	cfg: Config,
	data: &PathBuf,
	lat: f64,
	lng: f64,
	radius_m: f64,
	dish: &str,
	limit: Option<u32>,
) -> color_eyre::Result<()> {
	let dataset = load_dataset(data)?;
	let mut store = MemoryPlaceStore::new();

	for place in dataset.places {
		store.upsert(place);
	}

	let service = AntojoService::new(cfg, Arc::new(store));
	let request = NearbyRequest {
		center: Point::new(lat, lng)?,
		radius_m,
		dish_key: dish_key_from_name(dish),
		limit,
	};
	let response = service.nearby(request).await?;

	if response.items.is_empty() {
		println!("No places serving {dish} within {radius_m} m.");
	}

	for (rank, item) in response.items.iter().enumerate() {
		let address = item.place.address.as_deref().unwrap_or("-");

		println!(
			"{}. {} — {:.0} m ({address})",
			rank + 1,
			item.place.name,
			item.distance_m
		);
	}

	if let Coverage::Partial { failed_ranges } = &response.coverage {
		println!("Warning: {} range(s) could not be fetched.", failed_ranges.len());
	}

	Ok(())
}

fn suggest(
	cfg: Config,
	data: &PathBuf,
	favorites: Vec<String>,
	limit: Option<usize>,
) -> color_eyre::Result<()> {
	let dataset = load_dataset(data)?;
	let name_by_id: std::collections::HashMap<String, String> = dataset
		.dishes
		.iter()
		.map(|dish| (dish.id.clone(), dish.name.clone()))
		.collect();
	let favorite_ids: HashSet<String> =
		favorites.iter().map(|id| dish_key_from_name(id)).collect();
	let service = AntojoService::new(cfg, Arc::new(MemoryPlaceStore::new()));
	let response =
		service.suggest(SuggestRequest { catalog: dataset.dishes, favorite_ids, limit });

	if response.items.is_empty() {
		println!("No suggestions; mark some favorites first.");
	}

	for dish in &response.items {
		match response.reason_by_id.get(&dish.id) {
			Some(reason) => {
				let ref_name =
					name_by_id.get(&reason.ref_dish_id).unwrap_or(&reason.ref_dish_id);

				println!("{} — {}", dish.name, explain_reason(reason.cause, ref_name));
			},
			None => println!("{}", dish.name),
		}
	}

	Ok(())
}
