mod error;

pub use error::{Error, Result};

use antojo_domain::{Dish, Place, dish_key_from_name};
use antojo_geo::Point;
use antojo_storage::MemoryPlaceStore;

/// Default stored-geohash precision for fixtures, matching the config
/// default.
pub const SEED_PRECISION: usize = 10;

struct SeedPlace {
	name: &'static str,
	address: &'static str,
	lat: f64,
	lng: f64,
	dish: &'static str,
	rating: f32,
	price_level: u8,
}

const SEED_PLACES: &[SeedPlace] = &[
	SeedPlace {
		name: "Comedor Sopocachi",
		address: "Av. 20 de Octubre, Sopocachi, La Paz",
		lat: -16.5145,
		lng: -68.1290,
		dish: "Plato Paceño Tradicional",
		rating: 4.4,
		price_level: 1,
	},
	SeedPlace {
		name: "Mercado Lanza",
		address: "Mercado Lanza, Centro, La Paz",
		lat: -16.4953,
		lng: -68.1330,
		dish: "Plato Paceño Tradicional",
		rating: 4.2,
		price_level: 1,
	},
	SeedPlace {
		name: "Doña Remedios",
		address: "C. Murillo, Centro, La Paz",
		lat: -16.4989,
		lng: -68.1355,
		dish: "Fricase",
		rating: 4.5,
		price_level: 1,
	},
	SeedPlace {
		name: "Puesto Miraflores",
		address: "Av. Saavedra, Miraflores, La Paz",
		lat: -16.5030,
		lng: -68.1190,
		dish: "Fricase",
		rating: 4.3,
		price_level: 1,
	},
	SeedPlace {
		name: "Doña Anita",
		address: "Mercado Rodríguez, San Pedro, La Paz",
		lat: -16.5021,
		lng: -68.1368,
		dish: "Ají de Fideos",
		rating: 4.4,
		price_level: 1,
	},
	SeedPlace {
		name: "Ají de Fideo San Pedro",
		address: "Plaza Sucre, San Pedro, La Paz",
		lat: -16.5049,
		lng: -68.1379,
		dish: "Ají de Fideos",
		rating: 4.1,
		price_level: 1,
	},
	SeedPlace {
		name: "Doña Mary",
		address: "Av. 16 de Julio, El Alto (Ceja)",
		lat: -16.5048,
		lng: -68.1940,
		dish: "Sopa de Maní",
		rating: 4.4,
		price_level: 1,
	},
	SeedPlace {
		name: "Sopa de Maní Central",
		address: "Calle Comercio, Centro, La Paz",
		lat: -16.4957,
		lng: -68.1338,
		dish: "Sopa de Maní",
		rating: 4.2,
		price_level: 1,
	},
	SeedPlace {
		name: "Chairo de Sopocachi",
		address: "Plaza Abaroa, Sopocachi, La Paz",
		lat: -16.5128,
		lng: -68.1276,
		dish: "Chairo Paceño",
		rating: 4.5,
		price_level: 1,
	},
	SeedPlace {
		name: "Chairo Mercado Rodríguez",
		address: "Mercado Rodríguez, San Pedro, La Paz",
		lat: -16.5030,
		lng: -68.1362,
		dish: "Chairo Paceño",
		rating: 4.3,
		price_level: 1,
	},
	SeedPlace {
		name: "Silpanchería Miraflores",
		address: "Av. Saavedra, Miraflores, La Paz",
		lat: -16.5045,
		lng: -68.1205,
		dish: "Silpancho",
		rating: 4.6,
		price_level: 1,
	},
	SeedPlace {
		name: "Silpancho San Miguel",
		address: "San Miguel, Calacoto, La Paz",
		lat: -16.5410,
		lng: -68.0780,
		dish: "Silpancho",
		rating: 4.4,
		price_level: 2,
	},
	SeedPlace {
		name: "Salteñería El Patio",
		address: "Calle 21 de Calacoto 456, La Paz",
		lat: -16.5412,
		lng: -68.0786,
		dish: "Salteñas",
		rating: 4.5,
		price_level: 1,
	},
	SeedPlace {
		name: "Paceña La Salteña",
		address: "Calle Loayza 233, Centro, La Paz",
		lat: -16.4988,
		lng: -68.1348,
		dish: "Salteñas",
		rating: 4.6,
		price_level: 1,
	},
	SeedPlace {
		name: "Doña Tota",
		address: "Av. Montenegro, San Miguel, La Paz",
		lat: -16.5234,
		lng: -68.1109,
		dish: "Anticuchos",
		rating: 4.6,
		price_level: 1,
	},
	SeedPlace {
		name: "Anticuchos Sopocachi",
		address: "Av. 20 de Octubre, Sopocachi, La Paz",
		lat: -16.5146,
		lng: -68.1294,
		dish: "Anticuchos",
		rating: 4.4,
		price_level: 1,
	},
];

/// The La Paz seed dataset: street food spots around the city center,
/// two per dish.
pub fn seed_places(precision: usize) -> Result<Vec<Place>> {
	let mut places = Vec::with_capacity(SEED_PLACES.len());

	for seed in SEED_PLACES {
		let dish_key = dish_key_from_name(seed.dish);
		let id = format!("{}-{dish_key}", dish_key_from_name(seed.name));
		let coords = Point::new(seed.lat, seed.lng).map_err(antojo_domain::Error::Geo)?;
		let mut place =
			Place::new(id, seed.name, coords, vec![dish_key], precision)?.with_address(seed.address);

		place.rating = Some(seed.rating);
		place.price_level = Some(seed.price_level);
		place.open_now = Some(true);

		places.push(place);
	}

	Ok(places)
}

/// A memory store loaded with the seed places.
pub fn seeded_store(precision: usize) -> Result<MemoryPlaceStore> {
	let mut store = MemoryPlaceStore::new();

	for place in seed_places(precision)? {
		store.upsert(place);
	}

	Ok(store)
}

/// The dish catalog the suggestion fixtures rank over.
pub fn seed_dishes() -> Vec<Dish> {
	let rows: &[(&str, &str, u8, f64, &[&str], &str)] = &[
		(
			"Fricase",
			"San Pedro",
			3,
			30.0,
			&["sopa", "cerdo", "picante"],
			"Fricasé de cerdo con mote y chuño",
		),
		(
			"Chairo Paceño",
			"Sopocachi",
			1,
			25.0,
			&["sopa", "tradicional"],
			"Sopa espesa de chuño, carne y verduras",
		),
		(
			"Sopa de Maní",
			"El Alto",
			1,
			20.0,
			&["sopa", "mani"],
			"Sopa cremosa de maní con papas fritas",
		),
		(
			"Ají de Fideos",
			"San Pedro",
			3,
			18.0,
			&["pasta", "picante"],
			"Fideos en ají colorado con papa",
		),
		(
			"Silpancho",
			"Miraflores",
			1,
			35.0,
			&["carne", "arroz"],
			"Carne apanada sobre arroz y papa, con huevo",
		),
		(
			"Pique Macho",
			"San Pedro",
			4,
			45.0,
			&["carne", "picante"],
			"Carne, salchicha y papas con locoto",
		),
		(
			"Salteñas",
			"Sopocachi",
			2,
			10.0,
			&["empanada", "calle"],
			"Empanada jugosa de pollo o carne",
		),
		(
			"Anticuchos",
			"Miraflores",
			2,
			15.0,
			&["carne", "calle"],
			"Brochetas de corazón con papa y maní",
		),
		(
			"Plato Paceño Tradicional",
			"Sopocachi",
			0,
			28.0,
			&["tradicional", "maiz"],
			"Choclo, habas, queso frito y papa",
		),
		(
			"Tucumanas",
			"San Pedro",
			2,
			8.0,
			&["empanada", "calle"],
			"Empanada frita con salsas de puesto",
		),
	];

	rows.iter()
		.map(|(name, zone, spice_level, reference_price, tags, description)| {
			let id = dish_key_from_name(name);

			Dish {
				image_ref: Some(format!("platos/{id}.jpg")),
				id,
				name: name.to_string(),
				reference_price: *reference_price,
				zone: zone.to_string(),
				spice_level: *spice_level,
				description: description.to_string(),
				tags: tags.iter().map(|tag| tag.to_string()).collect(),
			}
		})
		.collect()
}
