use crate::{
	Error, Point, Result,
	codec::{self, BASE32, BITS_PER_CHAR, MAX_PRECISION},
};

const EARTH_MERIDIONAL_CIRCUMFERENCE_M: f64 = 40_007_860.0;
const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;
const METERS_PER_DEGREE_LATITUDE: f64 = 110_574.0;
/// Squared eccentricity of the WGS84 reference ellipsoid.
const E2: f64 = 0.006_694_478_197_99;
const EPSILON: f64 = 1e-12;
const MAX_BITS: u32 = MAX_PRECISION as u32 * BITS_PER_CHAR;

/// A `[start, end)` slice of the geohash keyspace. Every stored hash that
/// sorts at or after `start` and strictly before `end` belongs to the
/// range. `end` may carry a trailing `~`, which sorts after every base-32
/// symbol and so closes the range over a whole prefix.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HashRange {
	pub start: String,
	pub end: String,
}

/// Plans the geohash ranges whose union covers the disc of `radius_m`
/// meters around `center`.
///
/// The precision is derived from the radius: the coarsest cell size that
/// still resolves the query box, so the range count stays bounded for any
/// radius. Nine probe points (the center and its eight compass offsets at
/// radius distance) pick up every neighboring cell the disc can touch,
/// including across the antimeridian and at the poles. Each probe cell is
/// widened to the full `[start, end)` prefix range; duplicates are
/// dropped and contiguous ranges merged.
///
/// The union over-approximates the disc. Callers restore exactness by
/// re-checking the true distance of every candidate.
pub fn query_bounds(center: Point, radius_m: f64) -> Result<Vec<HashRange>> {
	center.validate()?;

	if !radius_m.is_finite() || radius_m <= 0.0 {
		return Err(Error::InvalidRadius { meters: radius_m });
	}

	let bits = bounding_box_bits(center, radius_m);
	let precision = bits.div_ceil(BITS_PER_CHAR) as usize;
	let mut ranges: Vec<HashRange> = Vec::with_capacity(9);

	for probe in probe_points(center, radius_m) {
		let hash = codec::encode(probe, precision)?;
		let range = range_for_hash(&hash, bits);

		if !ranges.contains(&range) {
			ranges.push(range);
		}
	}

	Ok(merge_contiguous(ranges))
}

/// Number of significant geohash bits needed so one cell is no larger
/// than the query box. The longitude budget is evaluated at both the
/// north and south edges of the box, since cells widen toward the poles.
fn bounding_box_bits(center: Point, radius_m: f64) -> u32 {
	let lat_delta = radius_m / METERS_PER_DEGREE_LATITUDE;
	let lat_north = (center.lat + lat_delta).min(90.0);
	let lat_south = (center.lat - lat_delta).max(-90.0);
	let bits_lat = latitude_bits_for_resolution(radius_m).floor() * 2.0;
	let bits_lng_north = longitude_bits_for_resolution(radius_m, lat_north).floor() * 2.0 - 1.0;
	let bits_lng_south = longitude_bits_for_resolution(radius_m, lat_south).floor() * 2.0 - 1.0;

	bits_lat.min(bits_lng_north).min(bits_lng_south).min(MAX_BITS as f64).max(1.0) as u32
}

fn latitude_bits_for_resolution(resolution_m: f64) -> f64 {
	(EARTH_MERIDIONAL_CIRCUMFERENCE_M / 2.0 / resolution_m).log2().min(MAX_BITS as f64)
}

fn longitude_bits_for_resolution(resolution_m: f64, lat: f64) -> f64 {
	let degrees = meters_to_longitude_degrees(resolution_m, lat);

	if degrees.abs() > 1e-6 { (360.0 / degrees).log2().max(1.0) } else { 1.0 }
}

/// Longitude degrees spanned by `distance_m` meters at the given
/// latitude, with the WGS84 ellipsoid correction. Saturates to 360 near
/// the poles, where a meter crosses every meridian.
fn meters_to_longitude_degrees(distance_m: f64, lat: f64) -> f64 {
	let radians = lat.to_radians();
	let numerator = radians.cos() * EARTH_EQUATORIAL_RADIUS_M * std::f64::consts::PI / 180.0;
	let denominator = 1.0 / (1.0 - E2 * radians.sin() * radians.sin()).sqrt();
	let degrees_per_meter = numerator * denominator;

	if degrees_per_meter < EPSILON {
		if distance_m > 0.0 { 360.0 } else { 0.0 }
	} else {
		(distance_m / degrees_per_meter).min(360.0)
	}
}

/// The center plus its eight compass offsets at radius distance. Latitude
/// offsets clamp at the poles; longitude offsets wrap at the
/// antimeridian. The wider of the north/south longitude spans is used so
/// the east/west probes always clear the box.
fn probe_points(center: Point, radius_m: f64) -> [Point; 9] {
	let lat_delta = radius_m / METERS_PER_DEGREE_LATITUDE;
	let lat_north = (center.lat + lat_delta).min(90.0);
	let lat_south = (center.lat - lat_delta).max(-90.0);
	let lng_delta = meters_to_longitude_degrees(radius_m, lat_north)
		.max(meters_to_longitude_degrees(radius_m, lat_south));
	let west = wrap_longitude(center.lng - lng_delta);
	let east = wrap_longitude(center.lng + lng_delta);

	[
		Point { lat: center.lat, lng: center.lng },
		Point { lat: center.lat, lng: west },
		Point { lat: center.lat, lng: east },
		Point { lat: lat_north, lng: center.lng },
		Point { lat: lat_north, lng: west },
		Point { lat: lat_north, lng: east },
		Point { lat: lat_south, lng: center.lng },
		Point { lat: lat_south, lng: west },
		Point { lat: lat_south, lng: east },
	]
}

fn wrap_longitude(lng: f64) -> f64 {
	if (-180.0..=180.0).contains(&lng) {
		return lng;
	}

	let adjusted = lng + 180.0;

	if adjusted > 0.0 { (adjusted % 360.0) - 180.0 } else { 180.0 - (-adjusted % 360.0) }
}

/// Widens a probe hash into the `[start, end)` range that covers every
/// longer hash sharing its significant bits. The last character keeps
/// only `bits` worth of resolution, so the range spans a whole aligned
/// block of sibling symbols.
fn range_for_hash(hash: &str, bits: u32) -> HashRange {
	let precision = bits.div_ceil(BITS_PER_CHAR) as usize;

	if hash.len() < precision {
		return HashRange { start: hash.to_string(), end: format!("{hash}~") };
	}

	let hash = &hash[..precision];
	let base = &hash[..hash.len() - 1];
	let last_value = codec::symbol_index(hash.as_bytes()[hash.len() - 1]);
	let significant_bits = bits - base.len() as u32 * BITS_PER_CHAR;
	let unused_bits = BITS_PER_CHAR - significant_bits;
	let start_value = (last_value >> unused_bits) << unused_bits;
	let end_value = start_value + (1 << unused_bits);
	let start = format!("{base}{}", BASE32[start_value as usize] as char);

	if end_value > 31 {
		HashRange { start, end: format!("{base}~") }
	} else {
		HashRange { start, end: format!("{base}{}", BASE32[end_value as usize] as char) }
	}
}

/// Sorts ranges by start and merges neighbors where one range ends
/// exactly where the next begins, so the store sees the fewest queries.
fn merge_contiguous(mut ranges: Vec<HashRange>) -> Vec<HashRange> {
	ranges.sort_by(|a, b| a.start.cmp(&b.start));

	let mut merged: Vec<HashRange> = Vec::with_capacity(ranges.len());

	for range in ranges {
		match merged.last_mut() {
			Some(last) if last.end == range.start => last.end = range.end,
			_ => merged.push(range),
		}
	}

	merged
}
