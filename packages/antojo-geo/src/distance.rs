use crate::Point;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters, by the haversine
/// formula. A planar approximation is not acceptable here: the error at
/// city scale already exceeds the tolerance the radius filter needs.
pub fn distance_between_m(a: Point, b: Point) -> f64 {
	let lat_a = a.lat.to_radians();
	let lat_b = b.lat.to_radians();
	let d_lat = (b.lat - a.lat).to_radians();
	let d_lng = (b.lng - a.lng).to_radians();

	let h = (d_lat / 2.0).sin().powi(2)
		+ lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

	2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
