use crate::countries::errors::CountryError;
use crate::countries::table::CountryTable;
use consts::EARTH_RADIUS_KM;
use models::{Bearing, LatLng, Measurement};

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

pub fn great_circle_distance(origin: LatLng, destination: LatLng) -> f64 {
    let phi_1 = origin.lat.to_radians();
    let phi_2 = destination.lat.to_radians();
    let delta_phi = (destination.lat - origin.lat).to_radians();
    let delta_lambda = (destination.lng - origin.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}

/// Distance from `origin` to `destination` and the direction to head in to get there.
///
/// The direction is taken on the lat/lng plane rather than along the great circle.
pub fn measure(origin: LatLng, destination: LatLng) -> Measurement {
    let distance_km = great_circle_distance(origin, destination);
    let bearing = if distance_km == 0.0 {
        Bearing::TargetReached
    } else {
        let delta_lat = destination.lat - origin.lat;
        let delta_lng = destination.lng - origin.lng;
        Bearing::from_degrees(delta_lat.atan2(delta_lng).to_degrees())
    };
    Measurement {
        distance_km,
        bearing,
    }
}

pub fn distance_and_bearing(
    table: &CountryTable,
    origin: &str,
    destination: &str,
) -> Result<Measurement, CountryError> {
    let origin = table.get(origin)?;
    let destination = table.get(destination)?;
    Ok(measure(origin.latlng, destination.latlng))
}
