/// Equatorial radius used for every distance, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.1;
