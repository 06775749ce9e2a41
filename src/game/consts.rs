/// Area filter exponents: `10^0` to `10^7` square kilometers.
pub const MIN_AREA_POWER: f64 = 0.0;
pub const MAX_AREA_POWER: f64 = 7.0;
/// Population filter exponents: `10^2` to `10^9` people.
pub const MIN_POPULATION_POWER: f64 = 2.0;
pub const MAX_POPULATION_POWER: f64 = 9.0;
pub const MAX_PENDING_TEXT_LENGTH: usize = 64;
/// Daily targets are numbered in days since this date.
pub const DAILY_EPOCH: (i32, u32, u32) = (2000, 1, 1);
