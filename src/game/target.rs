use crate::countries::table::CountryTable;
use crate::game::consts::DAILY_EPOCH;
use crate::game::errors::TargetError;
use crate::game::models::FilterSettings;
use chrono::{NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub name: String,
    pub candidate_count: usize,
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days elapsed since the daily epoch. Dates before it count as day zero.
pub fn day_number(date: NaiveDate) -> u64 {
    let (year, month, day) = DAILY_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
    u64::try_from((date - epoch).num_days()).unwrap_or_default()
}

/// The same target for everyone starting a game on `date` with the same settings.
pub fn daily(
    table: &CountryTable,
    settings: &FilterSettings,
    date: NaiveDate,
) -> Result<Target, TargetError> {
    let mut rng = ChaCha8Rng::seed_from_u64(day_number(date));
    pick(table, settings, &mut rng)
}

pub fn random(table: &CountryTable, settings: &FilterSettings) -> Result<Target, TargetError> {
    pick(table, settings, &mut rand::thread_rng())
}

pub fn pick<R>(
    table: &CountryTable,
    settings: &FilterSettings,
    rng: &mut R,
) -> Result<Target, TargetError>
where
    R: Rng + ?Sized,
{
    let candidates = table.filter_countries(&settings.to_filter());
    let name = candidates.choose(rng).ok_or(TargetError::NoCandidates)?;
    Ok(Target {
        name: name.to_string(),
        candidate_count: candidates.len(),
    })
}
