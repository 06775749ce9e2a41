use crate::countries::filter::CountryFilter;
use crate::countries::models::Region;
use crate::game::consts::{
    MAX_AREA_POWER, MAX_POPULATION_POWER, MIN_AREA_POWER, MIN_POPULATION_POWER,
};
use crate::geodesy::models::Bearing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Difficulty settings. Area and population bounds are exponents of ten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    pub regions: BTreeSet<Region>,
    pub min_area_power: f64,
    pub max_area_power: f64,
    pub min_population_power: f64,
    pub max_population_power: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            regions: Region::ALL.into_iter().collect(),
            min_area_power: MIN_AREA_POWER,
            max_area_power: MAX_AREA_POWER,
            min_population_power: MIN_POPULATION_POWER,
            max_population_power: MAX_POPULATION_POWER,
        }
    }
}

impl FilterSettings {
    /// No region selected means every region; exponents are clamped to their sliders' range.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let regions = if self.regions.is_empty() {
            defaults.regions
        } else {
            self.regions
        };
        Self {
            regions,
            min_area_power: clamp_power(
                self.min_area_power,
                MIN_AREA_POWER,
                MAX_AREA_POWER,
                MIN_AREA_POWER,
            ),
            max_area_power: clamp_power(
                self.max_area_power,
                MIN_AREA_POWER,
                MAX_AREA_POWER,
                MAX_AREA_POWER,
            ),
            min_population_power: clamp_power(
                self.min_population_power,
                MIN_POPULATION_POWER,
                MAX_POPULATION_POWER,
                MIN_POPULATION_POWER,
            ),
            max_population_power: clamp_power(
                self.max_population_power,
                MIN_POPULATION_POWER,
                MAX_POPULATION_POWER,
                MAX_POPULATION_POWER,
            ),
        }
    }

    /// Exponents sitting at the end of their range leave that side unbounded.
    pub fn to_filter(&self) -> CountryFilter {
        let min_area =
            (self.min_area_power > MIN_AREA_POWER).then(|| 10f64.powf(self.min_area_power));
        let max_area =
            (self.max_area_power < MAX_AREA_POWER).then(|| 10f64.powf(self.max_area_power));
        let min_population = (self.min_population_power > MIN_POPULATION_POWER)
            .then(|| 10f64.powf(self.min_population_power));
        let max_population = (self.max_population_power < MAX_POPULATION_POWER)
            .then(|| 10f64.powf(self.max_population_power));
        CountryFilter::new(true, self.regions.iter().copied())
            .with_area(min_area, max_area)
            .with_population(min_population, max_population)
    }
}

fn clamp_power(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

/// A scored guess. Stored in the cookie as a `[country, km, bearing code]` triple.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "StoredGuess", try_from = "StoredGuess")]
pub struct Guess {
    pub country: String,
    /// Whole kilometres, the precision the player is shown.
    pub distance_km: u64,
    pub bearing: Bearing,
}

type StoredGuess = (String, u64, u8);

impl Guess {
    pub fn new(country: String, distance_km: f64, bearing: Bearing) -> Self {
        Self {
            country,
            distance_km: distance_km.round() as u64,
            bearing,
        }
    }

    pub fn formatted_distance(&self) -> String {
        self.distance_km.to_string()
    }
}

impl From<Guess> for StoredGuess {
    fn from(guess: Guess) -> Self {
        (guess.country, guess.distance_km, guess.bearing.code())
    }
}

impl TryFrom<StoredGuess> for Guess {
    type Error = String;

    fn try_from((country, distance_km, code): StoredGuess) -> Result<Self, Self::Error> {
        let bearing =
            Bearing::from_code(code).ok_or_else(|| format!("unknown bearing code {code}"))?;
        Ok(Self {
            country,
            distance_km,
            bearing,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub target: String,
    /// Last submitted text that did not name a country.
    pub pending_text: String,
    pub guesses: Vec<Guess>,
    pub filters: FilterSettings,
    /// How many countries the target was drawn from.
    pub candidate_count: usize,
}

impl GameState {
    pub fn new(target: String, filters: FilterSettings, candidate_count: usize) -> Self {
        Self {
            target,
            pending_text: String::new(),
            guesses: Vec::new(),
            filters,
            candidate_count,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.guesses
            .last()
            .is_some_and(|guess| guess.country == self.target)
    }
}
