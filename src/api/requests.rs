use crate::countries::models::Region;
use crate::game::models::FilterSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// Missing exponents fall back to the widest setting; missing regions mean all of them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    #[serde(default)]
    pub regions: Vec<Region>,
    pub min_area_power: Option<f64>,
    pub max_area_power: Option<f64>,
    pub min_population_power: Option<f64>,
    pub max_population_power: Option<f64>,
}

impl From<NewGameRequest> for FilterSettings {
    fn from(request: NewGameRequest) -> Self {
        let defaults = FilterSettings::default();
        FilterSettings {
            regions: request.regions.into_iter().collect(),
            min_area_power: request.min_area_power.unwrap_or(defaults.min_area_power),
            max_area_power: request.max_area_power.unwrap_or(defaults.max_area_power),
            min_population_power: request
                .min_population_power
                .unwrap_or(defaults.min_population_power),
            max_population_power: request
                .max_population_power
                .unwrap_or(defaults.max_population_power),
        }
    }
}
