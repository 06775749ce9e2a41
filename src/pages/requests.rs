use crate::countries::models::Region;
use crate::game::models::FilterSettings;
use serde::Deserialize;

/// Both forms of the game page post here. The pressed button decides what happens.
#[derive(Debug, Default, Deserialize)]
pub struct PageForm {
    pub guess: Option<String>,
    pub guess_input: Option<String>,
    pub reset: Option<String>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub population_min: Option<f64>,
    pub population_max: Option<f64>,
    #[serde(rename = "Africa")]
    pub africa: Option<String>,
    #[serde(rename = "Americas")]
    pub americas: Option<String>,
    #[serde(rename = "Asia")]
    pub asia: Option<String>,
    #[serde(rename = "Europe")]
    pub europe: Option<String>,
    #[serde(rename = "Oceania")]
    pub oceania: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum PageAction {
    Guess(String),
    NewGame(FilterSettings),
    Refresh,
}

impl PageForm {
    pub fn into_action(self) -> PageAction {
        if self.guess.as_deref() == Some("guess") {
            return PageAction::Guess(self.guess_input.unwrap_or_default());
        }
        if self.reset.as_deref() != Some("reset") {
            return PageAction::Refresh;
        }
        let checked = [
            (Region::Africa, &self.africa),
            (Region::Americas, &self.americas),
            (Region::Asia, &self.asia),
            (Region::Europe, &self.europe),
            (Region::Oceania, &self.oceania),
        ];
        let defaults = FilterSettings::default();
        PageAction::NewGame(FilterSettings {
            regions: checked
                .into_iter()
                .filter(|(_, value)| value.is_some())
                .map(|(region, _)| region)
                .collect(),
            min_area_power: self.area_min.unwrap_or(defaults.min_area_power),
            max_area_power: self.area_max.unwrap_or(defaults.max_area_power),
            min_population_power: self
                .population_min
                .unwrap_or(defaults.min_population_power),
            max_population_power: self
                .population_max
                .unwrap_or(defaults.max_population_power),
        })
    }
}
