use crate::countries::table::CountryTable;
use crate::game::consts::MAX_PENDING_TEXT_LENGTH;
use crate::game::errors::TargetError;
use crate::game::models::{FilterSettings, GameState, Guess};
use crate::game::target;
use crate::geodesy;
use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;

/// Game transitions. Every method takes the state by value and hands back the next one.
pub struct GameService<'t> {
    countries: &'t CountryTable,
}

impl<'t> GameService<'t> {
    pub fn new(countries: &'t CountryTable) -> Self {
        Self { countries }
    }

    /// Starts the daily game with default settings.
    pub fn initialize(&self, date: NaiveDate) -> Result<GameState, TargetError> {
        let filters = FilterSettings::default();
        let target = target::daily(self.countries, &filters, date).inspect_err(|_| {
            tracing::error!(
                task = "initialize_game",
                "No country can be picked with the default settings."
            );
        })?;
        tracing::debug!(
            task = "initialize_game",
            candidates = target.candidate_count,
            "Started the daily game."
        );
        Ok(GameState::new(target.name, filters, target.candidate_count))
    }

    /// Continues a stored game, or starts the daily one when there is nothing usable to continue.
    pub fn resume(
        &self,
        stored: Option<GameState>,
        date: NaiveDate,
    ) -> Result<GameState, TargetError> {
        match stored {
            Some(state) if self.countries.contains(&state.target) => Ok(state),
            Some(state) => {
                tracing::warn!(
                    task = "resume_game",
                    target = %state.target,
                    "Stored target is not in the dataset anymore, starting over."
                );
                self.initialize(date)
            }
            None => self.initialize(date),
        }
    }

    /// Scores `text` if it names a country, otherwise keeps it as pending input.
    pub fn guess(&self, mut state: GameState, text: &str) -> GameState {
        let text = text.trim();
        let Ok(country) = self.countries.get(text) else {
            state.pending_text = text
                .graphemes(true)
                .take(MAX_PENDING_TEXT_LENGTH)
                .collect();
            return state;
        };
        match geodesy::distance_and_bearing(self.countries, &country.name, &state.target) {
            Ok(measurement) => {
                state.pending_text.clear();
                state.guesses.push(Guess::new(
                    country.name.clone(),
                    measurement.distance_km,
                    measurement.bearing,
                ));
            }
            Err(err) => {
                tracing::warn!(task = "guess", error = %err, "Failed to score a guess.");
            }
        }
        state
    }

    /// Draws a fresh target. On failure the caller keeps playing `state`.
    pub fn new_game(
        &self,
        state: &GameState,
        settings: FilterSettings,
    ) -> Result<GameState, TargetError> {
        let filters = settings.normalized();
        match target::random(self.countries, &filters) {
            Ok(target) => {
                tracing::debug!(
                    task = "new_game",
                    candidates = target.candidate_count,
                    "Picked a new target."
                );
                Ok(GameState::new(target.name, filters, target.candidate_count))
            }
            Err(err) => {
                tracing::info!(
                    task = "new_game",
                    previous_target = %state.target,
                    filters = ?filters,
                    "No country matches the requested filters."
                );
                Err(err)
            }
        }
    }
}
