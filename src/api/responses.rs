use crate::game::models::{FilterSettings, GameState, Guess};
use crate::geodesy::models::Bearing;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub error: bool,
    pub countries: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameResponseError>,
    /// The game the client is playing after this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameView>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameResponseError {
    NoCandidates,
    /// The game went on but could not be stored in the session cookie.
    SessionNotSaved,
}

/// What the player may see of a game. The target is only revealed once it has been guessed.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub pending_text: String,
    pub guesses: Vec<GuessView>,
    pub filters: FilterSettings,
    pub candidate_count: usize,
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        let solved = state.is_solved();
        GameView {
            solved,
            target: solved.then(|| state.target.clone()),
            pending_text: state.pending_text.clone(),
            guesses: state.guesses.iter().map(GuessView::from).collect(),
            filters: state.filters.clone(),
            candidate_count: state.candidate_count,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessView {
    pub country: String,
    pub distance_km: u64,
    pub bearing: Bearing,
    pub arrow: String,
}

impl From<&Guess> for GuessView {
    fn from(guess: &Guess) -> Self {
        GuessView {
            country: guess.country.clone(),
            distance_km: guess.distance_km,
            bearing: guess.bearing,
            arrow: guess.bearing.symbol().to_string(),
        }
    }
}
