use crate::game::errors::TargetError;
use crate::game::models::{FilterSettings, GameState};

/// Message shown above the game instead of failing the request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Notice {
    /// The requested filters leave nothing to guess; the previous game goes on.
    NoCandidates,
    /// Not even the default filters produce a target.
    Unavailable,
    /// The move was played but the session cookie could not hold it.
    NotSaved,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoCandidates => {
                "No country matches these settings. Widen the filters and try again."
            }
            Notice::Unavailable => "No country is available to play right now.",
            Notice::NotSaved => {
                "This game has grown too long to be saved. Start a new game to keep playing."
            }
        }
    }
}

impl From<TargetError> for Notice {
    fn from(err: TargetError) -> Self {
        match err {
            TargetError::NoCandidates => Notice::NoCandidates,
        }
    }
}

pub struct PageView<'a> {
    pub state: Option<&'a GameState>,
    /// Settings shown in the filter form; may differ from the game's after a rejected change.
    pub filters: &'a FilterSettings,
    pub countries: Vec<&'a str>,
    pub notice: Option<Notice>,
}
