use crate::api::requests::{GuessRequest, NewGameRequest};
use crate::api::responses::{CountriesResponse, GameResponse, GameResponseError, GameView};
use crate::app_context::AppContext;
use crate::game::errors::TargetError;
use crate::game::models::GameState;
use crate::game::service::GameService;
use crate::game::target;
use crate::session::errors::SessionError;
use crate::session::extractors::StoredGame;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

pub async fn countries(State(app_context): State<AppContext>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        error: false,
        countries: app_context
            .countries
            .names()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

pub async fn game(
    State(app_context): State<AppContext>,
    StoredGame(stored): StoredGame,
) -> Response {
    let game = GameService::new(&app_context.countries);
    match game.resume(stored, target::today()) {
        Ok(state) => respond(&app_context, &state),
        Err(err) => no_game(err),
    }
}

pub async fn guess(
    State(app_context): State<AppContext>,
    StoredGame(stored): StoredGame,
    Json(request): Json<GuessRequest>,
) -> Response {
    let game = GameService::new(&app_context.countries);
    match game.resume(stored, target::today()) {
        Ok(state) => respond(&app_context, &game.guess(state, &request.guess)),
        Err(err) => no_game(err),
    }
}

pub async fn new_game(
    State(app_context): State<AppContext>,
    StoredGame(stored): StoredGame,
    Json(request): Json<NewGameRequest>,
) -> Response {
    let game = GameService::new(&app_context.countries);
    let state = match game.resume(stored, target::today()) {
        Ok(state) => state,
        Err(err) => return no_game(err),
    };
    match game.new_game(&state, request.into()) {
        Ok(next) => respond(&app_context, &next),
        Err(err) => {
            let response = GameResponse {
                error: true,
                error_code: Some(error_code(err)),
                game: Some(GameView::from(&state)),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
        }
    }
}

fn respond(app_context: &AppContext, state: &GameState) -> Response {
    match app_context.sessions.cookie_headers(state) {
        Ok(cookies) => {
            let response = GameResponse {
                error: false,
                error_code: None,
                game: Some(GameView::from(state)),
            };
            (cookies, Json(response)).into_response()
        }
        Err(err) => {
            let status = match err {
                SessionError::TooLarge { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let response = GameResponse {
                error: true,
                error_code: Some(GameResponseError::SessionNotSaved),
                game: Some(GameView::from(state)),
            };
            (status, Json(response)).into_response()
        }
    }
}

fn no_game(err: TargetError) -> Response {
    let response = GameResponse {
        error: true,
        error_code: Some(error_code(err)),
        game: None,
    };
    (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
}

fn error_code(err: TargetError) -> GameResponseError {
    match err {
        TargetError::NoCandidates => GameResponseError::NoCandidates,
    }
}
