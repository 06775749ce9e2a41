use crate::app_context::AppContext;
use crate::game::models::{FilterSettings, GameState};
use crate::game::service::GameService;
use crate::game::target;
use crate::pages::models::{Notice, PageView};
use crate::pages::requests::{PageAction, PageForm};
use crate::pages::templates::render_game_page;
use crate::session::errors::SessionError;
use crate::session::extractors::StoredGame;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

pub async fn index(
    State(app_context): State<AppContext>,
    StoredGame(stored): StoredGame,
) -> Response {
    let game = GameService::new(&app_context.countries);
    match game.resume(stored, target::today()) {
        Ok(state) => render(&app_context, StatusCode::OK, &state, &state.filters, None),
        Err(_) => unavailable(&app_context),
    }
}

pub async fn submit(
    State(app_context): State<AppContext>,
    StoredGame(stored): StoredGame,
    Form(form): Form<PageForm>,
) -> Response {
    let game = GameService::new(&app_context.countries);
    let state = match game.resume(stored, target::today()) {
        Ok(state) => state,
        Err(_) => return unavailable(&app_context),
    };
    match form.into_action() {
        PageAction::Guess(text) => {
            let state = game.guess(state, &text);
            render(&app_context, StatusCode::OK, &state, &state.filters, None)
        }
        PageAction::NewGame(settings) => match game.new_game(&state, settings.clone()) {
            Ok(next) => render(&app_context, StatusCode::OK, &next, &next.filters, None),
            Err(err) => render(
                &app_context,
                StatusCode::UNPROCESSABLE_ENTITY,
                &state,
                &settings.normalized(),
                Some(Notice::from(err)),
            ),
        },
        PageAction::Refresh => {
            render(&app_context, StatusCode::OK, &state, &state.filters, None)
        }
    }
}

fn render(
    app_context: &AppContext,
    status: StatusCode,
    state: &GameState,
    filters: &FilterSettings,
    notice: Option<Notice>,
) -> Response {
    let (status, cookies, notice) = match app_context.sessions.cookie_headers(state) {
        Ok(cookies) => (status, cookies, notice),
        Err(SessionError::TooLarge { .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            HeaderMap::new(),
            Some(Notice::NotSaved),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            Some(Notice::NotSaved),
        ),
    };
    let view = PageView {
        state: Some(state),
        filters,
        countries: app_context.countries.names(),
        notice,
    };
    (status, cookies, Html(render_game_page(&view))).into_response()
}

fn unavailable(app_context: &AppContext) -> Response {
    let filters = FilterSettings::default();
    let view = PageView {
        state: None,
        filters: &filters,
        countries: app_context.countries.names(),
        notice: Some(Notice::Unavailable),
    };
    (StatusCode::SERVICE_UNAVAILABLE, Html(render_game_page(&view))).into_response()
}
