use crate::app_context::AppContext;
use crate::borders::consts::CACHE_CONTROL_VALUE;
use crate::borders::errors::BorderError;
use crate::borders::render_png;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// `GET /borders/:country`, the trailing `.png` being optional.
pub async fn border(
    Path(country): Path<String>,
    State(app_context): State<AppContext>,
) -> Response {
    let requested = country.strip_suffix(".png").unwrap_or(&country);
    let Ok(country) = app_context.countries.get(requested) else {
        return no_image_available();
    };
    let name = country.name.clone();
    if let Some(png) = app_context.borders.get(&name).await {
        return png_response(png);
    }

    let countries = Arc::clone(&app_context.countries);
    let size = app_context.borders.image_size();
    let rendered = {
        let name = name.clone();
        tokio::task::spawn_blocking(move || render_png(&countries, &name, size)).await
    };
    match rendered {
        Ok(Ok(png)) => {
            let png = Bytes::from(png);
            app_context.borders.insert(name, png.clone()).await;
            png_response(png)
        }
        Ok(Err(BorderError::MissingGeometry(_) | BorderError::UnknownCountry(_))) => {
            no_image_available()
        }
        Ok(Err(err)) => {
            tracing::error!(task = "render_border", country = %name, error = %err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(err) => {
            tracing::error!(task = "render_border", country = %name, error = %err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn png_response(png: Bytes) -> Response {
    (
        [(CONTENT_TYPE, "image/png"), (CACHE_CONTROL, CACHE_CONTROL_VALUE)],
        png,
    )
        .into_response()
}

fn no_image_available() -> Response {
    (StatusCode::NOT_FOUND, "No image available.").into_response()
}
