use anyhow::Context;
use clap::Parser;
use cli::Args;

mod api;
mod app_context;
mod borders;
mod cli;
mod countries;
mod game;
mod geodesy;
mod health;
mod http;
mod logging;
mod pages;
mod session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();
    let countries = countries::init(&args).context("Failed to load the countries dataset.")?;

    if let Some(dir) = &args.export_borders {
        borders::export_all(&countries, dir, args.border_image_size)
            .context("Failed to export border images.")?;
        return Ok(());
    }

    let app_context = app_context::init(&args, countries);
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}.", args.listen_address))?;
    tracing::info!(listen_address = %args.listen_address, "Serving.");
    axum::serve(listener, router).await?;
    Ok(())
}
