use crate::countries::models::Region;
use crate::game::consts::{
    MAX_AREA_POWER, MAX_POPULATION_POWER, MIN_AREA_POWER, MIN_POPULATION_POWER,
};
use crate::game::models::{FilterSettings, GameState};
use crate::pages::models::PageView;

pub fn render_game_page(view: &PageView<'_>) -> String {
    let notice = view
        .notice
        .map(|notice| format!(r#"<p class="notice">{}</p>"#, notice.message()))
        .unwrap_or_default();
    let game = view.state.map(render_game).unwrap_or_default();
    let filters = render_filters(view.filters);
    let options: String = view
        .countries
        .iter()
        .map(|name| format!(r#"<option value="{}">"#, html_escape(name)))
        .collect();

    let content = format!(
        r#"<h1>Worldle</h1>
{notice}
{game}
{filters}
<datalist id="countries">{options}</datalist>"#
    );
    build_page("Worldle", &content)
}

fn render_game(state: &GameState) -> String {
    let solved = if state.is_solved() {
        format!(
            r#"<p class="solved">Correct! It was {}.</p>"#,
            html_escape(&state.target.to_uppercase())
        )
    } else {
        String::new()
    };
    let plural = if state.candidate_count == 1 { "" } else { "s" };
    let rows: String = state
        .guesses
        .iter()
        .map(|guess| {
            format!(
                "<tr><td>{}</td><td>{} km</td><td>{}</td></tr>\n",
                html_escape(&guess.country.to_uppercase()),
                guess.formatted_distance(),
                guess.bearing.symbol(),
            )
        })
        .collect();

    format!(
        r#"<section class="game">
<p class="pool">Guess the country, one of {count} possible target{plural}.</p>
<img class="silhouette" src="/borders/{border}.png" alt="Silhouette of the country to guess">
{solved}
<form method="post" class="guess">
    <input name="guess_input" list="countries" value="{pending}" autocomplete="off" autofocus>
    <button type="submit" name="guess" value="guess">Guess</button>
</form>
<table class="guesses">
<tr><th>Country</th><th>Distance</th><th>Direction</th></tr>
{rows}</table>
</section>"#,
        count = state.candidate_count,
        border = path_segment(&state.target),
        pending = html_escape(&state.pending_text),
    )
}

fn render_filters(filters: &FilterSettings) -> String {
    let regions: String = Region::ALL
        .iter()
        .map(|region| {
            let checked = if filters.regions.contains(region) {
                " checked"
            } else {
                ""
            };
            format!(r#"<label><input type="checkbox" name="{region}"{checked}> {region}</label>"#)
        })
        .collect();

    format!(
        r#"<form method="post" class="filters">
<fieldset><legend>Regions</legend>{regions}</fieldset>
<fieldset><legend>Area (10<sup>x</sup> km²)</legend>
    {area_min}
    {area_max}
</fieldset>
<fieldset><legend>Population (10<sup>x</sup>)</legend>
    {population_min}
    {population_max}
</fieldset>
<button type="submit" name="reset" value="reset">New country</button>
</form>"#,
        area_min = slider(
            "area_min",
            "from",
            MIN_AREA_POWER,
            MAX_AREA_POWER,
            filters.min_area_power,
        ),
        area_max = slider(
            "area_max",
            "to",
            MIN_AREA_POWER,
            MAX_AREA_POWER,
            filters.max_area_power,
        ),
        population_min = slider(
            "population_min",
            "from",
            MIN_POPULATION_POWER,
            MAX_POPULATION_POWER,
            filters.min_population_power,
        ),
        population_max = slider(
            "population_max",
            "to",
            MIN_POPULATION_POWER,
            MAX_POPULATION_POWER,
            filters.max_population_power,
        ),
    )
}

fn slider(name: &str, label: &str, min: f64, max: f64, value: f64) -> String {
    format!(
        r#"<label>{label} <input type="range" name="{name}" min="{min}" max="{max}" step="0.1" value="{value:.3}"></label>"#
    )
}

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 0; background: #fafafa; color: #222; }}
main {{ max-width: 640px; margin: 0 auto; padding: 16px; }}
.silhouette {{ display: block; width: 256px; height: 256px; margin: 16px auto; }}
.notice {{ background: #fff3e0; border: 1px solid #ffb74d; padding: 8px 12px; }}
.solved {{ color: #2e7d32; font-weight: 600; text-align: center; }}
.guesses {{ width: 100%; border-collapse: collapse; margin: 16px 0; }}
.guesses td, .guesses th {{ border-bottom: 1px solid #ddd; padding: 4px 8px; text-align: left; }}
fieldset {{ border: 1px solid #ddd; margin: 8px 0; }}
</style>
</head>
<body>
<main>
{content}
</main>
</body>
</html>"#
    )
}

/// Percent-encodes `value` for use as a single URL path segment.
fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
