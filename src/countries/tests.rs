use crate::countries::errors::{CountryError, DatasetError};
use crate::countries::filter::CountryFilter;
use crate::countries::models::{Country, Region};
use crate::countries::table::CountryTable;
use crate::geodesy::models::LatLng;
use geo::{LineString, MultiPolygon, Polygon};
use std::io::Cursor;

pub fn square_around(lat: f64, lng: f64) -> MultiPolygon<f64> {
    let ring = LineString::from(vec![
        (lng - 0.4, lat - 0.4),
        (lng + 0.4, lat - 0.4),
        (lng + 0.4, lat + 0.4),
        (lng - 0.4, lat + 0.4),
        (lng - 0.4, lat - 0.4),
    ]);
    Polygon::new(ring, Vec::new()).into()
}

pub fn country(
    name: &str,
    region: Region,
    area: Option<f64>,
    population: Option<u64>,
    latlng: (f64, f64),
    with_geometry: bool,
) -> Country {
    Country {
        name: name.to_string(),
        region,
        area,
        population,
        latlng: LatLng::from(latlng),
        geometry: with_geometry.then(|| square_around(latlng.0, latlng.1)),
    }
}

/// A: Europe, B: Europe, C: Asia. None of them has a border outline.
pub fn three_country_table() -> CountryTable {
    CountryTable::new(vec![
        country("A", Region::Europe, Some(5.0), Some(10), (0.0, 0.0), false),
        country("B", Region::Europe, Some(15.0), Some(20), (0.0, 1.0), false),
        country("C", Region::Asia, Some(25.0), Some(30), (1.0, 0.0), false),
    ])
    .expect("Failed to build the three-country table.")
}

/// Four countries: Gamma has no outline, Delta has no area or population figures.
pub fn fixture_table() -> CountryTable {
    CountryTable::new(vec![
        country("Alpha", Region::Europe, Some(5.0), Some(10), (0.0, 0.0), true),
        country("Beta", Region::Europe, Some(15.0), Some(20), (0.0, 1.0), true),
        country("Gamma", Region::Asia, Some(25.0), Some(30), (1.0, 0.0), false),
        country("Delta", Region::Oceania, None, None, (-10.0, 150.0), true),
    ])
    .expect("Failed to build the fixture table.")
}

#[test]
fn test_lookup_is_case_insensitive() {
    let table = fixture_table();

    assert_eq!(table.get("alpha").unwrap().name, "Alpha");
    assert_eq!(table.get("  BETA ").unwrap().name, "Beta");
    assert!(table.contains("gAmMa"));
}

#[test]
fn test_lookup_of_unknown_country() {
    let table = fixture_table();

    let err = table.get("Atlantis").unwrap_err();

    assert!(matches!(err, CountryError::UnknownCountry(ref name) if name == "Atlantis"));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let result = CountryTable::new(vec![
        country("Alpha", Region::Europe, None, None, (0.0, 0.0), false),
        country("ALPHA", Region::Asia, None, None, (1.0, 1.0), false),
    ]);

    assert!(matches!(result, Err(DatasetError::DuplicateCountry(name)) if name == "ALPHA"));
}

#[test]
fn test_empty_dataset_is_rejected() {
    assert!(matches!(CountryTable::new(Vec::new()), Err(DatasetError::Empty)));
    assert_eq!(three_country_table().len(), 3);
}

#[test]
fn test_ndjson_parsing() {
    let ndjson = r#"{"name": "Albania", "region": "Europe", "area": 28748.0, "population": 2821977, "latlng": [41.0, 20.0], "geometry": {"type": "Polygon", "coordinates": [[[19.3, 40.0], [21.0, 40.0], [20.6, 42.5], [19.3, 40.0]]]}}

{"name": "Kiribati", "region": "Oceania", "latlng": [1.4, 173.0]}
{"name": "Fiji", "region": "Oceania", "area": 18272.0, "population": 896444, "latlng": [-18.0, 175.0], "geometry": {"type": "MultiPolygon", "coordinates": [[[[177.0, -17.0], [178.5, -17.0], [178.5, -18.5], [177.0, -17.0]]], [[[179.0, -16.0], [180.0, -16.0], [179.5, -17.0], [179.0, -16.0]]]]}}
"#;

    let table = CountryTable::from_ndjson(Cursor::new(ndjson)).unwrap();

    assert_eq!(table.names(), vec!["Albania", "Kiribati", "Fiji"]);
    let kiribati = table.get("kiribati").unwrap();
    assert_eq!(kiribati.area, None);
    assert_eq!(kiribati.population, None);
    assert!(!kiribati.has_geometry());
    let fiji = table.get("fiji").unwrap();
    assert_eq!(fiji.outlines().len(), 2);
    assert_eq!(table.get("albania").unwrap().outlines()[0].0.len(), 4);
    assert_eq!(table.get("albania").unwrap().latlng, LatLng::new(41.0, 20.0));
}

#[test]
fn test_ndjson_parse_error_names_the_line() {
    let ndjson = "{\"name\": \"Albania\", \"region\": \"Europe\", \"latlng\": [41.0, 20.0]}\n\
                  {\"name\": \"Nowhere\", \"region\": \"Antarctica\", \"latlng\": [0.0, 0.0]}\n";

    let result = CountryTable::from_ndjson(Cursor::new(ndjson));

    assert!(matches!(result, Err(DatasetError::Parse { line: 2, .. })));
}

#[test]
fn test_only_polygon_borders_are_accepted() {
    let ndjson = r#"{"name": "Pointland", "region": "Asia", "latlng": [0.0, 0.0], "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}}
"#;

    let result = CountryTable::from_ndjson(Cursor::new(ndjson));

    assert!(matches!(result, Err(DatasetError::Parse { line: 1, .. })));
}

#[test]
fn test_degenerate_geometry_counts_as_missing() {
    let mut country = country("Sliver", Region::Asia, None, None, (0.0, 0.0), false);
    let segment = LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
    country.geometry = Some(Polygon::new(segment, Vec::new()).into());
    assert!(!country.has_geometry());

    country.geometry = Some(MultiPolygon::new(Vec::new()));
    assert!(!country.has_geometry());
}

#[test]
fn test_filter_by_region() {
    let table = three_country_table();
    let filter = CountryFilter::new(false, [Region::Europe]);

    assert_eq!(table.filter_countries(&filter), vec!["A", "B"]);
}

#[test]
fn test_filter_without_bounds() {
    let table = fixture_table();

    let everything = CountryFilter::new(false, Region::ALL);
    assert_eq!(
        table.filter_countries(&everything),
        vec!["Alpha", "Beta", "Gamma", "Delta"]
    );

    let with_geometry = CountryFilter::new(true, Region::ALL);
    assert_eq!(
        table.filter_countries(&with_geometry),
        vec!["Alpha", "Beta", "Delta"]
    );
}

#[test]
fn test_filter_bounds_are_inclusive() {
    let table = fixture_table();
    let filter = CountryFilter::new(false, Region::ALL).with_area(Some(5.0), Some(15.0));

    assert_eq!(table.filter_countries(&filter), vec!["Alpha", "Beta"]);
}

#[test]
fn test_filter_with_min_area_above_everything_is_empty() {
    let table = fixture_table();
    let filter = CountryFilter::new(false, Region::ALL).with_area(Some(1e9), None);

    assert!(table.filter_countries(&filter).is_empty());
}

#[test]
fn test_filter_with_reversed_bounds_is_empty() {
    let table = fixture_table();
    let filter = CountryFilter::new(false, Region::ALL).with_population(Some(30.0), Some(10.0));

    assert!(table.filter_countries(&filter).is_empty());
}

#[test]
fn test_unknown_figures_fail_only_bounded_attributes() {
    let table = fixture_table();

    let bounded = CountryFilter::new(false, Region::ALL).with_population(Some(1.0), None);
    assert!(!table.filter_countries(&bounded).contains(&"Delta"));

    let area_bounded = CountryFilter::new(false, Region::ALL).with_area(None, Some(100.0));
    assert!(!table.filter_countries(&area_bounded).contains(&"Delta"));

    let population_only_unbounded =
        CountryFilter::new(false, [Region::Oceania]).with_population(None, None);
    assert_eq!(table.filter_countries(&population_only_unbounded), vec!["Delta"]);
}
