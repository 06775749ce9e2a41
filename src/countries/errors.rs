use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountryError {
    #[error("`{0}` is not a recognized country")]
    UnknownCountry(String),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read the countries file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line} of the countries dataset")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line} of the countries dataset is not a valid country record")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("country `{0}` appears more than once in the dataset")]
    DuplicateCountry(String),
    #[error("the countries dataset is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),
    #[error("border must be a Polygon or MultiPolygon")]
    Unsupported,
}
