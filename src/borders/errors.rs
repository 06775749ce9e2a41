use crate::countries::errors::CountryError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BorderError {
    #[error(transparent)]
    UnknownCountry(#[from] CountryError),
    #[error("no border outline is available for `{0}`")]
    MissingGeometry(String),
    #[error("failed to encode the border image")]
    Encode(#[from] image::ImageError),
    #[error("failed to write the border image {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
