use crate::countries::table::CountryTable;
use errors::BorderError;
use std::fs;
use std::path::Path;

pub mod cache;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod render;

/// PNG silhouette of the named country.
pub fn render_png(
    countries: &CountryTable,
    name: &str,
    size: u32,
) -> Result<Vec<u8>, BorderError> {
    let country = countries.get(name)?;
    let outlines = country.outlines();
    if outlines.is_empty() {
        return Err(BorderError::MissingGeometry(country.name.clone()));
    }
    Ok(render::encode_png(&render::silhouette(&outlines, size))?)
}

/// Writes `<dir>/<country>.png` for every country with an outline. Returns how many were written.
pub fn export_all(
    countries: &CountryTable,
    dir: &Path,
    size: u32,
) -> Result<usize, BorderError> {
    fs::create_dir_all(dir).map_err(|source| BorderError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut written = 0;
    for country in countries.iter().filter(|country| country.has_geometry()) {
        let png = render_png(countries, &country.name, size)?;
        let path = dir.join(format!("{}.png", country.name.to_lowercase()));
        fs::write(&path, png).map_err(|source| BorderError::Io { path, source })?;
        written += 1;
    }
    tracing::info!(
        task = "export_borders",
        written,
        dir = %dir.display(),
        "Exported border images."
    );
    Ok(written)
}
