use crate::cli::Args;
use errors::DatasetError;
use table::CountryTable;

pub mod errors;
pub mod filter;
pub mod models;
pub mod table;
#[cfg(test)]
pub mod tests;

pub fn init(args: &Args) -> Result<CountryTable, DatasetError> {
    let table = CountryTable::load(&args.countries)?;
    let with_geometry = table.iter().filter(|country| country.has_geometry()).count();
    tracing::info!(
        countries = table.len(),
        with_geometry,
        path = %args.countries.display(),
        "Loaded the countries dataset."
    );
    Ok(table)
}
