use crate::countries::errors::{CountryError, DatasetError};
use crate::countries::filter::CountryFilter;
use crate::countries::models::Country;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable reference table of every playable country, in dataset order.
#[derive(Debug)]
pub struct CountryTable {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
}

impl CountryTable {
    pub fn new(countries: Vec<Country>) -> Result<Self, DatasetError> {
        if countries.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut index = HashMap::with_capacity(countries.len());
        for (position, country) in countries.iter().enumerate() {
            if index.insert(normalize(&country.name), position).is_some() {
                return Err(DatasetError::DuplicateCountry(country.name.clone()));
            }
        }
        Ok(Self { countries, index })
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ndjson(BufReader::new(file))
    }

    /// Reads one JSON country record per line. Blank lines are skipped.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self, DatasetError> {
        let mut countries = Vec::new();
        for (line_index, line) in reader.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line.map_err(|source| DatasetError::Read {
                line: line_number,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let country: Country =
                serde_json::from_str(&line).map_err(|source| DatasetError::Parse {
                    line: line_number,
                    source,
                })?;
            countries.push(country);
        }
        Self::new(countries)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn get(&self, name: &str) -> Result<&Country, CountryError> {
        self.index
            .get(&normalize(name))
            .map(|&position| &self.countries[position])
            .ok_or_else(|| CountryError::UnknownCountry(name.trim().to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.countries
            .iter()
            .map(|country| country.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Names of the countries passing `filter`, in dataset order.
    pub fn filter_countries(&self, filter: &CountryFilter) -> Vec<&str> {
        self.countries
            .iter()
            .filter(|country| filter.matches(country))
            .map(|country| country.name.as_str())
            .collect()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
