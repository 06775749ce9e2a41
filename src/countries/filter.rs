use crate::countries::models::{Country, Region};
use std::collections::BTreeSet;

/// Inclusive range; a missing end is unbounded on that side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// An unknown value only passes when there is nothing to check it against.
    pub fn contains(&self, value: Option<f64>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountryFilter {
    pub require_geometry: bool,
    pub regions: BTreeSet<Region>,
    pub area: Bounds,
    pub population: Bounds,
}

impl CountryFilter {
    pub fn new(require_geometry: bool, regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            require_geometry,
            regions: regions.into_iter().collect(),
            area: Bounds::default(),
            population: Bounds::default(),
        }
    }

    pub fn with_area(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.area = Bounds::new(min, max);
        self
    }

    pub fn with_population(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.population = Bounds::new(min, max);
        self
    }

    pub fn matches(&self, country: &Country) -> bool {
        self.regions.contains(&country.region)
            && (!self.require_geometry || country.has_geometry())
            && self.area.contains(country.area)
            && self
                .population
                .contains(country.population.map(|population| population as f64))
    }
}
