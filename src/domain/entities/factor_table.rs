//! Emission factor table
//!
//! Maps region → category → multiplier (kg CO2 per unit of activity). The
//! table is immutable once built; every selection the shell offers is read
//! back out of it, so lookups only fail when a caller bypasses the shell.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::services::similarity::closest_match;
use crate::domain::value_objects::{Category, Vehicle};
use crate::error::ConfigurationError;

/// Factors of one region
pub type RegionFactors = BTreeMap<Category, f64>;

/// Region name of the built-in table
pub const BUILTIN_REGION: &str = "India";

const BUILTIN_FACTORS: [(Category, f64); 6] = [
    (Category::Bike, 0.05),
    (Category::Car, 0.14),
    (Category::Bus, 0.03),
    (Category::Electricity, 0.82),
    (Category::Diet, 1.25),
    (Category::Waste, 0.1),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmissionFactorTable {
    regions: BTreeMap<String, RegionFactors>,
}

impl EmissionFactorTable {
    /// Build a table, rejecting empty tables, non-positive factors, and
    /// regions the calculator could not compute.
    ///
    /// A region needs `Electricity`, `Diet` and `Waste` plus at least one
    /// transport category.
    pub fn from_regions(
        regions: BTreeMap<String, RegionFactors>,
    ) -> Result<Self, ConfigurationError> {
        if regions.is_empty() {
            return Err(ConfigurationError::EmptyTable);
        }

        for (region, factors) in &regions {
            for (category, value) in factors {
                if !value.is_finite() || *value <= 0.0 {
                    return Err(ConfigurationError::InvalidFactor {
                        region: region.clone(),
                        category: *category,
                        value: *value,
                    });
                }
            }
            check_complete(region, factors)?;
        }

        Ok(Self { regions })
    }

    /// The shipped single-region table
    pub fn builtin() -> Self {
        let factors: RegionFactors = BUILTIN_FACTORS.into_iter().collect();
        let mut regions = BTreeMap::new();
        regions.insert(BUILTIN_REGION.to_string(), factors);
        Self { regions }
    }

    /// Multiplier for `category` in `region`
    pub fn lookup(&self, region: &str, category: Category) -> Result<f64, ConfigurationError> {
        self.factors(region)?
            .get(&category)
            .copied()
            .ok_or_else(|| ConfigurationError::MissingFactor {
                region: region.to_string(),
                category,
            })
    }

    /// All factors of one region
    pub fn factors(&self, region: &str) -> Result<&RegionFactors, ConfigurationError> {
        self.regions
            .get(region)
            .ok_or_else(|| ConfigurationError::UnknownRegion {
                region: region.to_string(),
                suggestion: closest_match(region, self.regions.keys().map(String::as_str), 2)
                    .map(str::to_string),
            })
    }

    /// Region names in table order
    pub fn regions(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// First region in table order; tables are never empty.
    pub fn first_region(&self) -> &str {
        self.regions
            .keys()
            .next()
            .map(String::as_str)
            .unwrap_or(BUILTIN_REGION)
    }

    /// Vehicles the region has a transport factor for, in `Vehicle::ALL` order
    pub fn vehicles(&self, region: &str) -> Result<Vec<Vehicle>, ConfigurationError> {
        let factors = self.factors(region)?;
        Ok(factors
            .keys()
            .copied()
            .filter_map(Vehicle::from_category)
            .collect())
    }
}

fn check_complete(region: &str, factors: &RegionFactors) -> Result<(), ConfigurationError> {
    let mut missing: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| !c.is_transport() && !factors.contains_key(c))
        .collect();
    if !factors.keys().any(Category::is_transport) {
        missing.extend(Category::ALL.into_iter().filter(Category::is_transport));
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::IncompleteRegion {
            region: region.to_string(),
            missing,
        })
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::builtin()
    }
}
