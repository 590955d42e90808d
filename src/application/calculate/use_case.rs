use tracing::{debug, info};

use crate::domain::entities::{EmissionFactorTable, EmissionResult, UserInputs};
use crate::domain::ports::FactorSource;
use crate::domain::services::compute;
use crate::domain::value_objects::Vehicle;
use crate::error::{ConfigurationError, FootprintResult};

pub struct CalculateUseCase {
    table: EmissionFactorTable,
    source: String,
}

impl CalculateUseCase {
    pub fn new(table: EmissionFactorTable) -> Self {
        Self {
            table,
            source: "in-memory".to_string(),
        }
    }

    /// Load the table once from `source`
    pub fn from_source(source: &dyn FactorSource) -> FootprintResult<Self> {
        let table = source.load()?;
        let origin = source.describe();
        info!(source = %origin, regions = table.regions().len(), "loaded emission factors");
        Ok(Self {
            table,
            source: origin,
        })
    }

    pub fn table(&self) -> &EmissionFactorTable {
        &self.table
    }

    /// Where the table was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Region choices, straight from the table
    pub fn regions(&self) -> Vec<&str> {
        self.table.regions()
    }

    /// Vehicle choices for one region, straight from the table
    pub fn vehicles(&self, region: &str) -> Result<Vec<Vehicle>, ConfigurationError> {
        self.table.vehicles(region)
    }

    /// Form defaults adjusted to what the table offers.
    ///
    /// `preferred_region` wins when the table has it; otherwise the first
    /// region. The vehicle falls back to the region's first vehicle when the
    /// default one has no factor there.
    pub fn initial_inputs(&self, preferred_region: Option<&str>) -> UserInputs {
        let region = preferred_region
            .filter(|r| self.table.contains_region(r))
            .unwrap_or_else(|| self.table.first_region())
            .to_string();

        let mut inputs = UserInputs {
            region,
            ..UserInputs::default()
        };
        self.align_vehicle(&mut inputs);
        inputs
    }

    /// Keep `inputs.vehicle` valid after a region change
    pub fn align_vehicle(&self, inputs: &mut UserInputs) {
        if let Ok(vehicles) = self.table.vehicles(&inputs.region) {
            if !vehicles.contains(&inputs.vehicle) {
                if let Some(first) = vehicles.first() {
                    inputs.vehicle = *first;
                }
            }
        }
    }

    pub fn execute(&self, inputs: &UserInputs) -> Result<EmissionResult, ConfigurationError> {
        let result = compute(&self.table, inputs)?;
        debug!(
            region = %inputs.region,
            vehicle = %inputs.vehicle,
            total = result.total,
            "computed footprint"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RegionFactors;
    use crate::domain::value_objects::Category;
    use std::collections::BTreeMap;

    struct FixedSource(EmissionFactorTable);

    impl FactorSource for FixedSource {
        fn load(&self) -> FootprintResult<EmissionFactorTable> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    struct BrokenSource;

    impl FactorSource for BrokenSource {
        fn load(&self) -> FootprintResult<EmissionFactorTable> {
            Err(ConfigurationError::EmptyTable.into())
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn two_region_table() -> EmissionFactorTable {
        let kenya: RegionFactors = [
            (Category::Bus, 0.04),
            (Category::Electricity, 0.3),
            (Category::Diet, 1.0),
            (Category::Waste, 0.2),
        ]
        .into_iter()
        .collect();
        let mut regions = BTreeMap::new();
        regions.insert("Kenya".to_string(), kenya);
        regions.insert(
            "India".to_string(),
            EmissionFactorTable::builtin().factors("India").unwrap().clone(),
        );
        EmissionFactorTable::from_regions(regions).unwrap()
    }

    #[test]
    fn from_source_records_origin() {
        let use_case = CalculateUseCase::from_source(&FixedSource(EmissionFactorTable::builtin()))
            .unwrap();
        assert_eq!(use_case.source(), "fixed");
        assert_eq!(use_case.regions(), vec!["India"]);
    }

    #[test]
    fn from_source_propagates_load_errors() {
        assert!(CalculateUseCase::from_source(&BrokenSource).is_err());
    }

    #[test]
    fn initial_inputs_prefers_configured_region() {
        let use_case = CalculateUseCase::new(two_region_table());
        let inputs = use_case.initial_inputs(Some("Kenya"));
        assert_eq!(inputs.region, "Kenya");
        // Kenya has no Bike factor
        assert_eq!(inputs.vehicle, Vehicle::Bus);
    }

    #[test]
    fn initial_inputs_ignores_unknown_preferred_region() {
        let use_case = CalculateUseCase::new(two_region_table());
        let inputs = use_case.initial_inputs(Some("Atlantis"));
        assert_eq!(inputs.region, "India");
        assert_eq!(inputs.vehicle, Vehicle::Bike);
    }

    #[test]
    fn every_offered_choice_computes() {
        let use_case = CalculateUseCase::new(two_region_table());
        for region in use_case.regions() {
            for vehicle in use_case.vehicles(region).unwrap() {
                let inputs = UserInputs {
                    region: region.to_string(),
                    vehicle,
                    ..UserInputs::default()
                };
                assert!(use_case.execute(&inputs).is_ok(), "{region}/{vehicle}");
            }
        }
    }
}
