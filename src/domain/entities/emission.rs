//! Calculator output

use serde::Serialize;

use crate::domain::value_objects::Vehicle;

/// Yearly emissions in tonnes CO2.
///
/// Subtotals keep full precision; only `total` is rounded (to 2 decimals,
/// after summing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionResult {
    pub vehicle: Vehicle,
    pub transport: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub total: f64,
}

impl EmissionResult {
    pub fn from_subtotals(
        vehicle: Vehicle,
        transport: f64,
        electricity: f64,
        diet: f64,
        waste: f64,
    ) -> Self {
        Self {
            vehicle,
            transport,
            electricity,
            diet,
            waste,
            total: round2(transport + electricity + diet + waste),
        }
    }

    /// Subtotals in display order with their labels
    pub fn breakdown(&self) -> [(String, f64); 4] {
        [
            (format!("Transport ({})", self.vehicle), self.transport),
            ("Electricity".to_string(), self.electricity),
            ("Diet".to_string(), self.diet),
            ("Waste".to_string(), self.waste),
        ]
    }
}

/// Round half away from zero to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.016), 0.02);
        assert_eq!(round2(0.011226), 0.01);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn total_is_rounded_after_summing() {
        let result = EmissionResult::from_subtotals(Vehicle::Bike, 0.004, 0.004, 0.004, 0.004);
        assert_eq!(result.total, 0.02);
        // subtotals stay unrounded
        assert_eq!(result.transport, 0.004);
    }

    #[test]
    fn breakdown_labels_transport_with_vehicle() {
        let result = EmissionResult::from_subtotals(Vehicle::Bus, 1.0, 2.0, 3.0, 4.0);
        let labels: Vec<String> = result.breakdown().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Transport (Bus)", "Electricity", "Diet", "Waste"]);
    }
}
