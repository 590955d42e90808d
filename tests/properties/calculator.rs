//! Property tests for the emissions calculator.

use proptest::prelude::*;

use footprint::domain::entities::round2;
use footprint::domain::services::compute;
use footprint::{EmissionFactorTable, UserInputs, Vehicle};

fn vehicle() -> impl Strategy<Value = Vehicle> {
    prop_oneof![Just(Vehicle::Bike), Just(Vehicle::Car), Just(Vehicle::Bus)]
}

fn inputs() -> impl Strategy<Value = UserInputs> {
    (vehicle(), 0.0..=100.0f64, 0.0..=1000.0f64, 0u32..20, 0.0..=100.0f64).prop_map(
        |(vehicle, distance, electricity, meals, waste)| {
            UserInputs::new("India", vehicle)
                .with_distance_km(distance)
                .with_electricity_kwh(electricity)
                .with_meals(meals)
                .with_waste_kg(waste)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: in-range inputs never produce negative subtotals.
    #[test]
    fn property_subtotals_non_negative(inputs in inputs()) {
        let result = compute(&EmissionFactorTable::builtin(), &inputs).unwrap();
        prop_assert!(result.transport >= 0.0);
        prop_assert!(result.electricity >= 0.0);
        prop_assert!(result.diet >= 0.0);
        prop_assert!(result.waste >= 0.0);
    }

    /// PROPERTY: the total is the rounded sum of the unrounded subtotals.
    #[test]
    fn property_total_is_rounded_sum(inputs in inputs()) {
        let result = compute(&EmissionFactorTable::builtin(), &inputs).unwrap();
        let sum = result.transport + result.electricity + result.diet + result.waste;
        prop_assert_eq!(result.total, round2(sum));
        prop_assert!((result.total - sum).abs() <= 0.005 + 1e-9);
    }

    /// PROPERTY: more distance never lowers transport emissions.
    #[test]
    fn property_transport_monotonic(inputs in inputs(), extra in 0.0..=50.0f64) {
        let table = EmissionFactorTable::builtin();
        let more = inputs.clone().with_distance_km(inputs.daily_distance_km + extra);
        let base = compute(&table, &inputs).unwrap();
        let bigger = compute(&table, &more).unwrap();
        prop_assert!(bigger.transport >= base.transport);
    }

    /// PROPERTY: the vehicle only affects the transport subtotal.
    #[test]
    fn property_vehicle_only_affects_transport(inputs in inputs(), other in vehicle()) {
        let table = EmissionFactorTable::builtin();
        let mut switched = inputs.clone();
        switched.vehicle = other;
        let a = compute(&table, &inputs).unwrap();
        let b = compute(&table, &switched).unwrap();
        prop_assert_eq!(a.electricity, b.electricity);
        prop_assert_eq!(a.diet, b.diet);
        prop_assert_eq!(a.waste, b.waste);
    }
}
