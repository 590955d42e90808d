//! Tests for the interactive module

use std::collections::BTreeMap;

use footprint::domain::entities::RegionFactors;
use footprint::{CalculateUseCase, Category, EmissionFactorTable, Vehicle, View};

use super::state::{menu_items, parse_meals, view_at, view_index, Session, QUIT};

fn two_region_use_case() -> CalculateUseCase {
    let mut regions = BTreeMap::new();
    regions.insert(
        "India".to_string(),
        EmissionFactorTable::builtin()
            .factors("India")
            .unwrap()
            .clone(),
    );
    let buses_only: RegionFactors = [
        (Category::Bus, 0.02),
        (Category::Electricity, 0.5),
        (Category::Diet, 1.0),
        (Category::Waste, 0.2),
    ]
    .into_iter()
    .collect();
    regions.insert("Norway".to_string(), buses_only);
    CalculateUseCase::new(EmissionFactorTable::from_regions(regions).unwrap())
}

#[test]
fn session_starts_on_home_with_form_defaults() {
    let use_case = CalculateUseCase::new(EmissionFactorTable::builtin());
    let session = Session::new(&use_case, None);
    assert_eq!(session.view, View::Home);
    assert_eq!(session.inputs.region, "India");
    assert_eq!(session.inputs.vehicle, Vehicle::Bike);
    assert_eq!(session.inputs.daily_distance_km, 10.0);
}

#[test]
fn session_uses_preferred_region() {
    let session = Session::new(&two_region_use_case(), Some("Norway"));
    assert_eq!(session.inputs.region, "Norway");
    assert_eq!(session.inputs.vehicle, Vehicle::Bus);
}

#[test]
fn region_change_realigns_vehicle_and_keeps_numbers() {
    let use_case = two_region_use_case();
    let mut session = Session::new(&use_case, None);
    session.inputs.daily_distance_km = 42.0;

    session.select_region(&use_case, "Norway");
    assert_eq!(session.inputs.region, "Norway");
    assert_eq!(session.inputs.vehicle, Vehicle::Bus);
    assert_eq!(session.inputs.daily_distance_km, 42.0);
}

#[test]
fn calculate_uses_current_form_values() {
    let use_case = CalculateUseCase::new(EmissionFactorTable::builtin());
    let mut session = Session::new(&use_case, None);
    assert_eq!(session.calculate(&use_case).unwrap().total, 3.55);

    session.inputs.vehicle = Vehicle::Car;
    assert_eq!(session.calculate(&use_case).unwrap().total, 3.87);
}

#[test]
fn calculate_reports_unknown_region() {
    let use_case = CalculateUseCase::new(EmissionFactorTable::builtin());
    let mut session = Session::new(&use_case, None);
    session.inputs.region = "Atlantis".to_string();
    let err = session.calculate(&use_case).unwrap_err();
    assert!(err.to_string().contains("Atlantis"), "{err}");
}

#[test]
fn vehicle_choices_follow_the_current_region() {
    let use_case = two_region_use_case();
    let mut session = Session::new(&use_case, None);
    assert_eq!(
        session.vehicle_choices(&use_case).unwrap(),
        vec![Vehicle::Bike, Vehicle::Car, Vehicle::Bus]
    );

    session.select_region(&use_case, "Norway");
    assert_eq!(session.vehicle_choices(&use_case).unwrap(), vec![Vehicle::Bus]);
}

#[test]
fn vehicle_choices_error_instead_of_empty_list() {
    let use_case = two_region_use_case();
    let mut session = Session::new(&use_case, None);
    session.inputs.region = "Atlantis".to_string();
    let err = session.vehicle_choices(&use_case).unwrap_err();
    assert!(err.to_string().contains("unknown region 'Atlantis'"), "{err}");
}

#[test]
fn menu_lists_views_then_quit() {
    assert_eq!(
        menu_items(),
        vec!["Home", "Carbon Calculator", "Blog", "Chatbot", QUIT]
    );
    assert_eq!(view_at(1), Some(View::Calculator));
    assert_eq!(view_at(4), None);
    assert_eq!(view_index(View::Chatbot), 3);
}

#[test]
fn meals_must_be_whole_and_non_negative() {
    assert_eq!(parse_meals(" 4 "), Ok(4));
    assert!(parse_meals("-1").is_err());
    assert!(parse_meals("2.5").is_err());
}
