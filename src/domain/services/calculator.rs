//! Footprint calculator
//!
//! Pure function over the factor table: clamp, annualize, multiply by the
//! region's factors, convert kg to tonnes, and sum.

use crate::domain::entities::{EmissionFactorTable, EmissionResult, UserInputs};
use crate::domain::value_objects::Category;
use crate::error::ConfigurationError;

const KG_PER_TONNE: f64 = 1000.0;

/// Compute yearly emissions for one set of inputs.
///
/// Fails only when the region or the selected vehicle's factor is absent from
/// `table`.
pub fn compute(
    table: &EmissionFactorTable,
    inputs: &UserInputs,
) -> Result<EmissionResult, ConfigurationError> {
    let region = inputs.region.as_str();
    let annual = inputs.annualized();

    let subtotal = |category: Category, quantity: f64| -> Result<f64, ConfigurationError> {
        Ok(table.lookup(region, category)? * quantity / KG_PER_TONNE)
    };

    let transport = subtotal(inputs.vehicle.category(), annual.distance_km)?;
    let electricity = subtotal(Category::Electricity, annual.electricity_kwh)?;
    let diet = subtotal(Category::Diet, annual.meals)?;
    let waste = subtotal(Category::Waste, annual.waste_kg)?;

    Ok(EmissionResult::from_subtotals(
        inputs.vehicle,
        transport,
        electricity,
        diet,
        waste,
    ))
}
