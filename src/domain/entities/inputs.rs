//! Raw calculator inputs and their annualized quantities

use serde::{Deserialize, Serialize};

use crate::domain::entities::factor_table::BUILTIN_REGION;
use crate::domain::value_objects::Vehicle;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// One calculator submission, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    pub region: String,
    pub vehicle: Vehicle,
    pub daily_distance_km: f64,
    pub monthly_electricity_kwh: f64,
    pub meals_per_day: u32,
    pub weekly_waste_kg: f64,
}

impl UserInputs {
    pub fn new(region: impl Into<String>, vehicle: Vehicle) -> Self {
        Self {
            region: region.into(),
            vehicle,
            daily_distance_km: 0.0,
            monthly_electricity_kwh: 0.0,
            meals_per_day: 0,
            weekly_waste_kg: 0.0,
        }
    }

    pub fn with_distance_km(mut self, km: f64) -> Self {
        self.daily_distance_km = km;
        self
    }

    pub fn with_electricity_kwh(mut self, kwh: f64) -> Self {
        self.monthly_electricity_kwh = kwh;
        self
    }

    pub fn with_meals(mut self, meals: u32) -> Self {
        self.meals_per_day = meals;
        self
    }

    pub fn with_waste_kg(mut self, kg: f64) -> Self {
        self.weekly_waste_kg = kg;
        self
    }

    /// Clamp to non-negative and scale every quantity to one year.
    pub fn annualized(&self) -> AnnualQuantities {
        AnnualQuantities {
            distance_km: non_negative(self.daily_distance_km) * DAYS_PER_YEAR,
            electricity_kwh: non_negative(self.monthly_electricity_kwh) * MONTHS_PER_YEAR,
            meals: f64::from(self.meals_per_day) * DAYS_PER_YEAR,
            waste_kg: non_negative(self.weekly_waste_kg) * WEEKS_PER_YEAR,
        }
    }
}

impl Default for UserInputs {
    /// The calculator form's initial values
    fn default() -> Self {
        Self::new(BUILTIN_REGION, Vehicle::Bike)
            .with_distance_km(10.0)
            .with_electricity_kwh(200.0)
            .with_meals(3)
            .with_waste_kg(5.0)
    }
}

/// Yearly activity totals derived from [`UserInputs`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualQuantities {
    pub distance_km: f64,
    pub electricity_kwh: f64,
    pub meals: f64,
    pub waste_kg: f64,
}

/// NaN and negatives become 0
fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}
