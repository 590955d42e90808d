//! Emission categories and the vehicles that select a transport category

use serde::{Deserialize, Serialize};

/// Activity category that carries an emission factor.
///
/// Serialized with the variant name as-is (`Bike`, `Electricity`, ...), which
/// is also the key used in factor files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Bike,
    Car,
    Bus,
    Electricity,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Bike,
        Category::Car,
        Category::Bus,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    /// Returns true for the categories a vehicle can select
    pub fn is_transport(&self) -> bool {
        matches!(self, Category::Bike | Category::Car | Category::Bus)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Bike => "Bike",
            Category::Car => "Car",
            Category::Bus => "Bus",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }

    /// Unit of activity the factor is expressed against
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Bike | Category::Car | Category::Bus => "kg CO2/km",
            Category::Electricity => "kg CO2/kWh",
            Category::Diet => "kg CO2/meal",
            Category::Waste => "kg CO2/kg",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Commute vehicle. Always maps onto a transport [`Category`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Vehicle {
    #[default]
    Bike,
    Car,
    Bus,
}

impl Vehicle {
    pub const ALL: [Vehicle; 3] = [Vehicle::Bike, Vehicle::Car, Vehicle::Bus];

    pub fn category(&self) -> Category {
        match self {
            Vehicle::Bike => Category::Bike,
            Vehicle::Car => Category::Car,
            Vehicle::Bus => Category::Bus,
        }
    }

    /// Inverse of [`Vehicle::category`]; `None` for non-transport categories
    pub fn from_category(category: Category) -> Option<Self> {
        match category {
            Category::Bike => Some(Vehicle::Bike),
            Category::Car => Some(Vehicle::Car),
            Category::Bus => Some(Vehicle::Bus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category().name())
    }
}
