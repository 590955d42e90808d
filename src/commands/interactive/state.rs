//! Session state of the interactive menu
//!
//! Lives for one run of the menu. Form values survive page switches; nothing
//! is written to disk.

use footprint::{CalculateUseCase, ConfigurationError, EmissionResult, UserInputs, Vehicle, View};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub view: View,
    pub inputs: UserInputs,
}

impl Session {
    pub fn new(use_case: &CalculateUseCase, preferred_region: Option<&str>) -> Self {
        Self {
            view: View::default(),
            inputs: use_case.initial_inputs(preferred_region),
        }
    }

    /// Change region and keep the vehicle one the region has a factor for
    pub fn select_region(&mut self, use_case: &CalculateUseCase, region: &str) {
        if self.inputs.region != region {
            self.inputs.region = region.to_string();
            use_case.align_vehicle(&mut self.inputs);
        }
    }

    /// Vehicle choices for the current region; never empty on success
    pub fn vehicle_choices(&self, use_case: &CalculateUseCase) -> anyhow::Result<Vec<Vehicle>> {
        let vehicles = use_case.vehicles(&self.inputs.region)?;
        if vehicles.is_empty() {
            return Err(ConfigurationError::IncompleteRegion {
                region: self.inputs.region.clone(),
                missing: Vehicle::ALL.map(|v| v.category()).to_vec(),
            }
            .into());
        }
        Ok(vehicles)
    }

    /// Run the calculator on the current form values
    pub fn calculate(&self, use_case: &CalculateUseCase) -> anyhow::Result<EmissionResult> {
        Ok(use_case.execute(&self.inputs)?)
    }
}

/// Main menu entries: every view, then Quit
pub fn menu_items() -> Vec<&'static str> {
    View::ALL
        .iter()
        .map(View::title)
        .chain(std::iter::once(QUIT))
        .collect()
}

pub const QUIT: &str = "Quit";

/// View behind a menu index; `None` for Quit
pub fn view_at(index: usize) -> Option<View> {
    View::ALL.get(index).copied()
}

pub fn view_index(view: View) -> usize {
    View::ALL.iter().position(|v| *v == view).unwrap_or(0)
}

/// Whole meals per day, no upper bound
pub fn parse_meals(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a whole number of meals", input.trim()))
}
