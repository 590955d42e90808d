use anyhow::Result;

use footprint::{EmissionResult, UserInputs, Vehicle};

use super::CommandContext;
use crate::ui::views::calculator::{render_result, result_event};

/// `footprint calc` flags, already range-checked by clap
#[derive(Debug, Clone, PartialEq)]
pub struct CalcArgs {
    pub region: Option<String>,
    pub vehicle: Vehicle,
    pub distance: f64,
    pub electricity: f64,
    pub meals: u32,
    pub waste: f64,
}

impl CalcArgs {
    /// Without `--region`, the configured default region (or the table's first)
    fn into_inputs(self, default_region: String) -> UserInputs {
        UserInputs::new(self.region.unwrap_or(default_region), self.vehicle)
            .with_distance_km(self.distance)
            .with_electricity_kwh(self.electricity)
            .with_meals(self.meals)
            .with_waste_kg(self.waste)
    }
}

pub fn cmd_calc(ctx: &CommandContext, args: CalcArgs) -> Result<()> {
    let use_case = ctx.calculate_use_case()?;
    let default_region = use_case.initial_inputs(ctx.preferred_region()).region;
    let inputs = args.into_inputs(default_region);

    let result = use_case.execute(&inputs)?;
    show_result(ctx, &inputs, &result)
}

pub(crate) fn show_result(
    ctx: &CommandContext,
    inputs: &UserInputs,
    result: &EmissionResult,
) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(result_event(inputs, result))?;
    } else {
        print!("{}", render_result(result, ctx.ui.color, ctx.ui.unicode));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(region: Option<&str>) -> CalcArgs {
        CalcArgs {
            region: region.map(str::to_string),
            vehicle: Vehicle::Car,
            distance: 12.5,
            electricity: 300.0,
            meals: 2,
            waste: 4.0,
        }
    }

    #[test]
    fn explicit_region_wins() {
        let inputs = args(Some("Kenya")).into_inputs("India".to_string());
        assert_eq!(inputs.region, "Kenya");
        assert_eq!(inputs.vehicle, Vehicle::Car);
        assert_eq!(inputs.daily_distance_km, 12.5);
        assert_eq!(inputs.monthly_electricity_kwh, 300.0);
        assert_eq!(inputs.meals_per_day, 2);
        assert_eq!(inputs.weekly_waste_kg, 4.0);
    }

    #[test]
    fn missing_region_uses_default() {
        assert_eq!(args(None).into_inputs("India".to_string()).region, "India");
    }
}
