//! Interactive menu pages

use anyhow::Result;
use dialoguer::{Input, Select};

use footprint::presentation::factory::ConcreteChatRelay;
use footprint::presentation::sliders::{self, Slider};
use footprint::{CalculateUseCase, ChatOutcome, View};

use super::state::{self, Session};
use crate::commands::{calculate, chat, pages, CommandContext};
use crate::ui::theme::FootprintTheme;
use crate::ui::views::chat::{render_intro, PROMPT_LABEL};

const CALCULATE: &str = "Calculate CO2 Emissions";
const SEND: &str = "Send";
const BACK: &str = "Back";

/// Main loop. Esc or Quit leaves the menu.
pub fn run(
    ctx: &CommandContext,
    use_case: &CalculateUseCase,
    relay: &ConcreteChatRelay,
    session: &mut Session,
) -> Result<()> {
    let theme = FootprintTheme::new(ctx.ui.unicode);
    let items = state::menu_items();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Navigation")
            .items(&items)
            .default(state::view_index(session.view))
            .interact_opt()?;

        let Some(view) = selection.and_then(state::view_at) else {
            return Ok(());
        };
        session.view = view;
        println!();

        match view {
            View::Home | View::Blog => pages::show_page(ctx, view)?,
            View::Calculator => calculator_page(ctx, &theme, use_case, session)?,
            View::Chatbot => chatbot_page(ctx, &theme, relay)?,
        }
        println!();
    }
}

fn calculator_page(
    ctx: &CommandContext,
    theme: &FootprintTheme,
    use_case: &CalculateUseCase,
    session: &mut Session,
) -> Result<()> {
    let regions = use_case.regions();
    let current = regions
        .iter()
        .position(|r| *r == session.inputs.region)
        .unwrap_or(0);
    let region_index = Select::with_theme(theme)
        .with_prompt("Select Your Country")
        .items(&regions)
        .default(current)
        .interact()?;
    if let Some(region) = regions.get(region_index) {
        session.select_region(use_case, region);
    }

    let vehicles = match session.vehicle_choices(use_case) {
        Ok(vehicles) => vehicles,
        Err(err) => {
            eprint!("{}", crate::ui::error::format_error(&err));
            return Ok(());
        }
    };
    let current = vehicles
        .iter()
        .position(|v| *v == session.inputs.vehicle)
        .unwrap_or(0);
    let vehicle_index = Select::with_theme(theme)
        .with_prompt("Type of Vehicle")
        .items(&vehicles)
        .default(current)
        .interact()?;
    if let Some(vehicle) = vehicles.get(vehicle_index) {
        session.inputs.vehicle = *vehicle;
    }

    session.inputs.daily_distance_km =
        ask_number(theme, &sliders::DISTANCE, session.inputs.daily_distance_km)?;
    session.inputs.monthly_electricity_kwh = ask_number(
        theme,
        &sliders::ELECTRICITY,
        session.inputs.monthly_electricity_kwh,
    )?;
    session.inputs.meals_per_day = ask_meals(theme, session.inputs.meals_per_day)?;
    session.inputs.weekly_waste_kg =
        ask_number(theme, &sliders::WASTE, session.inputs.weekly_waste_kg)?;

    let action = Select::with_theme(theme)
        .items(&[CALCULATE, BACK])
        .default(0)
        .interact_opt()?;
    if action != Some(0) {
        return Ok(());
    }

    println!();
    match session.calculate(use_case) {
        Ok(result) => calculate::show_result(ctx, &session.inputs, &result),
        Err(err) => {
            eprint!("{}", crate::ui::error::format_error(&err));
            Ok(())
        }
    }
}

fn ask_number(theme: &FootprintTheme, slider: &Slider, current: f64) -> Result<f64> {
    let text = Input::<String>::with_theme(theme)
        .with_prompt(format!("{} [{}]", slider.label, slider.range_hint()))
        .default(current.to_string())
        .validate_with(|input: &String| slider.parse(input).map(|_| ()))
        .interact_text()?;
    slider.parse(&text).map_err(anyhow::Error::msg)
}

fn ask_meals(theme: &FootprintTheme, current: u32) -> Result<u32> {
    let text = Input::<String>::with_theme(theme)
        .with_prompt(format!("Meals per day [{}]", sliders::MEALS.range_hint()))
        .default(current.to_string())
        .validate_with(|input: &String| state::parse_meals(input).map(|_| ()))
        .interact_text()?;
    state::parse_meals(&text).map_err(anyhow::Error::msg)
}

/// Prompt and reply, repeated until Back. No history is sent along.
fn chatbot_page(
    ctx: &CommandContext,
    theme: &FootprintTheme,
    relay: &ConcreteChatRelay,
) -> Result<()> {
    print!("{}", render_intro(ctx.ui.color, ctx.ui.unicode));

    loop {
        let text = Input::<String>::with_theme(theme)
            .with_prompt(PROMPT_LABEL)
            .allow_empty(true)
            .interact_text()?;

        let action = Select::with_theme(theme)
            .items(&[SEND, BACK])
            .default(0)
            .interact_opt()?;
        if action != Some(0) {
            return Ok(());
        }

        match relay.submit(&text) {
            ChatOutcome::EmptyPrompt => chat::show_empty_prompt(ctx)?,
            ChatOutcome::Reply(exchange) => chat::show_reply(ctx, &exchange)?,
        }
    }
}
