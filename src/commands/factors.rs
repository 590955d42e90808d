use anyhow::Result;

use super::CommandContext;
use crate::ui::views::factors::{factors_event, render_factors};

pub fn cmd_factors(ctx: &CommandContext) -> Result<()> {
    let use_case = ctx.calculate_use_case()?;
    if ctx.ui.json {
        crate::ui::json::emit(factors_event(use_case.table(), use_case.source()))?;
    } else {
        print!(
            "{}",
            render_factors(use_case.table(), use_case.source(), ctx.ui.color)
        );
    }
    Ok(())
}
