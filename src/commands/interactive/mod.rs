//! Interactive command module
//!
//! Menu-driven shell over the four pages. Opens when no subcommand is given.

mod menu;
mod state;
#[cfg(test)]
mod tests;

use anyhow::Result;

use footprint::View;

use super::CommandContext;
use state::Session;

pub fn cmd_interactive(ctx: &CommandContext) -> Result<()> {
    if ctx.ui.json {
        let views: Vec<serde_json::Value> = View::ALL
            .iter()
            .map(|v| serde_json::json!({ "view": v, "title": v.title() }))
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "interactive",
            "views": views,
        }))?;
        return Ok(());
    }

    if !ctx.ui.can_prompt() {
        println!("No command provided.");
        println!("Try: `footprint calc` or `footprint --help`");
        return Ok(());
    }

    let use_case = ctx.calculate_use_case()?;
    let relay = ctx.chat_relay();
    let mut session = Session::new(&use_case, ctx.preferred_region());

    print_banner(ctx);
    menu::run(ctx, &use_case, &relay, &mut session)
}

fn print_banner(ctx: &CommandContext) {
    print!(
        "{}",
        crate::ui::views::banner::render_banner(ctx.ui.color, ctx.ui.unicode)
    );
    println!();
}
