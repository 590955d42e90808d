use anyhow::Result;

use footprint::View;

use super::CommandContext;
use crate::ui::views::pages::{page_event, render_page};

pub fn cmd_home(ctx: &CommandContext) -> Result<()> {
    show_page(ctx, View::Home)
}

pub fn cmd_blog(ctx: &CommandContext) -> Result<()> {
    show_page(ctx, View::Blog)
}

pub(crate) fn show_page(ctx: &CommandContext, view: View) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(page_event(view))?;
    } else {
        print!("{}", render_page(view, ctx.ui.color, ctx.ui.unicode));
    }
    Ok(())
}
