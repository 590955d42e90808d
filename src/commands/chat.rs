use anyhow::Result;

use footprint::domain::entities::ChatExchange;
use footprint::ChatOutcome;

use super::CommandContext;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::views::chat::{render_reply, reply_event, EMPTY_PROMPT_WARNING};

/// One question, one answer. Relay failures are printed as the reply text,
/// so the exit code stays 0 once a request was attempted.
pub fn cmd_chat(ctx: &CommandContext, message: Option<&str>) -> Result<()> {
    let relay = ctx.chat_relay();
    match relay.submit(message.unwrap_or_default()) {
        ChatOutcome::EmptyPrompt => show_empty_prompt(ctx),
        ChatOutcome::Reply(exchange) => show_reply(ctx, &exchange),
    }
}

pub(crate) fn show_reply(ctx: &CommandContext, exchange: &ChatExchange) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(reply_event(exchange))?;
    } else {
        print!("{}", render_reply(exchange, ctx.ui.color, ctx.ui.unicode));
    }
    Ok(())
}

pub(crate) fn show_empty_prompt(ctx: &CommandContext) -> Result<()> {
    if ctx.ui.json {
        crate::ui::json::emit(crate::ui::json::warning_event("chat", EMPTY_PROMPT_WARNING))?;
    } else {
        print!(
            "{}",
            WarningBlock::new(EMPTY_PROMPT_WARNING).render(ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}
