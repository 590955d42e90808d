//! Chatbot page: intro header and one boxed reply per exchange

use serde_json::json;

use footprint::domain::entities::ChatExchange;

use crate::ui::blocks::header::PageHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub const TITLE: &str = "AI Chatbot";
pub const INTRO: &str =
    "Ask me anything about carbon footprint, sustainability, or climate change!";
pub const PROMPT_LABEL: &str = "You:";
pub const REPLY_LABEL: &str = "Bot:";
pub const EMPTY_PROMPT_WARNING: &str = "Please enter a message.";

pub fn render_intro(supports_color: bool, supports_unicode: bool) -> String {
    PageHeader::new(Icon::Chat, TITLE)
        .paragraph(INTRO)
        .render(supports_color, supports_unicode)
}

/// `Bot:` box holding the reply; failed requests get the error frame.
pub fn render_reply(exchange: &ChatExchange, supports_color: bool, supports_unicode: bool) -> String {
    let style = if exchange.is_error() {
        BoxStyle::Error
    } else {
        BoxStyle::Info
    };
    let label = ColoredText::info(REPLY_LABEL).bold().render(supports_color);
    let mut b = Box::with_title(label).style(style);
    b.add_line(exchange.reply.as_str());
    b.render(supports_color, supports_unicode)
}

/// `{"event":"reply","command":"chat","prompt":..,"reply":..,"kind":..}`
pub fn reply_event(exchange: &ChatExchange) -> serde_json::Value {
    json!({
        "event": "reply",
        "command": "chat",
        "prompt": exchange.prompt,
        "reply": exchange.reply,
        "kind": exchange.kind,
    })
}
