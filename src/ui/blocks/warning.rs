use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// One-line boxed warning
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.title.as_str()).render(supports_color)
        );
        Box::with_title(header)
            .style(BoxStyle::Warning)
            .render(supports_color, supports_unicode)
    }
}
