use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed result: title, one line per item, and an emphasized closing line
#[derive(Debug, Clone)]
pub struct ResultSummary {
    icon: Icon,
    title: String,
    rows: Vec<(Icon, String)>,
    conclusion: Option<(Icon, String)>,
}

impl ResultSummary {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            rows: Vec::new(),
            conclusion: None,
        }
    }

    pub fn add_row(&mut self, icon: Icon, text: impl Into<String>) {
        self.rows.push((icon, text.into()));
    }

    pub fn with_conclusion(&mut self, icon: Icon, text: impl Into<String>) {
        self.conclusion = Some((icon, text.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut b = Box::with_title(self.icon.prefix(&title, supports_color, supports_unicode))
            .style(BoxStyle::Success);
        b.add_empty();

        for (icon, text) in &self.rows {
            b.add_line(icon.prefix(text, supports_color, supports_unicode));
        }

        if let Some((icon, text)) = &self.conclusion {
            b.add_empty();
            let text = ColoredText::success(text.as_str())
                .bold()
                .render(supports_color);
            b.add_line(icon.prefix(&text, supports_color, supports_unicode));
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_then_conclusion() {
        let mut summary = ResultSummary::new(Icon::Globe, "Summary");
        summary.add_row(Icon::Diet, "Diet: 1.37");
        summary.with_conclusion(Icon::Globe, "Total: 3.55");

        let rendered = summary.render(false, false);
        let diet = rendered.find("[DIET] Diet: 1.37").unwrap();
        let total = rendered.find("[*] Total: 3.55").unwrap();
        assert!(diet < total);
        assert!(rendered.contains("[*] Summary"));
    }
}
