use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Icon + bold title, followed by plain paragraphs
#[derive(Debug, Clone)]
pub struct PageHeader {
    icon: Icon,
    title: String,
    paragraphs: Vec<String>,
}

impl PageHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{}\n",
            self.icon.prefix(&title, supports_color, supports_unicode)
        );
        for p in &self.paragraphs {
            out.push_str(p);
            out.push('\n');
        }
        out
    }
}
