use crossterm::style::Stylize;

use footprint::domain::value_objects::Category;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Warning,
    Arrow,
    Globe,
    Seedling,
    Blog,
    Herb,
    Chat,
    Transport,
    Electricity,
    Diet,
    Waste,
}

impl Icon {
    /// Icon of a result line
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Bike | Category::Car | Category::Bus => Icon::Transport,
            Category::Electricity => Icon::Electricity,
            Category::Diet => Icon::Diet,
            Category::Waste => Icon::Waste,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Globe) => theme::icons::GLOBE,
            (true, Icon::Seedling) => theme::icons::SEEDLING,
            (true, Icon::Blog) => theme::icons::BLOG,
            (true, Icon::Herb) => theme::icons::HERB,
            (true, Icon::Chat) => theme::icons::CHAT,
            (true, Icon::Transport) => theme::icons::TRANSPORT,
            (true, Icon::Electricity) => theme::icons::ELECTRICITY,
            (true, Icon::Diet) => theme::icons::DIET,
            (true, Icon::Waste) => theme::icons::WASTE,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Globe) => theme::icons_ascii::GLOBE,
            (false, Icon::Seedling) => theme::icons_ascii::SEEDLING,
            (false, Icon::Blog) => theme::icons_ascii::BLOG,
            (false, Icon::Herb) => theme::icons_ascii::HERB,
            (false, Icon::Chat) => theme::icons_ascii::CHAT,
            (false, Icon::Transport) => theme::icons_ascii::TRANSPORT,
            (false, Icon::Electricity) => theme::icons_ascii::ELECTRICITY,
            (false, Icon::Diet) => theme::icons_ascii::DIET,
            (false, Icon::Waste) => theme::icons_ascii::WASTE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Seedling | Icon::Herb => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Globe
            | Icon::Blog
            | Icon::Chat
            | Icon::Transport
            | Icon::Electricity
            | Icon::Diet
            | Icon::Waste => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }

    /// `icon + " " + text`, or just `text` when the icon renders empty
    pub fn prefix(&self, text: &str, supports_color: bool, supports_unicode: bool) -> String {
        if self.render(supports_unicode).is_empty() {
            return text.to_string();
        }
        format!("{} {}", self.colored(supports_color, supports_unicode), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Error.render(false), theme::icons_ascii::ERROR);
        assert_eq!(Icon::Transport.render(false), "[TRANSPORT]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn every_vehicle_category_uses_transport_icon() {
        for category in [Category::Bike, Category::Car, Category::Bus] {
            assert_eq!(Icon::for_category(category), Icon::Transport);
        }
        assert_eq!(Icon::for_category(Category::Waste), Icon::Waste);
    }

    #[test]
    fn prefix_skips_empty_icons() {
        assert_eq!(Icon::Seedling.prefix("Title", false, false), "Title");
        assert_eq!(
            Icon::Seedling.prefix("Title", false, true),
            format!("{} Title", theme::icons::SEEDLING)
        );
    }
}
