use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub const APP_TITLE: &str = "Personal Carbon Calculator";

pub fn render_banner(supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_style(BoxStyle::Info);
    b.add_empty();
    b.add_line(format!(
        "  {} {}",
        APP_TITLE,
        Icon::Seedling.render(supports_unicode)
    ));
    b.add_empty();
    b.add_line("  Estimate your yearly CO2 footprint and");
    b.add_line("  ask sustainability questions.");
    b.add_empty();
    b.render(supports_color, supports_unicode)
}
