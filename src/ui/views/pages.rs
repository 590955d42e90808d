//! Static pages: Home and Blog

use serde_json::json;

use footprint::View;

use crate::ui::blocks::header::PageHeader;
use crate::ui::primitives::icon::Icon;

struct Section {
    icon: Icon,
    heading: &'static str,
    lines: &'static [&'static str],
}

const HOME: &[Section] = &[Section {
    icon: Icon::Globe,
    heading: "Welcome to the Personal Carbon Calculator",
    lines: &[
        "This app helps you calculate your carbon footprint based on your lifestyle choices.",
        "Use the Carbon Calculator to estimate your emissions and explore our blog for tips on reducing your impact.",
    ],
}];

const BLOG: &[Section] = &[
    Section {
        icon: Icon::Blog,
        heading: "Blog: Understanding Carbon Emissions",
        lines: &["Reducing your carbon footprint is essential for a sustainable future."],
    },
    Section {
        icon: Icon::Herb,
        heading: "Simple Ways to Lower Your Carbon Footprint",
        lines: &[
            "1. Use public transport or carpool whenever possible.",
            "2. Reduce electricity usage by turning off appliances when not in use.",
            "3. Opt for a plant-based diet to reduce diet-related emissions.",
            "4. Recycle and compost to minimize waste emissions.",
            "5. Support renewable energy initiatives.",
        ],
    },
];

fn sections(view: View) -> &'static [Section] {
    match view {
        View::Blog => BLOG,
        _ => HOME,
    }
}

/// Text rendering of a static page (Home for anything but Blog)
pub fn render_page(view: View, supports_color: bool, supports_unicode: bool) -> String {
    sections(view)
        .iter()
        .map(|s| {
            s.lines
                .iter()
                .fold(PageHeader::new(s.icon, s.heading), |h, line| h.paragraph(*line))
                .render(supports_color, supports_unicode)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `{"event":"page","page":..,"sections":[{"heading":..,"lines":[..]}]}`
pub fn page_event(view: View) -> serde_json::Value {
    let sections: Vec<serde_json::Value> = sections(view)
        .iter()
        .map(|s| json!({ "heading": s.heading, "lines": s.lines }))
        .collect();
    json!({
        "event": "page",
        "page": view,
        "title": view.title(),
        "sections": sections,
    })
}
