use serde_json::json;

use footprint::{Category, EmissionResult, UserInputs};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

/// `"<label>: <value, 2 decimals> tonnes CO2 per year"`
pub fn result_line(label: &str, tonnes: f64) -> String {
    format!("{}: {:.2} tonnes CO2 per year", label, tonnes)
}

/// The four subtotal lines and the total line, in display order
pub fn result_lines(result: &EmissionResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .breakdown()
        .iter()
        .map(|(label, value)| result_line(label, *value))
        .collect();
    lines.push(result_line("Total Carbon Footprint", result.total));
    lines
}

pub fn render_result(result: &EmissionResult, supports_color: bool, supports_unicode: bool) -> String {
    let icons = [
        Icon::for_category(result.vehicle.category()),
        Icon::for_category(Category::Electricity),
        Icon::for_category(Category::Diet),
        Icon::for_category(Category::Waste),
    ];

    let lines = result_lines(result);
    let mut summary = ResultSummary::new(Icon::Globe, "Your Carbon Footprint Summary");
    for (icon, line) in icons.iter().zip(&lines) {
        summary.add_row(*icon, line.as_str());
    }
    if let Some(total) = lines.last() {
        summary.with_conclusion(Icon::Globe, total.as_str());
    }
    summary.render(supports_color, supports_unicode)
}

/// `{"event":"result","command":"calc","inputs":{..},"result":{..}}`
pub fn result_event(inputs: &UserInputs, result: &EmissionResult) -> serde_json::Value {
    json!({
        "event": "result",
        "command": "calc",
        "inputs": inputs,
        "result": result,
        "unit": "tonnes CO2 per year",
    })
}
