//! Emission factor table listing

use serde_json::json;

use footprint::{Category, EmissionFactorTable};

use crate::ui::primitives::text::ColoredText;

/// One block per region: name, then `category  value unit` rows
pub fn render_factors(table: &EmissionFactorTable, source: &str, supports_color: bool) -> String {
    let heading = ColoredText::info(format!("Emission factors ({source})"))
        .bold()
        .render(supports_color);
    let mut out = format!("{heading}\n");

    let name_width = Category::ALL
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    for region in table.regions() {
        out.push('\n');
        out.push_str(&ColoredText::plain(region).bold().render(supports_color));
        out.push('\n');
        let Ok(factors) = table.factors(region) else {
            continue;
        };
        for (category, value) in factors {
            let unit = ColoredText::dim(category.unit()).render(supports_color);
            out.push_str(&format!(
                "  {:<width$}  {} {}\n",
                category.name(),
                value,
                unit,
                width = name_width
            ));
        }
    }
    out
}

/// `{"event":"factors","source":..,"regions":{region:{category:value}}}`
pub fn factors_event(table: &EmissionFactorTable, source: &str) -> serde_json::Value {
    json!({
        "event": "factors",
        "source": source,
        "regions": table,
    })
}
