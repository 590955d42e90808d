//! Numeric input bounds shared by the interactive calculator and `calc` flags

/// One numeric calculator input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f64,
    /// `None` for inputs bounded below only
    pub max: Option<f64>,
    pub default: f64,
}

pub const DISTANCE: Slider = Slider {
    label: "Daily commute distance (in km)",
    min: 0.0,
    max: Some(100.0),
    default: 10.0,
};

pub const ELECTRICITY: Slider = Slider {
    label: "Monthly electricity consumption (in kWh)",
    min: 0.0,
    max: Some(1000.0),
    default: 200.0,
};

pub const MEALS: Slider = Slider {
    label: "Number of meals per day",
    min: 0.0,
    max: None,
    default: 3.0,
};

pub const WASTE: Slider = Slider {
    label: "Waste generated per week (in kg)",
    min: 0.0,
    max: Some(100.0),
    default: 5.0,
};

impl Slider {
    /// Check `value` against the bounds
    pub fn validate(&self, value: f64) -> Result<f64, String> {
        if !value.is_finite() {
            return Err(format!("{} must be a number", self.label));
        }
        match self.max {
            Some(max) if value < self.min || value > max => Err(format!(
                "{} must be between {} and {}",
                self.label, self.min, max
            )),
            None if value < self.min => {
                Err(format!("{} must be at least {}", self.label, self.min))
            }
            _ => Ok(value),
        }
    }

    /// Parse and check a typed value
    pub fn parse(&self, input: &str) -> Result<f64, String> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", input.trim()))?;
        self.validate(value)
    }

    /// Bounds hint shown next to the prompt
    pub fn range_hint(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!(">= {}", self.min),
        }
    }
}

pub fn parse_distance(s: &str) -> Result<f64, String> {
    DISTANCE.parse(s)
}

pub fn parse_electricity(s: &str) -> Result<f64, String> {
    ELECTRICITY.parse(s)
}

pub fn parse_waste(s: &str) -> Result<f64, String> {
    WASTE.parse(s)
}
