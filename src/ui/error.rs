use footprint::{ConfigurationError, FootprintError};

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = if let Some(footprint) = err.downcast_ref::<FootprintError>() {
        footprint_error_block(footprint)
    } else if let Some(config) = err.downcast_ref::<ConfigurationError>() {
        configuration_error_block(config)
    } else {
        ErrorBlock::new(format!("{:#}", err))
    };
    block.render(supports_color, supports_unicode)
}

fn footprint_error_block(err: &FootprintError) -> ErrorBlock {
    match err {
        FootprintError::InvalidConfig { file, message } => ErrorBlock::new(message.as_str())
            .with_file(file)
            .with_fix("Fix the settings file, or point --config at another one."),
        FootprintError::InvalidFactorFile { file, message } => ErrorBlock::new(message.as_str())
            .with_file(file)
            .with_fix("Each region is a [regions.<Name>] table of positive factors, e.g. Bike = 0.05"),
        FootprintError::Configuration(config) => configuration_error_block(config),
        FootprintError::Io(_) => ErrorBlock::new(err.to_string()),
    }
}

fn configuration_error_block(err: &ConfigurationError) -> ErrorBlock {
    let block = ErrorBlock::new(err.to_string());
    match err {
        ConfigurationError::UnknownRegion { .. } => {
            block.with_fix("Run `footprint factors` to list the available regions.")
        }
        ConfigurationError::MissingFactor { .. } => {
            block.with_fix("Pick another vehicle, or add the factor to the region's table.")
        }
        ConfigurationError::IncompleteRegion { .. } => block.with_fix(
            "Every region needs Electricity, Diet, Waste and at least one of Bike, Car or Bus.",
        ),
        ConfigurationError::InvalidFactor { .. } | ConfigurationError::EmptyTable => block,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::Category;
    use std::path::PathBuf;

    #[test]
    fn unknown_region_suggests_factors_command() {
        let err = anyhow::Error::new(ConfigurationError::UnknownRegion {
            region: "Indai".to_string(),
            suggestion: Some("India".to_string()),
        });
        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("unknown region 'Indai' (did you mean 'India'?)"));
        assert!(rendered.contains("footprint factors"));
    }

    #[test]
    fn wrapped_configuration_error_is_unwrapped() {
        let err = anyhow::Error::new(FootprintError::from(ConfigurationError::MissingFactor {
            region: "Kenya".to_string(),
            category: Category::Car,
        }));
        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("region 'Kenya' has no emission factor for 'Car'"));
        assert!(rendered.contains("Pick another vehicle"));
    }

    #[test]
    fn incomplete_region_lists_required_categories() {
        let err = anyhow::Error::new(ConfigurationError::IncompleteRegion {
            region: "Peru".to_string(),
            missing: vec![Category::Bike, Category::Car, Category::Bus],
        });
        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("region 'Peru' is incomplete"));
        assert!(rendered.contains("at least one of Bike, Car or Bus"));
    }

    #[test]
    fn invalid_factor_file_names_the_file() {
        let err = anyhow::Error::new(FootprintError::InvalidFactorFile {
            file: PathBuf::from("data/factors.toml"),
            message: "emission factor table has no regions".to_string(),
        });
        let rendered = format_error_with(&err, false, true);
        assert!(rendered.contains("data/factors.toml"));
        assert!(rendered.contains("[regions.<Name>]"));
    }

    #[test]
    fn other_errors_render_their_chain() {
        let err = anyhow::anyhow!("inner").context("outer");
        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("outer: inner"));
    }
}
