use footprint::config::{ColorMode, Config};
use footprint::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved rendering switches for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    /// `--color` beats `output.color`; `auto` follows the terminal and stays
    /// off in CI.
    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            caps,
            color: color && !json,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }

    /// Prompts need a terminal on stdin and stdout; JSON mode never prompts.
    pub fn can_prompt(&self) -> bool {
        self.caps.is_interactive && self.caps.is_tty && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            is_interactive: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(false, None, &Config::default(), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let ui = UiContext::from_caps(
            false,
            Some(ColorWhen::Always),
            &Config::default(),
            tty_caps(true),
        );
        assert!(ui.color);
    }

    #[test]
    fn cli_never_beats_config_always() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        let ui = UiContext::from_caps(false, Some(ColorWhen::Never), &config, tty_caps(false));
        assert!(!ui.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let mut config = Config::default();
        config.output.unicode = false;
        let ui = UiContext::from_caps(false, None, &config, tty_caps(false));
        assert!(!ui.unicode);
    }

    #[test]
    fn json_never_prompts_or_colors() {
        let ui = UiContext::from_caps(true, Some(ColorWhen::Always), &Config::default(), tty_caps(false));
        assert!(!ui.can_prompt());
        assert!(!ui.color);
    }
}
