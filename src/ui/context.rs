use crate::config::{ColorMode, Config};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one process run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Use rich terminal prompts (hidden password input, themed confirm)
    pub rich_prompts: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorMode>, config: &Config) -> Self {
        Self::from_caps(cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorMode>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            caps,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
            rich_prompts: caps.stdin_is_tty && caps.is_tty,
        }
    }

    /// Plain output: no color, ASCII icons
    pub fn plain() -> Self {
        Self {
            caps: TerminalCapabilities {
                is_tty: false,
                stdin_is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            unicode: false,
            rich_prompts: false,
        }
    }
}
