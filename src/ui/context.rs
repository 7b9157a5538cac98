use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use ftpush::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            _ if json => false,
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Whether interactive prompts may be drawn in color
    pub fn colored_prompts(&self) -> bool {
        self.color && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(supports_color: bool, is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            interactive: !is_ci,
            supports_color,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn auto_follows_terminal() {
        assert!(UiContext::from_caps(false, 0, None, caps(true, false)).color);
        assert!(!UiContext::from_caps(false, 0, None, caps(true, true)).color);
        assert!(!UiContext::from_caps(false, 0, Some(ColorWhen::Auto), caps(false, false)).color);
    }

    #[test]
    fn explicit_color_overrides_detection() {
        assert!(UiContext::from_caps(false, 0, Some(ColorWhen::Always), caps(false, true)).color);
        assert!(!UiContext::from_caps(false, 0, Some(ColorWhen::Never), caps(true, false)).color);
    }

    #[test]
    fn json_never_colors() {
        let ui = UiContext::from_caps(true, 0, Some(ColorWhen::Always), caps(true, false));
        assert!(!ui.color);
        assert!(!ui.colored_prompts());
    }
}
