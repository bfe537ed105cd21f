use tracing::info;

use crate::portfolio::application::ports::outgoing::ThemeObserver;
use crate::portfolio::domain::entities::Theme;

/// Default observer when no presentation layer is attached: just logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingThemeObserver;

impl ThemeObserver for TracingThemeObserver {
    fn theme_changed(&self, theme: Theme) {
        info!(theme = %theme, "Theme applied");
    }
}
