use crate::portfolio::domain::entities::Theme;

/// Receives theme changes so they can be reflected in global presentation
/// styling (e.g. toggling a `dark` class on the document root).
pub trait ThemeObserver: Send + Sync {
    fn theme_changed(&self, theme: Theme);
}
