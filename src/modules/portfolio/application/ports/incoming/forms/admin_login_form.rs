use crate::portfolio::application::ports::incoming::forms::form_errors::FormErrors;
use crate::portfolio::application::ports::outgoing::DurableStore;
use crate::portfolio::application::services::PortfolioStore;

pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password. Please try again.";

/// Admin login form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLoginCommand {
    password: String,
}

impl AdminLoginCommand {
    /// Only checks presence. The password is not trimmed: the secret
    /// comparison is exact.
    pub fn new(password: String) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        if password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.finish(|| Self { password })
    }

    /// Enters admin mode. Already being in admin mode counts as success and
    /// does not toggle it off, unlike [`PortfolioStore::toggle_admin_mode`],
    /// which logs out in that state.
    pub fn submit<S: DurableStore>(self, store: &mut PortfolioStore<S>) -> Result<(), FormErrors> {
        if store.is_admin_mode() {
            return Ok(());
        }

        if store.toggle_admin_mode(Some(&self.password)) {
            Ok(())
        } else {
            let mut errors = FormErrors::new();
            errors.add("password", INVALID_PASSWORD_MESSAGE);
            Err(errors)
        }
    }
}
