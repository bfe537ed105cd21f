/// Secret used when configuration does not override it.
pub const DEFAULT_ADMIN_SECRET: &str = "admin123";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSession {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Client-side editing gate.
///
/// This only decides whether editing affordances are shown. It is NOT an
/// authorization boundary: store mutations never consult it, and the secret
/// is compared in plain text. Session state is never persisted, so every new
/// gate starts logged out.
#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: String,
    session: AdminSession,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            session: AdminSession::LoggedOut,
        }
    }

    pub fn session(&self) -> AdminSession {
        self.session
    }

    pub fn is_active(&self) -> bool {
        self.session == AdminSession::LoggedIn
    }

    /// Logged in: always logs out and returns true, whatever was supplied.
    /// Logged out: logs in and returns true only on an exact secret match.
    pub fn toggle(&mut self, secret: Option<&str>) -> bool {
        match self.session {
            AdminSession::LoggedIn => {
                self.session = AdminSession::LoggedOut;
                true
            }
            AdminSession::LoggedOut => {
                if secret == Some(self.secret.as_str()) {
                    self.session = AdminSession::LoggedIn;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn logout(&mut self) {
        self.session = AdminSession::LoggedOut;
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_SECRET)
    }
}
