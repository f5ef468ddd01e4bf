use crate::config::SecretProvider;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Password gate in front of the feedback inbox.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    state: AdminState,
}

impl AdminGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AdminState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == AdminState::LoggedIn
    }

    /// Exact, case-sensitive comparison against the configured secret.
    /// A failed attempt never changes the current state.
    pub fn login(&mut self, candidate: &str, secrets: &dyn SecretProvider) -> AppResult<()> {
        let Some(secret) = secrets.admin_password() else {
            return Err(AppError::SecretMissing);
        };

        if candidate == secret {
            self.state = AdminState::LoggedIn;
            Ok(())
        } else {
            Err(AppError::AuthFailed)
        }
    }

    pub fn logout(&mut self) {
        self.state = AdminState::LoggedOut;
    }

    /// Fails with `AdminRequired` unless logged in.
    pub fn require(&self) -> AppResult<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(AppError::AdminRequired)
        }
    }
}
