//! Admin secret lookup.
//!
//! The admin gate never reads configuration on its own: it is handed a
//! `SecretProvider` resolved once at startup.

use crate::config::Config;
use std::env;

/// Environment variable that overrides `admin_password` from the config file.
pub const ADMIN_PASSWORD_ENV: &str = "MEALTALLY_ADMIN_PASSWORD";

pub trait SecretProvider {
    /// The configured admin password, if any.
    fn admin_password(&self) -> Option<&str>;
}

/// Secret taken from the environment first, then from the config file.
#[derive(Debug, Clone, Default)]
pub struct EnvOrConfigSecrets {
    admin_password: Option<String>,
}

impl EnvOrConfigSecrets {
    pub fn resolve(cfg: &Config) -> Self {
        let admin_password = env::var(ADMIN_PASSWORD_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| cfg.admin_password.clone().filter(|s| !s.is_empty()));

        Self { admin_password }
    }
}

impl SecretProvider for EnvOrConfigSecrets {
    fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }
}

/// Fixed secret, handy for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticSecret(pub String);

impl SecretProvider for StaticSecret {
    fn admin_password(&self) -> Option<&str> {
        Some(&self.0)
    }
}
