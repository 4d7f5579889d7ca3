use serde::Deserialize;
use cradle_shared::Masked;

use crate::{CoreError, CoreResult};

/// The single administrator credential pair.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: Masked<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Masked(password.into()),
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn verify(&self, username: &str, password: &str) -> CoreResult<()> {
        if username != self.username || password != self.password.expose() {
            tracing::warn!(username, "Rejected admin login");
            return Err(CoreError::AuthenticationError("Invalid credentials".into()));
        }
        Ok(())
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin", "isabelle_isadora_2025")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pair_accepted() {
        let admin = AdminCredentials::default();
        assert!(admin.verify("admin", "isabelle_isadora_2025").is_ok());
    }

    #[test]
    fn test_variations_rejected() {
        let admin = AdminCredentials::default();
        for (user, pass) in [
            ("Admin", "isabelle_isadora_2025"),
            ("ADMIN", "isabelle_isadora_2025"),
            ("admin", "ISABELLE_ISADORA_2025"),
            ("admin", ""),
            ("", ""),
        ] {
            assert!(matches!(admin.verify(user, pass), Err(CoreError::AuthenticationError(_))));
        }
    }

    #[test]
    fn test_debug_masks_password() {
        let admin = AdminCredentials::new("admin", "secret");
        assert!(!format!("{:?}", admin).contains("secret"));
    }
}
