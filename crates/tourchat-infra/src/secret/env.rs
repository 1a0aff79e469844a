//! Environment variable secret provider.
//!
//! Read-only: keys are set through the shell, never through tourchat.
//! A variable that is unset, blank, or not valid Unicode counts as missing.

use secrecy::SecretString;

#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up `name` in the process environment.
    pub fn get(&self, name: &str) -> Option<SecretString> {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => {
                Some(SecretString::from(value.trim().to_string()))
            }
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(var = name, "Ignoring non-Unicode secret variable");
                None
            }
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_env_provider_get_existing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("TOURCHAT_TEST_SECRET_1", "  test-value-123 ") };

        let provider = EnvSecretProvider::new();
        let secret = provider.get("TOURCHAT_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "test-value-123");

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("TOURCHAT_TEST_SECRET_1") };
    }

    #[test]
    fn test_env_provider_get_missing() {
        let provider = EnvSecretProvider::new();
        assert!(provider.get("NONEXISTENT_VAR_XYZ_123").is_none());
        assert!(!provider.is_set("NONEXISTENT_VAR_XYZ_123"));
    }

    #[test]
    fn test_env_provider_blank_is_missing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("TOURCHAT_TEST_SECRET_BLANK", "   ") };

        assert!(EnvSecretProvider::new().get("TOURCHAT_TEST_SECRET_BLANK").is_none());

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("TOURCHAT_TEST_SECRET_BLANK") };
    }
}
