//! Environment access behind a trait, so handlers read the process
//! environment at call time while tests supply their own values.

use std::collections::HashMap;
use std::env;

/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

/// Zero-sized type — delegates to `std::env`.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// Fixed set of variables, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemEnv {
    vars: HashMap<String, String>,
}

impl MemEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl ReadEnv for MemEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }
}

/// Read a secret, treating an empty value the same as an unset one.
pub fn read_secret<E: ReadEnv + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let system_env = SystemEnv;
        let std_result = std::env::var("PATH");
        let provider_result = system_env.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_mem_env_lookup() {
        let env = MemEnv::new().with("ANTHROPIC_API_KEY", "sk-ant-test");
        assert_eq!(env.var("ANTHROPIC_API_KEY").unwrap(), "sk-ant-test");
        assert!(matches!(env.var("OTHER"), Err(env::VarError::NotPresent)));
    }

    #[test]
    fn test_read_secret_rejects_empty() {
        let env = MemEnv::new().with("EMPTY", "").with("SET", "value");
        assert_eq!(read_secret(&env, "EMPTY"), None);
        assert_eq!(read_secret(&env, "MISSING"), None);
        assert_eq!(read_secret(&env, "SET").as_deref(), Some("value"));
    }
}
