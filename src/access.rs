//! Access Control Module
//!
//! Restricts configuration changes to a single administrator principal.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CacheError, Result};

// == Principal ==
/// Caller identity as presented by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Access Controller ==
/// Holds the admin identity fixed at construction.
#[derive(Debug, Clone)]
pub struct AccessController {
    admin: Principal,
}

impl AccessController {
    pub fn new(admin: Principal) -> Self {
        Self { admin }
    }

    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    // == Authorize ==
    /// Succeeds only for the admin principal.
    pub fn authorize(&self, caller: &Principal) -> Result<()> {
        if caller == &self.admin {
            Ok(())
        } else {
            warn!(caller = %caller, "rejected privileged call from non-admin");
            Err(CacheError::Unauthorized(format!(
                "caller '{}' is not the cache admin",
                caller
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_is_authorized() {
        let access = AccessController::new(Principal::from("deployer"));
        assert!(access.authorize(&Principal::from("deployer")).is_ok());
    }

    #[test]
    fn test_non_admin_is_rejected() {
        let access = AccessController::new(Principal::from("deployer"));

        let result = access.authorize(&Principal::from("wallet_1"));

        match result {
            Err(err @ CacheError::Unauthorized(_)) => assert_eq!(err.code(), 100),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_match_is_exact() {
        let access = AccessController::new(Principal::from("deployer"));
        assert!(access.authorize(&Principal::from("Deployer")).is_err());
        assert!(access.authorize(&Principal::from("deployer ")).is_err());
        assert!(access.authorize(&Principal::from("")).is_err());
    }
}
