use std::sync::Arc;

use com360_core::{Actor, AppError, AppResult};

use crate::SessionTokenVerifier;

/// Resolves the caller's identity from the session token.
#[derive(Clone)]
pub struct IdentityResolver {
    verifier: Arc<dyn SessionTokenVerifier>,
}

impl IdentityResolver {
    /// Creates a resolver backed by a signature-verifying token port.
    #[must_use]
    pub fn new(verifier: Arc<dyn SessionTokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Returns the actor for a present, valid token.
    ///
    /// An absent or blank token fails with `AppError::Unauthorized`, as does
    /// anything the verifier rejects.
    pub fn resolve(&self, token: Option<&str>) -> AppResult<Actor> {
        let token = token
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Unauthorized("session token is missing".to_owned()))?;

        self.verifier.verify(token)
    }
}
