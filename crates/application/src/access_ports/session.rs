use com360_core::{Actor, AppResult};

/// Port for turning a raw session token into an authenticated actor.
///
/// Implementations must verify the token signature against a server-held
/// secret and reject expired tokens with `AppError::Unauthorized`.
pub trait SessionTokenVerifier: Send + Sync {
    /// Verifies the token and returns the actor it was issued for.
    fn verify(&self, token: &str) -> AppResult<Actor>;
}
