use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use com360_core::AppError;

const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub jwt_secret: String,
    pub session_ttl_minutes: i64,
    pub session_cookie_name: String,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl ApiConfig {
    /// Loads configuration from process arguments and environment.
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup<F>(migrate_only: bool, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required_non_empty(&lookup, "DATABASE_URL")?;
        let jwt_secret = required_non_empty(&lookup, "JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::Validation(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )));
        }

        let session_ttl_minutes = parsed_or(&lookup, "SESSION_TTL_MINUTES", 480_i64)?;
        if session_ttl_minutes <= 0 {
            return Err(AppError::Validation(
                "SESSION_TTL_MINUTES must be positive".to_owned(),
            ));
        }

        let session_cookie_name = lookup("SESSION_COOKIE_NAME")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "jwt_token".to_owned());
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = parsed_or(&lookup, "API_PORT", 3001_u16)?;
        let db_max_connections = parsed_or(&lookup, "DB_MAX_CONNECTIONS", 10_u32)?;
        if db_max_connections == 0 {
            return Err(AppError::Validation(
                "DB_MAX_CONNECTIONS must be at least 1".to_owned(),
            ));
        }
        let db_acquire_timeout_seconds = parsed_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECONDS", 5_u64)?;

        Ok(Self {
            migrate_only,
            database_url,
            jwt_secret,
            session_ttl_minutes,
            session_cookie_name,
            frontend_url,
            api_host,
            api_port,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(db_acquire_timeout_seconds),
        })
    }

    /// Returns the socket address the server binds to.
    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let ip = IpAddr::from_str(&self.api_host)
            .map_err(|error| AppError::Validation(format!("invalid API_HOST: {error}")))?;
        Ok(SocketAddr::from((ip, self.api_port)))
    }
}

fn required_non_empty<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn parsed_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::Validation(format!("invalid {name}: '{value}'"))),
        None => Ok(default),
    }
}
