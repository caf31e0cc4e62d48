use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful response of either auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body returned by the backend on failure
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Session issued after a successful login or registration
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub username: String,
    pub token: String,
}

/// Which form the user is filling in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// State of the authentication form
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Waiting for input
    Editing,
    /// Request in flight
    Submitting,
    /// Authenticated
    Success(AuthSession),
    /// Failed with error message
    Error(String),
}
