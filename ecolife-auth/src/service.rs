use crate::models::{
    AuthMode, AuthResponse, AuthSession, ErrorBody, LoginRequest, RegisterRequest,
};
use std::time::Duration;

/// Error type for authentication operations
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    ValidationError(String),
    NetworkError(String),
    JsonError(String),
    TimeoutError,
    ServerError(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::ValidationError(msg) => write!(f, "{}", msg),
            AuthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AuthError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            AuthError::TimeoutError => write!(f, "Authentication timeout"),
            AuthError::ServerError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Checks that every field required by `mode` is filled in
pub fn validate_form(
    mode: AuthMode,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    let missing_email = mode == AuthMode::Register && email.trim().is_empty();
    if username.trim().is_empty() || password.is_empty() || missing_email {
        return Err(AuthError::ValidationError(
            "Please fill in all fields".to_string(),
        ));
    }
    Ok(())
}

/// EcoLife authentication service
pub struct AuthService {
    api_base: String,
    timeout: Duration,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(api_base: String) -> Self {
        Self {
            api_base,
            timeout: Duration::from_secs(15),
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    fn client(&self) -> Result<reqwest::Client, AuthError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent("EcoLifeAuth/0.1.0")
            .build()
            .map_err(|e| AuthError::NetworkError(format!("Client build failed: {}", e)))
    }

    /// Log in with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AuthError> {
        validate_form(AuthMode::Login, username, "", password)?;
        let body = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        self.submit("/auth/login", &body, &body.username).await
    }

    /// Create a new account; the backend signs the new user in directly
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        validate_form(AuthMode::Register, username, email, password)?;
        let body = RegisterRequest {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.submit("/auth/register", &body, &body.username).await
    }

    async fn submit<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        username: &str,
    ) -> Result<AuthSession, AuthError> {
        let url = self.endpoint(path);
        log::debug!("Auth request to {}", url);

        let response = self
            .client()?
            .post(&url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::TimeoutError
                } else {
                    AuthError::NetworkError(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // The backend reports failures as {"error": "..."}
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Server returned status: {}", status));
            log::warn!("Auth request rejected ({}): {}", status, message);
            return Err(AuthError::ServerError(message));
        }

        let result = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::JsonError(format!("Failed to parse response: {}", e)))?;

        if result.token.is_empty() {
            return Err(AuthError::JsonError("Empty token in response".to_string()));
        }

        log::info!("Authentication successful");
        Ok(AuthSession {
            username: result.username.unwrap_or_else(|| username.to_string()),
            token: result.token,
        })
    }
}
