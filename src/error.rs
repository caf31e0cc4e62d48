use std::fmt;

/// Central error types for the EcoLife app
#[derive(Debug)]
pub enum AppError {
    /// Database error (rusqlite)
    Database(rusqlite::Error),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Transport failure (connection refused, DNS, TLS, ...)
    Network(String),
    /// Request exceeded its configured timeout
    Timeout(std::time::Duration),
    /// Backend answered with an application error
    Backend { status: u16, message: String },
    /// Response body did not match any known result shape
    MalformedResponse(String),
    /// Permission denied (camera or gallery)
    PermissionDenied(String),
    /// Image decoding or encoding failed
    ImageProcessing(String),
    /// Configuration file could not be read or parsed
    Config(String),
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// A request for this screen is already in flight
    Busy,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Timeout(after) => {
                write!(f, "Request timed out after {}s", after.as_secs_f32())
            }
            AppError::Backend { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            AppError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            AppError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            AppError::ImageProcessing(msg) => write!(f, "Image processing error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Busy => write!(f, "A request is already in progress"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedResponse(e.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(e: image::ImageError) -> Self {
        AppError::ImageProcessing(e.to_string())
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A storage error occurred. Please try again.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check app permissions.".to_string()
            }
            AppError::Network(_) | AppError::Timeout(_) => {
                crate::services::discriminator::CONNECTIVITY_MESSAGE.to_string()
            }
            AppError::Backend { message, .. } => message.clone(),
            AppError::MalformedResponse(_) => {
                crate::services::discriminator::PARSE_FAILURE_MESSAGE.to_string()
            }
            AppError::PermissionDenied(msg) => format!("Permission required: {}", msg),
            AppError::ImageProcessing(_) => "Error processing image.".to_string(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
            AppError::Validation(msg) => msg.clone(),
            AppError::Busy => "Please wait for the current analysis to finish.".to_string(),
        }
    }
}
