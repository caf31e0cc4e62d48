//! # EcoLife Auth
//!
//! Account authentication for the EcoLife backend.
//!
//! This crate provides:
//! - Username/password login and account registration
//! - Form validation shared by the UI and programmatic callers
//! - A Dioxus form component that reports the issued session token
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on talking to the auth endpoints. It does **not**:
//! - Persist the session token (handled by the application)
//! - Fetch profile or impact data (handled by the application)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use ecolife_auth::{AuthService, AuthComponent};
//!
//! // Programmatic usage
//! let service = AuthService::new("http://127.0.0.1:5500".to_string());
//! let session = service.login("maria", "secret").await?;
//!
//! // UI component usage
//! AuthComponent {
//!     api_base: "http://127.0.0.1:5500".to_string(),
//!     on_success: move |session| {
//!         // Store session.token
//!     },
//! }
//! ```

pub mod component;
pub mod models;
pub mod service;

pub use component::{AuthComponent, AuthLabels, AuthProps};
pub use models::{AuthMode, AuthSession, AuthState, LoginRequest, RegisterRequest};
pub use service::{validate_form, AuthError, AuthService};
