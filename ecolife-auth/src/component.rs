use crate::models::{AuthMode, AuthSession, AuthState};
use crate::service::{validate_form, AuthService};
use dioxus::prelude::*;
use std::time::Duration;

/// Props for the AuthComponent
#[derive(Props, Clone, PartialEq)]
pub struct AuthProps {
    /// Backend base URL
    pub api_base: String,
    /// Callback when login or registration succeeds
    pub on_success: EventHandler<AuthSession>,
    /// Request timeout for login and registration
    #[props(default = Duration::from_secs(15))]
    pub timeout: Duration,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<AuthLabels>,
}

/// Custom labels for the authentication UI
#[derive(Clone, PartialEq, Default)]
pub struct AuthLabels {
    pub login_title: String,
    pub register_title: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub login_button: String,
    pub register_button: String,
    pub submitting: String,
    pub switch_to_register: String,
    pub switch_to_login: String,
    pub login_success: String,
    pub register_success: String,
    pub error_title: String,
}

fn default_labels() -> AuthLabels {
    AuthLabels {
        login_title: "Welcome back".to_string(),
        register_title: "Create account".to_string(),
        username: "Username".to_string(),
        email: "Email".to_string(),
        password: "Password".to_string(),
        login_button: "Sign In".to_string(),
        register_button: "Sign Up".to_string(),
        submitting: "Please wait...".to_string(),
        switch_to_register: "Don't have an account? Sign up".to_string(),
        switch_to_login: "Already have an account? Sign in".to_string(),
        login_success: "Logged in successfully".to_string(),
        register_success: "Account created successfully".to_string(),
        error_title: "Authentication Error".to_string(),
    }
}

/// Login / registration form
///
/// Validates the input locally, calls the backend and hands the issued
/// session to `on_success`. Storing the token is up to the caller.
#[component]
pub fn AuthComponent(props: AuthProps) -> Element {
    let mut mode = use_signal(|| AuthMode::Login);
    let mut state = use_signal(|| AuthState::Editing);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let labels = props.labels.clone().unwrap_or_else(default_labels);

    let submit = {
        let api_base = props.api_base.clone();
        let on_success = props.on_success;
        let timeout = props.timeout;

        move |_| {
            if state() == AuthState::Submitting {
                return;
            }
            let current_mode = mode();
            let (user, mail, pass) = (username(), email(), password());

            if let Err(e) = validate_form(current_mode, &user, &mail, &pass) {
                state.set(AuthState::Error(e.to_string()));
                return;
            }

            state.set(AuthState::Submitting);
            let api_base = api_base.clone();

            spawn(async move {
                let service = AuthService::new(api_base).with_timeout(timeout);
                let result = match current_mode {
                    AuthMode::Login => service.login(&user, &pass).await,
                    AuthMode::Register => service.register(&user, &mail, &pass).await,
                };

                match result {
                    Ok(session) => {
                        password.set(String::new());
                        state.set(AuthState::Success(session.clone()));
                        on_success.call(session);
                    }
                    Err(e) => {
                        let message = e.to_string();
                        log::error!("Authentication failed: {}", message);
                        state.set(AuthState::Error(message));
                    }
                }
            });
        }
    };

    let is_login = mode() == AuthMode::Login;
    let submitting = state() == AuthState::Submitting;

    rsx! {
        div { class: "auth-form",
            h2 { style: "margin: 0 0 16px 0; font-size: 22px; color: #065F46;",
                if is_login { "{labels.login_title}" } else { "{labels.register_title}" }
            }

            input {
                class: "input",
                r#type: "text",
                placeholder: "{labels.username}",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            if !is_login {
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "{labels.email}",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            input {
                class: "input",
                r#type: "password",
                placeholder: "{labels.password}",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }

            button {
                class: "btn-primary",
                style: "width: 100%; margin-top: 8px;",
                disabled: submitting,
                onclick: submit,
                if submitting {
                    "{labels.submitting}"
                } else if is_login {
                    "{labels.login_button}"
                } else {
                    "{labels.register_button}"
                }
            }

            match state() {
                AuthState::Success(_) => rsx! {
                    div {
                        style: "margin-top: 12px; padding: 12px; background: #D1FAE5; border-radius: 8px; color: #065F46; text-align: center;",
                        if is_login { "{labels.login_success}" } else { "{labels.register_success}" }
                    }
                },
                AuthState::Error(error) => rsx! {
                    div {
                        style: "margin-top: 12px; padding: 12px; background: #FEE2E2; border-radius: 8px; color: #991B1B;",
                        p { style: "margin: 0 0 4px 0; font-weight: 600;", "{labels.error_title}" }
                        p { style: "margin: 0; font-size: 14px;", "{error}" }
                    }
                },
                _ => rsx! {},
            }

            button {
                class: "btn-link",
                style: "margin-top: 16px; width: 100%;",
                onclick: move |_| {
                    mode.set(mode().toggled());
                    state.set(AuthState::Editing);
                },
                if is_login { "{labels.switch_to_register}" } else { "{labels.switch_to_login}" }
            }
        }
    }
}
