use crate::config::ApiConfig;
use crate::database;
use crate::services::api_client::{ApiClient, HealthStatus};
use crate::services::token_store;
use dioxus::prelude::*;
use dioxus_i18n::t;
use ecolife_auth::{AuthComponent, AuthLabels, AuthSession};

#[derive(Clone, PartialEq)]
enum HealthState {
    Checking,
    Online(HealthStatus),
    Offline(String),
}

#[component]
fn ServerHealthCard() -> Element {
    let config = use_context::<ApiConfig>();
    let mut health = use_signal(|| HealthState::Checking);
    let api_base = config.api_base.clone();

    let check = use_callback(move |_: ()| {
        let config = config.clone();
        health.set(HealthState::Checking);
        spawn(async move {
            let result = match ApiClient::new(config) {
                Ok(client) => client.health().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(status) if status.is_healthy() => health.set(HealthState::Online(status)),
                Ok(status) => health.set(HealthState::Offline(status.status)),
                Err(e) => {
                    log::warn!("Health check failed: {}", e);
                    health.set(HealthState::Offline(e.user_message()));
                }
            }
        });
    });

    // Check on mount
    use_effect(move || check.call(()));

    rsx! {
        div { style: "background: white; border-radius: 12px; padding: 16px; margin-top: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 16px; color: #111827;", {t!("health-title")} }
                button {
                    style: "padding: 6px 12px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; font-size: 13px;",
                    onclick: move |_| check.call(()),
                    {t!("action-retry")}
                }
            }
            div { style: "margin-top: 6px; font-size: 12px; color: #9CA3AF;", "{api_base}" }
            match health() {
                HealthState::Checking => rsx! {
                    div { style: "margin-top: 10px; color: #6B7280;", {t!("health-checking")} }
                },
                HealthState::Online(status) => rsx! {
                    div { style: "margin-top: 10px; color: #059669; font-weight: 600;",
                        {t!("health-online", version: status.version.clone())}
                    }
                    if !status.supported_formats.is_empty() {
                        div { style: "font-size: 12px; color: #6B7280;", {status.supported_formats.join(", ")} }
                    }
                },
                HealthState::Offline(reason) => rsx! {
                    div { style: "margin-top: 10px; color: #DC2626; font-weight: 600;", {t!("health-offline")} }
                    div { style: "font-size: 12px; color: #6B7280;", "{reason}" }
                },
            }
        }
    }
}

fn auth_labels() -> AuthLabels {
    AuthLabels {
        login_title: t!("auth-login-title"),
        register_title: t!("auth-register-title"),
        username: t!("auth-username"),
        email: t!("auth-email"),
        password: t!("auth-password"),
        login_button: t!("auth-login-button"),
        register_button: t!("auth-register-button"),
        submitting: t!("auth-submitting"),
        switch_to_register: t!("auth-switch-to-register"),
        switch_to_login: t!("auth-switch-to-login"),
        login_success: t!("auth-login-success"),
        register_success: t!("auth-register-success"),
        error_title: t!("auth-error-title"),
    }
}

#[component]
pub fn AccountScreen() -> Element {
    let config = use_context::<ApiConfig>();
    let mut signed_in = use_signal(|| false);
    let mut error = use_signal(String::new);

    // Load stored session on mount
    use_effect(move || match database::init_database() {
        Ok(conn) => match token_store::load_token(&conn) {
            Ok(token) => signed_in.set(token.is_some()),
            Err(e) => error.set(e.user_message()),
        },
        Err(e) => error.set(e.user_message()),
    });

    let on_success = move |session: AuthSession| {
        let saved = database::init_database().and_then(|conn| token_store::save_token(&conn, &session.token));
        match saved {
            Ok(()) => {
                log::info!("Signed in as {}", session.username);
                error.set(String::new());
                signed_in.set(true);
            }
            Err(e) => {
                log::error!("Failed to store session token: {}", e);
                error.set(e.user_message());
            }
        }
    };

    let logout = move |_: Event<MouseData>| {
        match database::init_database().and_then(|conn| token_store::clear_token(&conn)) {
            Ok(()) => signed_in.set(false),
            Err(e) => error.set(e.user_message()),
        }
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #F9FAFB;",
            h1 { style: "color: #047857; margin: 8px 0 16px; font-size: 24px; font-weight: 700;",
                {t!("account-title")}
            }

            if !error().is_empty() {
                div { style: "padding: 12px; margin-bottom: 16px; border-radius: 8px; background: #FEE2E2; color: #991B1B; font-size: 14px;",
                    "{error}"
                }
            }

            if signed_in() {
                div { style: "background: white; border-radius: 12px; padding: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",
                    p { style: "margin: 0 0 12px; color: #374151;", {t!("account-signed-in")} }
                    button {
                        style: "padding: 10px 20px; font-size: 15px; border-radius: 8px; border: 1px solid #DC2626; background: white; color: #DC2626;",
                        onclick: logout,
                        {t!("account-logout")}
                    }
                }
            } else {
                AuthComponent {
                    api_base: config.api_base.clone(),
                    timeout: config.auth_timeout(),
                    on_success,
                    labels: auth_labels(),
                }
            }

            ServerHealthCard {}
        }
    }
}
