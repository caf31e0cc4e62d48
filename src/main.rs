use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod camera;
mod components;
mod config;
mod database;
mod error;
mod filesystem;
mod i18n;
mod image_processing;
mod models;
mod services;

use components::{AccountScreen, NavigationBar, ProfileScreen, ScanScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("ecolife"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

/// Bottom navigation tabs
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Screen {
    Scan,
    Profile,
    Account,
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    use_context_provider(config::load_config);
    let mut current_screen = use_signal(|| Screen::Scan);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Scan => rsx! {
                        ScanScreen {}
                    },
                    Screen::Profile => rsx! {
                        ProfileScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Account => rsx! {
                        AccountScreen {}
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}
