use crate::components::icons::{CameraIcon, KeyIcon, UserIcon};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

const ACTIVE_COLOR: &str = "#059669";
const INACTIVE_COLOR: &str = "#6B7280";

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 8px 10px; background: #ffffff; border-top: 1px solid #e5e7eb;";

    let tab_style = |screen: Screen| {
        if current_screen == screen {
            "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 2px; padding: 8px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 12px; background: #ECFDF5; color: #059669; font-weight: 600;"
        } else {
            "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 2px; padding: 8px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 12px; background: #ffffff; color: #6B7280;"
        }
    };
    let icon_color = |screen: Screen| {
        if current_screen == screen {
            ACTIVE_COLOR.to_string()
        } else {
            INACTIVE_COLOR.to_string()
        }
    };

    rsx! {
        div {
            style: "{nav_style}",

            button {
                style: tab_style(Screen::Scan),
                onclick: move |_| on_navigate.call(Screen::Scan),
                CameraIcon { size: 22, color: icon_color(Screen::Scan) }
                {t!("nav-scan")}
            }

            button {
                style: tab_style(Screen::Profile),
                onclick: move |_| on_navigate.call(Screen::Profile),
                UserIcon { size: 22, color: icon_color(Screen::Profile) }
                {t!("nav-profile")}
            }

            button {
                style: tab_style(Screen::Account),
                onclick: move |_| on_navigate.call(Screen::Account),
                KeyIcon { size: 22, color: icon_color(Screen::Account) }
                {t!("nav-account")}
            }
        }
    }
}
