use crate::config::ApiConfig;
use crate::database;
use crate::models::{ErrorResult, ImpactData, ProfileView, UserProfile};
use crate::services::api_client::ApiClient;
use crate::services::presentation::{
    breakdown_share, format_label, progress_percent, score_color, waste_color,
};
use crate::services::profile_service;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProfileTab {
    Stats,
    Impact,
    Achievements,
}

const CARD_STYLE: &str = "background: white; border-radius: 12px; padding: 16px; margin-bottom: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);";

#[component]
pub fn ProfileScreen(on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<ApiConfig>();
    let mut view = use_signal(|| None::<ProfileView>);
    let mut tab = use_signal(|| ProfileTab::Stats);

    let load = use_callback(move |_: ()| {
        let config = config.clone();
        view.set(None);
        spawn(async move {
            let loaded = match (database::init_database(), ApiClient::new(config)) {
                (Ok(conn), Ok(client)) => profile_service::load_profile_view(&conn, &client).await,
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Profile screen setup failed: {}", e);
                    ProfileView::Failed(ErrorResult::new(e.user_message()))
                }
            };
            view.set(Some(loaded));
        });
    });

    // Load on mount
    use_effect(move || load.call(()));

    let tab_button = |target: ProfileTab| {
        if tab() == target {
            "flex: 1; padding: 10px; border: none; border-bottom: 3px solid #059669; background: none; color: #047857; font-weight: 600; font-size: 14px;"
        } else {
            "flex: 1; padding: 10px; border: none; border-bottom: 3px solid transparent; background: none; color: #6B7280; font-size: 14px;"
        }
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #F9FAFB;",
            h1 { style: "color: #047857; margin: 8px 0 16px; font-size: 24px; font-weight: 700;",
                {t!("profile-title")}
            }

            match view() {
                None => rsx! {
                    div { style: "text-align: center; color: #6B7280; padding: 40px 0;", {t!("profile-loading")} }
                },
                Some(ProfileView::Unauthenticated) => rsx! {
                    div { style: "{CARD_STYLE} text-align: center;",
                        p { style: "color: #374151; margin: 0 0 12px;", {t!("profile-signed-out")} }
                        button {
                            class: "btn-success",
                            style: "padding: 10px 20px; font-size: 15px;",
                            onclick: move |_| on_navigate.call(Screen::Account),
                            {t!("profile-sign-in")}
                        }
                    }
                },
                Some(ProfileView::Failed(error)) => rsx! {
                    div { style: "{CARD_STYLE} border-left: 4px solid #DC2626;",
                        div { style: "color: #DC2626; font-weight: 600;", "{error.message}" }
                        if let Some(details) = error.details {
                            div { style: "font-size: 12px; color: #6B7280; margin-top: 4px;", "{details}" }
                        }
                        button {
                            style: "margin-top: 12px; padding: 8px 16px; border-radius: 8px; border: 1px solid #D1D5DB; background: white;",
                            onclick: move |_| load.call(()),
                            {t!("action-retry")}
                        }
                    }
                },
                Some(ProfileView::Loaded { profile, impact }) => rsx! {
                    ProfileHeader { profile: profile.clone(), impact: impact.clone() }

                    div { style: "display: flex; background: white; border-radius: 10px; margin-bottom: 16px;",
                        button { style: tab_button(ProfileTab::Stats), onclick: move |_| tab.set(ProfileTab::Stats), {t!("profile-tab-stats")} }
                        button { style: tab_button(ProfileTab::Impact), onclick: move |_| tab.set(ProfileTab::Impact), {t!("profile-tab-impact")} }
                        button { style: tab_button(ProfileTab::Achievements), onclick: move |_| tab.set(ProfileTab::Achievements), {t!("profile-tab-achievements")} }
                    }

                    match tab() {
                        ProfileTab::Stats => rsx! { StatsTab { profile } },
                        ProfileTab::Impact => rsx! { ImpactTab { impact } },
                        ProfileTab::Achievements => rsx! { AchievementsTab { profile } },
                    }
                },
            }
        }
    }
}

#[component]
fn ProfileHeader(profile: UserProfile, impact: ImpactData) -> Element {
    let rank = impact.environmental_rank;
    rsx! {
        div { style: "{CARD_STYLE} display: flex; align-items: center; gap: 14px;",
            div { style: "width: 56px; height: 56px; border-radius: 28px; background: #ECFDF5; display: flex; align-items: center; justify-content: center; font-size: 28px;",
                "{rank.icon}"
            }
            div { style: "flex: 1;",
                div { style: "font-size: 20px; font-weight: 700; color: #111827;", "{profile.username}" }
                if !profile.email.is_empty() {
                    div { style: "font-size: 13px; color: #6B7280;", "{profile.email}" }
                }
                if !rank.level.is_empty() {
                    span { style: "display: inline-block; margin-top: 4px; padding: 2px 10px; border-radius: 10px; background: #059669; color: white; font-size: 12px;",
                        "{rank.level}"
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: String, value: String) -> Element {
    rsx! {
        div { style: "flex: 1; min-width: 120px; background: #F9FAFB; border-radius: 10px; padding: 12px;",
            div { style: "font-size: 20px; font-weight: 700; color: #111827;", "{value}" }
            div { style: "font-size: 12px; color: #6B7280;", "{label}" }
        }
    }
}

#[component]
fn StatsTab(profile: UserProfile) -> Element {
    let score_hex = score_color(profile.recycling_score).hex();
    let score_width = progress_percent(profile.recycling_score, 10.0);

    rsx! {
        div { style: CARD_STYLE,
            div { style: "display: flex; flex-wrap: wrap; gap: 10px;",
                StatTile { label: t!("profile-total-scans"), value: profile.total_scans.to_string() }
                StatTile { label: t!("profile-co2-saved"), value: format!("{:.1} kg", profile.co2_saved) }
            }

            div { style: "margin-top: 16px;",
                div { style: "display: flex; justify-content: space-between; font-size: 14px; color: #374151;",
                    span { {t!("profile-recycling-score")} }
                    span { style: "font-weight: 700; color: {score_hex};", "{profile.recycling_score:.1}/10" }
                }
                div { style: "height: 8px; background: #E5E7EB; border-radius: 4px; margin-top: 4px;",
                    div { style: "height: 8px; width: {score_width}%; background: {score_hex}; border-radius: 4px;" }
                }
            }

            if !profile.member_since.is_empty() {
                div { style: "margin-top: 12px; font-size: 13px; color: #6B7280;",
                    {t!("profile-member-since", date: profile.member_since.clone())}
                }
            }
            if !profile.location.is_empty() {
                div { style: "font-size: 13px; color: #6B7280;", "📍 {profile.location}" }
            }
        }

        div { style: CARD_STYLE,
            h3 { style: "margin: 0 0 10px; font-size: 16px; color: #111827;", {t!("profile-breakdown")} }
            if profile.waste_breakdown.is_empty() {
                div { style: "color: #9CA3AF; font-size: 14px;", {t!("profile-breakdown-empty")} }
            }
            for entry in profile.waste_breakdown.iter() {
                div { style: "margin-bottom: 10px;",
                    div { style: "display: flex; justify-content: space-between; font-size: 13px; color: #374151;",
                        span { {format_label(&entry.waste_type)} }
                        span { "{entry.count}" }
                    }
                    div { style: "height: 6px; background: #E5E7EB; border-radius: 3px; margin-top: 3px;",
                        div {
                            style: format!(
                                "height: 6px; width: {}%; background: {}; border-radius: 3px;",
                                breakdown_share(entry.count, profile.total_scans),
                                waste_color(&entry.waste_type).hex(),
                            ),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ImpactTab(impact: ImpactData) -> Element {
    let rank = impact.environmental_rank.clone();
    let eq = impact.equivalents.clone();

    rsx! {
        div { style: CARD_STYLE,
            div { style: "display: flex; flex-wrap: wrap; gap: 10px;",
                StatTile { label: t!("impact-co2"), value: format!("{:.1} kg", impact.total_co2_saved_kg) }
                StatTile { label: t!("impact-water"), value: format!("{:.0} L", impact.total_water_saved_liters) }
                StatTile { label: t!("impact-energy"), value: format!("{:.1} kWh", impact.total_energy_saved_kwh) }
            }
        }

        div { style: CARD_STYLE,
            h3 { style: "margin: 0 0 10px; font-size: 16px; color: #111827;", {t!("impact-equivalents")} }
            ul { style: "margin: 0; padding-left: 20px; font-size: 14px; color: #374151;",
                li { {t!("impact-trees", count: format!("{:.1}", eq.trees_planted))} }
                li { {t!("impact-cars", count: format!("{:.1}", eq.cars_off_road_days))} }
                li { {t!("impact-phones", count: format!("{:.0}", eq.smartphones_charged))} }
                li { {t!("impact-miles", count: format!("{:.1}", eq.miles_not_driven))} }
            }
        }

        div { style: CARD_STYLE,
            div { style: "display: flex; align-items: center; gap: 10px;",
                span { style: "font-size: 28px;", "{rank.icon}" }
                div { style: "font-size: 16px; font-weight: 600; color: #047857;", "{rank.level}" }
            }
            match rank.next_level {
                Some(next) => rsx! {
                    div { style: "margin-top: 10px; font-size: 13px; color: #6B7280;",
                        {t!("impact-next-rank", current: format!("{:.1}", impact.total_co2_saved_kg), target: format!("{:.0}", next))}
                    }
                    div { style: "height: 8px; background: #E5E7EB; border-radius: 4px; margin-top: 4px;",
                        div {
                            style: format!(
                                "height: 8px; width: {}%; background: #059669; border-radius: 4px;",
                                progress_percent(impact.total_co2_saved_kg, next),
                            ),
                        }
                    }
                },
                None => rsx! {
                    div { style: "margin-top: 10px; font-size: 13px; color: #047857;", {t!("impact-top-rank")} }
                },
            }
        }
    }
}

#[component]
fn AchievementsTab(profile: UserProfile) -> Element {
    rsx! {
        div { style: CARD_STYLE,
            if profile.achievements.is_empty() {
                div { style: "color: #9CA3AF; font-size: 14px;", {t!("achievements-empty")} }
            }
            for achievement in profile.achievements.iter() {
                div { style: "display: flex; align-items: center; gap: 12px; padding: 10px 0; border-bottom: 1px solid #F3F4F6;",
                    span { style: "font-size: 24px;", "🏆" }
                    div {
                        div { style: "font-weight: 600; color: #111827;", {format_label(&achievement.achievement_type)} }
                        div { style: "font-size: 12px; color: #6B7280;",
                            {t!("achievements-earned", date: achievement.earned_on())}
                        }
                    }
                }
            }
        }
    }
}
