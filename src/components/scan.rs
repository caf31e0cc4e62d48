use crate::camera;
use crate::components::icons::{BarcodeIcon, CameraIcon, GalleryIcon};
use crate::components::ResultCard;
use crate::config::ApiConfig;
use crate::image_processing;
use crate::models::{ClassificationResult, ImagePayload, ScanMode};
use crate::services::api_client::ApiClient;
use crate::services::discriminator::Contract;
use crate::services::scan_state::{RequestKind, ScanMachine, ScanState};
use dioxus::prelude::*;
use dioxus_i18n::t;

/// Where the image of a submission comes from
#[derive(Debug, Clone, Copy, PartialEq)]
enum ImageSource {
    Camera,
    Gallery,
    /// No image; the product endpoint answers with its sample analysis
    Demo,
}

#[component]
pub fn ScanScreen() -> Element {
    let config = use_context::<ApiConfig>();
    let mut mode = use_signal(|| config.default_mode);
    let mut machine = use_signal(ScanMachine::new);
    let mut alert = use_signal(|| None::<String>);
    // data URL of the image being analyzed
    let mut preview = use_signal(|| None::<String>);

    let start = use_callback(move |(kind, source): (RequestKind, ImageSource)| {
        if machine.read().state().is_submitting() {
            return;
        }
        alert.set(None);

        // Permission problems stay on the screen as an alert; no request is made
        if source == ImageSource::Camera {
            if let Err(e) = camera::ensure_camera_permission() {
                log::warn!("Camera unavailable: {}", e);
                alert.set(Some(e.user_message()));
                return;
            }
        }
        let picked = match source {
            ImageSource::Camera => camera::capture_photo().map(Some),
            ImageSource::Gallery => camera::pick_image().map(Some),
            ImageSource::Demo => Ok(None),
        };
        let path = match picked {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Image acquisition failed: {}", e);
                alert.set(Some(e.user_message()));
                return;
            }
        };

        let Ok(ticket) = machine.write().begin(kind) else {
            return;
        };
        preview.set(None);
        let contract = if mode() == ScanMode::Legacy {
            Contract::Legacy
        } else {
            Contract::Canonical
        };
        let config = config.clone();

        spawn(async move {
            let payload = match path {
                Some(path) => match image_processing::encode_image_file(&path) {
                    Ok(data) => {
                        if machine.read().is_pending(ticket) {
                            preview.set(Some(image_processing::jpeg_data_url(&data)));
                        }
                        ImagePayload::Base64(data)
                    }
                    Err(e) => {
                        log::error!("Failed to encode {:?}: {}", path, e);
                        machine.write().abort(ticket, e);
                        return;
                    }
                },
                None => ImagePayload::Demo,
            };

            let result: ClassificationResult = match ApiClient::new(config) {
                Ok(client) => match kind {
                    RequestKind::Waste(scan_mode) => client.classify_waste(&payload, scan_mode).await,
                    RequestKind::Product => client.analyze_product(&payload, contract).await,
                },
                Err(e) => e.into(),
            };
            machine.write().complete(ticket, result);
        });
    });

    let state = machine.read().state().clone();
    let busy = state.is_submitting();
    let waste_kind = RequestKind::Waste(mode());

    let mode_button = |target: ScanMode| {
        if mode() == target {
            "flex: 1; padding: 10px; border: none; border-radius: 8px; font-size: 14px; font-weight: 600; background: #059669; color: white;"
        } else {
            "flex: 1; padding: 10px; border: none; border-radius: 8px; font-size: 14px; background: transparent; color: #374151;"
        }
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #F0FDF4;",

            h1 { style: "color: #047857; margin: 8px 0 4px; font-size: 24px; font-weight: 700;",
                "♻️ "
                {t!("scan-title")}
            }
            p { style: "margin: 0 0 16px; color: #6B7280; font-size: 14px;", {t!("scan-subtitle")} }

            // Mode toggle
            if mode() == ScanMode::Legacy {
                div { style: "margin-bottom: 12px; font-size: 13px; color: #D97706;", {t!("scan-mode-legacy")} }
            } else {
                div { style: "display: flex; gap: 6px; padding: 4px; background: white; border-radius: 10px; margin-bottom: 16px;",
                    button {
                        style: mode_button(ScanMode::Advanced),
                        disabled: busy,
                        onclick: move |_| mode.set(ScanMode::Advanced),
                        {t!("scan-mode-advanced")}
                    }
                    button {
                        style: mode_button(ScanMode::Simple),
                        disabled: busy,
                        onclick: move |_| mode.set(ScanMode::Simple),
                        {t!("scan-mode-simple")}
                    }
                }
            }

            // Actions
            div { style: "display: flex; gap: 10px; margin-bottom: 10px;",
                button {
                    class: "btn-success",
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; gap: 8px; padding: 14px; font-size: 16px;",
                    disabled: busy,
                    onclick: move |_| start.call((waste_kind, ImageSource::Camera)),
                    CameraIcon { size: 20, color: "white".to_string() }
                    {t!("scan-take-photo")}
                }
                button {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; gap: 8px; padding: 14px; font-size: 16px; background: white; color: #047857; border: 2px solid #059669; border-radius: 8px;",
                    disabled: busy,
                    onclick: move |_| start.call((waste_kind, ImageSource::Gallery)),
                    GalleryIcon { size: 20, color: "#047857".to_string() }
                    {t!("scan-pick-image")}
                }
            }
            div { style: "display: flex; gap: 10px; margin-bottom: 16px;",
                button {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; gap: 8px; padding: 12px; font-size: 14px; background: #111827; color: white; border: none; border-radius: 8px;",
                    disabled: busy,
                    onclick: move |_| start.call((RequestKind::Product, ImageSource::Camera)),
                    BarcodeIcon { size: 18, color: "white".to_string() }
                    {t!("scan-analyze-product")}
                }
                button {
                    style: "padding: 12px; font-size: 14px; background: #F3F4F6; color: #374151; border: none; border-radius: 8px;",
                    disabled: busy,
                    onclick: move |_| start.call((RequestKind::Product, ImageSource::Demo)),
                    {t!("scan-demo")}
                }
            }

            if let Some(message) = alert() {
                div { style: "padding: 12px; margin-bottom: 16px; border-radius: 8px; background: #FEF3C7; color: #92400E; font-size: 14px; display: flex; justify-content: space-between; gap: 8px;",
                    span { "{message}" }
                    button {
                        style: "background: none; border: none; color: #92400E; font-size: 16px;",
                        onclick: move |_| alert.set(None),
                        "✕"
                    }
                }
            }

            if let Some(src) = preview() {
                div { style: "background: white; border-radius: 12px; padding: 12px; margin-bottom: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",
                    h3 { style: "margin: 0 0 8px; font-size: 15px; color: #111827;", {t!("scan-selected-image")} }
                    img {
                        src: "{src}",
                        alt: t!("scan-selected-image"),
                        style: "width: 100%; max-height: 280px; object-fit: contain; border-radius: 8px; background: #F3F4F6;",
                    }
                }
            }

            match state {
                ScanState::Idle => rsx! {
                    div { style: "text-align: center; color: #9CA3AF; padding: 32px 0; font-size: 14px;",
                        {t!("scan-idle-hint")}
                    }
                },
                ScanState::Submitting { kind, .. } => rsx! {
                    div { style: "text-align: center; color: #047857; padding: 32px 0; font-size: 16px;",
                        "⏳ "
                        {loading_label(kind)}
                    }
                },
                ScanState::Resolved(result) => rsx! {
                    ResultCard { result }
                    NewScanButton {
                        on_click: move |_| {
                            machine.write().reset();
                            preview.set(None);
                        },
                    }
                },
                ScanState::Failed(error) => rsx! {
                    ResultCard { result: ClassificationResult::Error(error) }
                    NewScanButton {
                        on_click: move |_| {
                            machine.write().reset();
                            preview.set(None);
                        },
                    }
                },
            }
        }
    }
}

fn loading_label(kind: RequestKind) -> String {
    match kind {
        RequestKind::Product => t!("scan-analyzing-product"),
        RequestKind::Waste(_) => t!("scan-classifying"),
    }
}

#[component]
fn NewScanButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            style: "width: 100%; padding: 12px; font-size: 15px; background: white; color: #047857; border: 1px solid #A7F3D0; border-radius: 8px;",
            onclick: move |_| on_click.call(()),
            {t!("scan-new")}
        }
    }
}
