use crate::services::presentation::WasteIcon;
use dioxus::prelude::*;

// Inline SVG icons, 24x24 viewBox, stroked in the given color.

#[component]
fn Svg(size: u32, color: String, children: Element) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn RecycleIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            path { d: "M7 19H4.8a1.8 1.8 0 0 1-1.6-2.7L5.4 12" }
            path { d: "M11 19h8.2a1.8 1.8 0 0 0 1.6-2.7L19 13" }
            path { d: "M14 16l-3 3 3 3" }
            path { d: "M8.3 13.6L5.4 12 3.8 15" }
            path { d: "M9.3 7.4l1.8-3.1a1.8 1.8 0 0 1 3.1 0l3.9 6.8" }
            path { d: "M13.4 10.6l4.6.4.4-4.5" }
        }
    }
}

#[component]
pub fn LeafIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            path { d: "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.5 19 2c1 2 2 4.2 2 8 0 5.5-4.8 10-10 10z" }
            path { d: "M2 21c0-3 1.9-5.4 5.1-6" }
        }
    }
}

#[component]
pub fn WarningIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            path { d: "M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z" }
            line { x1: "12", y1: "9", x2: "12", y2: "13" }
            line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
        }
    }
}

#[component]
pub fn TrashIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            polyline { points: "3 6 5 6 21 6" }
            path { d: "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6" }
            path { d: "M10 11v6" }
            path { d: "M14 11v6" }
            path { d: "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2" }
        }
    }
}

#[component]
pub fn CameraIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            path { d: "M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2z" }
            circle { cx: "12", cy: "13", r: "4" }
        }
    }
}

#[component]
pub fn GalleryIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
            circle { cx: "8.5", cy: "8.5", r: "1.5" }
            polyline { points: "21 15 16 10 5 21" }
        }
    }
}

#[component]
pub fn BarcodeIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            path { d: "M3 5v14" }
            path { d: "M8 5v14" }
            path { d: "M12 5v14" }
            path { d: "M17 5v14" }
            path { d: "M21 5v14" }
        }
    }
}

#[component]
pub fn UserIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            path { d: "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn KeyIcon(#[props(default = 24)] size: u32, color: String) -> Element {
    rsx! {
        Svg { size, color,
            circle { cx: "7.5", cy: "15.5", r: "5.5" }
            path { d: "M21 2l-9.6 9.6" }
            path { d: "M15.5 7.5l3 3L22 7l-3-3" }
        }
    }
}

/// Icon matching a waste category
#[component]
pub fn WasteCategoryIcon(icon: WasteIcon, #[props(default = 24)] size: u32, color: String) -> Element {
    match icon {
        WasteIcon::Recyclable => rsx! { RecycleIcon { size, color } },
        WasteIcon::Organic => rsx! { LeafIcon { size, color } },
        WasteIcon::Hazardous => rsx! { WarningIcon { size, color } },
        WasteIcon::Generic => rsx! { TrashIcon { size, color } },
    }
}
