use crate::components::icons::{BarcodeIcon, WarningIcon, WasteCategoryIcon};
use crate::models::{
    AdvancedWaste, AnalysisMethod, ClassificationResult, ErrorResult, ProductResult, SimpleWaste,
};
use crate::services::heuristic::HeuristicReport;
use crate::services::presentation::{
    confidence_percent, format_label, grade_color, progress_percent, score_color, waste_color,
    waste_icon, DisplayColor,
};
use dioxus::prelude::*;
use dioxus_i18n::t;

const CARD_STYLE: &str = "background: white; border-radius: 12px; padding: 16px; margin-bottom: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);";
const SECTION_TITLE_STYLE: &str =
    "font-size: 14px; font-weight: 600; color: #374151; margin: 14px 0 6px;";

/// Renders one classification outcome
#[component]
pub fn ResultCard(result: ClassificationResult) -> Element {
    match result {
        ClassificationResult::AdvancedWaste(waste) => rsx! { AdvancedWasteCard { waste } },
        ClassificationResult::SimpleWaste(waste) => rsx! { SimpleWasteCard { waste } },
        ClassificationResult::Product(product) => rsx! { ProductCard { product } },
        ClassificationResult::Error(error) => rsx! { ErrorCard { error } },
    }
}

#[component]
fn CategoryBadge(category: String, label: String, confidence: f64) -> Element {
    let color = waste_color(&category).hex();
    let icon = waste_icon(&category);
    let percent = confidence_percent(confidence);

    rsx! {
        div { style: "display: flex; align-items: center; gap: 12px;",
            div { style: "width: 48px; height: 48px; border-radius: 24px; display: flex; align-items: center; justify-content: center; background: {color}22;",
                WasteCategoryIcon { icon, size: 28, color: color.to_string() }
            }
            div { style: "flex: 1;",
                div { style: "font-size: 18px; font-weight: 700; color: {color};", "{label}" }
                div { style: "font-size: 13px; color: #6B7280;",
                    {t!("result-confidence", percent: percent)}
                }
            }
        }
    }
}

#[component]
fn BulletList(title: String, items: Vec<String>, #[props(default)] warning: bool) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    let color = if warning { DisplayColor::Red.hex() } else { "#374151" };
    rsx! {
        div { style: SECTION_TITLE_STYLE, "{title}" }
        ul { style: "margin: 0; padding-left: 20px; color: {color}; font-size: 14px;",
            for item in items.iter() {
                li { style: "margin-bottom: 4px;", "{item}" }
            }
        }
    }
}

#[component]
fn AdvancedWasteCard(waste: AdvancedWaste) -> Element {
    let warnings: Vec<String> = waste
        .contamination_warnings
        .iter()
        .map(|w| format_label(w))
        .collect();

    rsx! {
        div { style: CARD_STYLE,
            CategoryBadge {
                category: waste.waste_type.as_str().to_string(),
                label: waste.label().to_string(),
                confidence: waste.confidence,
            }

            if !waste.subcategories.is_empty() {
                div { style: "display: flex; flex-wrap: wrap; gap: 6px; margin-top: 12px;",
                    for sub in waste.subcategories.iter() {
                        span { style: "padding: 4px 10px; border-radius: 12px; background: #F3F4F6; font-size: 12px; color: #374151;",
                            {format_label(sub)}
                        }
                    }
                }
            }

            if !waste.disposal_instructions.is_empty() {
                div { style: SECTION_TITLE_STYLE, {t!("result-disposal")} }
                p { style: "margin: 0; font-size: 14px; color: #374151;", "{waste.disposal_instructions}" }
            }

            if !waste.recycling_code.is_empty() {
                div { style: "margin-top: 10px; font-size: 13px; color: #6B7280;",
                    {t!("result-recycling-code", code: waste.recycling_code.clone())}
                }
            }

            BulletList { title: t!("result-tips"), items: waste.tips.clone() }
            BulletList { title: t!("result-warnings"), items: warnings, warning: true }
        }
    }
}

#[component]
fn SimpleWasteCard(waste: SimpleWaste) -> Element {
    let category = waste.waste_type.as_str();
    rsx! {
        div { style: CARD_STYLE,
            CategoryBadge {
                category: category.to_string(),
                label: format_label(category),
                confidence: waste.confidence,
            }
            BulletList { title: t!("result-tips"), items: waste.tips.clone() }
        }
    }
}

#[component]
fn ScoreBar(label: String, score: f64) -> Element {
    let color = score_color(score).hex();
    let width = progress_percent(score, 10.0);
    rsx! {
        div { style: "margin-top: 10px;",
            div { style: "display: flex; justify-content: space-between; font-size: 14px; color: #374151;",
                span { "{label}" }
                span { style: "font-weight: 700; color: {color};", "{score:.1}/10" }
            }
            div { style: "height: 8px; background: #E5E7EB; border-radius: 4px; margin-top: 4px;",
                div { style: "height: 8px; width: {width}%; background: {color}; border-radius: 4px;" }
            }
        }
    }
}

#[component]
fn GradeChip(label: String, grade: String) -> Element {
    if grade.trim().is_empty() {
        return rsx! {};
    }
    let color = grade_color(&grade).hex();
    let letter = grade.to_uppercase();
    rsx! {
        div { style: "display: flex; align-items: center; gap: 6px; font-size: 13px; color: #374151;",
            "{label}"
            span { style: "min-width: 24px; padding: 2px 8px; border-radius: 6px; background: {color}; color: white; font-weight: 700; text-align: center;",
                "{letter}"
            }
        }
    }
}

#[component]
fn ProductCard(product: ProductResult) -> Element {
    let method = match product.analysis_method {
        Some(AnalysisMethod::Barcode) => t!("result-method-barcode"),
        Some(AnalysisMethod::Ocr) => t!("result-method-ocr"),
        None => t!("result-method-unknown"),
    };
    let percent = confidence_percent(product.confidence);

    rsx! {
        div { style: CARD_STYLE,
            div { style: "display: flex; align-items: center; gap: 10px;",
                BarcodeIcon { size: 24, color: "#374151".to_string() }
                div { style: "flex: 1;",
                    div { style: "font-size: 18px; font-weight: 700; color: #111827;",
                        if let Some(details) = &product.product_details {
                            if details.name.is_empty() { {t!("result-product")} } else { "{details.name}" }
                        } else {
                            {t!("result-product")}
                        }
                    }
                    div { style: "font-size: 12px; color: #6B7280;",
                        "{method} · "
                        {t!("result-confidence", percent: percent)}
                    }
                }
            }

            ScoreBar { label: t!("result-sustainability"), score: product.sustainability_score }

            if let Some(details) = &product.product_details {
                if !details.brand.is_empty() {
                    div { style: "margin-top: 10px; font-size: 14px; color: #374151;",
                        {t!("result-brand", brand: details.brand.clone())}
                    }
                }
                div { style: "display: flex; gap: 16px; margin-top: 10px;",
                    GradeChip { label: t!("result-nutriscore"), grade: details.nutriscore.clone() }
                    GradeChip { label: t!("result-ecoscore"), grade: details.ecoscore.clone() }
                }
                if !details.packaging.is_empty() {
                    div { style: "margin-top: 8px; font-size: 13px; color: #6B7280;",
                        {t!("result-packaging-text", packaging: details.packaging.clone())}
                    }
                }
            }

            if let Some(packaging) = &product.packaging_analysis {
                ScoreBar { label: t!("result-packaging-score"), score: packaging.packaging_score }
                if !packaging.materials.is_empty() {
                    div { style: "margin-top: 6px; font-size: 13px; color: #6B7280;",
                        {packaging.materials.iter().map(|m| format_label(m)).collect::<Vec<_>>().join(", ")}
                    }
                }
            }

            if product.barcode_detected {
                div { style: "margin-top: 10px; font-size: 13px; color: #059669;", {t!("result-barcode-detected")} }
            }

            if !product.found_keywords.is_empty() {
                div { style: SECTION_TITLE_STYLE, {t!("result-keywords")} }
                div { style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for keyword in product.found_keywords.iter() {
                        span { style: "padding: 4px 10px; border-radius: 12px; background: #ECFDF5; color: #047857; font-size: 12px;",
                            "{keyword}"
                        }
                    }
                }
            }

            BulletList { title: t!("result-recommendations"), items: product.recommendations.clone() }

            if let Some(report) = product.local_assessment.clone() {
                LocalAssessment { report }
            }
        }
    }
}

#[component]
fn LocalAssessment(report: HeuristicReport) -> Element {
    rsx! {
        div { style: "margin-top: 14px; padding: 12px; border-radius: 10px; background: #F9FAFB; border: 1px dashed #D1D5DB;",
            div { style: "font-size: 13px; font-weight: 600; color: #374151;", {t!("result-local-assessment")} }
            ScoreBar { label: t!("result-local-score"), score: report.score as f64 }
            ul { style: "margin: 8px 0 0; padding-left: 20px; font-size: 13px; color: #4B5563;",
                for line in report.insights.iter() {
                    li { "{line}" }
                }
            }
        }
    }
}

#[component]
fn ErrorCard(error: ErrorResult) -> Element {
    let color = DisplayColor::Red.hex();
    rsx! {
        div { style: "{CARD_STYLE} border-left: 4px solid {color};",
            div { style: "display: flex; align-items: center; gap: 10px;",
                WarningIcon { size: 22, color: color.to_string() }
                div { style: "font-weight: 600; color: {color};", "{error.message}" }
            }
            if let Some(details) = &error.details {
                div { style: "margin-top: 6px; font-size: 12px; color: #6B7280;", "{details}" }
            }
        }
    }
}
