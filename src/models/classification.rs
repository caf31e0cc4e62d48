use crate::services::heuristic::HeuristicReport;
use serde::{Deserialize, Deserializer, Serialize};

/// Which classification endpoint a scan goes to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    #[default]
    Advanced,
    Simple,
    /// Single `/classify-waste` endpoint of older servers
    Legacy,
}

impl ScanMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ScanMode::Advanced => "/classify-waste/advanced",
            ScanMode::Simple => "/classify-waste/simple",
            ScanMode::Legacy => "/classify-waste",
        }
    }
}

/// Fine-grained waste categories reported by the advanced classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    RecyclablePaper,
    RecyclablePlastic,
    RecyclableGlass,
    RecyclableMetal,
    OrganicFood,
    OrganicYard,
    LandfillGeneral,
    Hazardous,
    EWaste,
}

impl WasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::RecyclablePaper => "recyclable_paper",
            WasteCategory::RecyclablePlastic => "recyclable_plastic",
            WasteCategory::RecyclableGlass => "recyclable_glass",
            WasteCategory::RecyclableMetal => "recyclable_metal",
            WasteCategory::OrganicFood => "organic_food",
            WasteCategory::OrganicYard => "organic_yard",
            WasteCategory::LandfillGeneral => "landfill_general",
            WasteCategory::Hazardous => "hazardous",
            WasteCategory::EWaste => "e_waste",
        }
    }

    /// Name used when the backend omits `category_name`
    pub fn display_name(&self) -> &'static str {
        match self {
            WasteCategory::RecyclablePaper => "Paper & Cardboard",
            WasteCategory::RecyclablePlastic => "Plastic Containers",
            WasteCategory::RecyclableGlass => "Glass Containers",
            WasteCategory::RecyclableMetal => "Metal Containers",
            WasteCategory::OrganicFood => "Food Waste",
            WasteCategory::OrganicYard => "Yard Waste",
            WasteCategory::LandfillGeneral => "General Waste",
            WasteCategory::Hazardous => "Hazardous Materials",
            WasteCategory::EWaste => "Electronic Waste",
        }
    }

    pub fn all() -> &'static [WasteCategory] {
        static ALL: [WasteCategory; 9] = [
            WasteCategory::RecyclablePaper,
            WasteCategory::RecyclablePlastic,
            WasteCategory::RecyclableGlass,
            WasteCategory::RecyclableMetal,
            WasteCategory::OrganicFood,
            WasteCategory::OrganicYard,
            WasteCategory::LandfillGeneral,
            WasteCategory::Hazardous,
            WasteCategory::EWaste,
        ];
        &ALL
    }
}

/// Coarse categories reported by the simple classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SimpleWasteKind {
    Recyclable,
    Organic,
    Landfill,
}

impl SimpleWasteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleWasteKind::Recyclable => "recyclable",
            SimpleWasteKind::Organic => "organic",
            SimpleWasteKind::Landfill => "landfill",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvancedWaste {
    pub waste_type: WasteCategory,
    #[serde(default)]
    pub category_name: String,
    pub confidence: f64,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub disposal_instructions: String,
    #[serde(default)]
    pub recycling_code: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub contamination_warnings: Vec<String>,
}

impl AdvancedWaste {
    /// Backend label, or the built-in name of the category
    pub fn label(&self) -> &str {
        if self.category_name.trim().is_empty() {
            self.waste_type.display_name()
        } else {
            &self.category_name
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpleWaste {
    pub waste_type: SimpleWasteKind,
    pub confidence: f64,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMethod {
    Barcode,
    Ocr,
}

/// Reads a string field that the backend may send as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Open Food Facts style metadata, present when a barcode was resolved
///
/// Open Food Facts stores some keys with null values, so every field
/// accepts `null` as well as a missing key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProductDetails {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub categories: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub nutriscore: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ecoscore: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub packaging: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub labels: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackagingAnalysis {
    #[serde(default)]
    pub materials: Vec<String>,
    pub packaging_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResult {
    pub sustainability_score: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub barcode_detected: bool,
    #[serde(default)]
    pub found_keywords: Vec<String>,
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Missing only in the legacy score-only contract
    #[serde(default)]
    pub analysis_method: Option<AnalysisMethod>,
    #[serde(default)]
    pub product_details: Option<ProductDetails>,
    #[serde(default)]
    pub packaging_analysis: Option<PackagingAnalysis>,
    /// Offline keyword assessment, computed on the device
    #[serde(skip)]
    pub local_assessment: Option<HeuristicReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResult {
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Outcome of one image submission, exactly one variant per request
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResult {
    AdvancedWaste(AdvancedWaste),
    SimpleWaste(SimpleWaste),
    Product(ProductResult),
    Error(ErrorResult),
}

impl From<crate::error::AppError> for ClassificationResult {
    fn from(e: crate::error::AppError) -> Self {
        ClassificationResult::Error(ErrorResult::new(e.user_message()).with_details(e.to_string()))
    }
}

/// Image sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePayload {
    /// Base64 encoded image bytes, no data-URL prefix
    Base64(String),
    /// Placeholder the product endpoint answers with a sample analysis or an error
    Demo,
}

impl ImagePayload {
    pub fn as_wire(&self) -> &str {
        match self {
            ImagePayload::Base64(data) => data,
            ImagePayload::Demo => "demo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        for category in WasteCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        let parsed: WasteCategory = serde_json::from_str("\"e_waste\"").unwrap();
        assert_eq!(parsed, WasteCategory::EWaste);
    }

    #[test]
    fn test_advanced_label_falls_back_to_display_name() {
        let mut waste = AdvancedWaste {
            waste_type: WasteCategory::OrganicYard,
            category_name: String::new(),
            confidence: 0.5,
            subcategories: vec![],
            disposal_instructions: String::new(),
            recycling_code: String::new(),
            tips: vec![],
            contamination_warnings: vec![],
        };
        assert_eq!(waste.label(), "Yard Waste");
        waste.category_name = "Garden".to_string();
        assert_eq!(waste.label(), "Garden");
    }

    #[test]
    fn test_product_details_accept_null_fields() {
        let details: ProductDetails = serde_json::from_value(serde_json::json!({
            "name": "Oat Drink",
            "brand": null,
            "nutriscore": null,
            "labels": "organic"
        }))
        .unwrap();
        assert_eq!(details.name, "Oat Drink");
        assert_eq!(details.brand, "");
        assert_eq!(details.nutriscore, "");
        assert_eq!(details.ecoscore, "");
        assert_eq!(details.labels, "organic");
    }

    #[test]
    fn test_payload_wire_value() {
        assert_eq!(ImagePayload::Demo.as_wire(), "demo");
        assert_eq!(ImagePayload::Base64("aGk=".into()).as_wire(), "aGk=");
    }

    #[test]
    fn test_scan_mode_endpoints() {
        assert_eq!(ScanMode::Advanced.endpoint(), "/classify-waste/advanced");
        assert_eq!(ScanMode::Simple.endpoint(), "/classify-waste/simple");
        assert_eq!(ScanMode::Legacy.endpoint(), "/classify-waste");
    }
}
