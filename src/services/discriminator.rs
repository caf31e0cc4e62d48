//! Turns decoded backend JSON into exactly one [`ClassificationResult`].
//!
//! Discriminant fields (`error`, `mode`) are checked before any structural
//! probing. Every shape that does not validate ends up as an `Error` result.

use crate::models::{
    AdvancedWaste, ClassificationResult, ErrorResult, ProductResult, SimpleWaste,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const CONNECTIVITY_MESSAGE: &str = "Connection failed. Check if backend is running.";
pub const PRODUCT_FAILURE_MESSAGE: &str = "Product analysis failed. Ensure backend is running.";
pub const PARSE_FAILURE_MESSAGE: &str = "Unexpected response from server. Please try again.";

/// Response contract the payload is read against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contract {
    /// `mode`-tagged waste results, products need `analysis_method`
    #[default]
    Canonical,
    /// Deprecated: mode-less `{waste_type, confidence, tips}` from `/classify-waste`
    /// and score-only products
    Legacy,
}

/// Classifies a 2xx payload under the canonical contract
pub fn discriminate(value: &Value) -> ClassificationResult {
    discriminate_with(value, Contract::Canonical)
}

pub fn discriminate_with(value: &Value, contract: Contract) -> ClassificationResult {
    let Some(object) = value.as_object() else {
        return parse_failure("response is not a JSON object");
    };

    if let Some(error) = object.get("error").filter(|e| !e.is_null()) {
        return backend_error(error, object, CONNECTIVITY_MESSAGE);
    }

    match object.get("mode") {
        Some(Value::String(mode)) if mode == "advanced" => {
            return decode::<AdvancedWaste>(value)
                .and_then(|r| check_confidence(r.confidence).map(|_| r))
                .map(ClassificationResult::AdvancedWaste)
                .unwrap_or_else(|e| parse_failure(&e));
        }
        Some(Value::String(mode)) if mode == "simple" => return decode_simple(value),
        Some(other) => return parse_failure(&format!("unknown mode {}", other)),
        None => {}
    }

    let has_score = object.contains_key("sustainability_score");
    let has_method = object.contains_key("analysis_method");
    match contract {
        Contract::Canonical if has_score && has_method => decode_product(value),
        Contract::Legacy if has_score => decode_product(value),
        Contract::Legacy if object.contains_key("waste_type") => decode_simple(value),
        _ => parse_failure("no known result shape"),
    }
}

/// Classifies a non-2xx response; the body (if any) only contributes its message
pub fn discriminate_failure(status: u16, body: Option<&Value>, fallback: &str) -> ClassificationResult {
    let object = body.and_then(Value::as_object);
    match object.and_then(|o| o.get("error").filter(|e| !e.is_null()).map(|e| (o, e))) {
        Some((object, error)) => backend_error(error, object, fallback),
        None => ClassificationResult::Error(
            ErrorResult::new(fallback).with_details(format!("HTTP status {}", status)),
        ),
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    T::deserialize(value).map_err(|e| e.to_string())
}

fn decode_simple(value: &Value) -> ClassificationResult {
    decode::<SimpleWaste>(value)
        .and_then(|r| check_confidence(r.confidence).map(|_| r))
        .map(ClassificationResult::SimpleWaste)
        .unwrap_or_else(|e| parse_failure(&e))
}

fn decode_product(value: &Value) -> ClassificationResult {
    decode::<ProductResult>(value)
        .and_then(|r| {
            check_confidence(r.confidence)?;
            check_score(r.sustainability_score, "sustainability_score")?;
            if let Some(packaging) = &r.packaging_analysis {
                check_score(packaging.packaging_score, "packaging_score")?;
            }
            Ok(r)
        })
        .map(ClassificationResult::Product)
        .unwrap_or_else(|e| parse_failure(&e))
}

fn check_confidence(confidence: f64) -> Result<(), String> {
    if confidence.is_finite() && (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        Err(format!("confidence {} outside [0, 1]", confidence))
    }
}

fn check_score(score: f64, field: &str) -> Result<(), String> {
    if score.is_finite() && (0.0..=10.0).contains(&score) {
        Ok(())
    } else {
        Err(format!("{} {} outside [0, 10]", field, score))
    }
}

fn backend_error(error: &Value, object: &Map<String, Value>, fallback: &str) -> ClassificationResult {
    let message = error
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback);
    let mut result = ErrorResult::new(message);
    if let Some(details) = object.get("details").and_then(Value::as_str) {
        result = result.with_details(details);
    }
    ClassificationResult::Error(result)
}

fn parse_failure(reason: &str) -> ClassificationResult {
    log::warn!("Rejecting backend response: {}", reason);
    ClassificationResult::Error(ErrorResult::new(PARSE_FAILURE_MESSAGE).with_details(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisMethod, SimpleWasteKind, WasteCategory};
    use serde_json::json;

    fn advanced_body() -> Value {
        json!({
            "waste_type": "recyclable_paper",
            "category_name": "Paper & Cardboard",
            "confidence": 0.91,
            "subcategories": ["cardboard"],
            "disposal_instructions": "Keep dry and clean, flatten boxes",
            "recycling_code": "PAP",
            "tips": ["Flatten boxes"],
            "contamination_warnings": ["no_waxed_paper"],
            "mode": "advanced"
        })
    }

    fn error_message(result: &ClassificationResult) -> &str {
        match result {
            ClassificationResult::Error(e) => &e.message,
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_advanced_result() {
        match discriminate(&advanced_body()) {
            ClassificationResult::AdvancedWaste(r) => {
                assert_eq!(r.waste_type, WasteCategory::RecyclablePaper);
                assert_eq!(r.recycling_code, "PAP");
                assert_eq!(r.contamination_warnings, vec!["no_waxed_paper"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mode_wins_over_product_shape() {
        let mut body = advanced_body();
        body["sustainability_score"] = json!(7.5);
        body["analysis_method"] = json!("ocr");
        assert!(matches!(
            discriminate(&body),
            ClassificationResult::AdvancedWaste(_)
        ));
        assert!(matches!(
            discriminate_with(&body, Contract::Legacy),
            ClassificationResult::AdvancedWaste(_)
        ));
    }

    #[test]
    fn test_simple_result() {
        let body = json!({"waste_type": "organic", "confidence": 0.7, "tips": [], "mode": "simple"});
        match discriminate(&body) {
            ClassificationResult::SimpleWaste(r) => assert_eq!(r.waste_type, SimpleWasteKind::Organic),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_product_requires_analysis_method_in_canonical_contract() {
        let body = json!({"sustainability_score": 6.0, "found_keywords": ["organic"], "extracted_text": "x"});
        assert_eq!(error_message(&discriminate(&body)), PARSE_FAILURE_MESSAGE);

        match discriminate_with(&body, Contract::Legacy) {
            ClassificationResult::Product(p) => {
                assert_eq!(p.analysis_method, None);
                assert_eq!(p.found_keywords, vec!["organic"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_product_with_details() {
        let body = json!({
            "sustainability_score": 8.2,
            "confidence": 0.88,
            "barcode_detected": true,
            "found_keywords": [],
            "extracted_text": "No text detected",
            "recommendations": ["Great choice"],
            "analysis_method": "barcode",
            "product_details": {"name": "Oat Drink", "brand": "Oatly", "nutriscore": "b", "ecoscore": "a"},
            "packaging_analysis": {"materials": ["cardboard"], "packaging_score": 7}
        });
        match discriminate(&body) {
            ClassificationResult::Product(p) => {
                assert_eq!(p.analysis_method, Some(AnalysisMethod::Barcode));
                let details = p.product_details.unwrap();
                assert_eq!(details.brand, "Oatly");
                assert_eq!(details.packaging, "");
                assert_eq!(p.packaging_analysis.unwrap().packaging_score, 7.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_product_details_with_null_grades() {
        let body = json!({
            "sustainability_score": 6.5,
            "confidence": 0.8,
            "barcode_detected": true,
            "analysis_method": "barcode",
            "product_details": {
                "name": "Oat Drink",
                "brand": "Oatly",
                "categories": null,
                "nutriscore": null,
                "ecoscore": null,
                "packaging": null,
                "labels": null
            }
        });
        match discriminate(&body) {
            ClassificationResult::Product(p) => {
                let details = p.product_details.unwrap();
                assert_eq!(details.name, "Oat Drink");
                assert_eq!(details.nutriscore, "");
                assert_eq!(details.packaging, "");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_error_field_wins_over_everything() {
        let mut body = advanced_body();
        body["error"] = json!("No image data in request");
        body["details"] = json!("missing 'image'");
        match discriminate(&body) {
            ClassificationResult::Error(e) => {
                assert_eq!(e.message, "No image data in request");
                assert_eq!(e.details.as_deref(), Some("missing 'image'"));
            }
            other => panic!("unexpected {:?}", other),
        }
        let blank = json!({"error": ""});
        assert_eq!(error_message(&discriminate(&blank)), CONNECTIVITY_MESSAGE);
        // explicit null is not an error marker
        let null_error = json!({"error": null, "waste_type": "landfill", "confidence": 0.4, "mode": "simple"});
        assert!(matches!(discriminate(&null_error), ClassificationResult::SimpleWaste(_)));
    }

    #[test]
    fn test_fails_closed() {
        let cases = [
            json!([1, 2, 3]),
            json!("ok"),
            json!({}),
            json!({"mode": "expert", "waste_type": "hazardous", "confidence": 0.5}),
            json!({"mode": "advanced", "waste_type": "moon_rock", "confidence": 0.5}),
            json!({"mode": "simple", "waste_type": "organic", "confidence": 1.5}),
            json!({"mode": "simple", "waste_type": "organic"}),
            json!({"sustainability_score": 42, "analysis_method": "ocr"}),
            json!({"sustainability_score": 5, "analysis_method": "xray"}),
        ];
        for body in cases.iter() {
            assert_eq!(
                error_message(&discriminate(body)),
                PARSE_FAILURE_MESSAGE,
                "body {}",
                body
            );
        }
    }

    #[test]
    fn test_legacy_waste_without_mode() {
        let body = json!({"waste_type": "recyclable", "confidence": 0.83, "tips": ["Rinse containers"]});
        assert_eq!(error_message(&discriminate(&body)), PARSE_FAILURE_MESSAGE);
        assert!(matches!(
            discriminate_with(&body, Contract::Legacy),
            ClassificationResult::SimpleWaste(_)
        ));
    }

    #[test]
    fn test_failure_status() {
        let body = json!({"error": "Failed to decode image. Supported formats: JPEG, PNG"});
        assert_eq!(
            error_message(&discriminate_failure(400, Some(&body), CONNECTIVITY_MESSAGE)),
            "Failed to decode image. Supported formats: JPEG, PNG"
        );
        match discriminate_failure(502, None, PRODUCT_FAILURE_MESSAGE) {
            ClassificationResult::Error(e) => {
                assert_eq!(e.message, PRODUCT_FAILURE_MESSAGE);
                assert_eq!(e.details.as_deref(), Some("HTTP status 502"));
            }
            other => panic!("unexpected {:?}", other),
        }
        // a success-shaped body on an error status is still an error
        assert!(matches!(
            discriminate_failure(500, Some(&advanced_body()), CONNECTIVITY_MESSAGE),
            ClassificationResult::Error(_)
        ));
    }
}
