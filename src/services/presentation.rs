//! Display attributes derived from result fields. Everything here is pure.

/// Palette used for categories, grades and scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayColor {
    Green,
    Lime,
    Yellow,
    Amber,
    Orange,
    Red,
    Purple,
    NeutralGray,
}

impl DisplayColor {
    pub fn hex(&self) -> &'static str {
        match self {
            DisplayColor::Green => "#059669",
            DisplayColor::Lime => "#84CC16",
            DisplayColor::Yellow => "#EAB308",
            DisplayColor::Amber => "#D97706",
            DisplayColor::Orange => "#F59E0B",
            DisplayColor::Red => "#DC2626",
            DisplayColor::Purple => "#7C3AED",
            DisplayColor::NeutralGray => "#6B7280",
        }
    }
}

/// Icon shown next to a waste category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteIcon {
    Recyclable,
    Organic,
    Hazardous,
    Generic,
}

/// Color for a waste category identifier such as `recyclable_glass` or `organic`.
///
/// Checked in a fixed order: "recyclable" substring, "organic" substring,
/// then exact `hazardous` and `e_waste`.
pub fn waste_color(category: &str) -> DisplayColor {
    if category.contains("recyclable") {
        DisplayColor::Green
    } else if category.contains("organic") {
        DisplayColor::Amber
    } else if category == "hazardous" {
        DisplayColor::Red
    } else if category == "e_waste" {
        DisplayColor::Purple
    } else {
        DisplayColor::NeutralGray
    }
}

pub fn waste_icon(category: &str) -> WasteIcon {
    if category.contains("recyclable") {
        WasteIcon::Recyclable
    } else if category.contains("organic") {
        WasteIcon::Organic
    } else if category == "hazardous" {
        WasteIcon::Hazardous
    } else {
        WasteIcon::Generic
    }
}

/// `recyclable_plastic` -> `Recyclable Plastic`
///
/// Underscores become spaces and the first letter of every word is upper-cased;
/// the rest of each word is left untouched.
pub fn format_label(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut at_word_start = true;
    for c in identifier.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Nutri-Score / Eco-Score letter to color; anything but A-E is neutral
pub fn grade_color(grade: &str) -> DisplayColor {
    match grade.to_uppercase().as_str() {
        "A" => DisplayColor::Green,
        "B" => DisplayColor::Lime,
        "C" => DisplayColor::Yellow,
        "D" => DisplayColor::Orange,
        "E" => DisplayColor::Red,
        _ => DisplayColor::NeutralGray,
    }
}

/// Banded color for a 0-10 score
pub fn score_color(score: f64) -> DisplayColor {
    if score >= 8.0 {
        DisplayColor::Green
    } else if score >= 6.0 {
        DisplayColor::Lime
    } else if score >= 4.0 {
        DisplayColor::Yellow
    } else if score >= 2.0 {
        DisplayColor::Orange
    } else {
        DisplayColor::Red
    }
}

/// 0.934 -> 93
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Fill of a progress bar in percent, capped at 100
pub fn progress_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() || !max.is_finite() {
        return 0.0;
    }
    ((value / max) * 100.0).clamp(0.0, 100.0)
}

/// Share of all scans for one waste breakdown entry, in percent
pub fn breakdown_share(count: u32, total_scans: u32) -> f64 {
    let total = total_scans.max(1);
    (count as f64 / total as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WasteCategory;

    #[test]
    fn test_waste_colors() {
        assert_eq!(waste_color("recyclable_paper"), DisplayColor::Green);
        assert_eq!(waste_color("recyclable"), DisplayColor::Green);
        assert_eq!(waste_color("organic_yard"), DisplayColor::Amber);
        assert_eq!(waste_color("hazardous"), DisplayColor::Red);
        assert_eq!(waste_color("e_waste"), DisplayColor::Purple);
        assert_eq!(waste_color("landfill_general"), DisplayColor::NeutralGray);
        assert_eq!(waste_color("hazardous_waste"), DisplayColor::NeutralGray);
        // substring checks run before the exact ones
        assert_eq!(waste_color("organic_recyclable"), DisplayColor::Green);
    }

    #[test]
    fn test_every_category_has_a_label_and_color() {
        for category in WasteCategory::all() {
            let label = format_label(category.as_str());
            assert!(!label.contains('_'));
            let _ = waste_color(category.as_str()).hex();
        }
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("recyclable_plastic"), "Recyclable Plastic");
        assert_eq!(format_label("e_waste"), "E Waste");
        assert_eq!(format_label("first_scan"), "First Scan");
        assert_eq!(format_label("pet-bottles"), "Pet-Bottles");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_grade_colors_are_total_and_distinct() {
        let colors: Vec<_> = ["A", "B", "C", "D", "E"].iter().map(|g| grade_color(g)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_ne!(*a, DisplayColor::NeutralGray);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(grade_color("a"), DisplayColor::Green);
        assert_eq!(grade_color("N/A"), DisplayColor::NeutralGray);
        assert_eq!(grade_color("F"), DisplayColor::NeutralGray);
        assert_eq!(grade_color(""), DisplayColor::NeutralGray);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_color(10.0), DisplayColor::Green);
        assert_eq!(score_color(8.0), DisplayColor::Green);
        assert_eq!(score_color(7.9), DisplayColor::Lime);
        assert_eq!(score_color(6.0), DisplayColor::Lime);
        assert_eq!(score_color(4.0), DisplayColor::Yellow);
        assert_eq!(score_color(2.0), DisplayColor::Orange);
        assert_eq!(score_color(1.99), DisplayColor::Red);
        assert_eq!(score_color(0.0), DisplayColor::Red);
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(confidence_percent(0.934), 93);
        assert_eq!(confidence_percent(0.936), 94);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(0.0), 0);
    }

    #[test]
    fn test_mapping_is_repeatable() {
        assert_eq!(
            (waste_color("e_waste"), format_label("e_waste")),
            (waste_color("e_waste"), format_label("e_waste"))
        );
    }

    #[test]
    fn test_progress_and_share() {
        assert_eq!(progress_percent(50.0, 200.0), 25.0);
        assert_eq!(progress_percent(500.0, 200.0), 100.0);
        assert_eq!(progress_percent(5.0, 0.0), 0.0);
        assert_eq!(breakdown_share(3, 0), 100.0);
        assert_eq!(breakdown_share(1, 4), 25.0);
    }
}
