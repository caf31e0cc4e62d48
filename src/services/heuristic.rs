//! Offline sustainability estimate for products whose analysis only returned keywords.

const BASELINE_SCORE: f64 = 5.0;
const POSITIVE_WEIGHT: f64 = 1.5;
const NEGATIVE_WEIGHT: f64 = 2.0;
const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;

const POSITIVE_KEYWORDS: [&str; 5] = [
    "organic",
    "biodegradable",
    "compostable",
    "recyclable",
    "sustainable",
];
const NEGATIVE_KEYWORDS: [&str; 4] = ["plastic", "chemical", "toxic", "pollution"];

/// Result of [`score_keywords`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicReport {
    /// Always within 1..=10
    pub score: u8,
    pub insights: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Scores a keyword list: baseline 5, +1.5 per positive and -2 per negative match.
///
/// The running total is clamped to [1, 10] after every keyword, so the order of
/// keywords matters once a bound is hit. The final value is rounded half away
/// from zero.
pub fn score_keywords<S: AsRef<str>>(keywords: &[S]) -> HeuristicReport {
    let mut total = BASELINE_SCORE;
    let mut positive: Vec<String> = Vec::new();
    let mut negative: Vec<String> = Vec::new();

    for keyword in keywords {
        let normalized = keyword.as_ref().trim().to_lowercase();
        if POSITIVE_KEYWORDS.contains(&normalized.as_str()) {
            total = (total + POSITIVE_WEIGHT).clamp(MIN_SCORE, MAX_SCORE);
            push_unique(&mut positive, normalized);
        } else if NEGATIVE_KEYWORDS.contains(&normalized.as_str()) {
            total = (total - NEGATIVE_WEIGHT).clamp(MIN_SCORE, MAX_SCORE);
            push_unique(&mut negative, normalized);
        }
    }

    let score = total.round().clamp(MIN_SCORE, MAX_SCORE) as u8;

    let mut insights = Vec::with_capacity(3);
    if !positive.is_empty() {
        insights.push(format!("Positive attributes: {}", positive.join(", ")));
    }
    if !negative.is_empty() {
        insights.push(format!("Concerns found: {}", negative.join(", ")));
    }
    insights.push(closing_remark(score).to_string());

    HeuristicReport {
        score,
        insights,
        positive,
        negative,
    }
}

fn push_unique(list: &mut Vec<String>, keyword: String) {
    if !list.contains(&keyword) {
        list.push(keyword);
    }
}

fn closing_remark(score: u8) -> &'static str {
    if score >= 8 {
        "Excellent sustainable choice!"
    } else if score >= 6 {
        "Good choice with room for improvement."
    } else {
        "Consider more sustainable alternatives."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_baseline() {
        let report = score_keywords::<&str>(&[]);
        assert_eq!(report.score, 5);
        assert_eq!(report.insights, vec!["Consider more sustainable alternatives."]);
    }

    #[test]
    fn test_mixed_keywords_round_half_up() {
        // 5 + 1.5 - 2 = 4.5 -> 5
        let report = score_keywords(&["organic", "plastic"]);
        assert_eq!(report.score, 5);
        assert_eq!(report.insights.len(), 3);
        assert!(report.insights[0].starts_with("Positive attributes"));
        assert!(report.insights[0].contains("organic"));
        assert!(report.insights[1].starts_with("Concerns found"));
        assert!(report.insights[1].contains("plastic"));
        assert_eq!(report.insights[2], "Consider more sustainable alternatives.");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let report = score_keywords(&["ORGANIC", " Compostable ", "Recyclable"]);
        // 5 + 4.5 = 9.5 -> 10
        assert_eq!(report.score, 10);
        assert_eq!(report.positive, vec!["organic", "compostable", "recyclable"]);
        assert_eq!(report.insights.last().unwrap(), "Excellent sustainable choice!");
    }

    #[test]
    fn test_good_band() {
        // 5 + 1.5 = 6.5 -> 7
        let report = score_keywords(&["sustainable", "cardboard"]);
        assert_eq!(report.score, 7);
        assert_eq!(report.insights.len(), 2);
        assert_eq!(report.insights[1], "Good choice with room for improvement.");
    }

    #[test]
    fn test_clamped_at_both_ends() {
        let bad = score_keywords(&["plastic", "toxic", "chemical", "pollution", "plastic"]);
        assert_eq!(bad.score, 1);
        assert_eq!(bad.negative, vec!["plastic", "toxic", "chemical", "pollution"]);

        let good = score_keywords(&["organic"; 20]);
        assert_eq!(good.score, 10);
    }

    #[test]
    fn test_running_clamp_is_order_dependent() {
        // floor hit first: 1 -> 2.5
        let floor_first = score_keywords(&["toxic", "toxic", "toxic", "organic"]);
        assert_eq!(floor_first.score, 3);
        // -> 6.5 -> 0.5 clamped to 1
        let positive_first = score_keywords(&["organic", "toxic", "toxic", "toxic"]);
        assert_eq!(positive_first.score, 1);
    }

    #[test]
    fn test_score_always_in_range_and_deterministic() {
        let vocab = [
            "organic", "plastic", "toxic", "recyclable", "paper", "chemical", "sustainable", "",
        ];
        for len in 0..12usize {
            let keywords: Vec<&str> = (0..len).map(|i| vocab[(i * 7 + len) % vocab.len()]).collect();
            let first = score_keywords(&keywords);
            assert!((1..=10).contains(&first.score));
            assert_eq!(first, score_keywords(&keywords));
        }
    }
}
