//! Extraction of the final grade from the chatbot's evaluation reply.

use once_cell::sync::Lazy;
use regex::Regex;

use super::MAX_GRADE;

/// Marker the chatbot prints once it has tallied a scored debate.
static FINAL_SCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Score final du débat : (\d+\.?\d*)/100").expect("final score pattern compiles")
});

/// Pulls the final grade out of an evaluation reply.
///
/// The first match wins; any fractional part is truncated and values above
/// 100 are clamped. Returns `None` when the reply carries no final score.
pub fn extract_grade(reply: &str) -> Option<u32> {
    let captured = FINAL_SCORE.captures(reply)?.get(1)?.as_str();
    let value: f64 = captured.parse().ok()?;
    Some(value.min(f64::from(MAX_GRADE)).trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn final_score_pattern_compiles() {
        let pattern = Lazy::force(&FINAL_SCORE);
        assert_eq!(pattern.captures_len(), 2);
    }

    #[test]
    fn reads_integer_grade() {
        let reply = "Bon travail.\nScore final du débat : 72/100\nÀ bientôt";
        assert_eq!(extract_grade(reply), Some(72));
    }

    #[test]
    fn truncates_fraction() {
        assert_eq!(extract_grade("Score final du débat : 64.9/100"), Some(64));
    }

    #[test]
    fn clamps_above_hundred() {
        assert_eq!(extract_grade("Score final du débat : 140/100"), Some(100));
    }

    #[test]
    fn first_match_wins() {
        let reply = "Score final du débat : 30/100 puis Score final du débat : 90/100";
        assert_eq!(extract_grade(reply), Some(30));
    }

    #[test]
    fn missing_marker_yields_none() {
        assert_eq!(extract_grade("Merci pour ce débat !"), None);
        assert_eq!(extract_grade("Score final du débat: 72/100"), None);
        assert_eq!(extract_grade(""), None);
    }

    proptest! {
        #[test]
        fn grade_is_always_within_bounds(whole in 0u64..100_000, frac in 0u32..1000) {
            let reply = format!("Score final du débat : {}.{}/100", whole, frac);
            let grade = extract_grade(&reply).unwrap();
            prop_assert!(grade <= MAX_GRADE);
            prop_assert_eq!(grade as u64, whole.min(100));
        }

        #[test]
        fn text_without_marker_never_grades(text in "[a-zA-Z0-9 .,!?/]{0,200}") {
            prop_assert_eq!(extract_grade(&text), None);
        }
    }
}
