//! Derived prediction outputs, recommendation text, and console rendering.

use crate::form::SkillCategory;

/// Shown when the loaded model kind carries no importance scores.
pub const IMPORTANCE_FALLBACK: &str = "Feature importance not available for this model type";

const FOOTER: &str = "© 2024 Skill Prediction System | Contact: support@skills.ai";

/// Derived outputs for one submission. Recomputed every time; nothing is
/// kept between submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub predicted_level: f64,
    pub improvement: f64,
    pub recommended_hours: u32,
}

impl PredictionResult {
    pub fn new(predicted_level: f64, initial_skill: f64, training_hours: f64) -> Self {
        PredictionResult {
            predicted_level,
            improvement: predicted_level - initial_skill,
            recommended_hours: (training_hours * 1.2).floor() as u32,
        }
    }
}

/// Tone of the recommendation banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Outstanding,
    Focus,
}

/// Static recommendation content keyed on the selected skill category.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub banner: Banner,
    pub bullets: &'static [&'static str],
}

/// Select the recommendation for a category and improvement level.
///
/// Only Communication and Technical carry bullet lists; the other
/// categories render the banner alone.
pub fn recommendation(skill: SkillCategory, improvement: f64) -> Recommendation {
    let banner = if improvement > 2.0 {
        Banner::Outstanding
    } else {
        Banner::Focus
    };
    let bullets: &'static [&'static str] = match skill {
        SkillCategory::Communication => &[
            "Practice public speaking exercises",
            "Join debate clubs",
            "Take active listening courses",
        ],
        SkillCategory::Technical => &[
            "Complete coding challenges",
            "Attend workshops",
            "Participate in hackathons",
        ],
        SkillCategory::Leadership | SkillCategory::Other => &[],
    };
    Recommendation { banner, bullets }
}

/// Features paired with importance, highest first, truncated to `k`.
pub fn ranked_features(names: &[String], importances: &[f64], k: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = names
        .iter()
        .cloned()
        .zip(importances.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(k);
    ranked
}

pub fn render_metrics(result: &PredictionResult) {
    println!("\nPrediction Results");
    println!("- Current Skill Level: {:.2}/10", result.predicted_level);
    if result.improvement > 0.0 {
        println!("- Skill Improvement: +{:.2}", result.improvement);
    } else {
        println!("- Skill Improvement: {:.2}", result.improvement);
    }
    println!("- Recommended Training: {} hours", result.recommended_hours);
}

pub fn render_recommendations(rec: &Recommendation) {
    println!("\nPersonalized Recommendations");
    match rec.banner {
        Banner::Outstanding => println!("Outstanding progress! Keep up the good work with:"),
        Banner::Focus => println!("Potential for improvement. Focus on:"),
    }
    for bullet in rec.bullets {
        println!("- {bullet}");
    }
}

pub fn render_footer() {
    println!("\n{FOOTER}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn improvement_is_prediction_minus_initial_skill() {
        let result = PredictionResult::new(7.3, 5.0, 50.0);
        assert_abs_diff_eq!(result.improvement, 2.3, epsilon = 1e-12);

        let result = PredictionResult::new(3.0, 5.0, 50.0);
        assert_abs_diff_eq!(result.improvement, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn recommended_hours_floor_the_multiplier() {
        assert_eq!(PredictionResult::new(5.0, 5.0, 50.0).recommended_hours, 60);
        assert_eq!(PredictionResult::new(5.0, 5.0, 0.0).recommended_hours, 0);
        assert_eq!(PredictionResult::new(5.0, 5.0, 500.0).recommended_hours, 600);
        assert_eq!(PredictionResult::new(5.0, 5.0, 33.0).recommended_hours, 39);
    }

    #[test]
    fn communication_always_gets_its_three_bullets() {
        for improvement in [-3.0, 0.0, 2.5] {
            let rec = recommendation(SkillCategory::Communication, improvement);
            assert_eq!(
                rec.bullets,
                [
                    "Practice public speaking exercises",
                    "Join debate clubs",
                    "Take active listening courses",
                ]
            );
        }
    }

    #[test]
    fn leadership_and_other_get_banner_only() {
        assert!(recommendation(SkillCategory::Leadership, 3.0).bullets.is_empty());
        assert!(recommendation(SkillCategory::Other, -1.0).bullets.is_empty());
    }

    #[test]
    fn banner_switches_above_two_points_of_improvement() {
        assert_eq!(
            recommendation(SkillCategory::Technical, 2.1).banner,
            Banner::Outstanding
        );
        assert_eq!(
            recommendation(SkillCategory::Technical, 2.0).banner,
            Banner::Focus
        );
    }

    #[test]
    fn ranked_features_sort_descending_and_truncate() {
        let names: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let ranked = ranked_features(&names, &[0.1, 0.9, 0.4, 0.2], 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, "b");
        assert_eq!(ranked[1].0, "c");
    }
}
