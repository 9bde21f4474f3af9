//! Scoring for organizational assessments and knowledge quizzes.
//!
//! Both scorers are total functions over well-formed input: `answers` must be
//! the same length as the question list and each entry a valid option index.

use crate::types::{Assessment, Quiz};
use std::collections::BTreeMap;

/// Area names zipped positionally against the first five questions of an
/// assessment. Questions past the fifth count toward the total only.
pub const ASSESSMENT_AREAS: [&str; 5] = [
    "policy",
    "representation",
    "compensation",
    "recruitment",
    "worklife",
];

/// Normalization assumes every question tops out at this weight.
pub const MAX_OPTION_WEIGHT: u32 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentScore {
    /// Normalized 0-100.
    pub score: u32,
    pub areas: BTreeMap<String, u32>,
}

/// Score an assessment from the selected option index per question.
///
/// Total is the sum of the chosen options' weights, normalized against
/// `questions.len() * MAX_OPTION_WEIGHT`. Every area appears in the
/// breakdown; with fewer than five questions the trailing areas stay 0.
pub fn score_assessment(assessment: &Assessment, answers: &[usize]) -> AssessmentScore {
    let mut areas: BTreeMap<String, u32> = ASSESSMENT_AREAS
        .iter()
        .map(|area| (area.to_string(), 0))
        .collect();

    let mut total = 0u32;
    for (index, (question, &answer)) in assessment.questions.iter().zip(answers).enumerate() {
        let weight = question.weights[answer];
        total += weight;
        if let Some(area) = ASSESSMENT_AREAS.get(index) {
            areas.insert(area.to_string(), weight);
        }
    }

    let max_possible = assessment.questions.len() as u32 * MAX_OPTION_WEIGHT;
    let score = if max_possible == 0 {
        0
    } else {
        (total as f64 / max_possible as f64 * 100.0).round() as u32
    };

    AssessmentScore { score, areas }
}

/// Percentage of correctly answered questions, rounded.
pub fn score_quiz(quiz: &Quiz, answers: &[usize]) -> u32 {
    if quiz.questions.is_empty() {
        return 0;
    }
    let correct = quiz
        .questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.correct_answer == **answer)
        .count();
    (correct as f64 / quiz.questions.len() as f64 * 100.0).round() as u32
}

/// Maturity blurb for an overall assessment score.
pub fn score_band(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent! Your organization demonstrates strong commitment to gender equality."
    } else if score >= 60 {
        "Good progress. Your organization has solid foundations but can still improve."
    } else if score >= 40 {
        "Developing. Your organization has started addressing gender equality but needs more work."
    } else {
        "Beginning stage. Your organization has significant opportunities to improve gender equality."
    }
}

/// Per-area weight rendered as a percentage of the maximum option weight.
pub fn area_percent(weight: u32) -> u32 {
    (weight as f64 / MAX_OPTION_WEIGHT as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssessmentQuestion, QuizQuestion};

    fn assessment(question_count: usize) -> Assessment {
        Assessment {
            id: "a1".to_string(),
            title: "Test Assessment".to_string(),
            description: String::new(),
            questions: (0..question_count)
                .map(|i| AssessmentQuestion {
                    id: format!("a1-{}", i + 1),
                    question: format!("Question {}", i + 1),
                    options: vec![
                        "Fully".to_string(),
                        "Partially".to_string(),
                        "Rarely".to_string(),
                        "Never".to_string(),
                    ],
                    weights: vec![3, 2, 1, 0],
                })
                .collect(),
        }
    }

    fn quiz() -> Quiz {
        Quiz {
            id: "q1".to_string(),
            title: "Test Quiz".to_string(),
            description: String::new(),
            questions: (0..3)
                .map(|i| QuizQuestion {
                    id: format!("q1-{}", i + 1),
                    question: format!("Question {}", i + 1),
                    options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    correct_answer: 1,
                    explanation: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_all_top_weight_answers_score_100() {
        let result = score_assessment(&assessment(5), &[0, 0, 0, 0, 0]);
        assert_eq!(result.score, 100);
        for area in ASSESSMENT_AREAS {
            assert_eq!(result.areas[area], 3);
        }
    }

    #[test]
    fn test_all_zero_weight_answers_score_0() {
        let result = score_assessment(&assessment(5), &[3, 3, 3, 3, 3]);
        assert_eq!(result.score, 0);
        for area in ASSESSMENT_AREAS {
            assert_eq!(result.areas[area], 0);
        }
    }

    #[test]
    fn test_mixed_answers_round_normalized_total() {
        // Weights 3 + 2 + 1 + 0 + 3 = 9 of 15 -> 60.
        let result = score_assessment(&assessment(5), &[0, 1, 2, 3, 0]);
        assert_eq!(result.score, 60);
        assert_eq!(result.areas["policy"], 3);
        assert_eq!(result.areas["representation"], 2);
        assert_eq!(result.areas["compensation"], 1);
        assert_eq!(result.areas["recruitment"], 0);
        assert_eq!(result.areas["worklife"], 3);
    }

    #[test]
    fn test_score_stays_in_range_for_every_answer_vector() {
        let assessment = assessment(5);
        for answer in 0..4 {
            let answers = [answer; 5];
            let result = score_assessment(&assessment, &answers);
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn test_short_assessment_leaves_trailing_areas_at_zero() {
        let result = score_assessment(&assessment(3), &[0, 0, 0]);
        assert_eq!(result.score, 100);
        assert_eq!(result.areas["policy"], 3);
        assert_eq!(result.areas["recruitment"], 0);
        assert_eq!(result.areas["worklife"], 0);
        assert_eq!(result.areas.len(), ASSESSMENT_AREAS.len());
    }

    #[test]
    fn test_questions_past_the_fifth_count_toward_total_only() {
        let result = score_assessment(&assessment(7), &[0; 7]);
        assert_eq!(result.score, 100);
        assert_eq!(result.areas.len(), ASSESSMENT_AREAS.len());
    }

    #[test]
    fn test_quiz_all_correct_is_100() {
        assert_eq!(score_quiz(&quiz(), &[1, 1, 1]), 100);
    }

    #[test]
    fn test_quiz_none_correct_is_0() {
        assert_eq!(score_quiz(&quiz(), &[0, 0, 2]), 0);
    }

    #[test]
    fn test_quiz_two_of_three_rounds_to_67() {
        assert_eq!(score_quiz(&quiz(), &[1, 0, 1]), 67);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert!(score_band(80).starts_with("Excellent"));
        assert!(score_band(79).starts_with("Good progress"));
        assert!(score_band(60).starts_with("Good progress"));
        assert!(score_band(59).starts_with("Developing"));
        assert!(score_band(40).starts_with("Developing"));
        assert!(score_band(39).starts_with("Beginning stage"));
    }

    #[test]
    fn test_area_percent() {
        assert_eq!(area_percent(3), 100);
        assert_eq!(area_percent(2), 67);
        assert_eq!(area_percent(1), 33);
        assert_eq!(area_percent(0), 0);
    }
}
