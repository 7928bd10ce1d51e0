use crate::quiz::catalog::{Category, Question};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub correct: u32,
    pub total: u32,
}

/// Summary of a completed attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f32,
    pub passed: bool,
    /// Seconds spent before submission.
    pub time_taken: u32,
    pub category_breakdown: Vec<CategoryScore>,
}

impl QuizResult {
    pub fn new(
        questions: &[Question],
        answers: &[Option<u8>],
        score: u32,
        time_taken: u32,
        pass_percentage: f32,
    ) -> Self {
        let total = questions.len() as u32;
        let percentage = if total == 0 {
            0.0
        } else {
            // multiply first so whole percentages stay exact
            score as f32 * 100.0 / total as f32
        };

        let mut breakdown: Vec<CategoryScore> = Vec::new();
        for (question, answer) in questions.iter().zip(answers) {
            let correct = *answer == Some(question.correct_answer);
            match breakdown.iter_mut().find(|c| c.category == question.category) {
                Some(entry) => {
                    entry.total += 1;
                    entry.correct += correct as u32;
                }
                None => breakdown.push(CategoryScore {
                    category: question.category,
                    correct: correct as u32,
                    total: 1,
                }),
            }
        }

        Self {
            score,
            total,
            percentage,
            passed: percentage >= pass_percentage,
            time_taken,
            category_breakdown: breakdown,
        }
    }
}
