//! Single-attempt aptitude quiz state machine

use crate::config::{QuizConfig, DEFAULT_QUIZ_DURATION_SECS};
use crate::error::{PlacementError, Result};
use crate::quiz::catalog::{questions, Question};
use crate::quiz::result::QuizResult;
use log::{debug, info};
use serde::Serialize;

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    NotStarted,
    Running,
    Completed,
}

impl QuizPhase {
    fn describe(&self) -> &'static str {
        match self {
            QuizPhase::NotStarted => "not started",
            QuizPhase::Running => "running",
            QuizPhase::Completed => "completed",
        }
    }
}

/// How a question index is shown in the review navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigatorMark {
    Current,
    Answered,
    Unanswered,
}

/// What happened on one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The quiz is not running; the tick changed nothing.
    Ignored,
    Running { remaining: u32 },
    /// Time ran out and the attempt was submitted with this score.
    TimeUp { score: u32 },
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [Question],
    duration_secs: u32,
    pass_percentage: f32,
    phase: QuizPhase,
    answers: Vec<Option<u8>>,
    current: usize,
    time_remaining: u32,
    score: Option<u32>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_QUIZ_DURATION_SECS)
    }

    pub fn with_duration(duration_secs: u32) -> Self {
        let questions = questions();
        Self {
            questions,
            duration_secs,
            pass_percentage: 60.0,
            phase: QuizPhase::NotStarted,
            answers: vec![None; questions.len()],
            current: 0,
            time_remaining: duration_secs,
            score: None,
        }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        let mut session = Self::with_duration(config.duration_secs);
        session.pass_percentage = config.pass_percentage;
        session
    }

    pub fn start(&mut self) -> Result<()> {
        if self.phase != QuizPhase::NotStarted {
            return Err(self.wrong_phase("start"));
        }
        self.reinitialize();
        self.phase = QuizPhase::Running;
        info!(
            "Aptitude attempt started: {} questions, {}s on the clock",
            self.questions.len(),
            self.duration_secs
        );
        Ok(())
    }

    /// Record `option` for the current question; the pointer does not move.
    pub fn select_answer(&mut self, option: usize) -> Result<()> {
        self.ensure_running("select an answer")?;
        if option >= OPTIONS_PER_QUESTION {
            return Err(PlacementError::InvalidAnswerOption(option));
        }
        self.answers[self.current] = Some(option as u8);
        Ok(())
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        self.ensure_running("jump to a question")?;
        if index >= self.questions.len() {
            return Err(PlacementError::InvalidQuizIndex {
                index,
                len: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.ensure_running("move to the next question")?;
        self.current = (self.current + 1).min(self.questions.len() - 1);
        Ok(())
    }

    pub fn previous(&mut self) -> Result<()> {
        self.ensure_running("move to the previous question")?;
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// One elapsed second. Reaching zero submits through the same path as
    /// a manual submit.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != QuizPhase::Running {
            return TickOutcome::Ignored;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return TickOutcome::Running {
                remaining: self.time_remaining,
            };
        }

        info!("Time is up, submitting the attempt");
        let score = self.finish();
        TickOutcome::TimeUp { score }
    }

    pub fn submit(&mut self) -> Result<u32> {
        self.ensure_running("submit")?;
        Ok(self.finish())
    }

    /// Discard the attempt, whatever state it is in.
    pub fn reset(&mut self) {
        debug!("Resetting aptitude attempt (was {})", self.phase.describe());
        self.reinitialize();
        self.phase = QuizPhase::NotStarted;
    }

    fn finish(&mut self) -> u32 {
        let score = self
            .answers
            .iter()
            .zip(self.questions)
            .filter(|(answer, question)| **answer == Some(question.correct_answer))
            .count() as u32;

        self.score = Some(score);
        self.phase = QuizPhase::Completed;
        info!(
            "Aptitude attempt completed: {}/{} with {}s left",
            score,
            self.questions.len(),
            self.time_remaining
        );
        score
    }

    fn reinitialize(&mut self) {
        self.answers = vec![None; self.questions.len()];
        self.current = 0;
        self.time_remaining = self.duration_secs;
        self.score = None;
    }

    fn ensure_running(&self, operation: &'static str) -> Result<()> {
        if self.phase == QuizPhase::Running {
            Ok(())
        } else {
            Err(self.wrong_phase(operation))
        }
    }

    fn wrong_phase(&self, operation: &'static str) -> PlacementError {
        PlacementError::InvalidQuizState {
            operation,
            phase: self.phase.describe(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current]
    }

    pub fn answers(&self) -> &[Option<u8>] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<u8> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Defined only once the attempt is completed.
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn navigator(&self) -> Vec<NavigatorMark> {
        self.answers
            .iter()
            .enumerate()
            .map(|(index, answer)| {
                if index == self.current {
                    NavigatorMark::Current
                } else if answer.is_some() {
                    NavigatorMark::Answered
                } else {
                    NavigatorMark::Unanswered
                }
            })
            .collect()
    }

    pub fn result(&self) -> Option<QuizResult> {
        let score = self.score?;
        Some(QuizResult::new(
            self.questions,
            &self.answers,
            score,
            self.duration_secs - self.time_remaining,
            self.pass_percentage,
        ))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// `m:ss`, as shown on the countdown.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> QuizSession {
        let mut session = QuizSession::new();
        session.start().unwrap();
        session
    }

    #[test]
    fn test_start_initializes_attempt() {
        let session = running();
        assert_eq!(session.phase(), QuizPhase::Running);
        assert_eq!(session.answers().len(), session.questions().len());
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.time_remaining(), 3600);
        assert_eq!(session.score(), None);
    }

    #[test]
    fn test_operations_require_running() {
        let mut session = QuizSession::new();
        assert!(matches!(
            session.select_answer(0),
            Err(PlacementError::InvalidQuizState { .. })
        ));
        assert!(session.go_to(3).is_err());
        assert!(session.next().is_err());
        assert!(session.submit().is_err());
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.time_remaining(), 3600);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut session = running();
        assert!(session.start().is_err());
    }

    #[test]
    fn test_answer_survives_navigation() {
        let mut session = running();
        session.go_to(5).unwrap();
        session.select_answer(2).unwrap();
        session.go_to(10).unwrap();
        session.go_to(5).unwrap();

        assert_eq!(session.answer(5), Some(2));
        assert_eq!(session.current_index(), 5);
    }

    #[test]
    fn test_reselect_is_idempotent_and_keeps_pointer() {
        let mut session = running();
        session.select_answer(1).unwrap();
        session.select_answer(1).unwrap();
        assert_eq!(session.answer(0), Some(1));
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_invalid_arguments() {
        let mut session = running();
        assert!(matches!(
            session.select_answer(4),
            Err(PlacementError::InvalidAnswerOption(4))
        ));
        assert!(matches!(
            session.go_to(50),
            Err(PlacementError::InvalidQuizIndex { index: 50, len: 50 })
        ));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_next_and_previous_clamp() {
        let mut session = running();
        session.previous().unwrap();
        assert_eq!(session.current_index(), 0);

        session.go_to(49).unwrap();
        session.next().unwrap();
        assert_eq!(session.current_index(), 49);

        session.previous().unwrap();
        assert_eq!(session.current_index(), 48);
    }

    #[test]
    fn test_submit_unanswered_scores_zero() {
        let mut session = running();
        assert_eq!(session.submit().unwrap(), 0);
        assert!(session.is_completed());
        assert_eq!(session.score(), Some(0));
    }

    #[test]
    fn test_score_counts_correct_answers() {
        let mut session = running();
        let questions = session.questions();

        for (index, question) in questions.iter().enumerate().take(10) {
            session.go_to(index).unwrap();
            // first five right, next five wrong
            let option = if index < 5 {
                question.correct_answer
            } else {
                (question.correct_answer + 1) % 4
            };
            session.select_answer(option as usize).unwrap();
        }

        assert_eq!(session.submit().unwrap(), 5);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut session = running();
        session.submit().unwrap();

        assert!(session.submit().is_err());
        assert!(session.select_answer(0).is_err());
        assert!(session.start().is_err());
        assert_eq!(session.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn test_timeout_after_full_duration() {
        let mut session = running();
        for _ in 0..3599 {
            assert!(matches!(session.tick(), TickOutcome::Running { .. }));
        }
        assert_eq!(session.tick(), TickOutcome::TimeUp { score: 0 });
        assert!(session.is_completed());
        assert_eq!(session.time_remaining(), 0);

        // late ticks from a timer that wasn't cancelled do nothing
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert_eq!(session.score(), Some(0));
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut session = running();
        session.select_answer(3).unwrap();
        session.go_to(7).unwrap();
        session.tick();
        session.submit().unwrap();

        session.reset();
        assert_eq!(session.phase(), QuizPhase::NotStarted);
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.time_remaining(), 3600);
        assert!(!session.is_completed());
        assert_eq!(session.score(), None);
        assert!(session.start().is_ok());
    }

    #[test]
    fn test_navigator_marks() {
        let mut session = running();
        session.go_to(2).unwrap();
        session.select_answer(0).unwrap();
        session.go_to(4).unwrap();

        let marks = session.navigator();
        assert_eq!(marks.len(), 50);
        assert_eq!(marks[0], NavigatorMark::Unanswered);
        assert_eq!(marks[2], NavigatorMark::Answered);
        assert_eq!(marks[4], NavigatorMark::Current);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(0), "0:00");
    }
}
