//! Async driver: one countdown timer and one command channel feeding a
//! [`QuizSession`] from a single task.

use crate::error::{PlacementError, Result};
use crate::quiz::catalog::Question;
use crate::quiz::result::QuizResult;
use crate::quiz::session::{NavigatorMark, QuizPhase, QuizSession, TickOutcome};
use log::{debug, warn};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Select(usize),
    GoTo(usize),
    Next,
    Previous,
    Submit,
    /// Discard the attempt and stop the runner.
    Reset,
}

/// What a front end needs to redraw the current question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub index: usize,
    pub total: usize,
    pub question: Question,
    pub selected: Option<u8>,
    pub answered: usize,
    pub remaining: u32,
    pub marks: Vec<NavigatorMark>,
}

impl QuizView {
    fn of(session: &QuizSession) -> Self {
        let index = session.current_index();
        Self {
            index,
            total: session.questions().len(),
            question: *session.current_question(),
            selected: session.answer(index),
            answered: session.answered_count(),
            remaining: session.time_remaining(),
            marks: session.navigator(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizUpdate {
    Tick { remaining: u32 },
    Changed(QuizView),
    Rejected(String),
    Finished(QuizResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(QuizResult),
    /// Reset was requested or every command sender went away.
    Abandoned,
}

pub struct QuizRunner {
    session: QuizSession,
    period: Duration,
}

impl QuizRunner {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            period: Duration::from_secs(1),
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn into_session(self) -> QuizSession {
        self.session
    }

    /// Run one attempt to completion. The timer lives only for the duration
    /// of this call, so nothing ticks after it returns.
    pub async fn run(
        &mut self,
        mut commands: mpsc::Receiver<QuizCommand>,
        updates: Option<mpsc::UnboundedSender<QuizUpdate>>,
    ) -> Result<RunOutcome> {
        if self.session.phase() == QuizPhase::NotStarted {
            self.session.start()?;
        }
        if self.session.phase() != QuizPhase::Running {
            return Err(PlacementError::InvalidQuizState {
                operation: "run",
                phase: "completed",
            });
        }

        let emit = |update: QuizUpdate| {
            if let Some(tx) = &updates {
                // a front end that stopped listening does not end the attempt
                let _ = tx.send(update);
            }
        };

        emit(QuizUpdate::Changed(QuizView::of(&self.session)));

        let mut ticker = interval_at(Instant::now() + self.period, self.period);

        loop {
            tokio::select! {
                _ = ticker.tick() => match self.session.tick() {
                    TickOutcome::Running { remaining } => emit(QuizUpdate::Tick { remaining }),
                    TickOutcome::TimeUp { .. } => break,
                    TickOutcome::Ignored => {
                        warn!("Timer fired for a session that is no longer running");
                        break;
                    }
                },
                command = commands.recv() => {
                    let Some(command) = command else {
                        debug!("Command channel closed, abandoning attempt");
                        return Ok(RunOutcome::Abandoned);
                    };

                    let applied = match command {
                        QuizCommand::Select(option) => self.session.select_answer(option),
                        QuizCommand::GoTo(index) => self.session.go_to(index),
                        QuizCommand::Next => self.session.next(),
                        QuizCommand::Previous => self.session.previous(),
                        QuizCommand::Submit => self.session.submit().map(|_| ()),
                        QuizCommand::Reset => {
                            self.session.reset();
                            return Ok(RunOutcome::Abandoned);
                        }
                    };

                    match applied {
                        Ok(()) if self.session.is_completed() => break,
                        Ok(()) => emit(QuizUpdate::Changed(QuizView::of(&self.session))),
                        Err(e) => emit(QuizUpdate::Rejected(e.user_message())),
                    }
                }
            }
        }

        match self.session.result() {
            Some(result) => {
                emit(QuizUpdate::Finished(result.clone()));
                Ok(RunOutcome::Completed(result))
            }
            None => Ok(RunOutcome::Abandoned),
        }
    }
}
