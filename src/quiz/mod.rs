//! Timed aptitude quiz
//! Fixed question catalog, attempt state machine and the async timer driver

pub mod catalog;
pub mod result;
pub mod runner;
pub mod session;

pub use catalog::{questions, Category, Question};
pub use result::{CategoryScore, QuizResult};
pub use runner::{QuizCommand, QuizRunner, QuizUpdate, QuizView, RunOutcome};
pub use session::{format_time, NavigatorMark, QuizPhase, QuizSession, TickOutcome};
