//! Placement preparation toolkit: resume scoring, a timed aptitude test and
//! skill-based job matching

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod input;
pub mod jobs;
pub mod matching;
pub mod output;
pub mod quiz;
pub mod resume;

pub use config::Config;
pub use error::{PlacementError, Result};
