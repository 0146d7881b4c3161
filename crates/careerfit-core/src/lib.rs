//! careerfit-core: question catalog and scoring engine.
//!
//! This crate defines the question model, the built-in catalog, and the
//! pure scoring pipeline that turns a response list into a score report.

pub mod careers;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod narrative;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod session;

pub use engine::{evaluate, Evaluator};
pub use error::AnswerError;
pub use model::{Answer, Question, Response, Section};
pub use report::ScoreReport;
